//! mdsplit: Split a large markdown document into per-section files with an llms.txt index.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use log::LevelFilter;
use mdsplit::{config, split};
use simple_logger::SimpleLogger;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdsplit", version)]
#[command(
    about = "Split large markdown files into smaller documents with TOC generation",
    long_about = None,
    arg_required_else_help = true
)]
struct Args {
    /// Markdown file to split
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory for split files [default: docs]
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Path to the TOC file to generate [default: llms.txt]
    #[arg(long, short = 't')]
    toc_file: Option<PathBuf>,

    /// URL prefix for absolute links in TOC [default: https://example.com]
    #[arg(long, short = 'u')]
    url_prefix: Option<String>,

    /// Base path for docs in URLs [default: /docs]
    #[arg(long, short = 'b')]
    base_path: Option<String>,

    /// Maximum header level to split at (1=H1, 2=H2, etc.) [default: 6]
    #[arg(long, short = 'm', value_name = "1-6", value_parser = clap::value_parser!(u8).range(1..=6))]
    max_level: Option<u8>,

    /// Rewrite the #anchor links of an existing TOC file to point at the split files
    #[arg(long, value_name = "FILE")]
    relink: Option<PathBuf>,

    /// Print a JSON report of the generated sections
    #[arg(long)]
    report: bool,

    /// Show debug output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let cfg = config::Config::load();
    let mut options = split::SplitOptions::from_config(&args.input, &cfg);

    // Override config with command line args
    if let Some(dir) = &args.output_dir {
        options.output_dir.clone_from(dir);
    }
    if let Some(toc) = &args.toc_file {
        options.toc_file.clone_from(toc);
    }
    if let Some(prefix) = &args.url_prefix {
        options.url_prefix.clone_from(prefix);
    }
    if let Some(base) = &args.base_path {
        options.base_path.clone_from(base);
    }
    if let Some(level) = args.max_level {
        options.max_level = level;
    }

    if !is_markdown(&options.input) {
        log::warn!(
            "'{}' doesn't appear to be a markdown file",
            options.input.display()
        );
    }

    match run(&args, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, options: &split::SplitOptions) -> mdsplit::Result<()> {
    let report = split::generate_docs(options)?;

    if let Some(path) = &args.relink {
        split::relink_file(path, &report)?;
    }

    if args.report {
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
    {
        eprintln!("Warning: logging unavailable: {e}");
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}
