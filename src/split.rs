//! The split pipeline: validate, parse, reset the output directory, then emit files and TOC.
//!
//! Fatal problems (missing input, bad level, undecodable input, an output directory that
//! cannot be reset) are all detected before anything on disk is touched or removed. Once
//! writing starts nothing is fatal any more: a section or TOC line that cannot be written is
//! logged as a warning, counted, and skipped.
//!
//! Two sections whose titles slugify to the same filename write to the same file, so the later
//! one wins. Both still get a TOC entry pointing at that file.
//!
//! Source lines are split on `\n` only, so a CRLF document keeps its `\r` characters inside
//! each section file; only the outer block trim removes the final one.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::input;
use crate::section::{index_sections, Section};
use crate::slug::slugify_anchor;
use crate::toc::{absolute_url, parse_toc, relink_toc, TocEntry, TocWriter};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Shallowest heading level that can be split on.
pub const MIN_LEVEL: u8 = 1;
/// Deepest heading level markdown has.
pub const MAX_LEVEL: u8 = 6;

#[derive(Clone, Debug)]
/// Everything a split needs, normally assembled by the CLI.
pub struct SplitOptions {
    /// Markdown file to split.
    pub input: PathBuf,
    /// Directory that is wiped and refilled with one file per section.
    pub output_dir: PathBuf,
    /// Scheme and host for TOC links, e.g. `https://example.com`.
    pub url_prefix: String,
    /// Path under the prefix where the split files are served, e.g. `/docs`.
    pub base_path: String,
    /// Deepest heading level that starts its own section.
    pub max_level: u8,
    /// Where the TOC is written.
    pub toc_file: PathBuf,
}

impl SplitOptions {
    #[must_use]
    /// Options for `input` with every other setting taken from `config`.
    pub fn from_config(input: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from(&config.output_dir),
            url_prefix: config.url_prefix.clone(),
            base_path: config.base_path.clone(),
            max_level: config.max_level,
            toc_file: PathBuf::from(&config.toc_file),
        }
    }

    /// Check the input and split level before anything is modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputNotFound`], [`Error::NotAFile`] or [`Error::InvalidMaxLevel`].
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::InputNotFound(self.input.clone()));
        }
        if !self.input.is_file() {
            return Err(Error::NotAFile(self.input.clone()));
        }
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.max_level) {
            return Err(Error::InvalidMaxLevel(self.max_level));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize)]
/// A generated section together with where it ended up.
pub struct SectionRecord {
    #[serde(flatten)]
    /// Boundaries and filename of the section.
    pub section: Section,
    /// Absolute URL used in the TOC.
    pub url: String,
    /// In-page anchor the heading would have in the original document.
    pub anchor: String,
}

#[derive(Clone, Debug, Serialize)]
/// Outcome of a split: what was generated and how much of it reached the disk.
pub struct SplitReport {
    /// Directory the section files were written to.
    pub output_dir: PathBuf,
    /// TOC file path.
    pub toc_file: PathBuf,
    /// URL prefix the links were built with.
    pub url_prefix: String,
    /// Base path the links were built with.
    pub base_path: String,
    /// Split level used.
    pub max_level: u8,
    /// One record per retained heading, in document order.
    pub sections: Vec<SectionRecord>,
    /// Section files written successfully.
    pub files_written: usize,
    /// Section files that replaced one written earlier in the same run.
    pub overwritten: usize,
    /// Whether the TOC was created and flushed.
    pub toc_written: bool,
    /// Writes that failed and were skipped.
    pub failures: usize,
}

impl SplitReport {
    fn new(options: &SplitOptions) -> Self {
        Self {
            output_dir: options.output_dir.clone(),
            toc_file: options.toc_file.clone(),
            url_prefix: options.url_prefix.clone(),
            base_path: options.base_path.clone(),
            max_level: options.max_level,
            sections: Vec::new(),
            files_written: 0,
            overwritten: 0,
            toc_written: false,
            failures: 0,
        }
    }

    #[must_use]
    /// Number of sections generated, one per retained heading.
    pub fn sections_generated(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Map from each heading's in-page anchor to the file its section was written to.
    ///
    /// When two headings share an anchor the first one is kept.
    pub fn anchor_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for record in &self.sections {
            map.entry(record.anchor.clone())
                .or_insert_with(|| record.section.filename.clone());
        }
        map
    }
}

/// Split `options.input` using the markdown grammar.
///
/// # Errors
///
/// Returns an error if validation fails, the input cannot be read or decoded, the grammar
/// cannot be loaded, or the output directory cannot be reset. Individual write failures are
/// reported in the returned [`SplitReport`] instead.
pub fn generate_docs(options: &SplitOptions) -> Result<SplitReport> {
    generate_docs_with(options, &MarkdownFormat)
}

/// Split `options.input` using headings found by `format`.
///
/// # Errors
///
/// See [`generate_docs`].
pub fn generate_docs_with(options: &SplitOptions, format: &dyn Format) -> Result<SplitReport> {
    options.validate()?;

    let source = input::read_source(&options.input)?;
    let headings = input::extract_headings(&source, format)?;
    log::debug!(
        "Found {} heading(s) in {}",
        headings.len(),
        options.input.display()
    );

    reset_output_dir(&options.output_dir)?;

    let lines: Vec<&str> = source.split('\n').collect();
    let sections = index_sections(&headings, options.max_level, lines.len());

    let report = emit_sections(options, &sections, &lines);

    log::info!("Documentation generated successfully!");
    log::info!("Files saved to: {}", options.output_dir.display());
    log::info!("TOC saved to: {}", options.toc_file.display());
    log::info!(
        "Generated {} files (filtered by max_level={})",
        report.sections_generated(),
        options.max_level
    );

    Ok(report)
}

/// Rewrite the `#anchor` links of an existing TOC file in place to point at this run's files.
///
/// Returns the number of lines that were changed.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8, or cannot be written back.
pub fn relink_file(path: &Path, report: &SplitReport) -> Result<usize> {
    let original = input::read_source(path)?;
    let relinked = relink_toc(
        &original,
        &report.anchor_map(),
        &report.url_prefix,
        &report.base_path,
    );

    let changed = original
        .lines()
        .zip(relinked.lines())
        .filter(|(before, after)| before != after)
        .count();

    let anchors = parse_toc(&original)
        .iter()
        .filter(|link| link.target.starts_with('#'))
        .count();

    fs::write(path, relinked)?;
    log::info!(
        "Relinked {changed} of {anchors} anchor link(s) in {}",
        path.display()
    );
    Ok(changed)
}

/// Write every section and its TOC entry, carrying on past individual failures.
fn emit_sections(options: &SplitOptions, sections: &[Section], lines: &[&str]) -> SplitReport {
    let mut report = SplitReport::new(options);
    let mut toc = match TocWriter::create(&options.toc_file) {
        Ok(writer) => Some(writer),
        Err(e) => {
            log::warn!(
                "Failed to write TOC file {}: {e}",
                options.toc_file.display()
            );
            report.failures += 1;
            None
        }
    };

    let mut seen = HashSet::new();
    for section in sections {
        let url = absolute_url(&options.url_prefix, &options.base_path, &section.filename);

        if let Some(writer) = toc.as_mut() {
            let entry = TocEntry::new(section.level, &section.title, url.clone());
            if let Err(e) = writer.push(&entry) {
                log::warn!(
                    "Failed to write TOC entry for {:?} to {}: {e}",
                    section.title,
                    options.toc_file.display()
                );
                report.failures += 1;
            }
        }

        if !seen.insert(section.filename.as_str()) {
            log::warn!(
                "Section {:?} overwrites an earlier section in {}",
                section.title,
                section.filename
            );
            report.overwritten += 1;
        }

        log::debug!(
            "Writing {} ({} line(s) from line {})",
            section.filename,
            section.line_count(),
            section.line_start
        );
        match write_section(&options.output_dir, section, lines) {
            Ok(()) => report.files_written += 1,
            Err(e) => {
                log::warn!(
                    "Failed to write file {}: {e}",
                    options.output_dir.join(&section.filename).display()
                );
                report.failures += 1;
            }
        }

        report.sections.push(SectionRecord {
            section: section.clone(),
            url,
            anchor: slugify_anchor(&section.title),
        });
    }

    if let Some(writer) = toc {
        match writer.finish() {
            Ok(()) => report.toc_written = true,
            Err(e) => {
                log::warn!(
                    "Failed to write TOC file {}: {e}",
                    options.toc_file.display()
                );
                report.failures += 1;
            }
        }
    }

    report
}

/// Remove `dir` with everything in it, then create it empty.
fn reset_output_dir(dir: &Path) -> Result<()> {
    let wrap = |source: io::Error| Error::OutputDir {
        path: dir.to_path_buf(),
        source,
    };

    if dir.as_os_str().is_empty() {
        return Err(wrap(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output directory path is empty",
        )));
    }

    if dir.exists() {
        fs::remove_dir_all(dir).map_err(wrap)?;
        log::info!("Cleaned up existing directory: {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(wrap)
}

fn write_section(output_dir: &Path, section: &Section, lines: &[&str]) -> io::Result<()> {
    let path = output_dir.join(&section.filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, section.content(lines))
}

#[cfg(test)]
#[path = "tests/split.rs"]
mod tests;
