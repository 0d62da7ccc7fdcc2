//! The generated table of contents and tools for existing ones.
//!
//! The TOC is a markdown bullet list, nested two spaces per heading level, where every link
//! points at the absolute URL of a split file. The same bullet shape is what [`parse_toc`]
//! reads back, and [`relink_toc`] turns an in-page TOC (`#anchor` links) into one pointing at
//! the split files.

use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

/// First line of every generated TOC, followed by a blank line.
pub const TOC_HEADER: &str = "# Table of Contents";

static TOC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( *)- \[([^\]]+)\]\(([^)]+)\)").expect("TOC line pattern is valid")
});

static ANCHOR_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((#[^)]*)\)").expect("anchor link pattern is valid")
});

#[must_use]
/// Join the URL prefix, base path and filename, tolerating trailing slashes on either part.
pub fn absolute_url(url_prefix: &str, base_path: &str, filename: &str) -> String {
    format!(
        "{}{}/{filename}",
        url_prefix.trim_end_matches('/'),
        base_path.trim_end_matches('/')
    )
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One bullet of the generated TOC.
pub struct TocEntry {
    /// Nesting depth, `level - 1`.
    pub indent_level: usize,
    /// Link text, the heading as written.
    pub title: String,
    /// Absolute URL of the section file.
    pub url: String,
}

impl TocEntry {
    #[must_use]
    /// Entry for a heading of `level` whose file lives at `url`.
    pub fn new(level: u8, title: &str, url: String) -> Self {
        Self {
            indent_level: usize::from(level.saturating_sub(1)),
            title: title.to_string(),
            url,
        }
    }

    #[must_use]
    /// The entry as a single newline-terminated markdown bullet.
    pub fn render(&self) -> String {
        format!(
            "{}- [{}]({})\n",
            "  ".repeat(self.indent_level),
            self.title,
            self.url
        )
    }
}

/// Buffered TOC output that is flushed when finished or dropped.
pub struct TocWriter {
    out: BufWriter<File>,
}

impl TocWriter {
    /// Create (or truncate) the TOC file, making its parent directory if needed, and write
    /// the header.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or the header not written.
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{TOC_HEADER}\n")?;
        Ok(Self { out })
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn push(&mut self, entry: &TocEntry) -> io::Result<()> {
        self.out.write_all(entry.render().as_bytes())
    }

    /// Flush everything buffered so far to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A link read back from an existing TOC.
pub struct TocLink {
    /// Link text.
    pub title: String,
    /// Heading level implied by the indentation (two spaces per level).
    pub level: usize,
    /// Link target, an `#anchor` or a URL.
    pub target: String,
}

#[must_use]
/// Read the `- [title](target)` bullets of a TOC, ignoring every other line.
pub fn parse_toc(text: &str) -> Vec<TocLink> {
    text.lines()
        .filter_map(|line| TOC_LINE.captures(line))
        .map(|caps| TocLink {
            title: caps[2].to_string(),
            level: caps[1].len() / 2 + 1,
            target: caps[3].to_string(),
        })
        .collect()
}

#[must_use]
/// Point `[title](#anchor)` links at split files, using `mapping` from anchor to filename.
///
/// Links whose anchor is not in the mapping are left as they are.
pub fn relink_toc(
    text: &str,
    mapping: &HashMap<String, String>,
    url_prefix: &str,
    base_path: &str,
) -> String {
    ANCHOR_LINK
        .replace_all(text, |caps: &Captures<'_>| match mapping.get(&caps[2]) {
            Some(filename) => format!(
                "[{}]({})",
                &caps[1],
                absolute_url(url_prefix, base_path, filename)
            ),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
