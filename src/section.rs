//! Section boundaries derived from heading positions.
//!
//! A section is the run of source lines belonging to one retained heading: it starts on the
//! heading's own line and stops just before the next retained heading, or at the end of the
//! file. Headings deeper than the split level stay inside their parent's section. Anything
//! above the first retained heading (a preamble, front matter) belongs to no section and is
//! not written out.

use crate::input::HeadingEvent;
use crate::slug::slugify_filename;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Half-open line range `[line_start, line_end)` of the source owned by one heading.
pub struct Section {
    /// Section heading text without markup symbols.
    pub title: String,
    /// Heading depth (1 for top-level).
    pub level: u8,
    /// File the section is written to, derived from the title.
    pub filename: String,
    /// Line of the heading itself (0-indexed, inclusive).
    pub line_start: usize,
    /// Line where the next retained section begins or the file ends (exclusive).
    pub line_end: usize,
}

impl Section {
    #[must_use]
    /// Verbatim source of this section, trimmed of surrounding blank lines as a block.
    pub fn content(&self, lines: &[&str]) -> String {
        let end = self.line_end.min(lines.len());
        let start = self.line_start.min(end);
        lines[start..end].join("\n").trim().to_string()
    }

    #[must_use]
    /// Number of source lines covered, including trailing blank ones.
    pub fn line_count(&self) -> usize {
        self.line_end - self.line_start
    }
}

#[must_use]
/// Number of lines in `source` counted the way sections index them.
///
/// A trailing newline yields a final empty line, so `"# A\n"` has two.
pub fn total_lines(source: &str) -> usize {
    source.split('\n').count()
}

#[must_use]
/// Keep headings at or above `max_level` and give each the lines up to the next one kept.
pub fn index_sections(events: &[HeadingEvent], max_level: u8, total_lines: usize) -> Vec<Section> {
    let retained: Vec<&HeadingEvent> = events.iter().filter(|e| e.level <= max_level).collect();

    if let Some(first) = retained.first() {
        if first.line > 0 {
            log::debug!("Dropping {} preamble line(s) before first section", first.line);
        }
    }

    retained
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let line_end = retained.get(i + 1).map_or(total_lines, |next| next.line);
            Section {
                title: event.text.clone(),
                level: event.level,
                filename: slugify_filename(&event.text),
                line_start: event.line,
                line_end: line_end.max(event.line),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
