//! Reading the source document and extracting its headings.
//!
//! The parser is used purely as a black box: we run the format's heading query over the block
//! tree and keep, for each match, its level, its 0-indexed starting row and its inline text.
//! Everything downstream works on these events and the raw source lines.

use crate::error::{Error, Result};
use crate::formats::Format;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found in the source, in document order.
pub struct HeadingEvent {
    /// Heading depth, 1 through 6.
    pub level: u8,
    /// Source row (0-indexed) on which the heading markup begins.
    pub line: usize,
    /// Inline source of the heading label without the `#` markers.
    pub text: String,
}

/// Read the whole input file, insisting on UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if it is not UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `source` and return its headings in document order.
///
/// Headings whose label is missing or blank (a bare `#`) are skipped.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the grammar or the heading query cannot be loaded.
pub fn extract_headings(source: &str, format: &dyn Format) -> Result<Vec<HeadingEvent>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Parse(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse("parser returned no tree".to_string()))?;

    let query =
        Query::new(&language, format.section_query()).map_err(|e| Error::Parse(e.to_string()))?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings = Vec::new();
    while let Some(m) = matches.next() {
        for capture in m.captures {
            if let Some(event) = heading_event(capture.node, source, format) {
                headings.push(event);
            }
        }
    }

    Ok(headings)
}

fn heading_event(node: Node<'_>, source: &str, format: &dyn Format) -> Option<HeadingEvent> {
    let mut walker = node.walk();
    let level = node
        .children(&mut walker)
        .find_map(|child| format.heading_level(child.kind()))?;

    let content = node.child_by_field_name("heading_content")?;
    let raw = content.utf8_text(source.as_bytes()).ok()?;
    let text = format.heading_title(raw);
    if text.is_empty() {
        return None;
    }

    Some(HeadingEvent {
        level,
        line: node.start_position().row,
        text,
    })
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
