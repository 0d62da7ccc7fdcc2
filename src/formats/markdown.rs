//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents
//! and extracting section structure from ATX-style headings (# syntax), plus the
//! setext headings (underlined with `===` or `---`) that the grammar also produces.

use crate::formats::Format;

/// Tree-sitter queries for markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn section_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, kind: &str) -> Option<u8> {
        match kind {
            "atx_h1_marker" | "setext_h1_underline" => Some(1),
            "atx_h2_marker" | "setext_h2_underline" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        }
    }

    fn heading_title(&self, raw: &str) -> String {
        strip_closing_sequence(raw.trim()).to_string()
    }
}

/// Drop an ATX closing sequence such as the ` ##` in `## Title ##`.
///
/// The run of `#` only counts as closing when preceded by whitespace (or when it is the
/// entire content), so `C#` keeps its hash.
fn strip_closing_sequence(text: &str) -> &str {
    let without_hashes = text.trim_end_matches('#');
    if without_hashes.len() == text.len() {
        return text;
    }
    if without_hashes.is_empty() {
        return "";
    }
    if without_hashes.ends_with([' ', '\t']) {
        without_hashes.trim_end()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
