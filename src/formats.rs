//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the tree-sitter grammar used to
//! find headings. Markdown is the only format shipped, but the splitter itself only ever talks
//! to this trait.

pub mod markdown;

/// Grammar and query details needed to turn a document into heading events.
pub trait Format {
    /// Tree-sitter grammar for the block structure of the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node as `@heading`.
    fn section_query(&self) -> &str;
    /// Heading level implied by a marker or underline node kind, if it is one.
    fn heading_level(&self, kind: &str) -> Option<u8>;
    /// Clean up the raw source of a heading's content node into its title.
    fn heading_title(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}
