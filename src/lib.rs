//! mdsplit: split one large markdown document into a file per heading section.
//!
//! Headings are found with tree-sitter, each retained heading claims the source lines up to
//! the next one, and every section is written verbatim to a slugified `.md` file. A table of
//! contents (by default `llms.txt`) links to each file by absolute URL, nested by heading
//! depth.

pub mod config;
pub mod error;
pub mod formats;
pub mod input;
pub mod section;
pub mod slug;
pub mod split;
pub mod toc;

pub use error::{Error, Result};
pub use split::{generate_docs, SplitOptions, SplitReport};
