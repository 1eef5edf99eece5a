//! Markdown format implementation
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing and serialization:
//! - Single crate for both parsing and serialization
//! - CommonMark compliant, with the GFM table and strikethrough extensions
//! - Arena AST that maps cleanly onto an owned tree
//!
//! # Node Mapping
//!
//! | Comrak value            | Tree node            | Notes                                   |
//! |-------------------------|----------------------|-----------------------------------------|
//! | Document                | Root                 |                                         |
//! | Paragraph               | Paragraph            |                                         |
//! | Heading                 | Heading              | level and setext flag kept              |
//! | Text                    | Text                 |                                         |
//! | Strong / Emph           | Strong / Emphasis    |                                         |
//! | Link                    | Link                 | url and title kept                      |
//! | BlockQuote              | BlockQuote           |                                         |
//! | HtmlBlock / HtmlInline  | Html                 | `block` flag tells them apart           |
//! | (none)                  | Span                 | export only, as inline HTML open/close  |
//! | anything else           | Other                | value cloned as is, children converted  |
//!
//! # Lossy Conversions
//!
//! - Source positions are dropped.
//! - HTML block types are not kept; comrak's serializer does not need them.
//! - Comrak's `<!-- end list -->` separators are stripped from the output.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::tree::Node;
use comrak::ComrakOptions;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn parse(&self, source: &str) -> Node {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}

/// Options shared by parsing and serialization so the output dialect
/// matches the input.
fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    // Raw HTML (wrappers, spans) must be written verbatim
    options.render.unsafe_ = true;
    options
}
