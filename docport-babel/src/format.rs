//! Format trait definition
//!
//! The pipeline never parses or prints Markdown itself; it goes through a
//! [`Format`], which delegates to the format's own library.

use crate::error::FormatError;
use crate::tree::Node;

/// Trait for document formats
///
/// Implementors convert between source text and a document tree. A format
/// used by the pipeline must serialize to the same dialect it parses.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown")
    fn name(&self) -> &str;

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether `path` carries one of [`Format::file_extensions`].
    fn handles_path(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Parse source text into a document tree. Any text is a valid document.
    fn parse(&self, source: &str) -> Node;

    /// Serialize a document tree into source text
    fn serialize(&self, doc: &Node) -> Result<String, FormatError>;
}
