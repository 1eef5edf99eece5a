//! Error types for document conversion

/// Errors that can occur while converting a document
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The serialized document has no `# ` heading to take a title from
    #[error("document has no top-level heading to derive a title from")]
    MissingTitle,

    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The metadata preamble could not be rendered
    #[error("Preamble error")]
    Preamble(#[from] serde_yaml::Error),
}
