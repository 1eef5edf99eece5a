//! Metadata preamble
//!
//!     Site generators want the page title and sidebar label up front, as
//!     YAML front matter. Both are derived from the document's first `# `
//!     heading in the serialized output; a document without one cannot be
//!     published and is rejected with [`FormatError::MissingTitle`].
//!
//!     ---
//!     title: Getting started
//!     sidebar_label: Getting started
//!     ---
//!
//!     The home page (titled [`HOME_SENTINEL`]) additionally gets the root
//!     slug and a longer title.

use crate::error::FormatError;
use crate::tables::{Tables, HOME_SENTINEL, HOME_SLUG, HOME_TITLE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const DELIMITER: &str = "---";

static H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^# (.+?)[ \t]*\r?$").expect("h1 pattern is valid"));

/// Key/value lines written before the body, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub sidebar_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Metadata {
    /// Derive metadata from serialized Markdown.
    pub fn from_markdown(markdown: &str, tables: &Tables) -> Result<Self, FormatError> {
        let title = extract_title(markdown)?;
        let sidebar_label = tables.sidebar_label(title).unwrap_or(title).to_string();

        if title == HOME_SENTINEL {
            return Ok(Metadata {
                title: HOME_TITLE.to_string(),
                sidebar_label,
                slug: Some(HOME_SLUG.to_string()),
            });
        }

        Ok(Metadata {
            title: title.to_string(),
            sidebar_label,
            slug: None,
        })
    }

    /// The delimited preamble, ending with a newline.
    pub fn to_preamble(&self) -> Result<String, FormatError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
    }

    /// Prepend the preamble to `body`.
    pub fn inject(&self, body: &str) -> Result<String, FormatError> {
        Ok(format!("{}\n{body}", self.to_preamble()?))
    }
}

/// Text of the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Result<&str, FormatError> {
    H1.captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(FormatError::MissingTitle)
}
