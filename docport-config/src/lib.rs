//! Shared configuration loader for docport.
//!
//! `defaults/docport.default.toml` is embedded into the binary so the shipped
//! rewrite rules and the documented ones never drift apart. Users layer their
//! own files on top of those defaults via [`Loader`] before deserializing into
//! [`DocportConfig`].
//!
//! Link rewriting is configuration, not code: each document [`Group`] owns an
//! ordered list of regex rules which [`LinkRewriter`] applies to every url.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../defaults/docport.default.toml");

/// Top-level configuration consumed by the docport binary.
#[derive(Debug, Clone, Deserialize)]
pub struct DocportConfig {
    pub convert: ConvertConfig,
    pub rewrite: RewriteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub detect_group: bool,
}

/// Ordered rewrite rules, one list per document group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewriteConfig {
    #[serde(default)]
    pub root: Vec<RewriteRule>,
    #[serde(default)]
    pub nested: Vec<RewriteRule>,
    #[serde(default)]
    pub rule: Vec<RewriteRule>,
}

impl RewriteConfig {
    pub fn rules(&self, group: Group) -> &[RewriteRule] {
        match group {
            Group::Root => &self.root,
            Group::Nested => &self.nested,
            Group::Rule => &self.rule,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RewriteRule {
    pub pattern: String,
    pub replacement: String,
}

/// Which set of rewrite rules applies to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Top-level repository documents.
    Root,
    /// Documents under the docs tree.
    Nested,
    /// One page per lint rule.
    Rule,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Root, Group::Nested, Group::Rule];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Root => "root",
            Group::Nested => "nested",
            Group::Rule => "rule",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = RewriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| RewriteError::UnknownGroup(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("invalid rewrite pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("unknown document group '{0}' (expected root, nested or rule)")]
    UnknownGroup(String),
}

/// Compiled rewrite rules for one group.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    rules: Vec<(Regex, String)>,
}

impl LinkRewriter {
    pub fn from_rules(rules: &[RewriteRule]) -> Result<Self, RewriteError> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern)
                    .map(|regex| (regex, rule.replacement.clone()))
                    .map_err(|source| RewriteError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Apply every rule in order, each one to the output of the previous.
    pub fn rewrite(&self, url: &str) -> String {
        let mut out = url.to_string();
        for (regex, replacement) in &self.rules {
            let next = regex.replace_all(&out, replacement.as_str()).into_owned();
            out = next;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl DocportConfig {
    /// Compile the rules of `group`.
    pub fn rewriter(&self, group: Group) -> Result<LinkRewriter, RewriteError> {
        let rewriter = LinkRewriter::from_rules(self.rewrite.rules(group))?;
        tracing::debug!(%group, rules = rewriter.len(), "compiled link rewriter");
        Ok(rewriter)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DocportConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DocportConfig, ConfigError> {
    Loader::new().build()
}
