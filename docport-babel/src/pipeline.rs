//! End-to-end document conversion
//!
//!     source ─parse─▶ tree ─links─▶ ─examples─▶ ─admonitions─▶ ─symbols─▶ tree
//!            ─serialize─▶ body ─metadata─▶ final text
//!
//! The pass order is fixed. A [`Pipeline`] borrows the shared [`Tables`]
//! and can be reused for any number of documents; nothing carries over from
//! one document to the next.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::MarkdownFormat;
use crate::metadata::Metadata;
use crate::passes::{annotate_symbols, convert_admonitions, rewrite_links, wrap_examples};
use crate::tables::Tables;
use crate::tree::Node;

/// Number of changes each pass made to one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub links: usize,
    pub examples: usize,
    pub admonitions: usize,
    pub symbols: usize,
}

/// Converted document plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub text: String,
    pub metadata: Metadata,
    pub report: PipelineReport,
}

pub struct Pipeline<'t, F: Format = MarkdownFormat> {
    tables: &'t Tables,
    format: F,
}

impl<'t> Pipeline<'t, MarkdownFormat> {
    pub fn new(tables: &'t Tables) -> Self {
        Pipeline::with_format(tables, MarkdownFormat)
    }
}

impl<'t, F: Format> Pipeline<'t, F> {
    pub fn with_format(tables: &'t Tables, format: F) -> Self {
        Pipeline { tables, format }
    }

    /// Run the passes over a parsed tree, in order.
    pub fn transform<R>(&self, doc: &mut Node, rewriter: R) -> PipelineReport
    where
        R: Fn(&str) -> String,
    {
        let report = PipelineReport {
            links: rewrite_links(doc, rewriter),
            examples: wrap_examples(doc),
            admonitions: convert_admonitions(doc, self.tables),
            symbols: annotate_symbols(doc, self.tables),
        };
        tracing::debug!(
            format = self.format.name(),
            links = report.links,
            examples = report.examples,
            admonitions = report.admonitions,
            symbols = report.symbols,
            "passes done"
        );
        report
    }

    /// Parse, transform, serialize and prepend the metadata preamble.
    pub fn convert<R>(&self, source: &str, rewriter: R) -> Result<Converted, FormatError>
    where
        R: Fn(&str) -> String,
    {
        let mut doc = self.format.parse(source);
        let report = self.transform(&mut doc, rewriter);
        let body = self.format.serialize(&doc)?;
        let metadata = Metadata::from_markdown(&body, self.tables)?;
        let text = metadata.inject(&body)?;
        Ok(Converted {
            text,
            metadata,
            report,
        })
    }

    /// [`Pipeline::convert`], keeping only the final text.
    pub fn run<R>(&self, source: &str, rewriter: R) -> Result<String, FormatError>
    where
        R: Fn(&str) -> String,
    {
        self.convert(source, rewriter).map(|converted| converted.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Kind;

    fn identity(url: &str) -> String {
        url.to_string()
    }

    #[test]
    fn transform_runs_every_pass() {
        let tables = Tables::standard();
        let pipeline = Pipeline::new(&tables);
        let mut doc = MarkdownFormat.parse(
            "# Rule\n\n\
             See [docs](../a.md).\n\n\
             > **Note** Careful.\n\n\
             The following patterns are considered problems:\n\n\
             ```css\na {}\n```\n\n\
             | ok |\n| - |\n| ✅ |\n",
        );

        let report = pipeline.transform(&mut doc, |url| url.replace(".md", ""));

        assert_eq!(
            report,
            PipelineReport {
                links: 1,
                examples: 1,
                admonitions: 1,
                symbols: 1,
            }
        );
        assert!(!doc.children.iter().any(|n| n.is(Kind::BlockQuote)));
    }

    #[test]
    fn missing_h1_fails_the_file() {
        let tables = Tables::standard();
        let err = Pipeline::new(&tables)
            .run("## Only a section\n", identity)
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingTitle));
    }

    #[test]
    fn preamble_comes_first() {
        let tables = Tables::standard();
        let out = Pipeline::new(&tables).run("# Foo\n\nBody.\n", identity).unwrap();
        assert!(out.starts_with("---\ntitle: Foo\nsidebar_label: Foo\n---\n\n# Foo\n"));
        assert!(!out.contains("slug:"));
    }
}
