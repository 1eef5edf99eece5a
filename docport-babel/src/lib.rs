//! Markdown tree passes for porting a documentation set
//!
//!     This crate takes one Markdown document written for a repository
//!     (GitHub-flavoured callouts, rule pages with example blocks, emoji
//!     status columns, repository-relative links) and rewrites it for a
//!     documentation site generator, adding the front matter the site needs.
//!
//!     This is a pure lib: no file system access, no env vars, no printing.
//!     The caller supplies the source text and a link rewriter and gets the
//!     final text back.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── formats
//!     │   └── markdown            # comrak AST <-> tree
//!     │       ├── parser.rs
//!     │       └── serializer.rs
//!     ├── tree.rs                 # Document tree
//!     ├── visit.rs                # Traversal engine
//!     ├── passes                  # links, examples, admonitions, symbols
//!     ├── tables.rs               # Fixed lookup tables
//!     ├── metadata.rs             # Title / sidebar label / slug preamble
//!     └── pipeline.rs             # Fixed pass order, end to end
//!
//! Core Algorithms
//!
//!     The hard part is editing a tree while walking it. Passes splice
//!     siblings (wrapping examples), replace one node by several (admonitions)
//!     or wrap a leaf (symbols). All of them go through [`visit::visit`],
//!     which walks by index and re-reads the live child list after every
//!     callback, so inserted nodes are seen once and passed nodes never again.
//!
//! Library Choices
//!
//!     We never write a Markdown parser or printer. comrak does both; this
//!     crate only adapts its AST to an owned tree that is easy to splice.

pub mod error;
pub mod format;
pub mod formats;
pub mod metadata;
pub mod passes;
pub mod pipeline;
pub mod tables;
pub mod tree;
pub mod visit;

pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::MarkdownFormat;
pub use metadata::Metadata;
pub use pipeline::{Converted, Pipeline, PipelineReport};
pub use tables::Tables;
pub use tree::{Kind, Node, NodeData};
