//! Markdown pipeline tests
//!
//! End-to-end conversions of real-shaped documents, checked on the output
//! text and on the transformed tree.

mod pipeline;
mod tree;
