//! Tree passes
//!
//!     Each pass rewrites a document tree in place and returns how many
//!     places it changed. Passes keep no state between documents; the only
//!     shared input is the immutable [`crate::tables::Tables`].
//!
//!     | pass          | matches                          | effect                               |
//!     |---------------|----------------------------------|--------------------------------------|
//!     | links         | link                             | url := rewriter(url)                 |
//!     | examples      | trigger paragraph                | wrap following examples in a div     |
//!     | admonitions   | blockquote opening with **Label** | 1 quote → opener, content, closer    |
//!     | symbols       | text equal to a known symbol     | text → titled span                   |
//!
//!     The pipeline runs them in the order above.

pub mod admonitions;
pub mod examples;
pub mod links;
pub mod symbols;

pub use admonitions::convert_admonitions;
pub use examples::wrap_examples;
pub use links::rewrite_links;
pub use symbols::annotate_symbols;
