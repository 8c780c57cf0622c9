//! Markup scanning and tree parsing for the xweave code-behind generator.
//!
//! This crate owns everything that touches raw markup text: the textual
//! scanners for `x:Name`, `xmlns:` alias, and `x:Class` declarations, the
//! lightweight tree parser used for event extraction, and the markup error
//! taxonomy with miette diagnostics.
//!
//! It is deliberately not a general XML parser: the dialect is constrained
//! (one root element, quoted attributes, no entity expansion) and the
//! scanners preserve the exact textual semantics downstream consumers
//! depend on.

mod document;
mod error;
mod scan;
mod tree;

pub use document::MarkupDocument;
pub use error::{Error, Result, SourceContext};
pub use tree::{Attribute, MarkupNode, MarkupTree};
