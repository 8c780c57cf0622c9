//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - line-oriented builder for indented code
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
