//! Generation-model types for the xweave code-behind generator.
//!
//! This crate provides the unified type definitions shared across the
//! generation pipeline. These types are the single source of truth for what
//! a markup document contributes to its generated code-behind.
//!
//! # Architecture
//!
//! ```text
//! *.xaml → xweave-markup (scanning) → xweave-model (bindings model) → codegen
//! ```
//!
//! The model types are designed to be:
//! - Toolkit-agnostic (no Unity/editor concerns)
//! - Self-contained (no dependencies beyond serde)
//! - Built fresh for every generation pass

mod alias;
mod model;

pub use alias::{NamespaceAlias, substitute_alias};
pub use model::{BindingsModel, CodeBehindIdentity, EventBinding, NamedElement};
