//! Code emission and regeneration policy for the xweave code-behind
//! generator.
//!
//! This crate turns a markup document into its generated C# partial class:
//! it assembles the bindings model from the markup scans and the event
//! extraction pass, renders the class body, and drives the regeneration
//! policy (skip when a hand-written implementation exists, delete when the
//! model is empty, write only when the emitted text changed).
//!
//! # Module Organization
//!
//! - [`adapters`] - collaborator seams (TypeRegistry, AssetStore, ...)
//! - `assemble` - model assembly over one document
//! - `builder` - indented-code building blocks
//! - `emit` - deterministic class-body rendering
//! - `events` - event-binding extraction over the markup tree
//! - `generate` - the regeneration controller
//! - `registry` - TOML toolkit manifest backing the type registry

pub mod adapters;
mod assemble;
mod builder;
mod emit;
mod error;
mod events;
mod generate;
mod registry;

pub use assemble::assemble_model;
pub use builder::{CodeBuilder, Indent};
pub use emit::emit_code_behind;
pub use error::{Error, Result};
pub use generate::{Generator, Outcome};
pub use registry::{ToolkitConfig, ToolkitManifest, TypeDecl};
