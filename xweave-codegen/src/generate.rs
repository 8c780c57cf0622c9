//! The regeneration controller.
//!
//! One pass per document: check for a hand-written implementation, build the
//! model, then emit and reconcile with the store. Terminal in all branches;
//! a failed pass leaves any previously generated file untouched.

use std::path::PathBuf;

use xweave_markup::MarkupDocument;

use crate::{
    adapters::{AssetStore, ImplementationProbe, TypeRegistry},
    assemble::assemble_model,
    emit::emit_code_behind,
    error::Result,
    registry::ToolkitConfig,
};

/// How one generation pass concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A hand-written implementation exists; nothing was touched.
    SkippedUserImplementation,
    /// The model was empty and an existing generated file was deleted.
    Deleted(PathBuf),
    /// The model was empty and no generated file existed.
    NothingToGenerate,
    /// The markup has bindings but no `x:Class`; no class can be generated.
    NoCodeBehind,
    /// The existing file already matches the emitted text.
    UpToDate(PathBuf),
    /// New text was written and the store notified.
    Written(PathBuf),
}

/// Drives generation for markup documents against a set of collaborators.
pub struct Generator<'a> {
    registry: &'a dyn TypeRegistry,
    probe: &'a dyn ImplementationProbe,
    store: &'a dyn AssetStore,
    toolkit: ToolkitConfig,
}

impl<'a> Generator<'a> {
    pub fn new(
        registry: &'a dyn TypeRegistry,
        probe: &'a dyn ImplementationProbe,
        store: &'a dyn AssetStore,
        toolkit: ToolkitConfig,
    ) -> Self {
        Self {
            registry,
            probe,
            store,
            toolkit,
        }
    }

    pub fn toolkit(&self) -> &ToolkitConfig {
        &self.toolkit
    }

    /// Derive the generated-source path from the logical markup path.
    pub fn target_path(source_path: &str) -> PathBuf {
        match source_path.strip_suffix(".xaml") {
            Some(stem) => PathBuf::from(format!("{stem}.g.cs")),
            None => PathBuf::from(format!("{source_path}.g.cs")),
        }
    }

    /// Render the code-behind without touching the store.
    ///
    /// Returns `None` when the document warrants no output (empty model or
    /// missing code-behind identity).
    pub fn preview(&self, doc: &MarkupDocument) -> Result<Option<String>> {
        let model = assemble_model(doc, self.registry, &self.toolkit)?;
        if model.is_empty() {
            return Ok(None);
        }
        Ok(emit_code_behind(&model, doc.source_path(), &self.toolkit))
    }

    /// Run one full generation pass for a document.
    pub fn generate(&self, doc: &MarkupDocument) -> Result<Outcome> {
        // A hand-written code-behind wins over generation outright; the
        // store must not be touched in that case.
        if let Some(identity) = doc.code_behind()? {
            if let Some(existing) = self.probe.lookup(&identity.qualified_name()) {
                if existing.has_initializer && !existing.marked_generated {
                    return Ok(Outcome::SkippedUserImplementation);
                }
            }
        }

        let model = assemble_model(doc, self.registry, &self.toolkit)?;
        let target = Self::target_path(doc.source_path());

        if model.is_empty() {
            if self.store.exists(&target) {
                self.store.delete(&target)?;
                return Ok(Outcome::Deleted(target));
            }
            return Ok(Outcome::NothingToGenerate);
        }

        let Some(text) = emit_code_behind(&model, doc.source_path(), &self.toolkit) else {
            return Ok(Outcome::NoCodeBehind);
        };

        if self.store.exists(&target) && self.store.read(&target)? == text {
            return Ok(Outcome::UpToDate(target));
        }

        self.store.write(&target, &text)?;
        self.store.notify_changed(&target)?;
        Ok(Outcome::Written(target))
    }
}
