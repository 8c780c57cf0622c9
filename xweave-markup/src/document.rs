//! Markup document handling.

use std::path::Path;

use xweave_model::{CodeBehindIdentity, NamedElement, NamespaceAlias};

use crate::{
    error::{Error, Result, SourceContext},
    scan,
    tree::{self, MarkupTree},
};

/// One markup source file: its raw text and the logical asset path the
/// generated code refers back to.
///
/// Immutable input, owned by the caller for the duration of one generation
/// pass. All extraction runs against the current text; nothing is cached
/// across invocations.
pub struct MarkupDocument {
    ctx: SourceContext,
}

impl MarkupDocument {
    /// Create a document from markup text and its logical source path.
    pub fn new(text: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            ctx: SourceContext::new(text, source_path),
        }
    }

    /// Read a markup file from disk, using its path as the logical path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Ok(Self::new(text, path.display().to_string()))
    }

    /// The raw markup text.
    pub fn text(&self) -> &str {
        self.ctx.src()
    }

    /// The logical source path recorded in generated output.
    pub fn source_path(&self) -> &str {
        self.ctx.path()
    }

    /// Declared `xmlns:` namespace aliases, in textual order.
    pub fn aliases(&self) -> Vec<NamespaceAlias> {
        scan::scan_aliases(self.ctx.src())
    }

    /// `x:Name` declarations with their owning tags, in document order.
    ///
    /// The returned elements carry the raw tag as their type; callers apply
    /// alias substitution.
    pub fn named_elements(&self) -> Result<Vec<NamedElement>> {
        scan::scan_named_elements(&self.ctx)
    }

    /// The root element's tag name, used as the generated class's base type.
    pub fn base_type(&self) -> Result<String> {
        scan::scan_base_type(&self.ctx)
    }

    /// The `x:Class` code-behind identity, if declared.
    pub fn code_behind(&self) -> Result<Option<CodeBehindIdentity>> {
        scan::scan_code_behind(&self.ctx)
    }

    /// Parse the full markup tree for event extraction.
    pub fn tree(&self) -> Result<MarkupTree> {
        tree::parse_tree(&self.ctx)
    }
}
