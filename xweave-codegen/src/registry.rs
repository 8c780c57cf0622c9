//! Toolkit manifest: emission settings plus the known-type registry.
//!
//! The manifest is a TOML file (conventionally `weft.toml`) declaring the
//! toolkit the markup targets and the types whose event members the
//! generator may bind:
//!
//! ```toml
//! [toolkit]
//! namespace = "Noesis"
//!
//! [types."Noesis.Button"]
//! events = ["Click"]
//!
//! [types."MyApp.Controls.Circle"]
//! events = ["Tapped"]
//! ```
//!
//! Build environments with real symbol information can implement
//! [`TypeRegistry`] directly instead.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    adapters::{TypeHandle, TypeRegistry},
    error::{Error, Result},
};

/// Emission settings for the target toolkit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Runtime namespace imported by generated files; also the default
    /// namespace prepended to unprefixed element tags for type lookup.
    pub namespace: String,
    /// Component-loading entry point invoked by `InitializeComponent`.
    pub loader: String,
    /// Attribute marking generated classes, so the implementation probe can
    /// tell them apart from hand-written ones.
    pub marker: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            namespace: "Noesis".to_string(),
            loader: "GUI.LoadComponent".to_string(),
            marker: "UnityEngine.HideInInspector".to_string(),
        }
    }
}

/// One type declaration in the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDecl {
    /// Event member names declared on the type.
    #[serde(default)]
    pub events: Vec<String>,
}

/// A parsed toolkit manifest, usable directly as a [`TypeRegistry`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolkitManifest {
    #[serde(default)]
    pub toolkit: ToolkitConfig,

    /// Known types by fully-qualified name, in declaration order.
    #[serde(default)]
    pub types: IndexMap<String, TypeDecl>,
}

impl ToolkitManifest {
    /// Parse a toolkit manifest from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::ManifestIo {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a toolkit manifest from a string with a filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Box::new(Error::Manifest {
                path: filename.to_string(),
                source: e,
            })
        })
    }
}

impl TypeRegistry for ToolkitManifest {
    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self.types.contains_key(name).then(|| TypeHandle::new(name))
    }

    fn has_event(&self, ty: &TypeHandle, event: &str) -> bool {
        self.types
            .get(ty.name())
            .is_some_and(|decl| decl.events.iter().any(|e| e == event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = ToolkitManifest::from_str_with_filename(
            r#"
            [toolkit]
            namespace = "Noesis"

            [types."Noesis.Button"]
            events = ["Click"]

            [types."App.Controls.Circle"]
            "#,
            "weft.toml",
        )
        .unwrap();

        assert_eq!(manifest.toolkit.namespace, "Noesis");
        assert_eq!(manifest.types.len(), 2);

        let button = manifest.resolve("Noesis.Button").unwrap();
        assert!(manifest.has_event(&button, "Click"));
        assert!(!manifest.has_event(&button, "MouseEnter"));

        let circle = manifest.resolve("App.Controls.Circle").unwrap();
        assert!(!manifest.has_event(&circle, "Click"));

        assert!(manifest.resolve("Noesis.Grid").is_none());
    }

    #[test]
    fn test_defaults_follow_the_toolkit() {
        let config = ToolkitConfig::default();
        assert_eq!(config.namespace, "Noesis");
        assert_eq!(config.loader, "GUI.LoadComponent");
        assert_eq!(config.marker, "UnityEngine.HideInInspector");
    }

    #[test]
    fn test_invalid_manifest_is_an_error() {
        let err = ToolkitManifest::from_str_with_filename("types = 3", "weft.toml").unwrap_err();
        assert!(matches!(*err, Error::Manifest { .. }));
    }
}
