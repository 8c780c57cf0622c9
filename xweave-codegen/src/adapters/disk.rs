//! Filesystem-backed collaborators.

use std::path::Path;

use xweave_markup::MarkupDocument;

use super::{AssetStore, MarkupProvider};
use crate::error::{Error, Result};

/// [`AssetStore`] and [`MarkupProvider`] over `std::fs`.
///
/// The import notification is a no-op; editor integrations override it by
/// wrapping the store.
pub struct DiskStore;

fn store_err(path: &Path, source: std::io::Error) -> Box<Error> {
    Box::new(Error::Store {
        path: path.to_path_buf(),
        source,
    })
}

impl AssetStore for DiskStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| store_err(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| store_err(path, e))?;
            }
        }
        std::fs::write(path, content).map_err(|e| store_err(path, e))
    }

    fn delete(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|e| store_err(path, e))
    }
}

impl MarkupProvider for DiskStore {
    fn load(&self, path: &Path) -> Result<MarkupDocument> {
        Ok(MarkupDocument::from_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_read_delete_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("View.g.cs");
        let store = DiskStore;

        assert!(!store.exists(&path));
        store.write(&path, "generated").unwrap();
        assert!(store.exists(&path));
        assert_eq!(store.read(&path).unwrap(), "generated");
        store.delete(&path).unwrap();
        assert!(!store.exists(&path));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Assets").join("Views").join("View.g.cs");

        DiskStore.write(&path, "nested").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_read_missing_file_is_a_store_error() {
        let temp = TempDir::new().unwrap();
        let err = DiskStore.read(&temp.path().join("absent.g.cs")).unwrap_err();
        assert!(matches!(*err, Error::Store { .. }));
    }
}
