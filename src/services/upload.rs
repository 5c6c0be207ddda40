//! Filesystem-backed upload storage.
//!
//! Files are written as `<file_id><original extension>` under a single
//! directory. Lookup is by file id alone; the stored extension is
//! rediscovered by scanning the directory.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Handle to the upload directory.
#[derive(Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create the store, ensuring the directory exists.
    pub fn new(dir: PathBuf) -> AppResult<Self> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::Database(format!("Failed to create upload dir: {}", e)))?;
        Ok(Self { dir })
    }

    /// Extension (with leading dot) carried over from an original filename.
    pub fn extension_of(filename: &str) -> String {
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default()
    }

    /// Write the file body and return the path it landed at.
    pub fn store(&self, file_id: Uuid, original_filename: &str, body: &[u8]) -> AppResult<PathBuf> {
        let path = self
            .dir
            .join(format!("{}{}", file_id, Self::extension_of(original_filename)));

        std::fs::write(&path, body)
            .map_err(|e| AppError::Database(format!("Failed to write upload: {}", e)))?;

        Ok(path)
    }

    /// Locate a stored file by id, whatever extension it was saved with.
    pub fn find(&self, file_id: Uuid) -> Option<PathBuf> {
        let wanted = file_id.to_string();
        let entries = std::fs::read_dir(&self.dir).ok()?;

        for entry in entries.flatten() {
            let path = entry.path();
            let stem = path.file_stem().and_then(|s| s.to_str());
            if stem == Some(wanted.as_str()) && path.is_file() {
                return Some(path);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_find_preserves_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().to_path_buf()).unwrap();
        let id = Uuid::new_v4();

        let path = store.store(id, "dyno_run.CSV", b"rpm,afr").unwrap();
        assert!(path.to_string_lossy().ends_with(".CSV"));

        let found = store.find(id).unwrap();
        assert_eq!(found, path);
        assert_eq!(std::fs::read(found).unwrap(), b"rpm,afr");
    }

    #[test]
    fn test_extensionless_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().to_path_buf()).unwrap();
        let id = Uuid::new_v4();

        let path = store.store(id, "README", b"hello").unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), id.to_string());
        assert!(store.find(id).is_some());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().to_path_buf()).unwrap();
        assert!(store.find(Uuid::new_v4()).is_none());
    }
}
