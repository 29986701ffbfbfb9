//! Local index: package name -> normalized file name on disk.

use crate::error::{Result, SyncError};
use crate::identity::{normalized_name, package_name};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One normalized file name per package currently present in the mods directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalIndex {
    files: HashMap<String, String>,
}

impl LocalIndex {
    /// Scans the immediate files of `dir`, creating the directory if missing.
    ///
    /// Files with a bracketed tag are renamed to their normalized name. A file
    /// whose rename fails is left out of the index. Subdirectories, names that
    /// normalize to nothing, and non-UTF-8 names are skipped. When two files map
    /// to the same package, the one seen last wins.
    pub fn scan(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| SyncError::io(dir, e))?;
        let entries = fs::read_dir(dir).map_err(|e| SyncError::io(dir, e))?;

        let mut index = LocalIndex::default();
        for entry in entries {
            let entry = entry.map_err(|e| SyncError::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| SyncError::io(&entry.path(), e))?;
            if file_type.is_dir() {
                continue;
            }
            let os_name = entry.file_name();
            let Some(file_name) = os_name.to_str() else {
                tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
                continue;
            };

            let std_name = normalized_name(file_name);
            if std_name.is_empty() {
                continue;
            }
            if std_name != file_name {
                let from = dir.join(file_name);
                let to = dir.join(std_name);
                if let Err(e) = fs::rename(&from, &to) {
                    tracing::warn!(from = %from.display(), to = %to.display(), "rename failed: {}", e);
                    continue;
                }
                tracing::info!(from = file_name, to = std_name, "renamed tagged file");
            }
            index.insert(std_name);
        }
        Ok(index)
    }

    /// Records `file_name` under its package name, replacing any earlier file.
    pub fn insert(&mut self, file_name: &str) {
        if let Some(previous) = self
            .files
            .insert(package_name(file_name).to_string(), file_name.to_string())
        {
            if previous != file_name {
                tracing::debug!(previous = %previous, current = file_name, "package name collision");
            }
        }
    }

    /// File currently indexed for `package`.
    pub fn get(&self, package: &str) -> Option<&str> {
        self.files.get(package).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for LocalIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut index = LocalIndex::default();
        for name in iter {
            index.insert(name);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"jar").unwrap();
    }

    #[test]
    fn creates_missing_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join(".minecraft").join("mods");
        let index = LocalIndex::scan(&dir).unwrap();
        assert!(index.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn indexes_files_and_skips_directories() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "modA-1.0.jar");
        touch(tmp.path(), "plain.jar");
        fs::create_dir(tmp.path().join("modC-3.0.jar")).unwrap();

        let index = LocalIndex::scan(tmp.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("modA"), Some("modA-1.0.jar"));
        assert_eq!(index.get("plain.jar"), Some("plain.jar"));
        assert_eq!(index.get("modC"), None);
    }

    #[test]
    fn renames_tagged_file() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "[Old]modA-1.0.jar");

        let index = LocalIndex::scan(tmp.path()).unwrap();
        assert_eq!(index.get("modA"), Some("modA-1.0.jar"));
        assert!(tmp.path().join("modA-1.0.jar").exists());
        assert!(!tmp.path().join("[Old]modA-1.0.jar").exists());
    }

    #[test]
    fn empty_normalized_name_is_skipped() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "[tag]");

        let index = LocalIndex::scan(tmp.path()).unwrap();
        assert!(index.is_empty());
        assert!(tmp.path().join("[tag]").exists());
    }

    #[test]
    fn insert_last_wins() {
        let mut index = LocalIndex::default();
        index.insert("modA-1.0.jar");
        index.insert("modA-2.0.jar");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("modA"), Some("modA-2.0.jar"));
    }

    #[test]
    fn scan_fails_when_path_is_a_file() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("mods");
        touch(tmp.path(), "mods");
        let err = LocalIndex::scan(&file).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
