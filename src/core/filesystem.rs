use crate::core::CoreError;
use miette::Diagnostic;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum FilesystemError {
    #[error("file not found: {name}")]
    #[diagnostic()]
    NotFound { name: String },

    #[error("I/O error on {name}: {source}")]
    #[diagnostic()]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {name}: {source}")]
    #[diagnostic()]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError for FilesystemError {
    fn to_call_error(&self) -> (&'static str, String) {
        ("InternalError", self.to_string())
    }
}

/// Flat file namespace with whole-file replace semantics. The core treats the
/// filesystem as single-writer and does not assume crash atomicity for
/// partial writes; implementations are expected to provide write-then-rename
/// semantics so a reader never observes a half-written file.
pub trait FilesystemAdapter {
    fn read(&self, name: &str) -> Result<Vec<u8>, FilesystemError>;
    fn write(&self, name: &str, data: &[u8]) -> Result<(), FilesystemError>;
    fn remove(&self, name: &str) -> Result<(), FilesystemError>;
    fn exists(&self, name: &str) -> bool;
    /// Names of every file whose name starts with `prefix`, in unspecified order.
    fn list_with_prefix(&self, prefix: &str) -> Result<Vec<String>, FilesystemError>;
}

/// Loads and parses a JSON document; returns `Ok(None)` if the file does not
/// exist, and an error only for a genuine I/O or parse failure.
pub fn load_json<T: DeserializeOwned>(
    fs: &dyn FilesystemAdapter,
    name: &str,
) -> Result<Option<T>, FilesystemError> {
    if !fs.exists(name) {
        return Ok(None);
    }
    let bytes = fs.read(name)?;
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| FilesystemError::Json {
            name: name.to_string(),
            source,
        })
}

/// Serializes `value` and replaces the file in one whole-file write.
pub fn store_json<T: Serialize>(
    fs: &dyn FilesystemAdapter,
    name: &str,
    value: &T,
) -> Result<(), FilesystemError> {
    let bytes = serde_json::to_vec(value).map_err(|source| FilesystemError::Json {
        name: name.to_string(),
        source,
    })?;
    fs.write(name, &bytes)
}

/// Removes every file whose name starts with `prefix`. Returns the number of
/// files removed. Used by e.g. the authorization cache's `clear()`.
pub fn prefix_scan_delete(fs: &dyn FilesystemAdapter, prefix: &str) -> Result<usize, FilesystemError> {
    let names = fs.list_with_prefix(prefix)?;
    let count = names.len();
    for name in names {
        fs.remove(&name)?;
    }
    Ok(count)
}

/// `FilesystemAdapter` backed by a real directory on disk, used outside of
/// tests. Writes go through a `.tmp` sibling file followed by a rename so a
/// reader never observes a partially-written file.
pub struct StdFilesystemAdapter {
    root: PathBuf,
}

impl StdFilesystemAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FilesystemAdapter for StdFilesystemAdapter {
    fn read(&self, name: &str) -> Result<Vec<u8>, FilesystemError> {
        std::fs::read(self.path(name)).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FilesystemError::NotFound {
                    name: name.to_string(),
                }
            } else {
                FilesystemError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<(), FilesystemError> {
        let final_path = self.path(name);
        let tmp_path = self.path(&format!("{name}.tmp"));
        std::fs::write(&tmp_path, data).map_err(|source| FilesystemError::Io {
            name: name.to_string(),
            source,
        })?;
        std::fs::rename(&tmp_path, &final_path).map_err(|source| FilesystemError::Io {
            name: name.to_string(),
            source,
        })
    }

    fn remove(&self, name: &str) -> Result<(), FilesystemError> {
        match std::fs::remove_file(self.path(name)) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FilesystemError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn list_with_prefix(&self, prefix: &str) -> Result<Vec<String>, FilesystemError> {
        let dir = std::fs::read_dir(&self.root).map_err(|source| FilesystemError::Io {
            name: self.root.display().to_string(),
            source,
        })?;
        let mut names = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|source| FilesystemError::Io {
                name: self.root.display().to_string(),
                source,
            })?;
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(prefix) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }
}

/// In-memory `FilesystemAdapter`, for tests and for components that run
/// headless (no flash/SD card attached).
#[derive(Default)]
pub struct MemoryFilesystemAdapter {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryFilesystemAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilesystemAdapter for MemoryFilesystemAdapter {
    fn read(&self, name: &str) -> Result<Vec<u8>, FilesystemError> {
        self.files
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| FilesystemError::NotFound {
                name: name.to_string(),
            })
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<(), FilesystemError> {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), FilesystemError> {
        self.files.lock().unwrap().remove(name);
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    fn list_with_prefix(&self, prefix: &str) -> Result<Vec<String>, FilesystemError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|n| n.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        value: i32,
    }

    #[test]
    fn load_json_on_missing_file_returns_none() {
        let fs = MemoryFilesystemAdapter::new();
        let result: Option<Doc> = load_json(&fs, "missing.jsn").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn store_then_load_json_round_trips() {
        let fs = MemoryFilesystemAdapter::new();
        let doc = Doc { value: 42 };
        store_json(&fs, "cfg-main.jsn", &doc).unwrap();
        let loaded: Option<Doc> = load_json(&fs, "cfg-main.jsn").unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn prefix_scan_delete_removes_only_matching_files() {
        let fs = MemoryFilesystemAdapter::new();
        fs.write("tx-1-0.jsn", b"{}").unwrap();
        fs.write("tx-1-1.jsn", b"{}").unwrap();
        fs.write("localauth.jsn", b"{}").unwrap();

        let removed = prefix_scan_delete(&fs, "tx-1-").unwrap();
        assert_eq!(removed, 2);
        assert!(fs.exists("localauth.jsn"));
        assert!(!fs.exists("tx-1-0.jsn"));
    }

    #[test]
    fn malformed_json_is_reported_without_invalidating_store() {
        let fs = MemoryFilesystemAdapter::new();
        fs.write("cfg-main.jsn", b"not json").unwrap();
        let result: Result<Option<Doc>, _> = load_json(&fs, "cfg-main.jsn");
        assert!(result.is_err());
        assert!(fs.exists("cfg-main.jsn"));
    }
}
