//! File-backed key-value store.
//!
//! Persists the ledger to a single binary file on disk, providing
//! durability without a native database dependency. Suitable for
//! development and light production.

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// The full map is rewritten atomically (temp file + rename) on every
/// mutation. Entries are tiny, so this stays cheap at the ledger's scale.
#[derive(Debug)]
pub struct FileBackedKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Create a new file-backed store at the given path, loading any
    /// existing contents.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_from_file(&path).unwrap_or_default();

        if data.is_empty() {
            tracing::info!("[fl-01] 📁 No existing ledger file at {}", path.display());
        } else {
            tracing::info!(
                "[fl-01] 💾 Loaded {} keys from {}",
                data.len(),
                path.display()
            );
        }

        Self { data, path }
    }

    fn load_from_file(path: &Path) -> Option<HashMap<Vec<u8>, Vec<u8>>> {
        let mut file = std::fs::File::open(path).ok()?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).ok()?;

        // Simple binary format: [key_len:u32][key][value_len:u32][value]...
        let mut data = HashMap::new();
        let mut cursor = 0;

        while cursor + 4 <= bytes.len() {
            let key_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + key_len > bytes.len() {
                break;
            }
            let key = bytes[cursor..cursor + key_len].to_vec();
            cursor += key_len;

            if cursor + 4 > bytes.len() {
                break;
            }
            let value_len = u32::from_le_bytes(bytes[cursor..cursor + 4].try_into().ok()?) as usize;
            cursor += 4;

            if cursor + value_len > bytes.len() {
                break;
            }
            let value = bytes[cursor..cursor + value_len].to_vec();
            cursor += value_len;

            data.insert(key, value);
        }

        Some(data)
    }

    fn save_to_file(
        path: &Path,
        data: &HashMap<Vec<u8>, Vec<u8>>,
    ) -> Result<(), KVStoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| KVStoreError::IOError {
                message: e.to_string(),
            })?;
        }

        let mut bytes = Vec::new();
        for (key, value) in data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(|e| KVStoreError::IOError {
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| KVStoreError::IOError {
            message: e.to_string(),
        })?;
        file.sync_all().map_err(|e| KVStoreError::IOError {
            message: e.to_string(),
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| KVStoreError::IOError {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        // Stage, persist, then commit: a failed file write must leave the
        // live map exactly as it was, or rejected insertions would still
        // be readable in the running process.
        let mut staged = self.data.clone();
        staged.insert(key.to_vec(), value.to_vec());
        Self::save_to_file(&self.path, &staged)?;
        self.data = staged;
        Ok(())
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let mut staged = self.data.clone();
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    staged.insert(key, value);
                }
            }
        }
        Self::save_to_file(&self.path, &staged)?;
        self.data = staged;
        Ok(())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KVStoreError> {
        let results: Vec<_> = self
            .data
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(results)
    }
}
