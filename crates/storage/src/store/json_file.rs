use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use partstock_core::InventoryState;

use super::r#trait::{StateStore, StorageError};

/// Conventional file name for the persisted inventory document.
pub const DEFAULT_FILE_NAME: &str = "inventory.json";

/// JSON-file-backed whole-state store.
///
/// The persisted representation is a JSON object of objects of integers:
/// category name → item name → quantity. A save writes the full document to
/// a sibling temp file and renames it over the target, so the visible file
/// is always a complete document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<InventoryState>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted inventory state");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::load(format!(
                    "reading {}: {e}",
                    self.path.display()
                )));
            }
        };

        let state: InventoryState = serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::load(format!("parsing {}: {e}", self.path.display()))
        })?;

        debug!(
            path = %self.path.display(),
            pairs = state.pair_count(),
            "loaded persisted inventory state"
        );
        Ok(Some(state))
    }

    fn save(&self, state: &InventoryState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::save(format!("creating {}: {e}", parent.display()))
                })?;
            }
        }

        let bytes = serde_json::to_vec(state)
            .map_err(|e| StorageError::save(format!("serializing state: {e}")))?;

        let temp = self.temp_path();
        fs::write(&temp, &bytes)
            .map_err(|e| StorageError::save(format!("writing {}: {e}", temp.display())))?;
        fs::rename(&temp, &self.path).map_err(|e| {
            StorageError::save(format!(
                "renaming {} to {}: {e}",
                temp.display(),
                self.path.display()
            ))
        })?;

        debug!(
            path = %self.path.display(),
            pairs = state.pair_count(),
            "persisted inventory state"
        );
        Ok(())
    }
}
