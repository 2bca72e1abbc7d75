//! File-backed note store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{decode_collection, encode_collection, NoteStore};
use crate::config::StorageConfig;
use crate::error::Result;
use crate::models::Note;

/// Stores the collection as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the location named by `config`.
    ///
    /// `default_dir` is used when the config does not name a data directory.
    pub fn from_config(config: &StorageConfig, default_dir: &Path) -> Self {
        Self::new(config.notes_path(default_dir))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No note file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        decode_collection(&raw)
    }

    fn save_all(&self, notes: &[Note]) -> Result<()> {
        let raw = encode_collection(notes)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then swap it in whole.
        let temp = self.temp_path();
        fs::write(&temp, raw)?;
        fs::rename(&temp, &self.path)?;

        tracing::debug!("Wrote {} note(s) to {}", notes.len(), self.path.display());
        Ok(())
    }
}
