//! In-process note store

use std::cell::{Cell, RefCell};
use std::io;

use super::{decode_collection, encode_collection, NoteStore};
use crate::error::Result;
use crate::models::Note;

/// Holds the serialized collection in memory.
///
/// Useful for tests and previews: the slot can be seeded with arbitrary text
/// and writes can be made to fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose slot already holds `raw`
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::new();
        store.slot.replace(Some(raw.into()));
        store
    }

    /// Create a store already holding `notes`
    pub fn with_notes(notes: &[Note]) -> Result<Self> {
        Ok(Self::with_raw(encode_collection(notes)?))
    }

    /// Current contents of the slot
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful `save_all` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> Result<Vec<Note>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode_collection(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, notes: &[Note]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::other("memory store is read-only").into());
        }

        let raw = encode_collection(notes)?;
        self.slot.replace(Some(raw));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
