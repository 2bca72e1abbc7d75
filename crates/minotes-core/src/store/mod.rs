//! Persisted note collection
//!
//! The whole collection lives in one slot and is rewritten as a unit on every
//! change. Backends only move the serialized blob around; encoding and
//! decoding are shared here.

mod json_file;
mod memory;

use std::collections::HashSet;

use crate::error::Result;
use crate::models::Note;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Trait for note collection storage
pub trait NoteStore {
    /// Read the stored collection in insertion order.
    ///
    /// A missing slot is an empty collection, not an error.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection with `notes`
    fn save_all(&self, notes: &[Note]) -> Result<()>;
}

/// Decode a stored blob into a collection.
///
/// Blank input is an empty collection. Repeated ids keep their first
/// occurrence only.
pub fn decode_collection(raw: &str) -> Result<Vec<Note>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let notes: Vec<Note> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(notes.len());
    let total = notes.len();
    let notes: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id.clone()))
        .collect();

    if notes.len() != total {
        tracing::warn!(
            "Dropped {} note(s) with duplicate ids while loading",
            total - notes.len()
        );
    }

    Ok(notes)
}

/// Encode a collection into the stored JSON array
pub fn encode_collection(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_blank_is_empty() {
        assert!(decode_collection("").unwrap().is_empty());
        assert!(decode_collection("  \n").unwrap().is_empty());
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_collection("{not json").unwrap_err();
        assert!(matches!(err, crate::Error::Serialization(_)));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_collection(r#"{"id": "1"}"#).is_err());
        assert!(decode_collection(r#"[{"id": "1", "title": "x"}]"#).is_err());
    }

    #[test]
    fn decode_reads_legacy_timestamp_ids() {
        let raw = r#"[{"id":"1714557600000","title":"Groceries","content":"milk",
            "createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-01T11:00:00.000Z"}]"#;
        let notes = decode_collection(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, NoteId::from("1714557600000"));
        assert_eq!(
            notes[0].updated_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap()
        );
    }

    #[test]
    fn decode_drops_duplicate_ids() {
        let raw = r#"[
            {"id":"a","title":"first","content":"","createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-01T10:00:00.000Z"},
            {"id":"a","title":"second","content":"","createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-01T10:00:00.000Z"}
        ]"#;
        let notes = decode_collection(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "first");
    }

    #[test]
    fn encode_then_decode_preserves_order_and_fields() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let older = Note::new("older", "", t0);
        let mut newer = Note::new("newer", "body", t0);
        newer.apply_edit("newer".into(), "body 2".into(), t0 + chrono::Duration::hours(1));
        let notes = vec![older, newer];

        let raw = encode_collection(&notes).unwrap();
        assert_eq!(decode_collection(&raw).unwrap(), notes);
    }
}
