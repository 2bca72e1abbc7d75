//! minotes-core - Core library for Minotes
//!
//! This crate contains the note model, the persisted note store, and the
//! note workspace state machine that the desktop interface renders.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod util;
pub mod view;
pub mod workspace;

pub use error::{Error, Result, ValidationError};
pub use models::{Draft, Note, NoteId};
pub use store::{JsonFileStore, MemoryStore, NoteStore};
pub use view::WorkspaceView;
pub use workspace::{Clock, EditMode, SystemClock, Workspace, WorkspaceState};
