//! UI Components
//!
//! Building blocks of the two-pane layout.

mod delete_dialog;
mod note_card;
mod note_detail;
mod note_list;
mod storage_banner;

pub use delete_dialog::DeleteDialog;
pub use note_card::NoteCard;
pub use note_detail::NoteDetail;
pub use note_list::NoteList;
pub use storage_banner::StorageBanner;
