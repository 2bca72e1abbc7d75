//! Services for the desktop application

mod dialogs;
mod storage;

pub use dialogs::show_validation_error;
pub use storage::open_workspace;
