//! Opens the note workspace over the configured notes file

use minotes_core::config::{default_data_dir, StorageConfig};
use minotes_core::{JsonFileStore, Workspace};

/// Resolve storage config and open the workspace.
///
/// A broken config file is logged and replaced by defaults so the app still
/// starts.
pub fn open_workspace() -> Workspace<JsonFileStore> {
    let config = StorageConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring storage config: {}", e);
        StorageConfig::default()
    });

    let store = JsonFileStore::from_config(&config, &default_data_dir());
    tracing::info!("Using notes file {}", store.path().display());

    Workspace::open(store)
}
