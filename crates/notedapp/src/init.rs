//! # Context Initialization
//!
//! Resolves where the snapshot and config live and wires the production
//! store into the API facade.
//!
//! The data directory is the OS-appropriate location from the
//! `directories` crate. The `NOTED_DATA_DIR` environment variable
//! overrides it, primarily so tests can isolate their state.

use crate::api::NotedApi;
use crate::config::NotedConfig;
use crate::error::Result;
use crate::store::fs::JsonFileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const SNAPSHOT_FILE: &str = "store.json";

pub struct NotedContext {
    pub api: NotedApi<JsonFileStore>,
    pub config: NotedConfig,
}

/// The directory holding `store.json` and `noted.toml`.
pub fn data_dir() -> PathBuf {
    std::env::var("NOTED_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let proj_dirs = ProjectDirs::from("com", "noted", "noted")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        })
}

/// Load config and snapshot and build the application context.
pub fn initialize() -> Result<NotedContext> {
    let dir = data_dir();
    log::debug!("data directory: {}", dir.display());

    let config = NotedConfig::load(&dir);
    let store = JsonFileStore::new(dir.join(SNAPSHOT_FILE));
    let api = NotedApi::new(store)?;

    Ok(NotedContext { api, config })
}
