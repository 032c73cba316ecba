mod config;
pub mod database;
pub mod store;

pub use config::{AlertsConfig, Config, LogConfig, WatchConfig};
pub use database::Database;
pub use store::{keys, Store};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the directory holding the store and config file.
///
/// `HACKREMINDER_DATA_DIR` wins when set. Otherwise `~/.config/hackreminder`,
/// or `~/.config/hackreminder-dev` with `HACKREMINDER_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("HACKREMINDER_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HACKREMINDER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("hackreminder-dev")
            } else {
                base_dir.join("hackreminder")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
