mod calendar;
mod config;
mod queue;
mod roster;

pub use calendar::{CalendarStore, JsonCalendarStore, MemoryCalendarStore};
pub use config::Config;
pub use queue::QueueStore;
pub use roster::load_roster;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Returns the data directory, creating it if needed.
///
/// `STUDYSLOT_HOME` wins when set. Otherwise `~/.config/studyslot[-dev]/`
/// based on STUDYSLOT_ENV (set STUDYSLOT_ENV=dev for the development
/// directory).
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = match std::env::var_os("STUDYSLOT_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYSLOT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyslot-dev")
            } else {
                base_dir.join("studyslot")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Read a JSON document; a missing or blank file yields `T::default()`.
pub(crate) fn read_json<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(StoreError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a JSON document through a temp file and rename.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value)?;
    let write_failed = |source| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content).map_err(write_failed)?;
    std::fs::rename(&tmp, path).map_err(write_failed)?;
    Ok(())
}
