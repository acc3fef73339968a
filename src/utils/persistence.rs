//! JSON persistence helpers for ~/.angler/ save files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::constants::SAVE_DIR_NAME;

/// Get the ~/.angler/ directory path, creating it if needed.
pub fn save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.angler/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(save_dir()?.join(filename))
}

/// Load JSON from `path`, returning `T::default()` if missing or invalid.
pub fn load_json_at_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable save {}: {err}", path.display());
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON at `path`, creating parent directories.
pub fn save_json_at<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a JSON file from ~/.angler/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_at_or_default(&path),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to ~/.angler/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_at(&save_path(filename)?, data)
}
