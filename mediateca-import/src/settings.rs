//! Shared application settings (history file location).
//!
//! Any front end resolves the history path through these functions so
//! the settings file is always `~/.config/mediateca/settings.toml` and
//! path resolution stays consistent.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/mediateca/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mediateca").join("settings.toml")
}

/// Default history location when nothing is configured:
/// `<data dir>/mediateca/historialDatos.txt`.
pub fn default_history_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("mediateca").join("historialDatos.txt")
}

/// Resolve the history file path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `history.file` in `settings.toml`
/// 3. The platform data directory default
pub fn resolve_history_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_history_path() {
        return p;
    }
    default_history_path()
}

/// Read `history.file` from `settings.toml`, if set.
fn load_history_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let file = doc.get("history")?.get("file")?.as_str()?;
    if file.is_empty() {
        None
    } else {
        Some(PathBuf::from(file))
    }
}

/// Save (or clear) the history path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated settings keys
/// are preserved.
pub fn save_history_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [history] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let history = table
        .entry("history")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let history_table = history
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[history] is not a table"))?;

    match path {
        Some(p) => {
            history_table.insert(
                "file".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            history_table.remove("file");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
