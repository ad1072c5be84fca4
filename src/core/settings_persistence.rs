//! Settings persistence
//!
//! Loads and saves [`BoardSettings`] as JSON in the per-user config
//! directory (falling back to `./settings.json`).
//!
//! Settings are read in `main` before the app is built, because the window
//! size and log filter come from them. The log subscriber does not exist yet
//! at that point, so the outcome is kept in [`SettingsSource`] and reported by
//! [`report_settings_system`] once logging is up.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are reported but never stop the app

use super::error::CoreResult;
use super::resources::BoardSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the active settings came from
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    /// Defaults were used; `reason` is set when a file existed but failed
    Defaults { path: PathBuf, reason: Option<String> },
}

/// `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chessboard3d", "Chessboard3D") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<BoardSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: BoardSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings_to(path: &Path, settings: &BoardSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings, falling back to defaults on a missing or invalid file
pub fn load_or_default(path: &Path) -> (BoardSettings, SettingsSource) {
    if !path.exists() {
        let source = SettingsSource::Defaults {
            path: path.to_path_buf(),
            reason: None,
        };
        return (BoardSettings::default(), source);
    }
    match load_settings_from(path) {
        Ok(settings) => (settings, SettingsSource::File(path.to_path_buf())),
        Err(e) => {
            let source = SettingsSource::Defaults {
                path: path.to_path_buf(),
                reason: Some(e.to_string()),
            };
            (BoardSettings::default(), source)
        }
    }
}

/// Log where the settings came from
pub fn report_settings_system(source: Option<Res<SettingsSource>>, settings: Res<BoardSettings>) {
    match source.as_deref() {
        Some(SettingsSource::File(path)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        Some(SettingsSource::Defaults { path, reason: None }) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        }
        Some(SettingsSource::Defaults {
            path,
            reason: Some(reason),
        }) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, reason
            );
        }
        None => debug!("[SETTINGS] Settings inserted without a source"),
    }
    debug!(
        "[SETTINGS] tile_size={} y_offset={} piece_speed={} follow_pointer={}",
        settings.tile_size, settings.y_offset, settings.piece_speed, settings.follow_pointer
    );
}
