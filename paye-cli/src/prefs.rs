//! The persisted display preference: light or dark theme.
//!
//! This is the only state the calculator keeps between runs. It lives in a
//! small TOML file under the user's config directory, is read once at
//! startup, and is written only by the explicit `theme set` command.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Display palette for tables and the distribution chart.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("cannot determine a config directory (set HOME or PAYE_CONFIG_DIR)")]
    NoConfigDir,

    #[error("cannot write preferences to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Location of the preferences file. `PAYE_CONFIG_DIR` overrides the usual
/// XDG lookup.
pub fn prefs_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("PAYE_CONFIG_DIR") {
        return Some(PathBuf::from(dir).join("prefs.toml"));
    }
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("paye").join("prefs.toml"));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("paye").join("prefs.toml"))
}

/// Reads the stored preferences. A missing or unreadable file falls back to
/// the defaults; startup never fails over a display preference.
pub fn load() -> Preferences {
    let Some(path) = prefs_path() else {
        return Preferences::default();
    };
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return Preferences::default();
    };
    parse_preferences(&raw, &path)
}

fn parse_preferences(
    raw: &str,
    path: &std::path::Path,
) -> Preferences {
    toml::from_str(raw).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "ignoring unreadable preferences");
        Preferences::default()
    })
}

/// Persists the preferences, creating the config directory if needed.
/// Returns the path written to.
pub fn store(prefs: &Preferences) -> Result<PathBuf, PrefsError> {
    let path = prefs_path().ok_or(PrefsError::NoConfigDir)?;
    let serialized = toml::to_string_pretty(prefs)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| PrefsError::Write {
            path: path.clone(),
            source,
        })?;
    }
    std::fs::write(&path, serialized).map_err(|source| PrefsError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
