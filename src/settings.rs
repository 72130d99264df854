use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

pub const STATE_FILE: &str = "credit-tracker.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    home()
        .join("Documents")
        .join("credit-tracker")
        .to_string_lossy()
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Settings {
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(STATE_FILE)
    }

    pub fn exports_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("exports")
    }
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `~/.config/credit-tracker/settings.json`
pub fn settings_path() -> PathBuf {
    home().join(".config").join("credit-tracker").join("settings.json")
}

/// Missing or malformed settings fall back to defaults.
pub fn load_settings() -> Settings {
    let path = settings_path();
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Settings::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable settings at {}: {e}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TrackerError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

/// Turn a `--data-dir` argument into an absolute path, expanding a leading `~`.
pub fn resolve_data_dir(input: &str) -> String {
    let path = match input.strip_prefix('~') {
        Some(rest) => home().join(rest.trim_start_matches('/')),
        None => PathBuf::from(input),
    };
    std::path::absolute(&path)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert!(s.data_dir.ends_with("credit-tracker"));
    }

    #[test]
    fn test_paths_hang_off_data_dir() {
        let s = Settings {
            data_dir: "/tmp/ct".to_string(),
        };
        assert_eq!(s.state_path(), PathBuf::from("/tmp/ct/credit-tracker.json"));
        assert_eq!(s.exports_dir(), PathBuf::from("/tmp/ct/exports"));
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/elsewhere".to_string(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: Settings =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.data_dir, "/tmp/elsewhere");
    }

    #[test]
    fn test_data_dir_is_made_absolute() {
        assert!(PathBuf::from(resolve_data_dir("some/dir")).is_absolute());
        assert_eq!(resolve_data_dir("/tmp/ct"), "/tmp/ct");
    }

    #[test]
    fn test_data_dir_expands_home() {
        let out = resolve_data_dir("~/ledgers");
        assert_eq!(PathBuf::from(out), home().join("ledgers"));
    }
}
