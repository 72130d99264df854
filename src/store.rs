use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::state::AppState;

/// Durable home for the tracker state.
pub trait StateStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppState>>;
    fn save(&self, state: &AppState) -> Result<()>;
}

/// Keeps the state as one JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
    current_year: i32,
}

impl JsonFileStore {
    /// `current_year` fills in the year when the file doesn't carry one.
    pub fn new(path: impl Into<PathBuf>, current_year: i32) -> Self {
        Self {
            path: path.into(),
            current_year,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<AppState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        AppState::from_json(&content, self.current_year).map(Some)
    }

    fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, state.to_json()?)?;
        Ok(())
    }
}

/// Saved state if there is any, otherwise the built-in defaults. A file that
/// can't be read or parsed is reported and treated as absent.
pub fn load_or_default(store: &dyn StateStore, current_year: i32) -> AppState {
    match store.load() {
        Ok(Some(state)) => state,
        Ok(None) => AppState::fresh(current_year),
        Err(e) => {
            log::warn!("Failed to load saved state, starting from defaults: {e}");
            AppState::fresh(current_year)
        }
    }
}

/// Save and carry on regardless. The in-memory state stays authoritative for
/// the rest of the run; returns whether the write succeeded.
pub fn persist(store: &dyn StateStore, state: &AppState) -> bool {
    match store.save(state) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save state, changes will not survive this run: {e}");
            false
        }
    }
}
