use std::path::PathBuf;

use crate::cli::current_year;
use crate::error::Result;
use crate::settings::{load_settings, resolve_data_dir, save_settings, settings_path};
use crate::state::AppState;
use crate::store::{JsonFileStore, StateStore};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = resolve_data_dir(&dir);
    } else if settings_path().exists() {
        println!("Keeping data directory {}", settings.data_dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;
    std::fs::create_dir_all(settings.exports_dir())?;

    let year = current_year();
    let store = JsonFileStore::new(settings.state_path(), year);
    if store.path().exists() {
        println!("Found existing state at {}", store.path().display());
    } else {
        store.save(&AppState::fresh(year))?;
        println!("Created {} with the default cards", store.path().display());
    }

    println!("Initialized credit-tracker at {}", resolved.display());
    Ok(())
}
