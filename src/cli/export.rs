use std::path::PathBuf;

use crate::cli::Session;
use crate::error::Result;

/// Write the interchange document. Returns the path written.
pub fn run(output: Option<String>) -> Result<PathBuf> {
    let session = Session::open();
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| session.settings.exports_dir().join(session.state.export_file_name()));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, session.state.to_json()?)?;
    println!("Wrote {}", path.display());
    Ok(path)
}
