use crate::core::error::{PostviewError, PostviewResult};
use std::path::{Path, PathBuf};

/// Get the Postview home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\postview
/// - Linux: ~/.config/postview
/// - macOS: ~/Library/Application Support/postview
pub fn postview_home() -> PostviewResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| PostviewError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("postview"))
}

/// Get the config file path (`<postview home>/config.yaml`)
pub fn config_file() -> PostviewResult<PathBuf> {
    Ok(postview_home()?.join("config.yaml"))
}

/// Create a directory (and its parents) if it does not exist yet
pub fn ensure_dir(path: &Path) -> PostviewResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| {
            PostviewError::Path(format!("Failed to create {}: {}", path.display(), e))
        })?;
    }
    Ok(())
}
