//! Default file locations for Atelier state.

use std::path::PathBuf;

use atelier_core::AtelierError;
use atelier_core::error::Result;

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "atelier";

/// Preference file name.
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Returns the default location of the preference file.
///
/// - macOS: `~/Library/Application Support/atelier/preferences.json`
/// - Linux: `~/.config/atelier/preferences.json`
/// - Windows: `%APPDATA%\atelier\preferences.json`
pub fn default_preferences_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| AtelierError::config("Could not determine config directory"))?;
    Ok(base.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_path_ends_with_file_name() {
        let path = default_preferences_path().unwrap();
        assert!(path.ends_with("atelier/preferences.json"));
    }
}
