//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application directory inside the platform data directory.
const APP_DIR: &str = "HackathonApp";

/// Name of the configuration file inside [`get_app_dir`].
pub const CONFIG_FILE: &str = "config.json";

/// Gets the base application directory (`HackathonApp`).
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Gets the path of the configuration file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join(CONFIG_FILE))
}
