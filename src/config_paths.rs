//! Centralized configuration paths for chordbind
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/chordbind/`
//! - Windows: `%APPDATA%\chordbind\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "chordbind";

/// Base config directory for chordbind
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/chordbind`
///   - Else: `~/.config/chordbind`
///
/// Windows:
///   - `%APPDATA%\chordbind`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/chordbind/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

/// `~/.config/chordbind/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
    })?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_file_ends_with_yaml() {
        if let Some(path) = keymap_file() {
            assert!(path.to_string_lossy().ends_with("keymap.yaml"));
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_logs_dir_is_subdir_of_config() {
        if let (Some(config), Some(logs)) = (config_dir(), logs_dir()) {
            assert!(logs.starts_with(&config));
        }
    }
}
