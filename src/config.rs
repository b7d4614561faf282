//! Optional defaults file at ~/.config/kmpull/config.toml. Command-line flags
//! always win over file values; the file is advisory and may be absent.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Defaults read from the config file. Every field is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub namespace: Option<String>,
    pub output: Option<PathBuf>,
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

/// Standard config file location (~/.config/kmpull/config.toml).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kmpull").join("config.toml"))
}

/// Load defaults from the standard location. A missing file yields empty
/// defaults; an unreadable or malformed file warns on stderr and is ignored.
pub fn load() -> FileConfig {
    match config_path() {
        Some(path) if path.exists() => load_from(&path).unwrap_or_else(|err| {
            eprintln!("[kmpull] warning: ignoring config file: {err:#}");
            FileConfig::default()
        }),
        _ => FileConfig::default(),
    }
}

/// Parse a specific config file.
pub fn load_from(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse '{}'", path.display()))
}
