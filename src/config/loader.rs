//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::RtpkitConfig;
use crate::error::{RtpError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".rtpkit.yml";

/// Find `.rtpkit.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// Relative table paths are resolved against the directory holding the
/// config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RtpkitConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RtpError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RtpError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    if let Some(base) = path.parent() {
        for table in &mut config.tables {
            if table.is_relative() {
                *table = base.join(&*table);
            }
        }
    }

    debug!(path = %path.display(), tables = config.tables.len(), "Loaded config");
    Ok(config)
}

/// Parse YAML content into RtpkitConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RtpkitConfig> {
    if content.trim().is_empty() {
        return Ok(RtpkitConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RtpError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Otherwise `.rtpkit.yml` in `dir` is used
/// when present, and the default config when not.
pub fn load_config(dir: &Path, config_override: Option<&Path>) -> Result<RtpkitConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => match find_config(dir) {
            Some(path) => load_config_file(&path),
            None => Ok(RtpkitConfig::default()),
        },
    }
}
