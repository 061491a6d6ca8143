//! Configuration file loading for the CLI
//!
//! Finds and loads the TOML configuration from an explicit path, the local
//! project directory or the platform configuration directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use cogviz::{CogvizError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {err}")]
    Read { path: PathBuf, err: std::io::Error },
}

impl From<ConfigError> for CogvizError {
    fn from(err: ConfigError) -> Self {
        CogvizError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (cogviz/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CogvizError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("cogviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "cogviz", "cogviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CogvizError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
        path: path.to_path_buf(),
        err,
    })?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cogviz_core::mode::LayoutMode;

    use super::*;

    #[test]
    fn test_explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\nmode = \"dag\"\nwidth = 900.0").unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.layout().mode(), LayoutMode::Dag);
        assert_eq!(config.layout().size().width(), 900.0);
        assert_eq!(config.layout().size().height(), 400.0);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some("/definitely/not/here.toml")).unwrap_err();

        assert!(matches!(err, CogvizError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[layout\nmode = ").unwrap();

        assert!(matches!(
            load_config(Some(file.path())),
            Err(CogvizError::Config(_))
        ));
    }
}
