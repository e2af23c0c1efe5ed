use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::FolioConfig;

/// Config file picked up from the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the config for this run: the explicit path if given (must exist),
/// else `folio.toml` in `cwd` if present, else defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        read_config(&local)
    } else {
        Ok(FolioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogLevel, Section};
    use tempfile::TempDir;

    const SAMPLE: &str = r##"[ui]
show_key_hints = false
start_section = "projects"

[ui.colors]
primary = "#112233"

[log]
file = "/tmp/folio-test.log"
level = "debug"
"##;

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = read_config(&path).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.start_section, Section::Projects);
        assert_eq!(
            config.ui.colors.get("primary").map(String::as_str),
            Some("#112233")
        );
        assert_eq!(config.log.file.as_deref(), Some("/tmp/folio-test.log"));
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.start_section, Section::Home);
        assert!(config.log.file.is_none());
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        let err = load_config(Some(&missing), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_load_from_cwd() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), SAMPLE).unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.ui.start_section, Section::Projects);
    }

    #[test]
    fn test_load_defaults_without_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.ui.start_section, Section::Home);
    }
}
