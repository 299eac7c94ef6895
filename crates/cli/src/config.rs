//! Driver configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! [pool]
//! initial_capacity = 1024
//! strict_pop = true
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stack_pool::{PoolConfig, PoolError};

/// Errors surfaced by the driver
#[derive(Debug)]
pub enum CliError {
    /// The config file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The config file is not valid TOML for `FileConfig`
    Parse { path: PathBuf, source: toml::de::Error },
    /// A pool operation rejected a handle
    Pool(PoolError),
    /// Stats could not be rendered as JSON
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            CliError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            CliError::Pool(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON output error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Parse { source, .. } => Some(source),
            CliError::Pool(e) => Some(e),
            CliError::Json(e) => Some(e),
        }
    }
}

impl From<PoolError> for CliError {
    fn from(e: PoolError) -> Self {
        CliError::Pool(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// On-disk configuration layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub pool: PoolConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve the pool settings: file first, then flags
pub fn resolve(
    path: Option<&Path>,
    capacity: Option<usize>,
    strict_pop: bool,
) -> Result<PoolConfig, CliError> {
    let mut config = match path {
        Some(path) => FileConfig::load(path)?.pool,
        None => PoolConfig::default(),
    };
    if let Some(capacity) = capacity {
        config.initial_capacity = capacity;
    }
    if strict_pop {
        config.strict_pop = true;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_pool_table() {
        let file = write_config("[pool]\ninitial_capacity = 128\nstrict_pop = true\n");
        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.pool.initial_capacity, 128);
        assert!(config.pool.strict_pop);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(FileConfig::load(file.path()).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_table_rejected() {
        let file = write_config("[allocator]\nsize = 3\n");
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config("[pool]\ninitial_capacity = 8\n");
        let config = resolve(Some(file.path()), Some(64), true).unwrap();
        assert_eq!(config.initial_capacity, 64);
        assert!(config.strict_pop);

        let config = resolve(Some(file.path()), None, false).unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert!(!config.strict_pop);

        assert_eq!(resolve(None, None, false).unwrap(), PoolConfig::default());
    }
}
