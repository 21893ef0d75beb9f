//! Global configuration for routefind (stored in ~/.config/routefind/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::format::OutputFormat;
use crate::graph::Algorithm;

const CONFIG_DIR: &str = "routefind";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "ROUTEFIND_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Algorithms to run, in order, when `--algorithm` is not given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub algorithms: Vec<Algorithm>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RouteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RouteError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            RouteError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolve the output format: flag, then config, then default
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    /// Resolve the algorithm run order: flags, then config, then BFS/DFS/UCS
    pub fn resolve_algorithms(&self, flags: &[Algorithm]) -> Vec<Algorithm> {
        if !flags.is_empty() {
            flags.to_vec()
        } else if !self.algorithms.is_empty() {
            self.algorithms.clone()
        } else {
            Algorithm::ALL.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_load_format_and_algorithms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "format = \"records\"\nalgorithms = [\"ucs\", \"bfs\"]\n").unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Records));
        assert_eq!(config.algorithms, vec![Algorithm::Ucs, Algorithm::Bfs]);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "algorithms = [\"astar\"]\n").unwrap();

        let err = GlobalConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
        assert!(err.to_string().contains(&path.display().to_string()));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Failure);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "colour = true\n").unwrap();

        assert!(GlobalConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_resolution_precedence() {
        let config = GlobalConfig {
            format: Some(OutputFormat::Json),
            algorithms: vec![Algorithm::Dfs],
        };

        assert_eq!(config.resolve_format(None), OutputFormat::Json);
        assert_eq!(
            config.resolve_format(Some(OutputFormat::Human)),
            OutputFormat::Human
        );
        assert_eq!(config.resolve_algorithms(&[]), vec![Algorithm::Dfs]);
        assert_eq!(
            config.resolve_algorithms(&[Algorithm::Ucs]),
            vec![Algorithm::Ucs]
        );

        let defaults = GlobalConfig::default();
        assert_eq!(defaults.resolve_format(None), OutputFormat::Human);
        assert_eq!(defaults.resolve_algorithms(&[]), Algorithm::ALL.to_vec());
    }
}
