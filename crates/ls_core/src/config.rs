//! Process configuration read from the environment.
//!
//! # Responsibility
//! - Resolve the store location and logging settings once at startup.
//!
//! # Invariants
//! - `log_dir` is always absolute; relative values are resolved against the
//!   working directory.
//! - A variable that is set but blank is rejected rather than defaulted.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "LS_APP_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "LS_APP_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LS_APP_LOG_DIR";

const DEFAULT_DB_FILE: &str = "ls_app.db";
const DEFAULT_LOG_DIR: &str = "logs";
const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug)]
pub enum ConfigError {
    Blank(&'static str),
    WorkingDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(key) => write!(f, "`{key}` is set but empty"),
            Self::WorkingDir(err) => write!(f, "cannot resolve working directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blank(_) => None,
            Self::WorkingDir(err) => Some(err),
        }
    }
}

/// Where the project store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbLocation,
    /// Passed to `init_logging` as-is; level validation happens there.
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_dir = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        Self::from_lookup(|key| std::env::var(key).ok(), &base_dir)
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// `base_dir` anchors relative paths and defaults.
    pub fn from_lookup<F>(lookup: F, base_dir: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = match read(&lookup, DB_PATH_ENV)? {
            Some(value) if value == IN_MEMORY_DB => DbLocation::Memory,
            Some(value) => DbLocation::File(base_dir.join(value)),
            None => DbLocation::File(base_dir.join(DEFAULT_DB_FILE)),
        };

        let log_level =
            read(&lookup, LOG_LEVEL_ENV)?.unwrap_or_else(|| default_log_level().to_string());

        let log_dir = base_dir.join(
            read(&lookup, LOG_DIR_ENV)?.unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        );

        Ok(Self {
            db,
            log_level,
            log_dir,
        })
    }
}

fn read<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(key)),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DbLocation, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), Path::new("/srv/app"))
    }

    #[test]
    fn defaults_resolve_against_base_dir() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.db,
            DbLocation::File(PathBuf::from("/srv/app/ls_app.db"))
        );
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, PathBuf::from("/srv/app/logs"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            (DB_PATH_ENV, "/data/projects.db"),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "var/log"),
        ])
        .unwrap();
        assert_eq!(
            config.db,
            DbLocation::File(PathBuf::from("/data/projects.db"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/srv/app/var/log"));
    }

    #[test]
    fn memory_marker_selects_in_memory_store() {
        let config = config_from(&[(DB_PATH_ENV, ":memory:")]).unwrap();
        assert_eq!(config.db, DbLocation::Memory);
    }

    #[test]
    fn blank_value_is_rejected() {
        let err = config_from(&[(LOG_LEVEL_ENV, "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Blank(key) if key == LOG_LEVEL_ENV));
    }
}
