//! Explicit application wiring.
//!
//! # Responsibility
//! - Open the configured store, build the project repository, and hand it
//!   to the startup runner.
//!
//! # Invariants
//! - The runner only starts after migrations have been applied.

use crate::config::{AppConfig, DbLocation};
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::repo::project_repo::{RepoError, SqliteProjectRepository};
use crate::service::startup_runner::StartupRunner;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StartupError {
    Db(DbError),
    Repo(RepoError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "failed to open project store: {err}"),
            Self::Repo(err) => write!(f, "failed to seed projects: {err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StartupError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Runs the full startup sequence against the configured store.
pub fn run_startup(config: &AppConfig) -> Result<(), StartupError> {
    let conn = match &config.db {
        DbLocation::File(path) => open_db(path)?,
        DbLocation::Memory => open_db_in_memory()?,
    };

    StartupRunner::new(SqliteProjectRepository::new(&conn)).run()?;
    Ok(())
}
