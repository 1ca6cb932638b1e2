//! Core of the project seed bootstrap.
//! Owns the project model, its SQLite store, and the startup runner.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::{run_startup, StartupError};
pub use config::{AppConfig, ConfigError, DbLocation};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use repo::project_repo::{ProjectRepository, RepoError, RepoResult, SqliteProjectRepository};
pub use service::startup_runner::{StartupRunner, SEED_PROJECT_NAMES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
