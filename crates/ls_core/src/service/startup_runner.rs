//! One-shot startup seeding.
//!
//! # Responsibility
//! - Insert the fixed seed projects through a `ProjectRepository`.
//!
//! # Invariants
//! - Saves happen in `SEED_PROJECT_NAMES` order, one at a time.
//! - The first failing save ends the run; later seeds are not attempted.
//! - Each seed is dated when it is constructed, not when the run starts.

use crate::model::project::Project;
use crate::repo::project_repo::{ProjectRepository, RepoResult};
use log::{error, info};
use std::time::Instant;

/// Names of the projects inserted on every run, in save order.
pub const SEED_PROJECT_NAMES: [&str; 3] = ["P1", "P2", "P3"];

/// Seeds the project store once the repository is ready.
pub struct StartupRunner<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> StartupRunner<R> {
    /// Creates a runner over an already constructed repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves one new project per seed name.
    ///
    /// Running again inserts another full set of rows.
    ///
    /// # Errors
    /// - Returns the first repository error unchanged.
    pub fn run(&self) -> RepoResult<()> {
        let started_at = Instant::now();
        info!("event=seed_run module=startup status=start");

        match self.save_seeds() {
            Ok(()) => {
                info!(
                    "event=seed_run module=startup status=ok count={} duration_ms={}",
                    SEED_PROJECT_NAMES.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=seed_run module=startup status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save_seeds(&self) -> RepoResult<()> {
        for name in SEED_PROJECT_NAMES {
            let saved = self.repo.save(&Project::new(name))?;
            info!(
                "event=seed_save module=startup status=ok name={} id={} created_date={}",
                saved.name,
                saved.id.map_or_else(|| "none".to_string(), |id| id.to_string()),
                saved.created_date
            );
        }
        Ok(())
    }
}
