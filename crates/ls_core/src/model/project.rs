//! Project domain model.
//!
//! # Responsibility
//! - Define the single record handed to the project repository.
//! - Stamp new projects with the current local calendar date.
//!
//! # Invariants
//! - `created_date` carries no time component.
//! - `name` is taken as given; no format or uniqueness rule is applied here.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage-assigned project identifier.
pub type ProjectId = i64;

/// A named project with its creation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// `None` until the repository assigns an identity on first save.
    pub id: Option<ProjectId>,
    /// Short caller-supplied identifier, e.g. `P1`.
    pub name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub created_date: NaiveDate,
}

impl Project {
    /// Creates an unsaved project dated today (local time).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_date(name, today())
    }

    /// Creates an unsaved project with an explicit creation date.
    pub fn with_date(name: impl Into<String>, created_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_date,
        }
    }

    /// Returns whether the store has assigned an identity to this project.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Current calendar date in the process's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
