//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist `Project` records into the `projects` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` of an unsaved project always inserts a new row; names are not
//!   deduplicated.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::project::{Project, ProjectId};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    created_date
FROM projects";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project persistence and lookups.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ProjectId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted project data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for project records.
pub trait ProjectRepository {
    /// Inserts an unsaved project or updates a persisted one.
    ///
    /// Returns the stored value, carrying the assigned `id`.
    fn save(&self, project: &Project) -> RepoResult<Project>;
    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists every project in insertion (`id`) order.
    fn find_all(&self) -> RepoResult<Vec<Project>>;
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for &R {
    fn save(&self, project: &Project) -> RepoResult<Project> {
        (**self).save(project)
    }

    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Project>> {
        (**self).find_all()
    }
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, project: &Project) -> RepoResult<Project> {
        self.conn.execute(
            "INSERT INTO projects (name, created_date) VALUES (?1, ?2);",
            params![project.name.as_str(), date_to_db(project.created_date)],
        )?;

        Ok(Project {
            id: Some(self.conn.last_insert_rowid()),
            ..project.clone()
        })
    }

    fn update(&self, id: ProjectId, project: &Project) -> RepoResult<Project> {
        let changed = self.conn.execute(
            "UPDATE projects
             SET
                name = ?1,
                created_date = ?2
             WHERE id = ?3;",
            params![
                project.name.as_str(),
                date_to_db(project.created_date),
                id
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(project.clone())
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn save(&self, project: &Project) -> RepoResult<Project> {
        match project.id {
            None => self.insert(project),
            Some(id) => self.update(id, project),
        }
    }

    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let date_text: String = row.get("created_date")?;
    let created_date = parse_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date `{date_text}` in projects.created_date"
        ))
    })?;

    Ok(Project {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        created_date,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
