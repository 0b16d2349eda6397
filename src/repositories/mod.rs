pub mod memory;

use chrono::{DateTime, Utc};

use crate::models::{Project, TimeInterval};

pub use memory::{InMemoryProjectRepository, InMemoryTimeIntervalRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Persistence contract for projects. Concrete storage backends live
/// outside this crate.
pub trait ProjectRepository {
    fn find_all(&self) -> Result<Vec<Project>, RepositoryError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Project>, RepositoryError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Project>, RepositoryError>;

    /// Persists the project and returns it with its assigned id.
    fn add(&mut self, project: Project) -> Result<Project, RepositoryError>;
    fn remove(&mut self, id: i64) -> Result<(), RepositoryError>;
}

/// Persistence contract for time intervals.
pub trait TimeIntervalRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<TimeInterval>, RepositoryError>;

    /// The interval the project is currently clocked in on, if any. At most
    /// one interval per project is active at a time.
    fn find_active_by_project(
        &self,
        project_id: i64,
    ) -> Result<Option<TimeInterval>, RepositoryError>;

    /// Intervals for the project starting at or after the cutoff, plus any
    /// active interval regardless of its start.
    fn find_by_project_since(
        &self,
        project_id: i64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<TimeInterval>, RepositoryError>;

    /// Persists the interval and returns it with its assigned id.
    fn add(&mut self, interval: TimeInterval) -> Result<TimeInterval, RepositoryError>;

    /// Replaces a previously persisted interval, matched by id.
    fn update(&mut self, interval: TimeInterval) -> Result<TimeInterval, RepositoryError>;

    fn remove(&mut self, id: i64) -> Result<(), RepositoryError>;
}
