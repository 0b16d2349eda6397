use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Project, TimeInterval};

use super::{ProjectRepository, RepositoryError, TimeIntervalRepository};

/// In-memory project store, primarily a test double for the repository
/// contract.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: BTreeMap<i64, Project>,
    next_id: i64,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn find_all(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.projects.values().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Project>, RepositoryError> {
        Ok(self.projects.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Project>, RepositoryError> {
        Ok(self.projects.values().find(|p| p.name == name).cloned())
    }

    fn add(&mut self, project: Project) -> Result<Project, RepositoryError> {
        if self.projects.values().any(|p| p.name == project.name) {
            return Err(RepositoryError::Conflict(format!(
                "Project named '{}' already exists",
                project.name
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let project = project.with_id(id);
        self.projects.insert(id, project.clone());
        Ok(project)
    }

    fn remove(&mut self, id: i64) -> Result<(), RepositoryError> {
        self.projects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Project {}", id)))
    }
}

/// In-memory time interval store.
#[derive(Debug, Default)]
pub struct InMemoryTimeIntervalRepository {
    intervals: BTreeMap<i64, TimeInterval>,
    next_id: i64,
}

impl InMemoryTimeIntervalRepository {
    pub fn new() -> Self {
        Self {
            intervals: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl TimeIntervalRepository for InMemoryTimeIntervalRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<TimeInterval>, RepositoryError> {
        Ok(self.intervals.get(&id).cloned())
    }

    fn find_active_by_project(
        &self,
        project_id: i64,
    ) -> Result<Option<TimeInterval>, RepositoryError> {
        Ok(self
            .intervals
            .values()
            .find(|i| i.project_id == project_id && i.is_active())
            .cloned())
    }

    fn find_by_project_since(
        &self,
        project_id: i64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<TimeInterval>, RepositoryError> {
        Ok(self
            .intervals
            .values()
            .filter(|i| i.project_id == project_id && (i.is_active() || i.start >= cutoff))
            .cloned()
            .collect())
    }

    fn add(&mut self, interval: TimeInterval) -> Result<TimeInterval, RepositoryError> {
        let id = self.next_id;
        self.next_id += 1;

        let interval = interval.with_id(id);
        self.intervals.insert(id, interval.clone());
        Ok(interval)
    }

    fn update(&mut self, interval: TimeInterval) -> Result<TimeInterval, RepositoryError> {
        let id = interval
            .id
            .ok_or_else(|| RepositoryError::Storage("Cannot update an unsaved interval".into()))?;

        if !self.intervals.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!("Time interval {}", id)));
        }

        self.intervals.insert(id, interval.clone());
        Ok(interval)
    }

    fn remove(&mut self, id: i64) -> Result<(), RepositoryError> {
        self.intervals
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Time interval {}", id)))
    }
}
