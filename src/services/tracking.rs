use chrono::{DateTime, Utc};

use crate::models::TimeInterval;
use crate::repositories::{RepositoryError, TimeIntervalRepository};

/// Clocks the project in at `at`. Fails with a conflict when the project
/// already has an active interval.
pub fn clock_in(
    repository: &mut dyn TimeIntervalRepository,
    project_id: i64,
    at: DateTime<Utc>,
) -> anyhow::Result<TimeInterval> {
    if repository.find_active_by_project(project_id)?.is_some() {
        return Err(RepositoryError::Conflict(format!(
            "Project {} is already clocked in",
            project_id
        ))
        .into());
    }

    log::debug!("clocking in project {} at {}", project_id, at);
    let interval = repository.add(TimeInterval::clock_in(project_id, at))?;
    Ok(interval)
}

/// Clocks the project out at `at`, completing its active interval. Fails
/// when no interval is active, or when `at` precedes the clock-in time.
pub fn clock_out(
    repository: &mut dyn TimeIntervalRepository,
    project_id: i64,
    at: DateTime<Utc>,
) -> anyhow::Result<TimeInterval> {
    let active = repository
        .find_active_by_project(project_id)?
        .ok_or_else(|| {
            RepositoryError::NotFound(format!("Active interval for project {}", project_id))
        })?;

    log::debug!("clocking out project {} at {}", project_id, at);
    let completed = active.clock_out_at(at)?;
    Ok(repository.update(completed)?)
}
