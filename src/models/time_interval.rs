use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TimeIntervalError {
    #[error("Clock out at {stop} is before clock in at {start}")]
    ClockOutBeforeClockIn {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },
}

/// One clock-in/clock-out interval against a project. Immutable: every
/// operation that changes state returns a new value.
///
/// An interval with `stop == None` is active (still clocked in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub id: Option<i64>,
    pub project_id: i64,
    pub start: DateTime<Utc>,
    pub stop: Option<DateTime<Utc>>,
    pub registered: bool,
}

impl TimeInterval {
    /// Starts a new active interval for the project.
    pub fn clock_in(project_id: i64, at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            project_id,
            start: at,
            stop: None,
            registered: false,
        }
    }

    /// Builds a completed interval. Fails when `stop` precedes `start`.
    pub fn with_stop(
        project_id: i64,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        if stop < start {
            return Err(TimeIntervalError::ClockOutBeforeClockIn { start, stop }.into());
        }
        Ok(Self {
            id: None,
            project_id,
            start,
            stop: Some(stop),
            registered: false,
        })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_active(&self) -> bool {
        self.stop.is_none()
    }

    /// Completed duration in milliseconds, zero while still active.
    pub fn time(&self) -> i64 {
        match self.stop {
            Some(stop) => (stop - self.start).num_milliseconds(),
            None => 0,
        }
    }

    /// Duration up to `now` while active, otherwise the completed duration.
    pub fn interval(&self, now: DateTime<Utc>) -> i64 {
        match self.stop {
            Some(stop) => (stop - self.start).num_milliseconds(),
            None => (now - self.start).num_milliseconds(),
        }
    }

    /// Rebuilds the interval with the given stop time, preserving the
    /// registered flag. Fails when `at` precedes the start.
    ///
    /// Callers are expected to only clock out active intervals; calling this
    /// on a completed interval replaces its stop time.
    pub fn clock_out_at(&self, at: DateTime<Utc>) -> anyhow::Result<Self> {
        if at < self.start {
            return Err(TimeIntervalError::ClockOutBeforeClockIn {
                start: self.start,
                stop: at,
            }
            .into());
        }
        Ok(Self {
            stop: Some(at),
            ..self.clone()
        })
    }

    /// Marks the interval as included in an external report. No-op when
    /// already registered.
    pub fn mark_as_registered(&self) -> Self {
        Self {
            registered: true,
            ..self.clone()
        }
    }

    pub fn unmark_registered(&self) -> Self {
        Self {
            registered: false,
            ..self.clone()
        }
    }
}
