use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::TimeInterval;

/// One row on the timesheet, wrapping a time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetItem {
    pub interval: TimeInterval,
}

impl TimesheetItem {
    pub fn new(interval: TimeInterval) -> Self {
        Self { interval }
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_active()
    }

    /// Completed duration in milliseconds, zero while still active.
    pub fn time(&self) -> i64 {
        self.interval.time()
    }

    /// Local calendar day the interval started on; the grouping key.
    pub fn day(&self) -> NaiveDate {
        self.interval.start.with_timezone(&Local).date_naive()
    }

    /// "08:00 - 11:30", open-ended while the interval is active.
    pub fn title(&self) -> String {
        let start = self.interval.start.with_timezone(&Local).format("%H:%M");
        match self.interval.stop {
            Some(stop) => format!("{} - {}", start, stop.with_timezone(&Local).format("%H:%M")),
            None => format!("{} -", start),
        }
    }
}

/// Display order for timesheet rows: an active row sorts before any completed
/// row, then later start first, then later stop first. The remaining fields
/// break the final tie so `Equal` holds only for rows that are equal by `Eq`.
impl Ord for TimesheetItem {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_active(), other.is_active()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        other
            .interval
            .start
            .cmp(&self.interval.start)
            .then_with(|| other.interval.stop.cmp(&self.interval.stop))
            .then_with(|| self.interval.project_id.cmp(&other.interval.project_id))
            .then_with(|| self.interval.registered.cmp(&other.interval.registered))
            .then_with(|| self.interval.id.cmp(&other.interval.id))
    }
}

impl PartialOrd for TimesheetItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
