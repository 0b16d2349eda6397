//! Fixture helpers shared by unit and integration tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::TimeInterval;
use crate::timesheet::TimesheetItem;

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

pub fn completed(project_id: i64, start: DateTime<Utc>, stop: DateTime<Utc>) -> TimeInterval {
    TimeInterval::with_stop(project_id, start, stop).unwrap()
}

pub fn active_item(project_id: i64, start: DateTime<Utc>) -> TimesheetItem {
    TimesheetItem::new(TimeInterval::clock_in(project_id, start))
}

pub fn completed_item(
    project_id: i64,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> TimesheetItem {
    TimesheetItem::new(completed(project_id, start, stop))
}
