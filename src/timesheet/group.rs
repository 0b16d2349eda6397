use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TimeInterval;
use crate::utils::calculate::{calculate_time, HoursMinutes};

use super::TimesheetItem;

/// One calendar day on the timesheet, with its rows in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetDay {
    pub date: NaiveDate,
    pub items: Vec<TimesheetItem>,
}

impl TimesheetDay {
    /// Sum of completed milliseconds; active rows contribute zero.
    pub fn total_time(&self) -> i64 {
        self.items.iter().map(|item| item.time()).sum()
    }

    pub fn summary(&self) -> HoursMinutes {
        calculate_time(self.total_time())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    pub days: Vec<TimesheetDay>,
}

impl Timesheet {
    /// Groups intervals by local start day, most recent day first; within a
    /// day, active rows first, then reverse chronological.
    pub fn build(intervals: Vec<TimeInterval>) -> Self {
        let mut grouped: BTreeMap<NaiveDate, Vec<TimesheetItem>> = BTreeMap::new();
        for interval in intervals {
            let item = TimesheetItem::new(interval);
            grouped.entry(item.day()).or_default().push(item);
        }

        log::debug!("building timesheet over {} days", grouped.len());

        let days = grouped
            .into_iter()
            .rev()
            .map(|(date, mut items)| {
                items.sort();
                TimesheetDay { date, items }
            })
            .collect();

        Self { days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;
    use crate::test_utils::{completed, utc};

    #[test]
    fn test_days_are_ordered_most_recent_first() {
        let timesheet = Timesheet::build(vec![
            completed(1, utc(2023, 5, 1, 8, 0, 0), utc(2023, 5, 1, 9, 0, 0)),
            completed(1, utc(2023, 5, 3, 8, 0, 0), utc(2023, 5, 3, 9, 0, 0)),
            completed(1, utc(2023, 5, 2, 8, 0, 0), utc(2023, 5, 2, 9, 0, 0)),
        ]);

        let dates: Vec<NaiveDate> = timesheet.days.iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(timesheet.days.len(), 3);
    }

    #[test]
    fn test_rows_within_a_day_are_ordered() {
        let active = TimeInterval::clock_in(1, utc(2023, 5, 1, 10, 0, 0));
        let timesheet = Timesheet::build(vec![
            completed(1, utc(2023, 5, 1, 11, 0, 0), utc(2023, 5, 1, 12, 0, 0)),
            active.clone(),
            completed(1, utc(2023, 5, 1, 13, 0, 0), utc(2023, 5, 1, 14, 0, 0)),
        ]);

        assert_eq!(timesheet.days.len(), 1);
        let items = &timesheet.days[0].items;
        assert!(items[0].is_active());
        assert!(items[1].interval.start > items[2].interval.start);
    }

    #[test]
    fn test_day_summary_sums_completed_rows() {
        let timesheet = Timesheet::build(vec![
            completed(1, utc(2023, 5, 1, 10, 0, 0), utc(2023, 5, 1, 11, 0, 0)),
            completed(1, utc(2023, 5, 1, 12, 0, 0), utc(2023, 5, 1, 12, 30, 0)),
            TimeInterval::clock_in(1, utc(2023, 5, 1, 13, 0, 0)),
        ]);

        let day = &timesheet.days[0];
        assert_eq!(day.total_time(), 5_400_000);
        assert_eq!(day.summary(), HoursMinutes { hours: 1, minutes: 30 });
        assert_eq!(day.summary().as_fraction(), "1.50");
    }

    #[test]
    fn test_empty_input_builds_empty_timesheet() {
        let timesheet = Timesheet::build(Vec::new());
        assert!(timesheet.days.is_empty());
    }
}
