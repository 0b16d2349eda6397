use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Local, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StartingPointError {
    #[error("Invalid starting point: {0}")]
    InvalidStartingPoint(i32),
}

/// How far back a "time since ..." query reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPoint {
    Day,
    Week,
    Month,
}

impl TryFrom<i32> for StartingPoint {
    type Error = StartingPointError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StartingPoint::Day),
            1 => Ok(StartingPoint::Week),
            2 => Ok(StartingPoint::Month),
            _ => Err(StartingPointError::InvalidStartingPoint(value)),
        }
    }
}

impl StartingPoint {
    /// Cutoff at local midnight of today, of the Monday of the current week,
    /// or of the 1st of the current month. Weeks start on Monday regardless
    /// of locale. Pure function of `now`; no clock reads.
    pub fn cutoff(&self, now: DateTime<Local>) -> Result<DateTime<Local>> {
        let today = now.date_naive();
        let date = match self {
            StartingPoint::Day => today,
            StartingPoint::Week => {
                today - Duration::days(today.weekday().num_days_from_monday() as i64)
            }
            // the 1st always exists
            StartingPoint::Month => today.with_day(1).unwrap(),
        };

        let midnight = date.and_time(NaiveTime::MIN);
        Local
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("No local midnight exists on {}", date))
    }

    /// Cutoff as epoch milliseconds.
    pub fn cutoff_milliseconds(&self, now: DateTime<Local>) -> Result<i64> {
        Ok(self.cutoff(now)?.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike, Weekday};

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap()
                    .and_hms_opt(h, min, 0)
                    .unwrap(),
            )
            .earliest()
            .unwrap()
    }

    fn assert_midnight(cutoff: DateTime<Local>) {
        assert_eq!(cutoff.hour(), 0);
        assert_eq!(cutoff.minute(), 0);
        assert_eq!(cutoff.second(), 0);
    }

    #[test]
    fn test_day_cutoff_is_todays_midnight() {
        // 2023-05-17 was a Wednesday
        let now = local(2023, 5, 17, 14, 30);
        let cutoff = StartingPoint::Day.cutoff(now).unwrap();

        assert_eq!(cutoff.date_naive(), now.date_naive());
        assert_midnight(cutoff);
        assert!(cutoff <= now);
    }

    #[test]
    fn test_week_cutoff_is_monday_midnight() {
        let now = local(2023, 5, 17, 14, 30);
        let cutoff = StartingPoint::Week.cutoff(now).unwrap();

        assert_eq!(cutoff.weekday(), Weekday::Mon);
        assert_eq!(cutoff.date_naive(), NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
        assert_midnight(cutoff);
        assert!(cutoff <= now);
    }

    #[test]
    fn test_week_cutoff_on_a_monday_is_today() {
        let now = local(2023, 5, 15, 0, 1);
        let cutoff = StartingPoint::Week.cutoff(now).unwrap();
        assert_eq!(cutoff.date_naive(), now.date_naive());
    }

    #[test]
    fn test_week_cutoff_on_a_sunday_reaches_back_six_days() {
        let now = local(2023, 5, 21, 23, 59);
        let cutoff = StartingPoint::Week.cutoff(now).unwrap();
        assert_eq!(cutoff.date_naive(), NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
    }

    #[test]
    fn test_month_cutoff_is_first_of_month_midnight() {
        let now = local(2023, 5, 17, 14, 30);
        let cutoff = StartingPoint::Month.cutoff(now).unwrap();

        assert_eq!(cutoff.day(), 1);
        assert_eq!(cutoff.month(), 5);
        assert_midnight(cutoff);
        assert!(cutoff <= now);
    }

    #[test]
    fn test_try_from_raw_value() {
        assert_eq!(StartingPoint::try_from(0).unwrap(), StartingPoint::Day);
        assert_eq!(StartingPoint::try_from(1).unwrap(), StartingPoint::Week);
        assert_eq!(StartingPoint::try_from(2).unwrap(), StartingPoint::Month);

        assert!(StartingPoint::try_from(-1).is_err());
        assert!(StartingPoint::try_from(3).is_err());
    }

    #[test]
    fn test_cutoff_milliseconds_matches_cutoff() {
        let now = local(2023, 5, 17, 14, 30);
        let cutoff = StartingPoint::Week.cutoff(now).unwrap();
        assert_eq!(
            StartingPoint::Week.cutoff_milliseconds(now).unwrap(),
            cutoff.timestamp_millis()
        );
    }
}
