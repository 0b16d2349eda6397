use serde::{Deserialize, Serialize};

/// A duration summarized as whole hours and minutes. Hours are not capped
/// at 24; a multi-day span reports a flat hour count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    /// Decimal-hours representation with two decimals, e.g. 1h 15m -> "1.25".
    /// Always formatted with '.' as the separator.
    pub fn as_fraction(&self) -> String {
        let fraction = self.hours as f64 + self.minutes as f64 / 60.0;
        format!("{:.2}", fraction)
    }
}

impl std::fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Summarizes a millisecond duration as hours and minutes, rounded to the
/// nearest minute.
///
/// Milliseconds are truncated to whole seconds before rounding, so the
/// half-minute boundary is decided on seconds, not raw milliseconds. This
/// ordering is part of the observable contract; keep it.
pub fn calculate_time(milliseconds: i64) -> HoursMinutes {
    let seconds = milliseconds.max(0) / 1_000;
    let days = seconds / 86_400;

    let mut hours = (seconds / 3_600) % 24 + days * 24;
    let mut minutes = (seconds / 60) % 60;

    if seconds % 60 >= 30 {
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }

    HoursMinutes { hours, minutes }
}
