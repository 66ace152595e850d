use chrono::{Datelike, Weekday};

/// Saturdays and Sundays are the only non-working days.
pub fn is_workday<D: Datelike>(day: &D) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}
