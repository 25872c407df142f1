// Date utility functions
// Month-grid helpers for view consumers

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Every day of the month containing `date`, first to last.
pub fn days_of_month(date: NaiveDate) -> Vec<NaiveDate> {
    let first = start_of_month(date);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn next_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) + Months::new(1)
}

pub fn prev_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date) - Months::new(1)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
