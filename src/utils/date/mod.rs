// Date utility functions

use chrono::{Local, NaiveDate, NaiveDateTime};

/// The current calendar day in local wall-clock terms.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}
