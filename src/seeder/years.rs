//! Year range calculation

use chrono::{Datelike, NaiveDate};

/// First year NPR published the list
pub const FIRST_YEAR: i32 = 2013;

/// Latest year whose list is expected to be out on `today`.
///
/// The list for a year is published in December, so before then the latest
/// complete year is the previous one.
pub fn current_max_year(today: NaiveDate) -> i32 {
    if today.month() >= 12 {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Ascending years from [`FIRST_YEAR`] to [`current_max_year`], inclusive.
/// Empty when the upper bound falls before the first year.
pub fn available_years(today: NaiveDate) -> Vec<i32> {
    (FIRST_YEAR..=current_max_year(today)).collect()
}

/// The explicit year if one was given (not range-checked), otherwise every
/// available year.
pub fn target_years(year: Option<i32>, today: NaiveDate) -> Vec<i32> {
    match year {
        Some(year) => vec![year],
        None => available_years(today),
    }
}
