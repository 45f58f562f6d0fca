// SPDX-License-Identifier: MIT

//!
//! Age statistics
//!
//! Chrono does not provide a built-in year/month diff (unlike Python's
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! manually here.
//!

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// The assumed lifespan that [`AgeStats::percent_complete`] is measured
/// against
pub const LIFESPAN_YEARS: f64 = 100.0;

/// Elapsed-time statistics for one birth date, relative to a supplied
/// "today"
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeStats {
    /// Whole years lived
    pub years: u32,

    /// Whole months lived beyond `years` (0-11)
    pub months: u32,

    /// Whole 7-day weeks lived since birth
    pub weeks_lived: u64,

    /// Whole months lived since birth (`years * 12 + months`)
    pub months_total: u32,

    /// Percentage of a 100-year lifespan lived, rounded to one decimal
    pub percent_complete: f64,
}

/// Calculate the [`AgeStats`] for `birth` as of `today`.
///
/// Borrow rules: the raw year/month difference is taken first; if
/// `today`'s day-of-month has not yet reached `birth`'s, the current month
/// is not complete and one month is borrowed; a negative month count then
/// borrows a year.
///
/// A `birth` after `today` yields all-zero stats rather than an error -
/// the grid treats the same input as a fully-Future lifespan.
pub fn age_stats(birth: NaiveDate, today: NaiveDate) -> AgeStats {
    if today < birth {
        return AgeStats {
            years: 0,
            months: 0,
            weeks_lived: 0,
            months_total: 0,
            percent_complete: 0.0,
        };
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;

    // The current month is not complete yet
    if today.day() < birth.day() {
        months -= 1;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let weeks_lived = (today - birth).num_days() as u64 / 7;
    let months_total = years as u32 * 12 + months as u32;

    let percent = (years as f64 + months as f64 / 12.0) / LIFESPAN_YEARS * 100.0;
    let percent_complete = (percent * 10.0).round() / 10.0;

    AgeStats {
        years: years as u32,
        months: months as u32,
        weeks_lived,
        months_total,
        percent_complete,
    }
}
