// SPDX-License-Identifier: MIT

//!
//! Calendar-aware date arithmetic
//!
//! Chrono does not expose the exact clamp rule the grid engine needs as a
//! standalone, documented policy, so the one genuinely tricky piece of
//! numeric work (variable month lengths, leap years) is isolated here.
//!

use chrono::{Datelike, Days, NaiveDate};

/// Add `months` calendar months to `date`.
///
/// Clamp policy: if the target month is shorter than `date`'s day-of-month,
/// the result is clamped to the last valid day of the target month.  The
/// addition never rolls into the following month:
///
/// - 2000-01-31 + 1 month = 2000-02-29 (leap year)
/// - 2001-01-31 + 1 month = 2001-02-28
///
/// Saturates at the maximum representable date rather than panicking, so
/// far-future inputs stay total.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.year() as i64 * 12 + date.month0() as i64 + months as i64;

    let year = match i32::try_from(zero_based.div_euclid(12)) {
        Ok(year) => year,
        Err(_) => return NaiveDate::MAX,
    };
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// Add `weeks` 7-day weeks to `date`.  Saturates at the maximum
/// representable date
pub fn add_weeks(date: NaiveDate, weeks: u32) -> NaiveDate {
    date.checked_add_days(Days::new(weeks as u64 * 7))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
