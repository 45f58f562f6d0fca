// SPDX-License-Identifier: MIT

//!
//! The calendar granularity used to bucket a lifespan into cells
//!

use serde::{Deserialize, Serialize};

/// The number of weeks shown per life-year
pub const WEEKS_IN_YEAR: u32 = 52;

/// The number of months shown per life-year
pub const MONTHS_IN_YEAR: u32 = 12;

/// The calendar granularity (week or month) of one grid cell
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Debug, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display("week")]
    Week,

    #[display("month")]
    Month,
}

impl Unit {
    /// The number of raw periods of this unit in one life-year (before any
    /// stride reduction)
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Unit::Week => WEEKS_IN_YEAR,
            Unit::Month => MONTHS_IN_YEAR,
        }
    }
}
