// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Life-Blocks project*
//!
//! This crate defines the basic datatypes used across the Life-Blocks
//! project (renderer, demo binaries).
//!
//! It holds the calendar granularity type ([`Unit`]), the calendar-aware
//! date arithmetic that the grid engine buckets lifespans with, the age
//! statistics calculation, and the configuration error type.
//!
//! Everything in this crate is a pure function of its inputs: "today" is
//! always passed in by the caller, never read from a global clock, so
//! every calculation is deterministic and unit-testable.
//!

mod age;
mod date;
mod error;
mod unit;

pub use age::*;
pub use date::*;
pub use error::*;
pub use unit::*;
