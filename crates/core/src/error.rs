// SPDX-License-Identifier: MIT

//!
//! The Life-Blocks configuration error type
//!

use thiserror::Error;

/// Errors that can arise from grid configuration misuse.
///
/// These are caller contract violations and are rejected rather than
/// clamped - silent clamping would mask caller bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridConfigError {
    /// The maximum age is not allowed (must be >= 1 year)
    #[error("Maximum age `{0}` is not allowed (must be at least 1 year)")]
    InvalidMaxAge(u32),

    /// The periods-per-year count is not allowed (must be >= 1)
    #[error("Periods per year `{0}` is not allowed (must be at least 1)")]
    InvalidPeriodsPerYear(u32),

    /// The stride is not allowed (must be >= 1)
    #[error("Stride `{0}` is not allowed (must be at least 1)")]
    InvalidStride(u32),
}
