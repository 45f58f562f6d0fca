// SPDX-License-Identifier: MIT

//!
//! Engine constants
//!

/// The number of life-years (rows) a grid spans
pub const MAX_AGE_YEARS: u32 = 100;

/// The floor below which cells become unreadable/untappable.  The planner
/// raises the stride rather than shrink below this
pub const MIN_CELL_SIZE_PX: f64 = 4.0;

/// The gap between adjacent cells (collapses to 0 at the cell-size floor)
pub const CELL_GAP_PX: f64 = 1.0;

/// Viewports narrower than this are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

/// Fraction of the viewport width available to the grid on mobile
pub const MOBILE_WIDTH_FRACTION: f64 = 0.9;

/// Fraction of the viewport width available to the grid on desktop
pub const DESKTOP_WIDTH_FRACTION: f64 = 0.8;

/// Fraction of the viewport height available to the grid
pub const HEIGHT_FRACTION: f64 = 0.9;

/// Substitute width when the host reports a degenerate viewport
pub const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1280.0;

/// Substitute height when the host reports a degenerate viewport
pub const FALLBACK_VIEWPORT_HEIGHT_PX: f64 = 800.0;
