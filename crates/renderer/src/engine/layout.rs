// SPDX-License-Identifier: MIT

//!
//! Layout planning
//!
//! Derives a cell size, gap, and stride so that a full lifespan grid fits
//! a given viewport without horizontal scrolling.  The planner never
//! fails: degenerate viewports fall back to safe constants, and when even
//! the minimum cell size cannot fit, overflow is accepted rather than
//! shrinking cells below the readable floor.
//!

use crate::{
    CELL_GAP_PX, DESKTOP_WIDTH_FRACTION, FALLBACK_VIEWPORT_HEIGHT_PX, FALLBACK_VIEWPORT_WIDTH_PX,
    HEIGHT_FRACTION, MAX_AGE_YEARS, MIN_CELL_SIZE_PX, MOBILE_BREAKPOINT_PX, MOBILE_WIDTH_FRACTION,
};
use life_blocks_core::Unit;
use log::debug;
use serde::Serialize;
use std::fmt::Debug;

/// The derived sizing parameters that make a grid fit a given viewport.
///
/// A pure function of the viewport and unit; recomputed whenever either
/// changes and safe to recompute at any time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// The side length of one square cell
    pub cell_size_px: f64,

    /// The gap between adjacent cells
    pub gap_px: f64,

    /// The number of cells per row after stride reduction
    pub visible_periods_per_year: u32,

    /// The number of raw periods represented by one visible cell
    pub stride: u32,
}

/// Substitute fallback constants for degenerate viewport dimensions
fn sanitise_viewport(viewport_width: f64, viewport_height: f64) -> (f64, f64) {
    let width = if viewport_width.is_finite() && viewport_width > 0.0 {
        viewport_width
    } else {
        FALLBACK_VIEWPORT_WIDTH_PX
    };
    let height = if viewport_height.is_finite() && viewport_height > 0.0 {
        viewport_height
    } else {
        FALLBACK_VIEWPORT_HEIGHT_PX
    };
    (width, height)
}

/// The number of visible cells per row at a given stride
fn visible_count(periods_per_year_full: u32, stride: u32) -> u32 {
    periods_per_year_full.div_ceil(stride)
}

/// Choose a cell size, gap, and stride for a viewport.
///
/// The stride is the smallest integer at which every visible cell keeps
/// [`MIN_CELL_SIZE_PX`] within the available width, capped at one cell per
/// year.  The cell size is then the largest square that fits both the
/// available width and one row per life-year in the available height,
/// never below the floor.  At the floor the gap collapses to 0 to
/// maximise usable cell area.
pub fn compute_layout(viewport_width: f64, viewport_height: f64, unit: Unit) -> LayoutPlan {
    let (width, height) = sanitise_viewport(viewport_width, viewport_height);

    // More generous width fraction on narrow/mobile viewports
    let fraction = if width < MOBILE_BREAKPOINT_PX {
        MOBILE_WIDTH_FRACTION
    } else {
        DESKTOP_WIDTH_FRACTION
    };
    let available_width = width * fraction;
    let available_height = height * HEIGHT_FRACTION;

    let full = unit.periods_per_year();

    let mut stride = 1;
    while stride < full
        && visible_count(full, stride) as f64 * MIN_CELL_SIZE_PX > available_width
    {
        stride += 1;
    }
    let visible_periods_per_year = visible_count(full, stride);

    let width_slot = (available_width / visible_periods_per_year as f64).floor();
    let height_slot = (available_height / MAX_AGE_YEARS as f64).floor();
    let cell_size_px = (width_slot.min(height_slot) - CELL_GAP_PX).max(MIN_CELL_SIZE_PX);

    let gap_px = if cell_size_px <= MIN_CELL_SIZE_PX {
        0.0
    } else {
        CELL_GAP_PX
    };

    debug!(
        "compute layout: viewport {width}x{height}, unit {unit} -> \
         cell {cell_size_px}px, gap {gap_px}px, \
         {visible_periods_per_year} cells/row, stride {stride}"
    );

    LayoutPlan {
        cell_size_px,
        gap_px,
        visible_periods_per_year,
        stride,
    }
}
