// SPDX-License-Identifier: MIT

//!
//! The `life-blocks-renderer` engine
//!

mod consts;
mod grid;
mod layout;

pub use consts::*;
pub use grid::*;
pub use layout::*;

use chrono::NaiveDate;
use life_blocks_core::{GridConfigError, Unit};

/// Plan the layout for a viewport and compute the matching grid in one go.
///
/// This wires the planner's visible period count and stride into the grid
/// computation, which is the control flow every host follows: viewport →
/// [`LayoutPlan`] → [`Grid`] → paint.
pub fn plan_and_grid(
    birth: NaiveDate,
    unit: Unit,
    today: NaiveDate,
    viewport_width: f64,
    viewport_height: f64,
) -> Result<(LayoutPlan, Grid), GridConfigError> {
    let plan = compute_layout(viewport_width, viewport_height, unit);
    let grid = compute_grid(
        birth,
        unit,
        MAX_AGE_YEARS,
        plan.visible_periods_per_year,
        plan.stride,
        today,
    )?;
    Ok((plan, grid))
}
