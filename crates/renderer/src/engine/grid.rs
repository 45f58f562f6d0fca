// SPDX-License-Identifier: MIT

//!
//! Grid cells
//!
//! Buckets a lifespan into calendar cells and classifies each one against
//! a supplied "today".
//!

use chrono::NaiveDate;
use life_blocks_core::{GridConfigError, Unit, add_months, add_weeks};
use log::{debug, trace};
use serde::Serialize;
use std::fmt::Debug;

/// The temporal status of one cell.  Exactly one variant holds for every
/// cell, determined solely by comparing "today" against the cell's period
/// boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Past,
    Current,
    Future,
}

/// Information needed to draw one cell of a life calendar (for use outside
/// of the engine).
///
/// Cells are produced fresh on every recompute; consumers must not rely on
/// cell identity between recomputes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// The life-year (row) this cell belongs to, starting at 0
    pub year_index: u32,

    /// The 1-based raw period number within the year.  With a stride above
    /// 1 these are not consecutive between adjacent visible cells
    pub period_index: u32,

    /// Whether the cell lies in the past, holds "today", or lies in the
    /// future
    pub status: CellStatus,

    /// Hover/tooltip text, e.g. `Age: 3 years, week 15`.  Not for logic
    pub label: String,
}

/// An ordered grid of cells: one row per life-year, one cell per visible
/// period, both in chronological order
pub type Grid = Vec<Vec<Cell>>;

/// Advance `birth` by `periods` raw periods of `unit`
fn advance(birth: NaiveDate, unit: Unit, periods: u32) -> NaiveDate {
    match unit {
        Unit::Week => add_weeks(birth, periods),
        Unit::Month => add_months(birth, periods),
    }
}

/// Calculate the `[start, end)` calendar range of one cell.
///
/// `raw_offset` is the cell's raw period offset within its year (i.e.
/// `visible_index * stride`).  Both boundaries are anchored at the birth
/// date so that the clamping of month additions cannot compound across
/// cells, which keeps stride-1 grids exactly contiguous.  The last visible
/// cell of a row clamps its end to the row boundary so a row never
/// overlaps the next life-year.
pub fn cell_range(
    birth: NaiveDate,
    unit: Unit,
    year_index: u32,
    raw_offset: u32,
    stride: u32,
) -> (NaiveDate, NaiveDate) {
    let full = unit.periods_per_year();

    let end_offset = if raw_offset < full {
        (raw_offset + stride).min(full)
    } else {
        // Only reachable when a caller asks for more periods per year than
        // the unit has; fall back to an unclamped range
        raw_offset + stride
    };

    let start = advance(birth, unit, year_index * full + raw_offset);
    let end = advance(birth, unit, year_index * full + end_offset);
    (start, end)
}

/// Compute the grid of cells for one lifespan.
///
/// One row per life-year in `0..max_age_years`, one cell per visible
/// period in `0..periods_per_year`, where each visible cell represents
/// `stride` raw periods.  A cell is Current iff
/// `cell_start <= today < cell_end`, so at most one cell per grid is
/// Current.
///
/// A `birth` in the future relative to `today` is valid input and yields
/// an all-Future grid.  Non-positive configuration values are rejected.
pub fn compute_grid(
    birth: NaiveDate,
    unit: Unit,
    max_age_years: u32,
    periods_per_year: u32,
    stride: u32,
    today: NaiveDate,
) -> Result<Grid, GridConfigError> {
    if max_age_years == 0 {
        return Err(GridConfigError::InvalidMaxAge(max_age_years));
    }
    if periods_per_year == 0 {
        return Err(GridConfigError::InvalidPeriodsPerYear(periods_per_year));
    }
    if stride == 0 {
        return Err(GridConfigError::InvalidStride(stride));
    }

    debug!(
        "compute grid: born {birth}, unit {unit}, {max_age_years} years, \
         {periods_per_year} periods/year, stride {stride}, today {today}"
    );

    let mut grid = Vec::with_capacity(max_age_years as usize);

    for year_index in 0..max_age_years {
        let mut row = Vec::with_capacity(periods_per_year as usize);

        for visible_index in 0..periods_per_year {
            let raw_offset = visible_index * stride;
            let (start, end) = cell_range(birth, unit, year_index, raw_offset, stride);

            let status = if start > today {
                CellStatus::Future
            } else if today < end {
                CellStatus::Current
            } else {
                CellStatus::Past
            };

            row.push(Cell {
                year_index,
                period_index: raw_offset + 1,
                status,
                label: format!("Age: {year_index} years, {unit} {}", raw_offset + 1),
            });
        }

        trace!("row {year_index}: {} cells", row.len());
        grid.push(row);
    }

    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn current_cells(grid: &Grid) -> Vec<&Cell> {
        grid.iter()
            .flatten()
            .filter(|cell| cell.status == CellStatus::Current)
            .collect()
    }

    #[test]
    fn rejects_non_positive_configuration() {
        let birth = ymd(1990, 6, 15);
        let today = ymd(2024, 6, 15);

        assert_eq!(
            compute_grid(birth, Unit::Week, 0, 52, 1, today),
            Err(GridConfigError::InvalidMaxAge(0))
        );
        assert_eq!(
            compute_grid(birth, Unit::Week, 100, 0, 1, today),
            Err(GridConfigError::InvalidPeriodsPerYear(0))
        );
        assert_eq!(
            compute_grid(birth, Unit::Week, 100, 52, 0, today),
            Err(GridConfigError::InvalidStride(0))
        );
    }

    #[test]
    fn born_today_first_cell_is_current_rest_future() {
        let birth = ymd(2024, 6, 15);
        let grid = compute_grid(birth, Unit::Week, 100, 52, 1, birth).unwrap();

        assert_eq!(grid[0][0].status, CellStatus::Current);
        for cell in grid.iter().flatten().skip(1) {
            assert_eq!(cell.status, CellStatus::Future);
        }
    }

    #[test]
    fn exactly_one_current_cell_mid_life() {
        let birth = ymd(1990, 6, 15);
        let today = ymd(2024, 6, 15);
        let grid = compute_grid(birth, Unit::Week, 100, 52, 1, today).unwrap();

        let current = current_cells(&grid);
        assert_eq!(current.len(), 1);

        // 1774 whole weeks lived = year 34, week 7 of that year
        assert_eq!(current[0].year_index, 34);
        assert_eq!(current[0].period_index, 7);
    }

    #[test]
    fn at_most_one_current_cell_with_stride() {
        let birth = ymd(1990, 6, 15);
        let today = ymd(2024, 6, 15);
        for stride in 1..=7 {
            let visible = 52u32.div_ceil(stride);
            let grid = compute_grid(birth, Unit::Week, 100, visible, stride, today).unwrap();
            assert_eq!(current_cells(&grid).len(), 1, "stride {stride}");
        }
    }

    #[test]
    fn birth_in_the_future_yields_all_future_cells() {
        let birth = ymd(2030, 1, 1);
        let today = ymd(2024, 6, 15);
        let grid = compute_grid(birth, Unit::Month, 100, 12, 1, today).unwrap();

        assert!(current_cells(&grid).is_empty());
        for cell in grid.iter().flatten() {
            assert_eq!(cell.status, CellStatus::Future);
        }
    }

    #[test]
    fn today_past_the_last_cell_yields_all_past_cells() {
        let birth = ymd(1924, 6, 15);
        // Exactly 100 calendar years on: the last month cell's end lands
        // exactly on today, so the whole grid is Past
        let today = life_blocks_core::add_months(birth, 1200);
        let grid = compute_grid(birth, Unit::Month, 100, 12, 1, today).unwrap();

        assert!(current_cells(&grid).is_empty());
        for cell in grid.iter().flatten() {
            assert_eq!(cell.status, CellStatus::Past);
        }
    }

    #[test]
    fn stride_one_cells_are_contiguous_within_and_across_rows() {
        for (unit, full) in [(Unit::Week, 52u32), (Unit::Month, 12u32)] {
            let birth = ymd(2000, 1, 31);
            let mut previous_end: Option<NaiveDate> = None;

            for year_index in 0..5 {
                for raw_offset in 0..full {
                    let (start, end) = cell_range(birth, unit, year_index, raw_offset, 1);
                    assert!(start < end);
                    if let Some(previous_end) = previous_end {
                        assert_eq!(previous_end, start, "{unit} year {year_index}");
                    }
                    previous_end = Some(end);
                }
            }
        }
    }

    #[test]
    fn strided_cells_are_pairwise_disjoint() {
        let birth = ymd(1990, 6, 15);
        let stride = 3;
        let visible = 52u32.div_ceil(stride);
        let mut previous_end: Option<NaiveDate> = None;

        // Chronological order plus adjacent disjointness gives pairwise
        // disjointness
        for year_index in 0..5 {
            for visible_index in 0..visible {
                let (start, end) =
                    cell_range(birth, Unit::Week, year_index, visible_index * stride, stride);
                assert!(start < end);
                if let Some(previous_end) = previous_end {
                    assert!(previous_end <= start);
                }
                previous_end = Some(end);
            }
        }
    }

    #[test]
    fn last_cell_of_a_row_clamps_to_the_row_boundary() {
        let birth = ymd(1990, 6, 15);
        let stride = 3;
        // Last visible cell: raw offset 51, which would end at raw 54
        // without clamping
        let (_, end) = cell_range(birth, Unit::Week, 0, 51, stride);
        let (next_start, _) = cell_range(birth, Unit::Week, 1, 0, stride);
        assert_eq!(end, next_start);
    }

    #[test]
    fn month_cells_clamp_day_of_month() {
        let birth = ymd(2000, 1, 31);
        let (start, end) = cell_range(birth, Unit::Month, 0, 1, 1);
        assert_eq!(start, ymd(2000, 2, 29));
        assert_eq!(end, ymd(2000, 3, 31));
    }

    #[test]
    fn labels_use_the_one_based_raw_period_number() {
        let birth = ymd(1990, 6, 15);
        let today = ymd(2024, 6, 15);
        let grid = compute_grid(birth, Unit::Week, 100, 52, 1, today).unwrap();

        assert_eq!(grid[3][14].label, "Age: 3 years, week 15");
        assert_eq!(grid[3][14].period_index, 15);

        // With a stride the label reflects the raw period, not the column
        let grid = compute_grid(birth, Unit::Week, 100, 26, 2, today).unwrap();
        assert_eq!(grid[0][1].label, "Age: 0 years, week 3");
    }

    #[test]
    fn compute_grid_is_deterministic() {
        let birth = ymd(1990, 6, 15);
        let today = ymd(2024, 6, 15);
        let a = compute_grid(birth, Unit::Month, 85, 12, 1, today).unwrap();
        let b = compute_grid(birth, Unit::Month, 85, 12, 1, today).unwrap();
        assert_eq!(a, b);
    }
}
