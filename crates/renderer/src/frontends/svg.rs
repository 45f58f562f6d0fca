// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Paints a computed [`Grid`] with its [`LayoutPlan`] as a standalone SVG
//! document: a Past/Current/Future legend, an age gutter down the left
//! edge, and one `rect` per cell, coloured by status, with the cell label
//! as a `<title>` child for hover tooltips.
//!

use crate::{Cell, CellStatus, Grid, LayoutPlan};

const MARGIN_PX: f64 = 10.0;

/// Vertical space reserved above the grid for the legend row
const LEGEND_HEIGHT_PX: f64 = 24.0;

/// Side length of one legend swatch
const LEGEND_SWATCH_PX: f64 = 10.0;

/// Horizontal space per legend entry (swatch plus label)
const LEGEND_ENTRY_WIDTH_PX: f64 = 64.0;

/// Width of the age gutter down the left edge
const YEAR_GUTTER_PX: f64 = 24.0;

/// An age label is drawn every this many rows
const YEAR_LABEL_EVERY: u32 = 10;

#[derive(Clone, Copy, Debug)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColours {
    pub bg: &'static str,
    pub past: &'static str,
    pub current: &'static str,
    pub future: &'static str,
    pub text: &'static str,
}

impl Theme {
    pub fn colours(self) -> ThemeColours {
        match self {
            Theme::Dark => ThemeColours {
                bg: "#161b22",
                past: "#475569",
                current: "#3b82f6",
                future: "#21262d",
                text: "#c9d1d9",
            },
            Theme::Light => ThemeColours {
                bg: "#ffffff",
                past: "#94a3b8",
                current: "#3b82f6",
                future: "#e2e8f0",
                text: "#24292f",
            },
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn status_class(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Past => "past",
        CellStatus::Current => "current",
        CellStatus::Future => "future",
    }
}

/// Build the legend row: one swatch and label per status
fn build_legend() -> String {
    let mut out = String::new();
    let mut x = MARGIN_PX + YEAR_GUTTER_PX;
    let y = MARGIN_PX;
    let text_y = y + LEGEND_SWATCH_PX - 1.0;

    for (class, name) in [("past", "Past"), ("current", "Current"), ("future", "Future")] {
        out.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{size}" height="{size}" class="{class}"/>
<text x="{text_x}" y="{text_y}" class="label">{name}</text>
"#,
            size = LEGEND_SWATCH_PX,
            text_x = x + LEGEND_SWATCH_PX + 4.0,
        ));
        x += LEGEND_ENTRY_WIDTH_PX;
    }

    out
}

/// Build the age gutter: the life-year number beside every tenth row
fn build_year_labels(rows: usize, slot: f64) -> String {
    let mut out = String::new();
    let grid_top = MARGIN_PX + LEGEND_HEIGHT_PX;

    for year_index in (0..rows as u32).step_by(YEAR_LABEL_EVERY as usize) {
        let y = grid_top + year_index as f64 * slot + slot;
        out.push_str(&format!(
            r#"<text x="{MARGIN_PX}" y="{y}" class="label">{year_index}</text>
"#,
        ));
    }

    out
}

fn build_cell_rect(cell: &Cell, column: usize, plan: &LayoutPlan) -> String {
    let slot = plan.cell_size_px + plan.gap_px;
    let x = MARGIN_PX + YEAR_GUTTER_PX + column as f64 * slot;
    let y = MARGIN_PX + LEGEND_HEIGHT_PX + cell.year_index as f64 * slot;

    format!(
        r#"<rect x="{x}" y="{y}" width="{size}" height="{size}" class="{class}"><title>{title}</title></rect>
"#,
        size = plan.cell_size_px,
        class = status_class(cell.status),
        title = escape_xml(&cell.label),
    )
}

/// Render the grid as an SVG document string
pub fn render_svg(grid: &Grid, plan: &LayoutPlan, theme: Theme) -> String {
    let colours = theme.colours();

    let slot = plan.cell_size_px + plan.gap_px;
    let width =
        2.0 * MARGIN_PX + YEAR_GUTTER_PX + plan.visible_periods_per_year as f64 * slot;
    let height = 2.0 * MARGIN_PX + LEGEND_HEIGHT_PX + grid.len() as f64 * slot;

    let legend = build_legend();
    let year_labels = build_year_labels(grid.len(), slot);

    let mut rects = String::new();
    for row in grid {
        for (column, cell) in row.iter().enumerate() {
            rects.push_str(&build_cell_rect(cell, column, plan));
        }
    }

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}px" height="{height}px">

<style>
.past    {{ fill: {past}; }}
.current {{ fill: {current}; }}
.future  {{ fill: {future}; }}
.label   {{ fill: {text}; font: 10px sans-serif; }}
</style>

<rect width="{width}px" height="{height}px" fill="{bg}"/>

{legend}
{year_labels}
{rects}
</svg>
"#,
        bg = colours.bg,
        past = colours.past,
        current = colours.current,
        future = colours.future,
        text = colours.text,
    )
}
