// SPDX-License-Identifier: MIT

//!
//! The Life-Blocks demo binary
//!
//! Renders a life calendar to an SVG file and prints the age statistics
//! for a birth date.
//!

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use life_blocks_core::{Unit, age_stats};
use life_blocks_renderer::frontends::svg::{Theme, render_svg};
use life_blocks_renderer::plan_and_grid;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitArg {
    Week,
    Month,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Week => Unit::Week,
            UnitArg::Month => Unit::Month,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

/// Render a life calendar as SVG and print your life stats
#[derive(Parser)]
struct Cli {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: NaiveDate,

    /// Calendar granularity of one cell
    #[arg(long, value_enum, default_value_t = UnitArg::Week)]
    unit: UnitArg,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    /// Output SVG file
    #[arg(long, default_value = "life-grid.svg")]
    out: PathBuf,
}

/// Life-Blocks entry point
fn main() {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("life_blocks")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    let args = Cli::parse();
    let today = Local::now().date_naive();

    let (plan, grid) = match plan_and_grid(
        args.birth_date,
        args.unit.into(),
        today,
        args.width,
        args.height,
    ) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    info!(
        "rendering {} rows of {} cells (stride {})",
        grid.len(),
        plan.visible_periods_per_year,
        plan.stride
    );

    let svg = render_svg(&grid, &plan, args.theme.into());
    if let Err(error) = std::fs::write(&args.out, svg) {
        eprintln!("Error writing {}: {error}", args.out.display());
        std::process::exit(1);
    }
    println!("Wrote {}", args.out.display());

    let stats = age_stats(args.birth_date, today);
    println!("Current Age: {} years, {} months", stats.years, stats.months);
    println!("Weeks Lived: {}", stats.weeks_lived);
    println!("Months Lived: {}", stats.months_total);
    println!("Percentage of Life (to 100): {}%", stats.percent_complete);
}
