// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Life-Blocks project*
//!
//! This crate facilitates the drawing of life calendars: a grid of
//! fixed-size cells, one per week or month of a lifespan, coloured by
//! whether the cell lies in the past, holds "today", or lies in the
//! future.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Bucketing a lifespan into calendar cells and classifying each one
//!   against a supplied "today" ([`compute_grid`])
//! - Deriving a cell size, gap, and stride that fit an arbitrary viewport
//!   ([`compute_layout`])
//!
//! The engine is stateless: both entry points are pure functions of their
//! explicit inputs and are safe to re-run on every reactive change (user
//! input, viewport resize).  Hosts cache the latest results for rendering
//! efficiency only and replace them wholesale on each recompute.
//!
//! The rest of the crate holds code for frontends.  There is currently
//! only one (SVG), but the number can grow over time (e.g. HTML Canvas or
//! `egui`).
//!

pub mod engine;
pub mod frontends;

pub use engine::*;
