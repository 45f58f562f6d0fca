// SPDX-License-Identifier: MIT

//!
//! Frontends that paint the engine's output
//!

pub mod svg;
