// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Game Grid
//!
//! - [`tile`] - Tile states and the transition table.
//! - [`state`] - Fixed-size tile store with baseline calibration.
//! - [`display`] - Table-driven column renderer for the RGB matrix.

pub mod display;
pub mod state;
pub mod tile;

pub use display::{ColorTable, ColumnMasks, DisplayEncoder, Rgb};
pub use state::{Grid, Tile};
pub use tile::{Cause, TileState};
