// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Optical Sensing
//!
//! - [`comparator`] - Hysteresis comparator with edge detection.
//! - [`classifier`] - Baseline-deviation and beam-break classification policies.

pub mod classifier;
pub mod comparator;

pub use classifier::{BaselineDeviation, BeamBreak, Events, SensePolicy};
pub use comparator::{Edge, EdgeComparator, Level, Reading};
