// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Runtime-tunable scan parameters.
//!
//! The deviation threshold and settle delay were tuned by hand on the prototype boards. Change
//! them only with calibration data from the actual LEDs.

use crate::sense::classifier::DEFAULT_DEVIATION_THRESHOLD;
use crate::sense::comparator::DEFAULT_HYSTERESIS;

/// Host link baud rate.
pub const BAUD_RATE: u32 = 57_600;

/// Completed frames between heartbeat LED toggles (half a second at the default rate).
pub const HEARTBEAT_FRAMES: u16 = 50;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScanConfig {
    /// Full-grid refresh rate.
    pub fps: u32,
    /// Extra time slices per column (1 = plain column multiplexing).
    pub subdivisions: u32,
    /// Wait between writing a column and sampling it, so the photodiodes settle.
    pub settle_us: u32,
    /// Deviation from baseline that selects a tile.
    pub deviation_threshold: u8,
    /// Comparator guard band as a fraction of the calibrated span.
    pub hysteresis: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            fps: 100,
            subdivisions: 1,
            settle_us: 1_000,
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            hysteresis: DEFAULT_HYSTERESIS,
        }
    }
}

impl ScanConfig {
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    pub fn with_settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    pub fn with_deviation_threshold(mut self, threshold: u8) -> Self {
        self.deviation_threshold = threshold;
        self
    }

    pub fn with_hysteresis(mut self, hysteresis: f32) -> Self {
        self.hysteresis = hysteresis;
        self
    }

    /// Time budget of one column at this configuration.
    pub fn column_period_us(&self, columns: u8) -> u32 {
        crate::scan::ScanCursor::new(self.fps, columns, self.subdivisions).period_us()
    }

    /// Whether the settle delay fits inside one column slot.
    pub fn settle_fits(&self, columns: u8) -> bool {
        self.settle_us < self.column_period_us(columns)
    }
}
