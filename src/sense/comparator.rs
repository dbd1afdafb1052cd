// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hysteresis comparator for a single optical sensing channel.
//!
//! Models a crude non-inverting comparator with two trip points around the midpoint of the
//! calibrated sample range. A sample has to cross the upper threshold to raise the output and the
//! lower threshold to drop it again, so ambient flicker and ADC noise inside the dead band never
//! toggle the level.
//!
//! ```
//! use battleship_hid::sense::{Edge, EdgeComparator};
//!
//! let mut cmp = EdgeComparator::new(0, 250); // low = 100, high = 150
//! let reading = cmp.classify(2, 160);
//! assert_eq!(reading.edge, Some(Edge::Rising(2)));
//! ```

/// Default guard band as a fraction of the calibrated span.
pub const DEFAULT_HYSTERESIS: f32 = 0.1;

/// Logic level of a comparator output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// A transition of the comparator output, tagged with the sensed position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Edge {
    /// LOW → HIGH
    Rising(u8),
    /// HIGH → LOW
    Falling(u8),
}

/// Result of classifying one sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub level: Level,
    pub edge: Option<Edge>,
}

/// Stateful hysteresis comparator.
#[derive(Copy, Clone, Debug)]
pub struct EdgeComparator {
    low: u8,
    high: u8,
    midpoint: u8,
    hysteresis: f32,
    level: Level,
}

impl Default for EdgeComparator {
    /// Full 8-bit range with the default guard band.
    fn default() -> Self {
        Self::new(0, u8::MAX)
    }
}

impl EdgeComparator {
    /// Create a comparator calibrated to `[min, max]` with the default guard band.
    pub fn new(min: u8, max: u8) -> Self {
        Self::with_hysteresis(min, max, DEFAULT_HYSTERESIS)
    }

    /// Create a comparator calibrated to `[min, max]` with a custom guard band fraction.
    pub fn with_hysteresis(min: u8, max: u8, hysteresis: f32) -> Self {
        let mut cmp = Self {
            low: 0,
            high: 0,
            midpoint: 0,
            hysteresis,
            level: Level::Low,
        };
        cmp.set_threshold(min, max);
        cmp
    }

    /// Create a comparator with explicit trip points, bypassing calibration.
    pub fn with_thresholds(low: u8, high: u8) -> Self {
        Self {
            low,
            high,
            midpoint: low + (high.saturating_sub(low) / 2),
            hysteresis: DEFAULT_HYSTERESIS,
            level: Level::Low,
        }
    }

    /// Recompute both thresholds from new calibration bounds.
    ///
    /// The current output level is kept. Not meant for the sampling hot path.
    pub fn set_threshold(&mut self, min: u8, max: u8) {
        let span = max.wrapping_sub(min);
        let midpoint = (span / 2).wrapping_add(min);
        let guard = span as f32 * self.hysteresis;

        self.midpoint = midpoint;
        // Float → u8 casts saturate, so a guard wider than the midpoint clamps to 0 / 255.
        self.low = (midpoint as f32 - guard) as u8;
        self.high = (midpoint as f32 + guard) as u8;
    }

    /// Classify one raw sample taken at `position`.
    ///
    /// Returns the (possibly updated) level and the edge, if the sample caused one. Samples
    /// between the two thresholds never change the level.
    pub fn classify(&mut self, position: u8, raw: u8) -> Reading {
        let edge = match self.level {
            Level::Low if raw > self.high => {
                self.level = Level::High;
                Some(Edge::Rising(position))
            }
            Level::High if raw < self.low => {
                self.level = Level::Low;
                Some(Edge::Falling(position))
            }
            _ => None,
        };

        Reading {
            level: self.level,
            edge,
        }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn low_threshold(&self) -> u8 {
        self.low
    }

    #[inline]
    pub fn high_threshold(&self) -> u8 {
        self.high
    }

    #[inline]
    pub fn midpoint(&self) -> u8 {
        self.midpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_from_calibration() {
        let cmp = EdgeComparator::new(0, 250);
        assert_eq!(cmp.midpoint(), 125);
        assert_eq!(cmp.low_threshold(), 100);
        assert_eq!(cmp.high_threshold(), 150);

        // 127 ± 25.5, truncated
        let full = EdgeComparator::default();
        assert_eq!(full.low_threshold(), 101);
        assert_eq!(full.high_threshold(), 152);
    }

    #[test]
    fn offset_calibration_range() {
        let cmp = EdgeComparator::new(50, 150);
        assert_eq!(cmp.midpoint(), 100);
        assert_eq!(cmp.low_threshold(), 90);
        assert_eq!(cmp.high_threshold(), 110);
    }

    #[test]
    fn rising_and_falling_edges_carry_position() {
        let mut cmp = EdgeComparator::with_thresholds(100, 150);
        let samples = [90, 160, 140, 95];
        let mut levels = [Level::Low; 4];
        let mut edges = [None; 4];

        for (i, s) in samples.iter().enumerate() {
            let r = cmp.classify(2, *s);
            levels[i] = r.level;
            edges[i] = r.edge;
        }

        assert_eq!(levels, [Level::Low, Level::High, Level::High, Level::Low]);
        assert_eq!(edges, [None, Some(Edge::Rising(2)), None, Some(Edge::Falling(2))]);
    }

    #[test]
    fn dead_band_never_toggles() {
        let mut cmp = EdgeComparator::with_thresholds(100, 150);
        for s in 100..=150 {
            assert_eq!(cmp.classify(0, s).edge, None);
            assert_eq!(cmp.level(), Level::Low);
        }

        cmp.classify(0, 151);
        assert_eq!(cmp.level(), Level::High);
        for s in (100..=150).rev() {
            assert_eq!(cmp.classify(0, s).edge, None);
            assert_eq!(cmp.level(), Level::High);
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        let mut cmp = EdgeComparator::with_thresholds(100, 150);
        assert_eq!(cmp.classify(0, 150).level, Level::Low);
        assert_eq!(cmp.classify(0, 151).level, Level::High);
        assert_eq!(cmp.classify(0, 100).level, Level::High);
        assert_eq!(cmp.classify(0, 99).level, Level::Low);
    }

    #[test]
    fn repeated_extremes_emit_one_edge() {
        let mut cmp = EdgeComparator::with_thresholds(100, 150);
        let rising = [200u8, 255, 180, 220]
            .iter()
            .filter(|s| cmp.classify(7, **s).edge.is_some())
            .count();
        assert_eq!(rising, 1);
    }

    #[test]
    fn recalibration_keeps_level() {
        let mut cmp = EdgeComparator::new(0, 250);
        cmp.classify(1, 200);
        assert_eq!(cmp.level(), Level::High);

        cmp.set_threshold(100, 200);
        assert_eq!(cmp.level(), Level::High);
        assert_eq!(cmp.low_threshold(), 140);
        assert_eq!(cmp.high_threshold(), 160);
        assert_eq!(cmp.classify(1, 139).edge, Some(Edge::Falling(1)));
    }

    #[test]
    fn wide_guard_band_saturates() {
        let cmp = EdgeComparator::with_hysteresis(0, 200, 0.9);
        assert_eq!(cmp.low_threshold(), 0);
        assert_eq!(cmp.high_threshold(), 255);
    }
}
