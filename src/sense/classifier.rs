// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sense classification policies.
//!
//! Each scan step samples one sensor buffer and hands it to a [`SensePolicy`], which turns raw
//! readings into grid updates and outbound [`Event`]s.
//!
//! - [`BaselineDeviation`] is used by the attack grid: the red LED of every cell doubles as a
//!   photodiode. The first reading after a reset becomes the cell baseline and a later reading
//!   that deviates by more than the threshold selects the cell.
//! - [`BeamBreak`] is used by the arrangement grid: one laser/photoresistor pair per row and per
//!   column, each behind an [`EdgeComparator`]. A rising edge means a ship now blocks that beam.

use heapless::Vec;

use crate::grid::{Cause, Grid, TileState};
use crate::protocol::Event;
use crate::sense::comparator::{Edge, EdgeComparator};

/// Upper bound of events one scan step can raise (one per row plus one per column).
pub const MAX_EVENTS: usize = 16;

/// Events raised by one scan step.
pub type Events = Vec<Event, MAX_EVENTS>;

/// Default deviation from baseline that counts as a touch.
pub const DEFAULT_DEVIATION_THRESHOLD: u8 = 10;

/// Strategy turning one step's samples into grid updates and events.
pub trait SensePolicy<const ROWS: usize, const COLS: usize> {
    /// Samples read from the sensor array per step.
    fn sample_count(&self) -> usize;

    /// Classify the samples taken while `column` was active.
    fn classify(
        &mut self,
        column: u8,
        samples: &[u8],
        grid: &mut Grid<ROWS, COLS>,
        events: &mut Events,
    );
}

/// Per-cell capture-once-then-compare policy.
#[derive(Copy, Clone, Debug)]
pub struct BaselineDeviation {
    threshold: u8,
}

impl Default for BaselineDeviation {
    fn default() -> Self {
        Self::new(DEFAULT_DEVIATION_THRESHOLD)
    }
}

impl BaselineDeviation {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

impl<const ROWS: usize, const COLS: usize> SensePolicy<ROWS, COLS> for BaselineDeviation {
    fn sample_count(&self) -> usize {
        ROWS
    }

    fn classify(
        &mut self,
        column: u8,
        samples: &[u8],
        grid: &mut Grid<ROWS, COLS>,
        events: &mut Events,
    ) {
        for (row, &sample) in samples.iter().take(ROWS).enumerate() {
            let row = row as u8;

            if grid.capture_baseline(row, column, sample) {
                continue;
            }

            if sample.abs_diff(grid.baseline(row, column)) <= self.threshold {
                continue;
            }

            if grid.transition(row, column, Cause::Sensed, TileState::Selected) {
                debug!("tile ({}, {}) selected, sample {}", row, column, sample);
                let _ = events.push(Event::TileChanged { row, column });
            }
        }
    }
}

/// Row and column beam comparators.
///
/// Sample layout: `ROWS` row readings in reverse physical order, then `COLS` column readings.
#[derive(Copy, Clone, Debug)]
pub struct BeamBreak<const ROWS: usize, const COLS: usize> {
    rows: [EdgeComparator; ROWS],
    columns: [EdgeComparator; COLS],
}

impl<const ROWS: usize, const COLS: usize> Default for BeamBreak<ROWS, COLS> {
    fn default() -> Self {
        Self::new(EdgeComparator::default())
    }
}

impl<const ROWS: usize, const COLS: usize> BeamBreak<ROWS, COLS> {
    /// Use `prototype` (thresholds and level) for every beam.
    pub fn new(prototype: EdgeComparator) -> Self {
        Self {
            rows: [prototype; ROWS],
            columns: [prototype; COLS],
        }
    }

    /// Recalibrate every beam to `[min, max]`.
    pub fn set_threshold(&mut self, min: u8, max: u8) {
        for cmp in self.rows.iter_mut().chain(self.columns.iter_mut()) {
            cmp.set_threshold(min, max);
        }
    }

    /// Comparator of row `position`.
    pub fn row(&self, position: u8) -> &EdgeComparator {
        &self.rows[ROWS - 1 - position as usize % ROWS]
    }

    /// Comparator of column `position`.
    pub fn column(&self, position: u8) -> &EdgeComparator {
        &self.columns[position as usize % COLS]
    }
}

impl<const ROWS: usize, const COLS: usize> SensePolicy<ROWS, COLS> for BeamBreak<ROWS, COLS> {
    fn sample_count(&self) -> usize {
        ROWS + COLS
    }

    fn classify(
        &mut self,
        _column: u8,
        samples: &[u8],
        _grid: &mut Grid<ROWS, COLS>,
        events: &mut Events,
    ) {
        let (row_samples, column_samples) = samples.split_at(samples.len().min(ROWS));

        for (i, (cmp, &sample)) in self.rows.iter_mut().zip(row_samples).enumerate() {
            // Row sensors are wired in reverse index order.
            let position = (ROWS - 1 - i) as u8;
            match cmp.classify(position, sample).edge {
                Some(Edge::Rising(p)) => {
                    trace!("row {} interrupted", p);
                    let _ = events.push(Event::RowChanged(p));
                }
                Some(Edge::Falling(p)) => trace!("row {} clear", p),
                None => {}
            }
        }

        for (i, (cmp, &sample)) in self.columns.iter_mut().zip(column_samples).enumerate() {
            match cmp.classify(i as u8, sample).edge {
                Some(Edge::Rising(p)) => {
                    trace!("column {} interrupted", p);
                    let _ = events.push(Event::ColumnChanged(p));
                }
                Some(Edge::Falling(p)) => trace!("column {} clear", p),
                None => {}
            }
        }
    }
}
