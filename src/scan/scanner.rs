// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cooperative display-and-sense loop.
//!
//! The host loop calls [`Scanner::poll`] as often as it can. When the cursor says a column slot
//! has elapsed the scanner runs one step:
//!
//! 1. render the column from the grid and write it to the LED matrix,
//! 2. wait the settle delay so the photodetectors catch up with the new light level,
//! 3. sample the sensor array,
//! 4. classify the samples into grid updates and events,
//! 5. send every event to the host.
//!
//! The settle delay is the only blocking wait and must stay shorter than the column period.
//!
//! ```ignore
//! loop {
//!     while let Some(byte) = rx.read_byte() {
//!         scanner.on_byte(byte);
//!     }
//!     scanner.poll(clock.now_us(), &mut delay);
//! }
//! ```

use embedded_hal::blocking::delay::DelayUs;

use crate::config::ScanConfig;
use crate::grid::{ColorTable, DisplayEncoder, Grid};
use crate::io::{LedMatrix, PhotodiodeArray, Transport};
use crate::protocol::{Dispatch, EventNotifier, InboundDispatcher};
use crate::scan::cursor::ScanCursor;
use crate::sense::classifier::{Events, SensePolicy};

/// Size of the per-step sample buffer (two 8-channel banks).
pub const MAX_SAMPLES: usize = 16;

/// Summary of one executed scan step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Step {
    pub column: u8,
    /// Events sent to the host during this step.
    pub events: usize,
    /// This step finished a full frame.
    pub frame_done: bool,
}

pub struct Scanner<M, S, T, P, const ROWS: usize = 8, const COLS: usize = 8> {
    grid: Grid<ROWS, COLS>,
    cursor: ScanCursor,
    display: DisplayEncoder,
    policy: P,
    matrix: M,
    sensors: S,
    notifier: EventNotifier<T>,
    dispatcher: InboundDispatcher,
    settle_us: u32,
}

impl<M, S, T, P, const ROWS: usize, const COLS: usize> Scanner<M, S, T, P, ROWS, COLS>
where
    M: LedMatrix,
    S: PhotodiodeArray,
    T: Transport,
    P: SensePolicy<ROWS, COLS>,
{
    pub fn new(matrix: M, sensors: S, transport: T, policy: P, config: &ScanConfig) -> Self {
        let grid = Grid::new();
        let columns = Grid::<ROWS, COLS>::COL_COUNT;
        let rows = Grid::<ROWS, COLS>::ROW_COUNT;

        if !config.settle_fits(columns) {
            warn!(
                "settle delay {} us exceeds column period {} us",
                config.settle_us,
                config.column_period_us(columns)
            );
        }

        Self {
            grid,
            cursor: ScanCursor::new(config.fps, columns, config.subdivisions),
            display: DisplayEncoder::default(),
            policy,
            matrix,
            sensors,
            notifier: EventNotifier::new(transport, rows, columns),
            dispatcher: InboundDispatcher::new(),
            settle_us: config.settle_us,
        }
    }

    /// Replace the tile → color table.
    pub fn with_color_table(mut self, table: ColorTable) -> Self {
        self.display = DisplayEncoder::new(table);
        self
    }

    /// Non-blocking poll. Runs one scan step if its time slot has come.
    pub fn poll<D: DelayUs<u32>>(&mut self, now_us: u32, delay: &mut D) -> Option<Step> {
        let column = self.cursor.tick(now_us)?;
        Some(self.step(column, delay))
    }

    /// Run the actuate, settle, sense, classify, notify sequence for `column`.
    pub fn step<D: DelayUs<u32>>(&mut self, column: u8, delay: &mut D) -> Step {
        let column = column % Grid::<ROWS, COLS>::COL_COUNT;

        let masks = self.display.render_column(&self.grid, column);
        self.matrix
            .write_column(masks.red, masks.green, masks.blue, column);

        if self.settle_us > 0 {
            delay.delay_us(self.settle_us);
        }

        let mut samples = [0u8; MAX_SAMPLES];
        let wanted = self.policy.sample_count().min(MAX_SAMPLES);
        let n = self.sensors.read(&mut samples[..wanted]).min(wanted);

        let mut events = Events::new();
        self.policy
            .classify(column, &samples[..n], &mut self.grid, &mut events);

        for event in &events {
            self.notifier.emit(*event);
        }

        Step {
            column,
            events: events.len(),
            frame_done: column + 1 == Grid::<ROWS, COLS>::COL_COUNT,
        }
    }

    /// Feed one byte received from the host.
    pub fn on_byte(&mut self, byte: u8) -> Option<Dispatch> {
        self.dispatcher.on_byte(&mut self.grid, byte)
    }

    /// Handle one complete sysex payload. Returns whether it was handled.
    pub fn on_message(&mut self, payload: &[u8]) -> bool {
        self.dispatcher.on_message(&mut self.grid, payload)
    }

    /// Clear the grid and all baselines.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    #[inline]
    pub fn grid(&self) -> &Grid<ROWS, COLS> {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<ROWS, COLS> {
        &mut self.grid
    }

    #[inline]
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    #[inline]
    pub fn cursor(&self) -> &ScanCursor {
        &self.cursor
    }

    pub fn free(self) -> (M, S, T) {
        (self.matrix, self.sensors, self.notifier.free())
    }
}
