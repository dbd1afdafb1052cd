// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-size tile store with per-cell baseline calibration.
//!
//! Every index coming into the grid is reduced modulo the grid dimension, so malformed host
//! commands or sensor positions can never address memory outside the array.

use super::tile::{Cause, TileState};

/// One grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub state: TileState,
    /// Ambient sensor reading captured after the last reset. `None` until the first sample.
    baseline: Option<u8>,
}

impl Tile {
    /// Baseline reading, `0` while uncalibrated.
    #[inline]
    pub fn baseline(&self) -> u8 {
        self.baseline.unwrap_or(0)
    }

    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_some()
    }
}

/// `ROWS × COLS` grid of tiles. Both dimensions must be in `1..=8` since each column is rendered
/// into one byte per color channel.
pub struct Grid<const ROWS: usize = 8, const COLS: usize = 8> {
    tiles: [[Tile; COLS]; ROWS],
    /// Cells still waiting for their first post-reset sample.
    uncalibrated: usize,
}

impl<const ROWS: usize, const COLS: usize> Default for Grid<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Grid<ROWS, COLS> {
    const DIMENSIONS_OK: () = assert!(
        ROWS >= 1 && ROWS <= 8 && COLS >= 1 && COLS <= 8,
        "grid dimensions must be within 1..=8"
    );

    pub const ROW_COUNT: u8 = ROWS as u8;
    pub const COL_COUNT: u8 = COLS as u8;

    /// Create a cleared, uncalibrated grid.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIMENSIONS_OK;

        Self {
            tiles: [[Tile::default(); COLS]; ROWS],
            uncalibrated: ROWS * COLS,
        }
    }

    #[inline]
    fn index(row: u8, column: u8) -> (usize, usize) {
        (row as usize % ROWS, column as usize % COLS)
    }

    /// Read a tile.
    pub fn tile(&self, row: u8, column: u8) -> Tile {
        let (r, c) = Self::index(row, column);
        self.tiles[r][c]
    }

    #[inline]
    pub fn state(&self, row: u8, column: u8) -> TileState {
        self.tile(row, column).state
    }

    #[inline]
    pub fn baseline(&self, row: u8, column: u8) -> u8 {
        self.tile(row, column).baseline()
    }

    /// Overwrite the state of a tile unconditionally.
    pub fn set_tile(&mut self, row: u8, column: u8, state: TileState) {
        let (r, c) = Self::index(row, column);
        self.tiles[r][c].state = state;
    }

    /// Move a tile to `next` if the transition table allows it for `cause`.
    ///
    /// Returns `true` if the state changed.
    pub fn transition(&mut self, row: u8, column: u8, cause: Cause, next: TileState) -> bool {
        let (r, c) = Self::index(row, column);
        let tile = &mut self.tiles[r][c];
        if tile.state == next || !tile.state.accepts(cause, next) {
            return false;
        }
        tile.state = next;
        true
    }

    /// Store `sample` as the baseline of an uncalibrated tile.
    ///
    /// Returns `true` if the sample was taken as the baseline. A calibrated tile keeps its
    /// baseline until the next reset.
    pub fn capture_baseline(&mut self, row: u8, column: u8, sample: u8) -> bool {
        let (r, c) = Self::index(row, column);
        let tile = &mut self.tiles[r][c];
        if tile.baseline.is_some() {
            return false;
        }
        tile.baseline = Some(sample);
        self.uncalibrated -= 1;
        if self.uncalibrated == 0 {
            debug!("grid calibrated");
        }
        true
    }

    /// Clear all tiles to `None` and forget every baseline.
    ///
    /// Takes `&mut self`, so the scan loop can never observe a half-cleared grid.
    pub fn reset(&mut self) {
        self.tiles = [[Tile::default(); COLS]; ROWS];
        self.uncalibrated = ROWS * COLS;
        info!("grid reset");
    }

    /// Whether some cells still wait for their post-reset baseline.
    #[inline]
    pub fn is_calibrating(&self) -> bool {
        self.uncalibrated != 0
    }

    /// Iterate the states of one column, top row first.
    pub fn column(&self, column: u8) -> impl Iterator<Item = TileState> + '_ {
        let c = column as usize % COLS;
        self.tiles.iter().map(move |row| row[c].state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_cleared() {
        let grid: Grid = Grid::new();
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(grid.state(r, c), TileState::None);
                assert_eq!(grid.baseline(r, c), 0);
                assert!(!grid.tile(r, c).is_calibrated());
            }
        }
        assert!(grid.is_calibrating());
    }

    #[test]
    fn out_of_range_indices_wrap() {
        let mut grid: Grid<8, 8> = Grid::new();
        grid.set_tile(10, 13, TileState::Hit);
        assert_eq!(grid.state(2, 5), TileState::Hit);
        assert_eq!(grid.state(250, 253), TileState::Hit);

        grid.set_tile(255, 255, TileState::Water);
        assert_eq!(grid.state(7, 7), TileState::Water);
    }

    #[test]
    fn non_square_grid_wraps_per_axis() {
        let mut grid: Grid<4, 6> = Grid::new();
        grid.set_tile(5, 7, TileState::Destroyed);
        assert_eq!(grid.state(1, 1), TileState::Destroyed);
        assert_eq!(Grid::<4, 6>::ROW_COUNT, 4);
        assert_eq!(Grid::<4, 6>::COL_COUNT, 6);
    }

    #[test]
    fn baseline_captured_once() {
        let mut grid: Grid = Grid::new();
        assert!(grid.capture_baseline(3, 5, 120));
        assert!(!grid.capture_baseline(3, 5, 200));
        assert_eq!(grid.baseline(3, 5), 120);
        assert_eq!(grid.state(3, 5), TileState::None);
    }

    #[test]
    fn zero_sample_still_calibrates() {
        let mut grid: Grid = Grid::new();
        assert!(grid.capture_baseline(0, 0, 0));
        assert!(grid.tile(0, 0).is_calibrated());
        assert!(!grid.capture_baseline(0, 0, 40));
        assert_eq!(grid.baseline(0, 0), 0);
    }

    #[test]
    fn calibration_completes_after_every_cell() {
        let mut grid: Grid<2, 2> = Grid::new();
        for r in 0..2 {
            for c in 0..2 {
                assert!(grid.is_calibrating());
                grid.capture_baseline(r, c, 50);
            }
        }
        assert!(!grid.is_calibrating());
    }

    #[test]
    fn reset_clears_states_and_baselines() {
        let mut grid: Grid = Grid::new();
        grid.set_tile(1, 1, TileState::Destroyed);
        grid.capture_baseline(1, 1, 99);
        grid.capture_baseline(4, 4, 17);

        grid.reset();

        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(grid.state(r, c), TileState::None);
                assert_eq!(grid.baseline(r, c), 0);
            }
        }
        assert!(grid.capture_baseline(1, 1, 42));
        assert_eq!(grid.baseline(1, 1), 42);
    }

    #[test]
    fn transition_follows_table() {
        let mut grid: Grid = Grid::new();
        assert!(grid.transition(0, 0, Cause::Sensed, TileState::Selected));
        assert!(!grid.transition(0, 0, Cause::Sensed, TileState::Selected));

        assert!(grid.transition(0, 0, Cause::Host, TileState::Hit));
        assert!(!grid.transition(0, 0, Cause::Sensed, TileState::Selected));
        assert_eq!(grid.state(0, 0), TileState::Hit);
    }

    #[test]
    fn column_iterates_rows() {
        let mut grid: Grid<3, 3> = Grid::new();
        grid.set_tile(0, 1, TileState::Water);
        grid.set_tile(2, 1, TileState::Hit);
        let mut col = grid.column(1);
        assert_eq!(col.next(), Some(TileState::Water));
        assert_eq!(col.next(), Some(TileState::None));
        assert_eq!(col.next(), Some(TileState::Hit));
        assert_eq!(col.next(), None);
    }
}
