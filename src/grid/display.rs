// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Column renderer for the RGB indicator matrix.
//!
//! For the active scan column every row contributes one bit to each of the red, green and blue
//! masks. Which colors a tile lights is looked up in a [`ColorTable`], so the presentation can be
//! changed without touching the scan loop.

use super::state::Grid;
use super::tile::TileState;

/// Color channels a tile lights.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Rgb {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(false, false, false);
    pub const RED: Rgb = Rgb::new(true, false, false);
    pub const YELLOW: Rgb = Rgb::new(true, true, false);
    pub const BLUE: Rgb = Rgb::new(false, false, true);
    pub const CYAN: Rgb = Rgb::new(false, true, true);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

/// Per-color row masks for one column. Bit `row` is set when that LED should be lit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct ColumnMasks {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Tile state → color lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    pub none: Rgb,
    pub water: Rgb,
    pub hit: Rgb,
    pub destroyed: Rgb,
    pub selected: Rgb,
}

impl ColorTable {
    /// Board default: destroyed red, hit red+green, water blue, cleared and selected green+blue.
    pub const DEFAULT: ColorTable = ColorTable {
        none: Rgb::CYAN,
        water: Rgb::BLUE,
        hit: Rgb::YELLOW,
        destroyed: Rgb::RED,
        selected: Rgb::CYAN,
    };

    #[inline]
    pub fn lookup(&self, state: TileState) -> Rgb {
        match state {
            TileState::None => self.none,
            TileState::Water => self.water,
            TileState::Hit => self.hit,
            TileState::Destroyed => self.destroyed,
            TileState::Selected => self.selected,
        }
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders grid columns into color masks.
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayEncoder {
    table: ColorTable,
}

impl DisplayEncoder {
    pub fn new(table: ColorTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Render one column. Pure: depends only on the grid content of that column.
    pub fn render_column<const ROWS: usize, const COLS: usize>(
        &self,
        grid: &Grid<ROWS, COLS>,
        column: u8,
    ) -> ColumnMasks {
        let mut masks = ColumnMasks::default();

        for (row, state) in grid.column(column).enumerate() {
            let bit = 1u8 << row;
            let rgb = self.table.lookup(state);
            if rgb.red {
                masks.red |= bit;
            }
            if rgb.green {
                masks.green |= bit;
            }
            if rgb.blue {
                masks.blue |= bit;
            }
        }

        masks
    }
}
