// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Applies host commands to the grid.
//!
//! Payloads this device does not understand are reported as not handled and leave the grid
//! untouched, so another handler on the same transport may claim them.

use crate::grid::{Cause, Grid};
use crate::protocol::messages::{Command, DecodeError};
use crate::protocol::parser::{Frame, Parser};

/// Outcome of one inbound frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Dispatch {
    /// Command decoded and applied.
    Handled(Command),
    /// Payload rejected; nothing changed.
    Ignored(DecodeError),
    /// Grid was reset on host request.
    Reset,
}

#[derive(Default)]
pub struct InboundDispatcher {
    parser: Parser,
}

impl InboundDispatcher {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Handle one sysex payload `[kind, args...]`. Returns whether it was handled.
    pub fn on_message<const ROWS: usize, const COLS: usize>(
        &mut self,
        grid: &mut Grid<ROWS, COLS>,
        payload: &[u8],
    ) -> bool {
        matches!(self.apply(grid, payload), Dispatch::Handled(_))
    }

    /// Feed one received byte. Returns the outcome once a frame completes.
    pub fn on_byte<const ROWS: usize, const COLS: usize>(
        &mut self,
        grid: &mut Grid<ROWS, COLS>,
        byte: u8,
    ) -> Option<Dispatch> {
        match self.parser.push(byte) {
            Ok(Some(Frame::Sysex(payload))) => Some(self.apply(grid, &payload)),
            Ok(Some(Frame::Reset)) => {
                grid.reset();
                Some(Dispatch::Reset)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("inbound frame dropped: {}", e);
                None
            }
        }
    }

    fn apply<const ROWS: usize, const COLS: usize>(
        &mut self,
        grid: &mut Grid<ROWS, COLS>,
        payload: &[u8],
    ) -> Dispatch {
        match Command::decode(payload) {
            Ok(command) => {
                match command {
                    Command::SetTile { state, row, column } => {
                        grid.transition(row, column, Cause::Host, state);
                    }
                }
                debug!("handled {}", command);
                Dispatch::Handled(command)
            }
            Err(e) => {
                debug!("ignored payload: {}", e);
                Dispatch::Ignored(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileState;
    use crate::protocol::messages::{END_SYSEX, START_SYSEX, SYSTEM_RESET};

    fn snapshot(grid: &Grid) -> [[TileState; 8]; 8] {
        core::array::from_fn(|r| core::array::from_fn(|c| grid.state(r as u8, c as u8)))
    }

    #[test]
    fn set_tile_command() {
        let mut grid: Grid = Grid::new();
        let mut dispatcher = InboundDispatcher::new();

        assert!(dispatcher.on_message(&mut grid, &[0x0F, 0x01, 0x02, 0x04]));
        assert_eq!(grid.state(2, 4), TileState::Hit);
    }

    #[test]
    fn short_command_leaves_grid_untouched() {
        let mut grid: Grid = Grid::new();
        grid.set_tile(0, 0, TileState::Water);
        let before = snapshot(&grid);

        let mut dispatcher = InboundDispatcher::new();
        assert!(!dispatcher.on_message(&mut grid, &[0x0F, 0x01]));
        assert!(!dispatcher.on_message(&mut grid, &[]));
        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn unknown_kind_or_item_not_handled() {
        let mut grid: Grid = Grid::new();
        let mut dispatcher = InboundDispatcher::new();
        assert!(!dispatcher.on_message(&mut grid, &[0x0E, 0x01, 0x02, 0x04]));
        assert!(!dispatcher.on_message(&mut grid, &[0x0F, 0x09, 0x02, 0x04]));
        assert_eq!(grid.state(2, 4), TileState::None);
    }

    #[test]
    fn out_of_range_position_wraps() {
        let mut grid: Grid = Grid::new();
        let mut dispatcher = InboundDispatcher::new();
        assert!(dispatcher.on_message(&mut grid, &[0x0F, 0x02, 0x7F, 0x09]));
        assert_eq!(grid.state(7, 1), TileState::Destroyed);
    }

    #[test]
    fn host_clears_selected_tile() {
        let mut grid: Grid = Grid::new();
        grid.set_tile(1, 1, TileState::Selected);
        let mut dispatcher = InboundDispatcher::new();
        assert!(dispatcher.on_message(&mut grid, &[0x0F, 0x00, 0x01, 0x01]));
        assert_eq!(grid.state(1, 1), TileState::Water);
    }

    #[test]
    fn byte_stream() {
        let mut grid: Grid = Grid::new();
        let mut dispatcher = InboundDispatcher::new();

        let mut outcomes = heapless::Vec::<Dispatch, 4>::new();
        for b in [START_SYSEX, 0x0F, 0x01, 0x02, 0x04, END_SYSEX, START_SYSEX, 0x0F, 0x01, END_SYSEX] {
            if let Some(d) = dispatcher.on_byte(&mut grid, b) {
                outcomes.push(d).unwrap();
            }
        }

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], Dispatch::Handled(_)));
        assert_eq!(outcomes[1], Dispatch::Ignored(DecodeError::TooShort));
        assert_eq!(grid.state(2, 4), TileState::Hit);
    }

    #[test]
    fn reset_byte_clears_grid() {
        let mut grid: Grid = Grid::new();
        grid.set_tile(3, 3, TileState::Hit);
        grid.capture_baseline(3, 3, 80);

        let mut dispatcher = InboundDispatcher::new();
        assert_eq!(dispatcher.on_byte(&mut grid, SYSTEM_RESET), Some(Dispatch::Reset));
        assert_eq!(grid.state(3, 3), TileState::None);
        assert_eq!(grid.baseline(3, 3), 0);
    }
}
