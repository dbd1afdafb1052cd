// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sysex-style message protocol spoken with the host computer.
//!
//! Outbound events:
//!
//! | Byte | Value |
//! | ---- | ----- |
//! | 0 | [`START_SYSEX`] |
//! | 1 | message kind |
//! | 2..  | row and/or column, each reduced modulo the grid dimension |
//! | last | [`END_SYSEX`] |
//!
//! Inbound commands are the payload between the sysex markers: `[kind, args...]`.

use crate::grid::TileState;

/// Opens a sysex frame.
pub const START_SYSEX: u8 = 0xF0;
/// Closes a sysex frame.
pub const END_SYSEX: u8 = 0xF7;
/// Single-byte request to reset the device, outside any frame.
pub const SYSTEM_RESET: u8 = 0xFF;

// Message IDs
pub const MSG_COLUMN_CHANGED: u8 = 0x0C;
pub const MSG_ROW_CHANGED: u8 = 0x0D;
pub const MSG_TILE_CHANGED: u8 = 0x0E;
pub const MSG_TILE_TYPE: u8 = 0x0F;

/// Longest encoded event.
pub const MAX_EVENT_LEN: usize = 5;

/// Notification sent to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Event {
    /// A beam crossing this row was interrupted.
    RowChanged(u8),
    /// A beam crossing this column was interrupted.
    ColumnChanged(u8),
    /// The tile at `(row, column)` changed on the board.
    TileChanged { row: u8, column: u8 },
}

impl Event {
    #[inline]
    pub fn kind(&self) -> u8 {
        match self {
            Event::RowChanged(_) => MSG_ROW_CHANGED,
            Event::ColumnChanged(_) => MSG_COLUMN_CHANGED,
            Event::TileChanged { .. } => MSG_TILE_CHANGED,
        }
    }

    /// Frame the event into `out`, reducing positions modulo `rows`/`columns`.
    ///
    /// Returns the number of bytes used.
    pub fn encode(&self, rows: u8, columns: u8, out: &mut [u8; MAX_EVENT_LEN]) -> usize {
        let rows = rows.max(1);
        let columns = columns.max(1);

        out[0] = START_SYSEX;
        out[1] = self.kind();
        let end = match *self {
            Event::RowChanged(row) => {
                out[2] = row % rows;
                3
            }
            Event::ColumnChanged(column) => {
                out[2] = column % columns;
                3
            }
            Event::TileChanged { row, column } => {
                out[2] = row % rows;
                out[3] = column % columns;
                4
            }
        };
        out[end] = END_SYSEX;
        end + 1
    }
}

/// Command received from the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Command {
    /// Assign a game state to a tile.
    SetTile {
        state: TileState,
        row: u8,
        column: u8,
    },
}

/// Why an inbound payload was not turned into a [`Command`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum DecodeError {
    /// Empty payload or missing arguments.
    TooShort,
    /// Kind byte not handled by this device.
    UnknownCommand(u8),
    /// Tile item value without a host-settable state.
    UnknownItem(u8),
}

impl Command {
    /// Decode a sysex payload `[kind, args...]`.
    ///
    /// Extra trailing arguments are ignored.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let (&kind, args) = payload.split_first().ok_or(DecodeError::TooShort)?;

        match kind {
            MSG_TILE_TYPE => {
                let &[item, row, column, ..] = args else {
                    return Err(DecodeError::TooShort);
                };
                let state = TileState::from_item(item).ok_or(DecodeError::UnknownItem(item))?;
                Ok(Command::SetTile { state, row, column })
            }
            other => Err(DecodeError::UnknownCommand(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(event: Event) -> ([u8; MAX_EVENT_LEN], usize) {
        let mut out = [0u8; MAX_EVENT_LEN];
        let n = event.encode(8, 8, &mut out);
        (out, n)
    }

    #[test]
    fn row_and_column_frames() {
        let (out, n) = encoded(Event::RowChanged(3));
        assert_eq!(&out[..n], &[START_SYSEX, 0x0D, 3, END_SYSEX]);

        let (out, n) = encoded(Event::ColumnChanged(6));
        assert_eq!(&out[..n], &[START_SYSEX, 0x0C, 6, END_SYSEX]);
    }

    #[test]
    fn tile_frame() {
        let (out, n) = encoded(Event::TileChanged { row: 3, column: 5 });
        assert_eq!(&out[..n], &[START_SYSEX, 0x0E, 3, 5, END_SYSEX]);
    }

    #[test]
    fn positions_reduced_modulo_grid() {
        let (out, n) = encoded(Event::RowChanged(13));
        assert_eq!(&out[..n], &[START_SYSEX, 0x0D, 5, END_SYSEX]);

        let mut out = [0u8; MAX_EVENT_LEN];
        let n = Event::TileChanged { row: 9, column: 200 }.encode(4, 6, &mut out);
        assert_eq!(&out[..n], &[START_SYSEX, 0x0E, 1, 2, END_SYSEX]);
    }

    #[test]
    fn decode_set_tile() {
        assert_eq!(
            Command::decode(&[0x0F, 0x01, 0x02, 0x04]),
            Ok(Command::SetTile {
                state: TileState::Hit,
                row: 2,
                column: 4
            })
        );
        // Trailing bytes are tolerated.
        assert!(Command::decode(&[0x0F, 0x00, 0x00, 0x00, 0x55]).is_ok());
    }

    #[test]
    fn decode_rejections() {
        assert_eq!(Command::decode(&[]), Err(DecodeError::TooShort));
        assert_eq!(Command::decode(&[0x0F, 0x01]), Err(DecodeError::TooShort));
        assert_eq!(Command::decode(&[0x0F, 0x01, 0x02]), Err(DecodeError::TooShort));
        assert_eq!(
            Command::decode(&[0x0E, 0x01, 0x02, 0x03]),
            Err(DecodeError::UnknownCommand(0x0E))
        );
        assert_eq!(
            Command::decode(&[0x0F, 0x04, 0x02, 0x03]),
            Err(DecodeError::UnknownItem(0x04))
        );
    }
}
