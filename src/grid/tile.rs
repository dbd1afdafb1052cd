// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tile states of the attack grid and the transitions between them.

/// State of one grid cell.
///
/// `Water`, `Hit` and `Destroyed` are the game states assigned by the host. `None` is the
/// cleared state after a reset and `Selected` marks a cell the player touched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum TileState {
    #[default]
    None,
    Water,
    Hit,
    Destroyed,
    Selected,
}

/// What is asking for a state change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Cause {
    /// The sense path detected a touch on the cell.
    Sensed,
    /// A tile-type command from the host.
    Host,
    /// Grid reset.
    Reset,
}

impl TileState {
    /// Decode a wire item value. Only the host-settable states have one.
    pub fn from_item(item: u8) -> Option<Self> {
        match item {
            0x00 => Some(TileState::Water),
            0x01 => Some(TileState::Hit),
            0x02 => Some(TileState::Destroyed),
            _ => None,
        }
    }

    /// Wire item value, for host-settable states.
    pub fn item(self) -> Option<u8> {
        match self {
            TileState::Water => Some(0x00),
            TileState::Hit => Some(0x01),
            TileState::Destroyed => Some(0x02),
            TileState::None | TileState::Selected => None,
        }
    }

    /// Transition table. Returns whether `cause` may move a tile from `self` to `next`.
    ///
    /// | cause    | from   | to                           |
    /// | -------- | ------ | ---------------------------- |
    /// | `Sensed` | `None` | `Selected`                   |
    /// | `Host`   | any    | `Water`, `Hit`, `Destroyed`  |
    /// | `Reset`  | any    | `None`                       |
    ///
    /// A `Selected` tile therefore stays selected until the host resolves it or the grid resets.
    pub fn accepts(self, cause: Cause, next: TileState) -> bool {
        match (cause, self, next) {
            (Cause::Sensed, TileState::None, TileState::Selected) => true,
            (Cause::Host, _, TileState::Water | TileState::Hit | TileState::Destroyed) => true,
            (Cause::Reset, _, TileState::None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TileState; 5] = [
        TileState::None,
        TileState::Water,
        TileState::Hit,
        TileState::Destroyed,
        TileState::Selected,
    ];

    #[test]
    fn wire_items() {
        assert_eq!(TileState::from_item(0), Some(TileState::Water));
        assert_eq!(TileState::from_item(1), Some(TileState::Hit));
        assert_eq!(TileState::from_item(2), Some(TileState::Destroyed));
        assert_eq!(TileState::from_item(3), None);
        assert_eq!(TileState::from_item(0x7F), None);
        assert_eq!(TileState::Selected.item(), None);
        assert_eq!(TileState::Hit.item(), Some(1));
    }

    #[test]
    fn sensing_only_selects_cleared_tiles() {
        for from in ALL {
            let ok = from.accepts(Cause::Sensed, TileState::Selected);
            assert_eq!(ok, from == TileState::None, "from {:?}", from);
        }
        assert!(!TileState::None.accepts(Cause::Sensed, TileState::Hit));
    }

    #[test]
    fn host_resolves_any_state() {
        for from in ALL {
            assert!(from.accepts(Cause::Host, TileState::Water));
            assert!(from.accepts(Cause::Host, TileState::Destroyed));
            assert!(!from.accepts(Cause::Host, TileState::Selected));
            assert!(!from.accepts(Cause::Host, TileState::None));
        }
    }

    #[test]
    fn reset_clears() {
        for from in ALL {
            assert!(from.accepts(Cause::Reset, TileState::None));
            assert!(!from.accepts(Cause::Reset, TileState::Water));
        }
    }
}
