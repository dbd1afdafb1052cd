// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Outbound event sender.
//!
//! Frames each [`Event`] and hands it to the transport in one write. There is no acknowledgement
//! and no retry; the serial link to the host is point to point.

use crate::io::Transport;
use crate::protocol::messages::{Event, MAX_EVENT_LEN};

pub struct EventNotifier<T> {
    transport: T,
    rows: u8,
    columns: u8,
}

impl<T: Transport> EventNotifier<T> {
    /// Positions in sent events are reduced modulo `rows` / `columns`.
    pub fn new(transport: T, rows: u8, columns: u8) -> Self {
        Self {
            transport,
            rows,
            columns,
        }
    }

    pub fn emit(&mut self, event: Event) {
        let mut frame = [0u8; MAX_EVENT_LEN];
        let len = event.encode(self.rows, self.columns, &mut frame);
        trace!("emit {}", event);
        self.transport.send(&frame[..len]);
    }

    pub fn transport(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn free(self) -> T {
        self.transport
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::protocol::messages::{END_SYSEX, START_SYSEX};

    #[derive(Default)]
    struct Wire {
        writes: Vec<Vec<u8>>,
    }

    impl Transport for Wire {
        fn send(&mut self, bytes: &[u8]) {
            self.writes.push(bytes.to_vec());
        }
    }

    #[test]
    fn one_write_per_event() {
        let mut notifier = EventNotifier::new(Wire::default(), 8, 8);
        notifier.emit(Event::RowChanged(2));
        notifier.emit(Event::TileChanged { row: 3, column: 5 });

        let wire = notifier.free();
        assert_eq!(wire.writes.len(), 2);
        assert_eq!(wire.writes[0], [START_SYSEX, 0x0D, 2, END_SYSEX]);
        assert_eq!(wire.writes[1], [START_SYSEX, 0x0E, 3, 5, END_SYSEX]);
    }

    #[test]
    fn wraps_positions_to_grid() {
        let mut notifier = EventNotifier::new(Wire::default(), 8, 8);
        notifier.emit(Event::ColumnChanged(9));
        assert_eq!(notifier.transport().writes[0], [START_SYSEX, 0x0C, 1, END_SYSEX]);
    }
}
