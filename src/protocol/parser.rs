// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-wise parser for inbound sysex frames.
//!
//! Bytes are pushed one at a time as the USART receives them. A complete
//! `START_SYSEX payload END_SYSEX` frame yields its payload; a lone [`SYSTEM_RESET`] byte outside
//! a frame yields a reset request. Everything else between frames is ignored.

use heapless::Vec;

use crate::protocol::messages::*;

/// Largest sysex payload the parser buffers.
pub const MAX_PAYLOAD: usize = 32;

/// Output of the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Payload between the sysex markers: `[kind, args...]`.
    Sysex(Vec<u8, MAX_PAYLOAD>),
    /// Host asked for a device reset.
    Reset,
}

/// Parser failure. The offending frame is dropped and the parser waits for the next start byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ParseError {
    /// Payload exceeded [`MAX_PAYLOAD`].
    Overflow,
}

enum State {
    WaitStart,
    InFrame,
    /// Dropping an oversized frame until its end marker.
    Discard,
}

pub struct Parser {
    state: State,
    payload: Vec<u8, MAX_PAYLOAD>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            payload: Vec::new(),
        }
    }

    /// Process a single incoming byte. Returns `Ok(Some(Frame))` once a frame completes.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, ParseError> {
        match self.state {
            State::WaitStart => match byte {
                START_SYSEX => {
                    self.payload.clear();
                    self.state = State::InFrame;
                }
                SYSTEM_RESET => return Ok(Some(Frame::Reset)),
                _ => {}
            },
            State::InFrame => match byte {
                END_SYSEX => {
                    self.state = State::WaitStart;
                    let payload = core::mem::take(&mut self.payload);
                    return Ok(Some(Frame::Sysex(payload)));
                }
                START_SYSEX => {
                    // Unterminated frame, start over
                    self.payload.clear();
                }
                _ => {
                    if self.payload.push(byte).is_err() {
                        self.payload.clear();
                        self.state = State::Discard;
                        return Err(ParseError::Overflow);
                    }
                }
            },
            State::Discard => match byte {
                END_SYSEX => self.state = State::WaitStart,
                START_SYSEX => {
                    self.payload.clear();
                    self.state = State::InFrame;
                }
                _ => {}
            },
        }
        Ok(None)
    }
}
