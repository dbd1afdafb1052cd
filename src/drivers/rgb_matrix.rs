// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Column-multiplexed RGB LED matrix behind a chain of four 74HC595 shift registers.
//!
//! Byte order on the wire (first byte shifted out ends up in the last register):
//!
//! | Byte | Register drives | Polarity |
//! | ---- | --------------- | -------- |
//! | 0 | column anodes | one-hot, active high |
//! | 1 | blue cathodes | active low |
//! | 2 | green cathodes | active low |
//! | 3 | red cathodes | active low |
//!
//! The registers latch on the rising edge of the chip select, so a column switches atomically
//! once the whole frame is shifted in.

use core::cell::RefCell;

use stm32f7xx_hal::spi;

use crate::hw::{ChipSelect, SpiBus};
use crate::io::LedMatrix;

/// Bytes per column frame.
pub const FRAME_LEN: usize = 4;

/// Build the shift-register frame for one column.
#[inline]
pub fn column_frame(red: u8, green: u8, blue: u8, column: u8) -> [u8; FRAME_LEN] {
    [1 << (column & 0x07), !blue, !green, !red]
}

/// 74HC595 chain bound to a latch line on a shared SPI bus.
pub struct RgbMatrix<'a, I, PINS, const P: char, const N: u8> {
    spi: &'a RefCell<SpiBus<I, PINS>>,
    latch: ChipSelect<P, N>,
}

impl<'a, I, PINS, const P: char, const N: u8> RgbMatrix<'a, I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    /// Bind the chain and blank it.
    pub fn new(spi: &'a RefCell<SpiBus<I, PINS>>, latch: ChipSelect<P, N>) -> Self {
        let mut matrix = Self { spi, latch };
        if matrix.blank().is_err() {
            warn!("led matrix: blanking failed");
        }
        matrix
    }

    /// Shift one column frame out and latch it.
    pub fn write_frame(&mut self, frame: [u8; FRAME_LEN]) -> Result<(), spi::Error> {
        let mut buf = frame;
        self.spi.borrow_mut().transaction(&mut self.latch, &mut buf)
    }

    /// Turn every LED off.
    pub fn blank(&mut self) -> Result<(), spi::Error> {
        self.write_frame([0x00, 0xFF, 0xFF, 0xFF])
    }

    pub fn free(self) -> ChipSelect<P, N> {
        self.latch
    }
}

impl<I, PINS, const P: char, const N: u8> LedMatrix for RgbMatrix<'_, I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    fn write_column(&mut self, red: u8, green: u8, blue: u8, column: u8) {
        if let Err(e) = self.write_frame(column_frame(red, green, blue, column)) {
            warn!("led matrix: spi error {}", defmt::Debug2Format(&e));
        }
    }
}
