// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Microchip MCP3008 8-channel ADC.
//!
//! Each conversion is a two-byte SPI exchange. The first byte carries the start bit, single-ended
//! mode and the channel number; the upper eight bits of the 10-bit result come back in the second
//! byte. The sensing logic works on 8-bit samples, so the two least significant bits are never
//! clocked out.

use core::cell::RefCell;

use stm32f7xx_hal::spi;

use crate::hw::{ChipSelect, SpiBus};
use crate::io::PhotodiodeArray;

/// Channels per device.
pub const CHANNELS: usize = 8;

/// Command byte for a single-ended conversion on `channel`.
#[inline]
pub fn command(channel: u8) -> u8 {
    0x60 | ((channel & 0x07) << 2)
}

/// MCP3008 bound to its chip select on a shared SPI bus.
pub struct Mcp3008<'a, I, PINS, const P: char, const N: u8> {
    spi: &'a RefCell<SpiBus<I, PINS>>,
    cs: ChipSelect<P, N>,
}

impl<'a, I, PINS, const P: char, const N: u8> Mcp3008<'a, I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    /// Bind the device and run one throwaway conversion.
    ///
    /// The first conversion after power-up reads garbage while the sample capacitor charges.
    pub fn new(spi: &'a RefCell<SpiBus<I, PINS>>, cs: ChipSelect<P, N>) -> Self {
        let mut adc = Self { spi, cs };
        if adc.read_channel(0).is_err() {
            warn!("mcp3008: dummy conversion failed");
        }
        adc
    }

    /// Convert one channel, returning the upper eight bits of the result.
    pub fn read_channel(&mut self, channel: u8) -> Result<u8, spi::Error> {
        let mut buf = [command(channel), 0x00];
        self.spi.borrow_mut().transaction(&mut self.cs, &mut buf)?;
        Ok(buf[1])
    }

    pub fn free(self) -> ChipSelect<P, N> {
        self.cs
    }
}

impl<I, PINS, const P: char, const N: u8> PhotodiodeArray for Mcp3008<'_, I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    /// Read channels `0..buf.len()` (at most [`CHANNELS`]). A failed conversion reads as 0.
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(CHANNELS);
        for (channel, slot) in buf[..n].iter_mut().enumerate() {
            *slot = match self.read_channel(channel as u8) {
                Ok(v) => v,
                Err(e) => {
                    warn!("mcp3008: spi error {}", defmt::Debug2Format(&e));
                    0
                }
            };
        }
        n
    }
}
