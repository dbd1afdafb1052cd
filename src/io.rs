// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Collaborator interfaces consumed by the scan core.
//!
//! The board binary implements these on top of the SPI/USART wrappers in `hw` and the chip
//! drivers in `drivers`; unit tests implement them with in-memory fakes.

/// Column-multiplexed RGB LED driver.
pub trait LedMatrix {
    /// Light the given rows of `column`. Bit `row` of each mask enables that color. Fire and
    /// forget.
    fn write_column(&mut self, red: u8, green: u8, blue: u8, column: u8);
}

/// Bank of optical sensors sampled together.
pub trait PhotodiodeArray {
    /// Fill `buf` with one 8-bit sample per channel. Returns the number of samples written.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

/// Outbound serial channel to the host computer.
pub trait Transport {
    fn send(&mut self, bytes: &[u8]);
}

impl<T: LedMatrix + ?Sized> LedMatrix for &mut T {
    #[inline]
    fn write_column(&mut self, red: u8, green: u8, blue: u8, column: u8) {
        (**self).write_column(red, green, blue, column)
    }
}

impl<T: PhotodiodeArray + ?Sized> PhotodiodeArray for &mut T {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    #[inline]
    fn send(&mut self, bytes: &[u8]) {
        (**self).send(bytes)
    }
}

/// Matrix stand-in for grids without indicators (the beam-break arrangement grid).
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDisplay;

impl LedMatrix for NoDisplay {
    #[inline]
    fn write_column(&mut self, _red: u8, _green: u8, _blue: u8, _column: u8) {}
}

/// Two sensor banks read back to back as one array: `first` fills the front of the buffer and
/// `second` continues right after the samples `first` produced.
pub struct BankPair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> BankPair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn free(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: PhotodiodeArray, B: PhotodiodeArray> PhotodiodeArray for BankPair<A, B> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = self.first.read(buf).min(buf.len());
        n + self.second.read(&mut buf[n..])
    }
}
