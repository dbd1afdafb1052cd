// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART link to the host computer.
//!
//! On the Nucleo board USART3 is routed to the ST-LINK virtual COM port, so the host sees the
//! board as a plain serial device. Sysex events go out through [`UsartTx`], which implements
//! [`Transport`]; inbound bytes are polled from [`UsartRx`] without blocking the scan loop.
//!
//! To watch the raw traffic on the host machine, use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

use crate::io::Transport;

pub struct Usart<U: Instance> {
    tx: UsartTx<U>,
    rx: UsartRx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self {
            tx: UsartTx { tx },
            rx: UsartRx { rx },
        }
    }

    /// Separate the halves so the scanner can own the transmitter.
    pub fn split(self) -> (UsartTx<U>, UsartRx<U>) {
        (self.tx, self.rx)
    }
}

/// Transmit half.
pub struct UsartTx<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> UsartTx<U> {
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> Transport for UsartTx<U> {
    fn send(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_byte(b);
        }
    }
}

/// Receive half.
pub struct UsartRx<U: Instance> {
    rx: Rx<U>,
}

impl<U: Instance> UsartRx<U> {
    /// Take one received byte, if any. Never blocks.
    ///
    /// Framing and overrun errors drop the byte; the sysex parser resynchronizes on the next
    /// start marker.
    pub fn read_byte(&mut self) -> Option<u8> {
        match self.rx.read() {
            Ok(b) => Some(b),
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(_)) => {
                warn!("usart rx error");
                None
            }
        }
    }
}
