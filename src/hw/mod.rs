// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level peripheral wrappers.

pub mod clock;
pub mod led;
pub mod pins;
pub mod spi;
pub mod usart;

pub use clock::MicrosClock;
pub use led::{ActiveLevel, StatusLed};
pub use pins::BoardPins;
pub use spi::ChipSelect;
pub use spi::SpiBus;
pub use usart::{Usart, UsartRx, UsartTx};
