// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Battleship HID Firmware
//!
//! This crate contains the firmware for the human-interface boards of a two-grid battleship
//! table game, written in Rust, targeting an STM32F767 MCU.
//!
//! - The **attack grid** shows the tile states on a column-multiplexed RGB LED matrix and reads
//!   the red LEDs back as photodiodes to sense where the player touches.
//! - The **arrangement grid** detects ships placed across crossed laser beams.
//!
//! Both run the same cooperative loop: pick the next column, light it, let the sensors settle,
//! sample, classify, and report changes to the host computer over a sysex-style serial protocol.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`sense`] | Hysteresis comparator and classification policies |
//! | [`grid`] | Tile store, transition table, column renderer |
//! | [`scan`] | Column cursor and the display-and-sense loop |
//! | [`protocol`] | Host messages, sysex parser, event sender, command dispatcher |
//! | [`io`] | Interfaces to the LED matrix, sensor banks and serial transport |
//! | [`config`] | Runtime-tunable scan parameters |
//! | `hw` | MCU-level wrappers around SPI, USART and timers (MCU builds only) |
//! | `drivers` | 74HC595 column driver and MCP3008 sensor bank (MCU builds only) |
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the attack grid board (add `--features arrange-grid` for the arrangement grid):
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

#[cfg(test)]
extern crate std;

mod fmt;

pub mod config;
pub mod grid;
pub mod io;
pub mod protocol;
pub mod scan;
pub mod sense;

#[cfg(target_os = "none")]
pub mod drivers;
#[cfg(target_os = "none")]
pub mod hw;
