// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and implement
//! the board interfaces in [`crate::io`].
//!
//! ## Existing drivers
//!
//! - [`rgb_matrix`] – 74HC595 chain driving the RGB LED matrix, one column at a time
//! - [`mcp3008`] – Microchip MCP3008 8-channel ADC reading a photodiode or photoresistor bank

pub mod mcp3008;
pub mod rgb_matrix;

pub use mcp3008::Mcp3008;
pub use rgb_matrix::RgbMatrix;
