// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Scan Loop
//!
//! - [`cursor`] - Non-blocking column scheduler.
//! - [`scanner`] - Display-and-sense step and inbound command routing.

pub mod cursor;
pub mod scanner;

pub use cursor::ScanCursor;
pub use scanner::{Scanner, Step};
