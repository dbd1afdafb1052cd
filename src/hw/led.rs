// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board status LED.
//!
//! Blinks as a heartbeat while the scan loop is running: [`StatusLed::frame`] is called once per
//! completed grid frame and toggles the LED every `frames_per_toggle` frames.

use embedded_hal::digital::v2::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct StatusLed<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
    frames_per_toggle: u16,
    frames: u16,
}

impl<PIN: OutputPin> StatusLed<PIN> {
    /// Create the LED, initially OFF.
    pub fn new(pin: PIN, active: ActiveLevel, frames_per_toggle: u16) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: false,
            frames_per_toggle: frames_per_toggle.max(1),
            frames: 0,
        };
        led.set(false);
        led
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let _ = match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low(),
        };
        self.is_on = on;
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    /// Count one completed frame.
    pub fn frame(&mut self) {
        self.frames += 1;
        if self.frames >= self.frames_per_toggle {
            self.frames = 0;
            self.toggle();
        }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
