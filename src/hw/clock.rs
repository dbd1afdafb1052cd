// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running microsecond clock on TIM5.
//!
//! TIM5 is one of the 32-bit timers. It is prescaled to 1 MHz and left counting up over its full
//! range, so the counter wraps every ~71.6 minutes. The scan cursor compares timestamps with
//! wrapping subtraction and does not care about the wrap.

use stm32f7xx_hal::pac;

pub struct MicrosClock {
    tim: pac::TIM5,
}

impl MicrosClock {
    /// Configure TIM5 as a 1 MHz up-counter.
    ///
    /// `timer_clock_hz` is the TIM5 kernel clock (APB1 timer clock).
    pub fn tim5(tim5: pac::TIM5, timer_clock_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim5en().set_bit());

        let tim = tim5;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Tick at 1 MHz
        let psc = (timer_clock_hz / 1_000_000).saturating_sub(1) as u16;
        tim.psc.write(|w| w.psc().bits(psc));

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Load the prescaler now instead of at the first overflow
        tim.egr.write(|w| w.ug().set_bit());

        // Reset the counter
        tim.cnt.write(|w| w.bits(0));

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Microseconds since configuration, wrapping at `u32::MAX`.
    #[inline]
    pub fn now_us(&self) -> u32 {
        self.tim.cnt.read().bits()
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIM5 {
        self.tim
    }
}
