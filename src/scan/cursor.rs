// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Time-sliced column cursor.
//!
//! The host loop polls [`ScanCursor::tick`] with a free-running microsecond timestamp. Once a
//! full column period has elapsed the cursor hands out the next column; otherwise it returns
//! `None` right away. Timestamps are compared with wrapping subtraction, so a 32-bit timer
//! rolling over does not stall the scan.

/// Non-blocking column scheduler.
#[derive(Copy, Clone, Debug)]
pub struct ScanCursor {
    period_us: u32,
    steps: u8,
    next: u8,
    last_tick: Option<u32>,
}

impl ScanCursor {
    /// Cursor over `steps` columns refreshing the whole grid `fps` times per second.
    ///
    /// `subdivisions` splits every column slot further (1 for plain column multiplexing).
    pub fn new(fps: u32, steps: u8, subdivisions: u32) -> Self {
        let steps = steps.max(1);
        let divisor = fps
            .max(1)
            .saturating_mul(steps as u32)
            .saturating_mul(subdivisions.max(1));

        Self {
            period_us: (1_000_000 / divisor).max(1),
            steps,
            next: 0,
            last_tick: None,
        }
    }

    /// Time budget of one scan step.
    #[inline]
    pub fn period_us(&self) -> u32 {
        self.period_us
    }

    #[inline]
    pub fn steps(&self) -> u8 {
        self.steps
    }

    /// Poll the cursor.
    ///
    /// The first call only records the start time.
    pub fn tick(&mut self, now_us: u32) -> Option<u8> {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now_us);
            return None;
        };

        if now_us.wrapping_sub(last) < self.period_us {
            return None;
        }

        self.last_tick = Some(now_us);
        let column = self.next;
        self.next = (self.next + 1) % self.steps;
        Some(column)
    }

    /// Restart from the first column on the next elapsed period.
    pub fn rewind(&mut self) {
        self.next = 0;
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_fps() {
        assert_eq!(ScanCursor::new(100, 8, 1).period_us(), 1250);
        assert_eq!(ScanCursor::new(100, 8, 2).period_us(), 625);
        assert_eq!(ScanCursor::new(60, 8, 1).period_us(), 2083);
    }

    #[test]
    fn degenerate_parameters_do_not_divide_by_zero() {
        let cursor = ScanCursor::new(0, 0, 0);
        assert_eq!(cursor.steps(), 1);
        assert_eq!(cursor.period_us(), 1_000_000);

        assert_eq!(ScanCursor::new(u32::MAX / 8, 8, 1).period_us(), 1);
    }

    #[test]
    fn waits_for_full_period() {
        let mut cursor = ScanCursor::new(100, 8, 1);
        assert_eq!(cursor.tick(0), None);
        assert_eq!(cursor.tick(1), None);
        assert_eq!(cursor.tick(1249), None);
        assert_eq!(cursor.tick(1250), Some(0));
        assert_eq!(cursor.tick(1251), None);
        assert_eq!(cursor.tick(2500), Some(1));
    }

    #[test]
    fn wraps_after_last_column() {
        let mut cursor = ScanCursor::new(100, 4, 1);
        let period = cursor.period_us();
        cursor.tick(0);

        let columns: [Option<u8>; 6] =
            core::array::from_fn(|i| cursor.tick(period * (i as u32 + 1)));
        assert_eq!(
            columns,
            [Some(0), Some(1), Some(2), Some(3), Some(0), Some(1)]
        );
    }

    #[test]
    fn late_poll_yields_one_column() {
        let mut cursor = ScanCursor::new(100, 8, 1);
        cursor.tick(0);
        assert_eq!(cursor.tick(10_000), Some(0));
        assert_eq!(cursor.tick(10_001), None);
    }

    #[test]
    fn survives_timer_wraparound() {
        let mut cursor = ScanCursor::new(100, 8, 1);
        let start = u32::MAX - 500;
        cursor.tick(start);
        assert_eq!(cursor.tick(u32::MAX), None);
        assert_eq!(cursor.tick(start.wrapping_add(1250)), Some(0));
        assert_eq!(cursor.tick(start.wrapping_add(2499)), None);
        assert_eq!(cursor.tick(start.wrapping_add(2500)), Some(1));
    }

    #[test]
    fn rewind_restarts() {
        let mut cursor = ScanCursor::new(100, 8, 1);
        cursor.tick(0);
        cursor.tick(1250);
        cursor.rewind();
        assert_eq!(cursor.tick(1300), None);
        assert_eq!(cursor.tick(2550), Some(0));
    }
}
