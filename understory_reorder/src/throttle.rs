// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge rate limiting for high-frequency input.
//!
//! Browsers fire `dragenter` for every element boundary the pointer crosses,
//! including descendants of an item. [`Throttle`] lets the first event of a
//! window through and drops the rest; nothing is queued for a trailing call.
//!
//! Timestamps are caller-supplied milliseconds (for example
//! `Event.timeStamp`), so the type has no clock of its own.
//!
//! ```
//! use understory_reorder::Throttle;
//!
//! let mut throttle = Throttle::new(50.0);
//! assert!(throttle.try_acquire(1000.0));
//! assert!(!throttle.try_acquire(1020.0));
//! assert!(throttle.try_acquire(1050.0));
//! ```

/// Admits at most one call per window.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Throttle {
    window: f64,
    last: Option<f64>,
}

impl Throttle {
    /// Creates a throttle with a window of `window` milliseconds.
    ///
    /// A window of zero admits every call.
    #[must_use]
    pub fn new(window: f64) -> Self {
        Self { window, last: None }
    }

    /// Returns `true` if a call at `now` may proceed, and records it.
    ///
    /// A timestamp earlier than the last admitted one (a clock reset) is
    /// admitted and restarts the window.
    pub fn try_acquire(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now >= last && now - last < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forgets the last admitted call.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The window length in milliseconds.
    pub fn window(&self) -> f64 {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_is_admitted() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.try_acquire(0.0), "nothing admitted yet");
    }

    #[test]
    fn calls_inside_window_are_dropped() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(149.9));
        assert!(throttle.try_acquire(150.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(40.0));
        // Window is measured from the last admitted call, not the last attempt.
        assert!(throttle.try_acquire(60.0));
    }

    #[test]
    fn clock_going_backwards_restarts_window() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.try_acquire(500.0));
        assert!(throttle.try_acquire(10.0));
        assert!(!throttle.try_acquire(20.0));
    }

    #[test]
    fn zero_window_admits_everything() {
        let mut throttle = Throttle::new(0.0);
        assert!(throttle.try_acquire(5.0));
        assert!(throttle.try_acquire(5.0));
    }

    #[test]
    fn reset_reopens_window() {
        let mut throttle = Throttle::new(50.0);
        assert!(throttle.try_acquire(0.0));
        throttle.reset();
        assert!(throttle.try_acquire(1.0));
        assert_eq!(throttle.window(), 50.0);
    }
}
