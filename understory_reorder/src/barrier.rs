// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A counted join over one-shot completion signals.

/// Waits for a fixed number of signals and reports completion exactly once.
///
/// ```
/// use understory_reorder::CompletionBarrier;
///
/// let mut barrier = CompletionBarrier::new(2);
/// assert!(!barrier.signal());
/// assert!(barrier.signal());
/// assert!(barrier.is_complete());
/// // Extra signals are ignored and never report completion again.
/// assert!(!barrier.signal());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionBarrier {
    total: usize,
    remaining: usize,
}

impl CompletionBarrier {
    /// Creates a barrier that completes after `count` signals.
    ///
    /// A barrier over zero signals starts out complete.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            total: count,
            remaining: count,
        }
    }

    /// Records one signal. Returns `true` only for the signal that completes
    /// the barrier.
    pub fn signal(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Returns `true` once every expected signal has arrived.
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Signals still outstanding.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Signals expected in total.
    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_barrier_is_complete() {
        let mut barrier = CompletionBarrier::new(0);
        assert!(barrier.is_complete(), "nothing to wait for");
        assert!(!barrier.signal(), "no signal can complete it again");
    }

    #[test]
    fn completes_on_last_signal_only() {
        let mut barrier = CompletionBarrier::new(3);
        assert!(!barrier.signal());
        assert!(!barrier.signal());
        assert_eq!(barrier.remaining(), 1);
        assert!(barrier.signal());
        assert_eq!(barrier.total(), 3);
        assert_eq!(barrier.remaining(), 0);
    }
}
