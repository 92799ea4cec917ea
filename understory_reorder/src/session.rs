// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture drag state.

/// Transient state for one native drag gesture.
///
/// A new session starts at every drag start and is discarded at drag end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession<E> {
    /// The item being moved.
    pub dragging: Option<E>,
    /// The item most recently reordered against.
    pub target: Option<E>,
    /// Index of the dragged item at the last committed reorder.
    pub dragging_index: Option<usize>,
    /// Index of the target item at the last committed reorder.
    pub target_index: Option<usize>,
    /// The item resolved from the last processed drag-enter, if any.
    ///
    /// Enter events resolving to the same item again are ignored.
    pub last_entered: Option<E>,
}

impl<E> Default for DragSession<E> {
    fn default() -> Self {
        Self {
            dragging: None,
            target: None,
            dragging_index: None,
            target_index: None,
            last_entered: None,
        }
    }
}

impl<E> DragSession<E> {
    /// Starts a session for `item`.
    #[must_use]
    pub fn start(item: E) -> Self {
        Self {
            dragging: Some(item),
            ..Self::default()
        }
    }

    /// Returns `true` while an item is being dragged.
    pub fn is_active(&self) -> bool {
        self.dragging.is_some()
    }
}
