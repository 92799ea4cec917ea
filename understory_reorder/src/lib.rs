// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: headless drag-to-reorder for lists.
//!
//! A user picks up an item, drags it over another item, and the dragged item
//! takes that item's slot. Everything between the old and the new slot shifts
//! by one and glides into place with a short slide animation.
//!
//! The crate does not know about any particular UI toolkit. A [`SortHost`]
//! exposes the container: its children, a few selector queries, rendered
//! positions, child moves, the `draggable` flag, and two inline style
//! properties. The [`ReorderController`] turns input events into calls on the
//! host. `understory_reorder_web` provides a DOM host for browsers.
//!
//! The core concepts are:
//!
//! - [`ReorderOptions`] / [`ReorderOverrides`]: typed configuration with
//!   permissive merging. Invalid values fall back to defaults; nothing errors.
//! - [`ItemMatcher`]: how sortable items and handles are recognized (selector
//!   with ancestor walk, or exact class match).
//! - [`DragGating`]: who may start a drag. [`DragGating::Handle`] arms one item
//!   from a pointer-down on its handle; [`DragGating::AllItems`] keeps every
//!   item draggable except while slides are running.
//! - [`SlideAnimation`]: the per-element "invert, then play" step.
//! - [`CompletionBarrier`]: the join that decides when a batch of slides is done.
//! - [`Throttle`]: the leading-edge rate limit on drag-enter events.
//!
//! ## Event flow
//!
//! 1. `dragstart` → [`ReorderController::drag_start`] records the dragged item.
//! 2. `dragenter` → [`ReorderController::drag_enter`] snapshots positions of
//!    the affected range, moves the dragged item, translates every affected
//!    element back to where it was, and requests an animation frame.
//! 3. Frame → [`ReorderController::animation_frame`] enables the transition and
//!    resets the translation, so elements glide to their new slots.
//! 4. `transitionend` → [`ReorderController::transition_end`] clears the inline
//!    styles. When the whole batch is done, drag gating is restored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_reorder::{
//!     EnterOutcome, ReorderController, ReorderOptions, SortHost, StyleProperty,
//! };
//!
//! /// A vertical list of 20px rows, identified by name.
//! struct Rows(Vec<&'static str>);
//!
//! impl SortHost for Rows {
//!     type Element = &'static str;
//!     fn children(&self) -> Vec<&'static str> { self.0.clone() }
//!     fn closest(&self, node: &&'static str, _: &str) -> Option<&'static str> {
//!         self.0.contains(node).then_some(*node)
//!     }
//!     fn has_class(&self, node: &&'static str, _: &str) -> bool { self.0.contains(node) }
//!     fn query(&self, _: &&'static str, _: &str) -> Option<&'static str> { None }
//!     fn query_all(&self, _: &str) -> Vec<&'static str> { self.0.clone() }
//!     fn position(&self, row: &&'static str) -> Point {
//!         let index = self.0.iter().position(|r| r == row).unwrap_or(0);
//!         Point::new(0.0, 20.0 * index as f64)
//!     }
//!     fn insert_after(&mut self, row: &&'static str, anchor: &&'static str) {
//!         self.0.retain(|r| r != row);
//!         let at = self.0.iter().position(|r| r == anchor).unwrap() + 1;
//!         self.0.insert(at, row);
//!     }
//!     fn insert_before(&mut self, row: &&'static str, anchor: &&'static str) {
//!         self.0.retain(|r| r != row);
//!         let at = self.0.iter().position(|r| r == anchor).unwrap();
//!         self.0.insert(at, row);
//!     }
//!     fn set_draggable(&mut self, _: &&'static str, _: bool) {}
//!     fn set_style(&mut self, _: &&'static str, _: StyleProperty, _: &str) {}
//!     fn request_animation_frame(&mut self) {}
//! }
//!
//! let rows = Rows(vec!["a", "b", "c", "d"]);
//! let mut controller = ReorderController::new(rows, ReorderOptions::handle_based());
//!
//! controller.drag_start(&"a");
//! let outcome = controller.drag_enter(&"d", 0.0);
//! assert!(matches!(outcome, EnterOutcome::Reordered(r) if r.animated == 3));
//! assert_eq!(controller.host().0, ["b", "c", "d", "a"]);
//! ```
//!
//! ## Features
//!
//! - `serde`: lenient `Deserialize` for [`ReorderOverrides`]; wrong-typed
//!   fields read as unset.
//! - `tracing`: emit `tracing` events for committed reorders, settled batches,
//!   and ignored input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)+) => { tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)+) => { tracing::trace!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)+) => {};
}

pub(crate) use {log_debug, log_trace};

mod animation;
mod barrier;
mod controller;
mod host;
pub mod options;
mod session;
mod throttle;

pub use animation::{
    SlideAnimation, SlidePhase, StyleProperty, TRANSLATE_ZERO, Transition, translate_css,
};
pub use barrier::CompletionBarrier;
pub use controller::{BatchId, EnterOutcome, Reorder, ReorderController};
pub use host::SortHost;
pub use options::{DragGating, ItemMatcher, ReorderOptions, ReorderOverrides};
pub use session::DragSession;
pub use throttle::Throttle;
