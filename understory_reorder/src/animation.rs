// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide animations: the per-element "invert, then play" step.
//!
//! After the child order changes, an affected element is first translated back
//! to where it was rendered before the change ([`SlidePhase::Inverted`]). On the
//! next animation frame a transition is enabled and the translation is reset to
//! zero ([`SlidePhase::Playing`]). The host reports `transitionend`, after which
//! the inline styles are cleared and the slide is done.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::BatchId;

/// Inline style properties written by the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// The `transform` property.
    Transform,
    /// The `transition` property.
    Transition,
}

impl StyleProperty {
    /// Returns the CSS property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Transition => "transition",
        }
    }
}

/// Transform value that returns a translated element to its layout slot.
pub const TRANSLATE_ZERO: &str = "translate(0)";

/// Formats a translation as a CSS `transform` value.
///
/// ```
/// use kurbo::Vec2;
/// use understory_reorder::translate_css;
///
/// assert_eq!(translate_css(Vec2::new(0.0, -24.5)), "translate(0px, -24.5px)");
/// ```
#[must_use]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// The CSS `transition` applied while a slide plays.
///
/// Displays as `transform {duration}ms {easing} {delay}ms`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition<'a> {
    /// Duration in milliseconds.
    pub duration: f64,
    /// CSS timing function.
    pub easing: &'a str,
    /// Start delay in milliseconds.
    pub delay: f64,
}

impl Transition<'_> {
    /// Returns `true` when the browser would not run this transition at all.
    ///
    /// A transition whose combined duration is not positive never fires
    /// `transitionend`, so slides using it finish on the frame they start.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration + self.delay <= 0.0
    }
}

impl fmt::Display for Transition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform {}ms {} {}ms",
            self.duration, self.easing, self.delay
        )
    }
}

/// Where a slide is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    /// Translated back to the old position; waiting for an animation frame.
    Inverted,
    /// Transition enabled and translation reset; waiting for `transitionend`.
    Playing,
}

/// One element gliding from its old slot to its new one.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideAnimation<E> {
    element: E,
    offset: Vec2,
    phase: SlidePhase,
    batch: BatchId,
}

impl<E> SlideAnimation<E> {
    /// Creates an inverted slide for `element`.
    ///
    /// `from` is where the element rendered before the reorder, `to` is where it
    /// renders now.
    #[must_use]
    pub fn new(element: E, from: Point, to: Point, batch: BatchId) -> Self {
        Self {
            element,
            offset: from - to,
            phase: SlidePhase::Inverted,
            batch,
        }
    }

    /// The element being animated.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Translation applied while inverted.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current phase.
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Batch this slide belongs to.
    pub fn batch(&self) -> BatchId {
        self.batch
    }

    /// Returns `true` if the element did not move and there is nothing to play.
    pub fn is_noop(&self) -> bool {
        self.offset == Vec2::ZERO
    }

    /// The `transform` value for the inverted phase.
    pub fn inverted_transform(&self) -> String {
        translate_css(self.offset)
    }

    pub(crate) fn play(&mut self) {
        self.phase = SlidePhase::Playing;
    }
}
