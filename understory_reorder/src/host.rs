// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container abstraction the controller drives.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::StyleProperty;

/// A container of sortable elements, as seen by a
/// [`ReorderController`](crate::ReorderController).
///
/// The host owns the real elements (DOM nodes, widget handles, test doubles).
/// The controller only queries the tree, moves children, toggles the
/// draggable flag and writes two inline style properties. Every method is
/// expected to be infallible from the controller's point of view: a host that
/// cannot carry out a request should ignore it.
///
/// Selectors passed to the query methods come from
/// [`ItemMatcher::selector`](crate::ItemMatcher::selector).
pub trait SortHost {
    /// Handle to an element. Equality must be identity.
    type Element: Clone + PartialEq + Debug;

    /// Element children of the container, in order.
    fn children(&self) -> Vec<Self::Element>;

    /// The closest inclusive ancestor of `node` matching `selector` that lies
    /// inside the container.
    fn closest(&self, node: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Returns `true` if `node` itself carries `class`.
    fn has_class(&self, node: &Self::Element, class: &str) -> bool;

    /// The first descendant of `root` matching `selector`.
    fn query(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Every element inside the container matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Top-left corner of the element's rendered box, in viewport coordinates.
    ///
    /// This must include any transform currently applied to the element.
    fn position(&self, element: &Self::Element) -> Point;

    /// Moves `element` to immediately after `anchor`.
    fn insert_after(&mut self, element: &Self::Element, anchor: &Self::Element);

    /// Moves `element` to immediately before `anchor`.
    fn insert_before(&mut self, element: &Self::Element, anchor: &Self::Element);

    /// Sets the element's `draggable` flag.
    fn set_draggable(&mut self, element: &Self::Element, draggable: bool);

    /// Writes an inline style property. An empty `value` clears it.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);

    /// Asks for [`ReorderController::animation_frame`](crate::ReorderController::animation_frame)
    /// to be called before the next paint.
    fn request_animation_frame(&mut self);
}
