// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reorder controller: input handling, child reordering, and slide batches.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;

use crate::{
    CompletionBarrier, DragGating, DragSession, ItemMatcher, ReorderOptions, SlideAnimation,
    SlidePhase, SortHost, StyleProperty, TRANSLATE_ZERO, Throttle,
};

/// Identifies the slide batch started by one reorder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(pub u64);

/// A committed reorder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reorder {
    /// Batch started for the affected elements.
    pub batch: BatchId,
    /// Index of the dragged item before the move.
    pub from: usize,
    /// Index of the entered item before the move.
    pub to: usize,
    /// Number of elements that started a slide.
    pub animated: usize,
}

/// What [`ReorderController::drag_enter`] did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Dropped by the rate limiter.
    Throttled,
    /// Resolved to the same item as the previous processed event of this drag.
    Repeated,
    /// No active drag, no sortable item under the event, or the dragged item itself.
    Ignored,
    /// The dragged item moved.
    Reordered(Reorder),
}

#[derive(Clone, Debug)]
struct Batch<E> {
    id: BatchId,
    barrier: CompletionBarrier,
    dragging: E,
}

/// Drag-to-reorder state machine over a [`SortHost`].
///
/// Feed it the host's input events:
///
/// - [`pointer_down`](Self::pointer_down) for `mousedown`/`pointerdown`,
/// - [`drag_start`](Self::drag_start) for `dragstart`,
/// - [`drag_enter`](Self::drag_enter) for `dragenter`,
/// - [`drag_end`](Self::drag_end) for `dragend`,
/// - [`animation_frame`](Self::animation_frame) when a requested frame arrives,
/// - [`transition_end`](Self::transition_end) for `transitionend` on `transform`.
///
/// Each qualifying `dragenter` moves the dragged item next to the entered one
/// at once, then plays slides for every other element between the two
/// positions. Those slides form a batch; when the last one finishes, drag
/// gating is restored according to [`DragGating`].
///
/// A batch is never cancelled. If a `transitionend` is lost the batch stays
/// in flight. An element that joins a newer batch hands its earlier slide
/// off, which counts as finished for the earlier batch.
#[derive(Debug)]
pub struct ReorderController<H: SortHost> {
    host: H,
    options: ReorderOptions,
    throttle: Throttle,
    session: DragSession<H::Element>,
    armed: Option<H::Element>,
    slides: Vec<SlideAnimation<H::Element>>,
    batches: Vec<Batch<H::Element>>,
    next_batch: u64,
    frame_requested: bool,
}

impl<H: SortHost> ReorderController<H> {
    /// Creates a controller over `host`.
    ///
    /// With [`DragGating::AllItems`] every sortable item is made draggable
    /// right away.
    pub fn new(host: H, options: ReorderOptions) -> Self {
        let mut controller = Self {
            host,
            throttle: Throttle::new(options.throttle),
            options,
            session: DragSession::default(),
            armed: None,
            slides: Vec::new(),
            batches: Vec::new(),
            next_batch: 0,
            frame_requested: false,
        };
        if controller.options.gating == DragGating::AllItems {
            controller.set_all_draggable(true);
        }
        controller
    }

    /// The resolved options.
    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The current drag session.
    pub fn session(&self) -> &DragSession<H::Element> {
        &self.session
    }

    /// Slides that have not finished yet.
    pub fn slides(&self) -> &[SlideAnimation<H::Element>] {
        &self.slides
    }

    /// Number of slide batches still in flight.
    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }

    /// Returns `true` while any slide batch is in flight.
    pub fn is_animating(&self) -> bool {
        !self.batches.is_empty()
    }

    /// Sortable items in the container, in document order.
    pub fn items(&self) -> Vec<H::Element> {
        self.host.query_all(&self.options.sort_item.selector())
    }

    /// Resolves the sortable item an event target belongs to.
    ///
    /// Selector matchers walk up from `node`; class matchers only accept
    /// `node` itself.
    pub fn resolve_item(&self, node: &H::Element) -> Option<H::Element> {
        match &self.options.sort_item {
            ItemMatcher::Selector(selector) => self.host.closest(node, selector),
            ItemMatcher::Class(class) => self.host.has_class(node, class).then(|| node.clone()),
        }
    }

    /// Handles a pointer press. Returns `true` if an item was armed.
    ///
    /// Only used with [`DragGating::Handle`]: when `target` is the handle of a
    /// sortable item (or the item itself if no handle is configured), that
    /// item becomes draggable. A previously armed item is disarmed.
    pub fn pointer_down(&mut self, target: &H::Element) -> bool {
        if self.options.gating != DragGating::Handle {
            return false;
        }
        let Some(item) = self
            .host
            .closest(target, &self.options.sort_item.selector())
        else {
            return false;
        };
        let handle = match &self.options.handle {
            Some(handle) => self.host.query(&item, &handle.selector()),
            None => Some(item.clone()),
        };
        if handle.as_ref() != Some(target) {
            return false;
        }
        if let Some(previous) = self.armed.replace(item.clone())
            && previous != item
        {
            self.host.set_draggable(&previous, false);
        }
        self.host.set_draggable(&item, true);
        crate::log_trace!(item = ?item, "item armed");
        true
    }

    /// Handles a native drag start. Returns `true` if a sortable item is now
    /// being dragged.
    ///
    /// Dragging anything that does not resolve to a sortable item ends the
    /// session, so its enter events are ignored.
    pub fn drag_start(&mut self, target: &H::Element) -> bool {
        self.throttle.reset();
        match self.resolve_item(target) {
            Some(item) => {
                crate::log_debug!(item = ?item, "drag started");
                self.session = DragSession::start(item);
                true
            }
            None => {
                self.session = DragSession::default();
                false
            }
        }
    }

    /// Handles a drag entering `target` at time `now` (milliseconds).
    pub fn drag_enter(&mut self, target: &H::Element, now: f64) -> EnterOutcome {
        if !self.throttle.try_acquire(now) {
            return EnterOutcome::Throttled;
        }
        let entered = self.resolve_item(target);
        if entered.is_some() && entered == self.session.last_entered {
            return EnterOutcome::Repeated;
        }
        self.session.last_entered.clone_from(&entered);

        let (Some(target), Some(dragging)) = (entered, self.session.dragging.clone()) else {
            crate::log_trace!("enter ignored: no sortable target or no active drag");
            return EnterOutcome::Ignored;
        };
        if target == dragging {
            return EnterOutcome::Ignored;
        }
        self.reorder(dragging, target)
    }

    /// Handles the end of a native drag.
    ///
    /// With [`DragGating::Handle`], an item that was dragged without causing
    /// any reorder is disarmed here; otherwise its batch disarms it.
    pub fn drag_end(&mut self) {
        let session = core::mem::take(&mut self.session);
        if self.options.gating == DragGating::Handle
            && let Some(item) = session.dragging
            && !self.batches.iter().any(|batch| batch.dragging == item)
        {
            self.host.set_draggable(&item, false);
            if self.armed.as_ref() == Some(&item) {
                self.armed = None;
            }
        }
    }

    /// Starts every slide waiting for a frame.
    pub fn animation_frame(&mut self) {
        self.frame_requested = false;
        let transition = self.options.transition();
        let instant = transition.is_instant();
        let css = transition.to_string();

        if instant {
            let (done, waiting): (Vec<_>, Vec<_>) = core::mem::take(&mut self.slides)
                .into_iter()
                .partition(|slide| slide.phase() == SlidePhase::Inverted);
            self.slides = waiting;
            for slide in done {
                self.clear_styles(slide.element());
                self.signal(slide.batch());
            }
            return;
        }

        for slide in &mut self.slides {
            if slide.phase() != SlidePhase::Inverted {
                continue;
            }
            self.host
                .set_style(slide.element(), StyleProperty::Transition, &css);
            self.host
                .set_style(slide.element(), StyleProperty::Transform, TRANSLATE_ZERO);
            slide.play();
        }
    }

    /// Handles the end of a `transform` transition on `element`.
    ///
    /// Returns `true` if it finished a playing slide.
    pub fn transition_end(&mut self, element: &H::Element) -> bool {
        let Some(index) = self
            .slides
            .iter()
            .position(|slide| slide.element() == element && slide.phase() == SlidePhase::Playing)
        else {
            return false;
        };
        let slide = self.slides.remove(index);
        self.clear_styles(slide.element());
        self.signal(slide.batch());
        true
    }

    fn reorder(&mut self, dragging: H::Element, target: H::Element) -> EnterOutcome {
        let children = self.host.children();
        let from = children.iter().position(|child| *child == dragging);
        let to = children.iter().position(|child| *child == target);
        let (Some(from), Some(to)) = (from, to) else {
            return EnterOutcome::Ignored;
        };

        if self.options.gating == DragGating::AllItems {
            self.set_all_draggable(false);
        }

        let (start, end) = (from.min(to), from.max(to));
        let snapshot: Vec<(H::Element, Point)> = children[start..=end]
            .iter()
            .filter(|child| **child != dragging)
            .map(|child| (child.clone(), self.host.position(child)))
            .collect();

        match from.cmp(&to) {
            Ordering::Less => self.host.insert_after(&dragging, &target),
            Ordering::Greater => self.host.insert_before(&dragging, &target),
            Ordering::Equal => {}
        }
        self.session.target = Some(target);
        self.session.dragging_index = Some(from);
        self.session.target_index = Some(to);

        let id = BatchId(self.next_batch);
        self.next_batch += 1;
        // Registered before earlier slides are handed off, so an earlier batch
        // settling below still sees this one in flight.
        self.batches.push(Batch {
            id,
            barrier: CompletionBarrier::new(0),
            dragging,
        });

        let mut animated = 0;
        for (element, before) in snapshot {
            if self.hand_off(&element) {
                self.clear_styles(&element);
            }
            let after = self.host.position(&element);
            let slide = SlideAnimation::new(element, before, after, id);
            if slide.is_noop() {
                continue;
            }
            self.host.set_style(
                slide.element(),
                StyleProperty::Transform,
                &slide.inverted_transform(),
            );
            self.slides.push(slide);
            animated += 1;
        }

        crate::log_debug!(from, to, batch = id.0, animated, "reorder committed");

        if animated == 0 {
            self.finish(id);
        } else {
            if let Some(batch) = self.batches.iter_mut().find(|batch| batch.id == id) {
                batch.barrier = CompletionBarrier::new(animated);
            }
            if !self.frame_requested {
                self.frame_requested = true;
                self.host.request_animation_frame();
            }
        }

        EnterOutcome::Reordered(Reorder {
            batch: id,
            from,
            to,
            animated,
        })
    }

    /// Drops any unfinished slide of `element`, counting it as finished.
    fn hand_off(&mut self, element: &H::Element) -> bool {
        let Some(index) = self
            .slides
            .iter()
            .position(|slide| slide.element() == element)
        else {
            return false;
        };
        let slide = self.slides.remove(index);
        self.signal(slide.batch());
        true
    }

    fn signal(&mut self, id: BatchId) {
        let Some(index) = self.batches.iter().position(|batch| batch.id == id) else {
            return;
        };
        if self.batches[index].barrier.signal() {
            let batch = self.batches.remove(index);
            self.settle(batch);
        }
    }

    fn finish(&mut self, id: BatchId) {
        if let Some(index) = self.batches.iter().position(|batch| batch.id == id) {
            let batch = self.batches.remove(index);
            self.settle(batch);
        }
    }

    fn settle(&mut self, batch: Batch<H::Element>) {
        crate::log_debug!(batch = batch.id.0, "batch settled");
        match self.options.gating {
            DragGating::Handle => {
                self.host.set_draggable(&batch.dragging, false);
                if self.armed.as_ref() == Some(&batch.dragging) {
                    self.armed = None;
                }
            }
            DragGating::AllItems => {
                if self.batches.is_empty() {
                    self.set_all_draggable(true);
                }
            }
        }
    }

    fn clear_styles(&mut self, element: &H::Element) {
        self.host.set_style(element, StyleProperty::Transform, "");
        self.host.set_style(element, StyleProperty::Transition, "");
    }

    fn set_all_draggable(&mut self, draggable: bool) {
        for item in self.items() {
            self.host.set_draggable(&item, draggable);
        }
    }
}
