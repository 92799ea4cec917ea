// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Array;
use understory_reorder::{ReorderController, ReorderOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, TransitionEvent};

use crate::host::DomHost;
use crate::options::overrides_from_js;

type Controller = ReorderController<DomHost>;

/// A drag-to-reorder list bound to a DOM container.
///
/// Listeners live on the container, so items added later are picked up as
/// long as they match the configured item selector or class.
#[wasm_bindgen]
#[derive(Debug)]
pub struct SortableList {
    controller: Rc<RefCell<Controller>>,
    container: Element,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

#[wasm_bindgen]
impl SortableList {
    /// Creates a handle-gated list.
    ///
    /// Items match the `sortItem` selector (default `.sort-item`). An item
    /// becomes draggable when the element matching `handle` inside it (or the
    /// item itself) is pressed, and stops being draggable once the slides
    /// started by its drag have finished.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element, options: JsValue) -> Result<Self, JsValue> {
        let options = ReorderOptions::handle_based().merge(&overrides_from_js(&options));
        Self::from_options(container, options)
    }

    /// Creates a class-gated list.
    ///
    /// Items carry the `sortItemClass` class (default `sort-item`). Every item
    /// is draggable, except while items are sliding into place.
    #[wasm_bindgen(js_name = withClasses)]
    pub fn with_classes(container: Element, options: JsValue) -> Result<Self, JsValue> {
        let options = ReorderOptions::class_based().merge(&overrides_from_js(&options));
        Self::from_options(container, options)
    }

    /// Detaches every listener from the container.
    ///
    /// Slides already playing still finish visually, but their completion is
    /// no longer observed.
    pub fn destroy(&mut self) {
        for (kind, listener) in self.listeners.drain(..) {
            let _ = self
                .container
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref());
        }
    }

    /// The sortable items, in their current order.
    pub fn order(&self) -> Array {
        match self.controller.try_borrow() {
            Ok(controller) => controller.items().iter().collect(),
            Err(_) => Array::new(),
        }
    }

    /// Whether any slide batch is still in flight.
    #[wasm_bindgen(getter, js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.controller
            .try_borrow()
            .is_ok_and(|controller| controller.is_animating())
    }
}

impl SortableList {
    /// Binds a list with fully resolved options.
    pub fn from_options(container: Element, options: ReorderOptions) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<Controller>>| {
            let weak = weak.clone();
            let frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                if let Some(shared) = weak.upgrade()
                    && let Ok(mut controller) = shared.try_borrow_mut()
                {
                    controller.animation_frame();
                }
            });
            let host = DomHost::new(container.clone(), window, Some(frame));
            RefCell::new(ReorderController::new(host, options))
        });

        let mut list = Self {
            controller,
            container,
            listeners: Vec::new(),
        };
        list.listen("mousedown", |controller, event| {
            if let Some(target) = event_element(&event) {
                controller.pointer_down(&target);
            }
        })?;
        list.listen("dragstart", |controller, event| {
            if let Some(target) = event_element(&event) {
                controller.drag_start(&target);
            }
        })?;
        list.listen("dragenter", |controller, event| {
            if let Some(target) = event_element(&event) {
                controller.drag_enter(&target, event.time_stamp());
            }
        })?;
        list.listen("dragend", |controller, _| controller.drag_end())?;
        list.listen("transitionend", |controller, event| {
            let transform = event
                .dyn_ref::<TransitionEvent>()
                .is_some_and(|transition| transition.property_name() == "transform");
            if transform && let Some(target) = event_element(&event) {
                controller.transition_end(&target);
            }
        })?;
        Ok(list)
    }

    fn listen<F>(&mut self, kind: &'static str, mut handler: F) -> Result<(), JsValue>
    where
        F: FnMut(&mut Controller, Event) + 'static,
    {
        let weak = Rc::downgrade(&self.controller);
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut controller) = shared.try_borrow_mut() else {
                return;
            };
            handler(&mut controller, event);
        });
        self.container
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        self.listeners.push((kind, listener));
        Ok(())
    }
}

impl Drop for SortableList {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
