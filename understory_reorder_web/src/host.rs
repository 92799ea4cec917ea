// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_reorder::{SortHost, StyleProperty};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, Node, Window};

/// A [`SortHost`] over the element children of a DOM container.
///
/// DOM calls that throw (an invalid selector, a detached anchor) are ignored,
/// so a misconfigured list does nothing rather than failing mid-drag.
#[derive(Debug)]
pub struct DomHost {
    container: Element,
    window: Window,
    frame: Option<Closure<dyn FnMut(f64)>>,
}

impl DomHost {
    /// Creates a host over `container`.
    ///
    /// `frame` is handed to `requestAnimationFrame` whenever the controller
    /// asks for a frame; without one, slides stay inverted.
    pub fn new(container: Element, window: Window, frame: Option<Closure<dyn FnMut(f64)>>) -> Self {
        Self {
            container,
            window,
            frame,
        }
    }

    /// The container element.
    pub fn container(&self) -> &Element {
        &self.container
    }

    fn contains(&self, element: &Element) -> bool {
        let node: &Node = element;
        self.container.contains(Some(node))
    }
}

impl SortHost for DomHost {
    type Element = Element;

    fn children(&self) -> Vec<Element> {
        let children = self.container.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .collect()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector)
            .ok()
            .flatten()
            .filter(|found| self.contains(found))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn query(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.container.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn position(&self, element: &Element) -> Point {
        let rect = element.get_bounding_client_rect();
        Point::new(rect.x(), rect.y())
    }

    fn insert_after(&mut self, element: &Element, anchor: &Element) {
        let _ = anchor.insert_adjacent_element("afterend", element);
    }

    fn insert_before(&mut self, element: &Element, anchor: &Element) {
        let _ = anchor.insert_adjacent_element("beforebegin", element);
    }

    fn set_draggable(&mut self, element: &Element, draggable: bool) {
        let value = if draggable { "true" } else { "false" };
        let _ = element.set_attribute("draggable", value);
    }

    fn set_style(&mut self, element: &Element, property: StyleProperty, value: &str) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        let _ = element.style().set_property(property.as_str(), value);
    }

    fn request_animation_frame(&mut self) {
        if let Some(frame) = &self.frame {
            let _ = self
                .window
                .request_animation_frame(frame.as_ref().unchecked_ref());
        }
    }
}
