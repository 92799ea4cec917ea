// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for `SortableList`.
//!
//! Run with `wasm-pack test --headless --firefox understory_reorder_web`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Promise, Reflect};
use understory_reorder_web::{SortableList, overrides_from_js};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, TransitionEvent, TransitionEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Builds `<ul>` with four `<li class="{class}">` children named A..D.
fn list(class: &str) -> (Element, Vec<Element>) {
    let document = document();
    let container = document.create_element("ul").unwrap();
    let items: Vec<Element> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| {
            let item = document.create_element("li").unwrap();
            item.set_class_name(class);
            item.set_id(name);
            item.set_text_content(Some(*name));
            container.append_child(&item).unwrap();
            item
        })
        .collect();
    document.body().unwrap().append_child(&container).unwrap();
    (container, items)
}

fn fire(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn fire_transition_end(target: &Element, property: &str) {
    let init = TransitionEventInit::new();
    init.set_bubbles(true);
    init.set_property_name(property);
    let event = TransitionEvent::new_with_event_init_dict("transitionend", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Resolves on the next animation frame, after any frame the list requested.
async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn inline_transform(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap()
}

fn ids(container: &Element) -> Vec<String> {
    let children = container.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .map(|child| child.id())
        .collect()
}

#[wasm_bindgen_test]
fn class_list_marks_every_item_draggable() {
    let (container, items) = list("row");
    let options = Object::new();
    Reflect::set(&options, &"sortItemClass".into(), &"row".into()).unwrap();

    let sortable = SortableList::with_classes(container, options.into()).unwrap();
    for item in &items {
        assert_eq!(item.get_attribute("draggable").as_deref(), Some("true"));
    }
    assert_eq!(sortable.order().length(), 4);
}

#[wasm_bindgen_test]
fn drag_enter_reorders_children() {
    let (container, items) = list("sort-item");
    let _sortable = SortableList::new(container.clone(), JsValue::UNDEFINED).unwrap();

    fire(&items[0], "dragstart");
    fire(&items[3], "dragenter");

    assert_eq!(ids(&container), ["B", "C", "D", "A"]);
}

#[wasm_bindgen_test]
fn pointer_down_arms_the_pressed_item() {
    let (container, items) = list("sort-item");
    let _sortable = SortableList::new(container, JsValue::UNDEFINED).unwrap();

    fire(&items[1], "mousedown");
    assert_eq!(items[1].get_attribute("draggable").as_deref(), Some("true"));
    assert_eq!(items[0].get_attribute("draggable"), None);
}

#[wasm_bindgen_test]
fn destroyed_list_ignores_events() {
    let (container, items) = list("sort-item");
    let mut sortable = SortableList::new(container.clone(), JsValue::UNDEFINED).unwrap();
    sortable.destroy();

    fire(&items[0], "dragstart");
    fire(&items[3], "dragenter");
    assert_eq!(ids(&container), ["A", "B", "C", "D"]);
}

#[wasm_bindgen_test]
fn wrong_typed_options_fall_back() {
    let options = Object::new();
    Reflect::set(&options, &"animation".into(), &"250".into()).unwrap();
    Reflect::set(&options, &"easing".into(), &JsValue::from_f64(3.0)).unwrap();
    Reflect::set(&options, &"delay".into(), &JsValue::from_f64(40.0)).unwrap();

    let overrides = overrides_from_js(&options);
    assert_eq!(overrides.animation, None);
    assert_eq!(overrides.easing, None);
    assert_eq!(overrides.delay, Some(40.0));

    assert_eq!(overrides_from_js(&JsValue::NULL), Default::default());
}

#[wasm_bindgen_test]
async fn transform_transitionend_settles_and_disarms() {
    let (container, items) = list("sort-item");
    let sortable = SortableList::new(container.clone(), JsValue::UNDEFINED).unwrap();

    fire(&items[0], "mousedown");
    fire(&items[0], "dragstart");
    fire(&items[3], "dragenter");
    assert_eq!(ids(&container), ["B", "C", "D", "A"]);
    assert!(sortable.is_animating());

    next_frame().await;
    assert!(!inline_transform(&items[1]).is_empty(), "slide is playing");

    for item in &items[1..] {
        fire_transition_end(item, "opacity");
    }
    assert!(sortable.is_animating());
    assert_eq!(items[0].get_attribute("draggable").as_deref(), Some("true"));

    for item in &items[1..] {
        fire_transition_end(item, "transform");
    }
    assert!(!sortable.is_animating());
    assert_eq!(inline_transform(&items[1]), "");
    assert_eq!(items[0].get_attribute("draggable").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
async fn instant_animation_settles_on_the_next_frame() {
    let (container, items) = list("sort-item");
    let options = Object::new();
    Reflect::set(&options, &"animation".into(), &JsValue::from_f64(0.0)).unwrap();
    let sortable = SortableList::new(container, options.into()).unwrap();

    fire(&items[0], "mousedown");
    fire(&items[0], "dragstart");
    fire(&items[2], "dragenter");
    assert!(sortable.is_animating());

    next_frame().await;
    assert!(!sortable.is_animating());
    assert_eq!(inline_transform(&items[1]), "");
    assert_eq!(items[0].get_attribute("draggable").as_deref(), Some("false"));
}
