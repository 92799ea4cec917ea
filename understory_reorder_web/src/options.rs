// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use js_sys::Reflect;
use understory_reorder::ReorderOverrides;
use wasm_bindgen::JsValue;

/// Reads a JS options object into [`ReorderOverrides`].
///
/// Only own or inherited properties of the expected `typeof` are taken;
/// anything else, including a non-object `value`, reads as unset.
pub fn overrides_from_js(value: &JsValue) -> ReorderOverrides {
    if !value.is_object() {
        return ReorderOverrides::default();
    }
    ReorderOverrides {
        sort_item: string_field(value, "sortItem"),
        sort_item_class: string_field(value, "sortItemClass"),
        handle: string_field(value, "handle"),
        handle_class: string_field(value, "handleClass"),
        animation: number_field(value, "animation"),
        delay: number_field(value, "delay"),
        easing: string_field(value, "easing"),
        throttle: number_field(value, "throttle"),
    }
}

fn field(object: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(object, &JsValue::from_str(key)).ok()
}

fn string_field(object: &JsValue, key: &str) -> Option<String> {
    field(object, key)?.as_string()
}

fn number_field(object: &JsValue, key: &str) -> Option<f64> {
    field(object, key)?.as_f64()
}
