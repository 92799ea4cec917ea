// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder_web --heading-base-level=0

//! DOM binding for `understory_reorder`.
//!
//! This crate provides a [`SortHost`](understory_reorder::SortHost) over a
//! container `web_sys::Element` and a `wasm_bindgen` class, `SortableList`,
//! that wires the browser's native drag events to a
//! [`ReorderController`](understory_reorder::ReorderController) when targeting
//! `wasm32`. On other targets the crate is empty.
//!
//! # Usage from JavaScript
//!
//! ```js
//! import { SortableList } from "./understory_reorder_web.js";
//!
//! // Handle-gated: items match `.sort-item`, dragging starts from `.grip`.
//! const list = new SortableList(document.querySelector(".list"), {
//!   handle: ".grip",
//!   animation: 250,
//! });
//!
//! // Class-gated: every `.row` is draggable except while rows are sliding.
//! const rows = SortableList.withClasses(document.querySelector(".rows"), {
//!   sortItemClass: "row",
//! });
//!
//! // Detach listeners before dropping the container.
//! list.destroy();
//! ```
//!
//! Recognized options: `sortItem`, `handle` (selector variant), `sortItemClass`,
//! `handleClass` (class variant), `animation`, `delay`, `throttle` (numbers, in
//! milliseconds) and `easing` (a CSS timing function). Missing or wrong-typed
//! fields fall back to the defaults; the constructors only fail when there is
//! no `window` or a listener cannot be attached.
//!
//! # Usage from Rust
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(
//!     container: web_sys::Element,
//! ) -> Result<understory_reorder_web::SortableList, wasm_bindgen::JsValue> {
//!     understory_reorder_web::SortableList::from_options(
//!         container,
//!         understory_reorder::ReorderOptions::handle_based(),
//!     )
//! }
//! ```
//!
//! Styling the dragged item (for example a background colour between
//! `dragstart` and `dragend`) is left to the page's own listeners.

#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod list;
#[cfg(target_arch = "wasm32")]
mod options;

#[cfg(target_arch = "wasm32")]
pub use host::DomHost;
#[cfg(target_arch = "wasm32")]
pub use list::SortableList;
#[cfg(target_arch = "wasm32")]
pub use options::overrides_from_js;
