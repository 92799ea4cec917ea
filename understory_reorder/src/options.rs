// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: typed options, caller overrides, and their merge.
//!
//! Options are fixed once a [`ReorderController`](crate::ReorderController) is
//! built. Callers never construct a full [`ReorderOptions`] by hand; they start
//! from one of the two variant presets and merge a [`ReorderOverrides`] over it.
//!
//! Merging never fails. A missing override keeps the default, and so does an
//! override that is out of range (negative or non-finite durations, empty
//! selectors). With the `serde` feature, a field of the wrong JSON type is
//! read as "not set" and behaves the same way.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};

/// Default selector for sortable children in the handle-gated variant.
pub const DEFAULT_SORT_ITEM_SELECTOR: &str = ".sort-item";
/// Default class for sortable children in the all-items-gated variant.
pub const DEFAULT_SORT_ITEM_CLASS: &str = "sort-item";
/// Default slide duration, in milliseconds.
pub const DEFAULT_ANIMATION_MS: f64 = 150.0;
/// Default delay before a slide starts, in milliseconds.
pub const DEFAULT_DELAY_MS: f64 = 0.0;
/// Default CSS timing function for slides.
pub const DEFAULT_EASING: &str = "ease-out";
/// Default drag-enter rate limit window, in milliseconds.
pub const DEFAULT_THROTTLE_MS: f64 = 50.0;

/// How an element is recognized as a sortable item or a drag handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemMatcher {
    /// A CSS selector. Items are resolved by walking up to the closest match.
    Selector(String),
    /// A bare class name. Items are resolved only when the element itself
    /// carries the class.
    Class(String),
}

impl ItemMatcher {
    /// Returns this matcher as a CSS selector string.
    ///
    /// ```
    /// use understory_reorder::ItemMatcher;
    ///
    /// assert_eq!(ItemMatcher::Class("row".into()).selector(), ".row");
    /// assert_eq!(ItemMatcher::Selector("li > .grip".into()).selector(), "li > .grip");
    /// ```
    #[must_use]
    pub fn selector(&self) -> Cow<'_, str> {
        match self {
            Self::Selector(selector) => Cow::Borrowed(selector),
            Self::Class(class) => Cow::Owned(format!(".{class}")),
        }
    }

    /// Returns a matcher of the same kind with a different pattern.
    #[must_use]
    fn with_pattern(&self, pattern: String) -> Self {
        match self {
            Self::Selector(_) => Self::Selector(pattern),
            Self::Class(_) => Self::Class(pattern),
        }
    }

    fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }
}

/// Which items may start a native drag, and when.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragGating {
    /// An item becomes draggable when its handle receives a pointer-down and
    /// stops being draggable once the slide batch started by its drag settles.
    #[default]
    Handle,
    /// Every item is draggable, except while any slide batch is in flight.
    AllItems,
}

/// Resolved controller configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ReorderOptions {
    /// Recognizes sortable children of the container.
    pub sort_item: ItemMatcher,
    /// Restricts which element inside an item may arm it for dragging.
    ///
    /// Only meaningful with [`DragGating::Handle`]. When `None`, the item
    /// element itself is the handle.
    pub handle: Option<ItemMatcher>,
    /// Drag gating policy.
    pub gating: DragGating,
    /// Slide duration in milliseconds.
    pub animation: f64,
    /// Delay before the slide starts, in milliseconds.
    pub delay: f64,
    /// CSS timing function name, for example `ease-out` or `linear`.
    pub easing: String,
    /// Minimum spacing between two processed drag-enter events, in milliseconds.
    pub throttle: f64,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self::handle_based()
    }
}

impl ReorderOptions {
    /// Defaults for the handle-gated variant: items match `.sort-item`.
    #[must_use]
    pub fn handle_based() -> Self {
        Self {
            sort_item: ItemMatcher::Selector(DEFAULT_SORT_ITEM_SELECTOR.to_string()),
            handle: None,
            gating: DragGating::Handle,
            animation: DEFAULT_ANIMATION_MS,
            delay: DEFAULT_DELAY_MS,
            easing: DEFAULT_EASING.to_string(),
            throttle: DEFAULT_THROTTLE_MS,
        }
    }

    /// Defaults for the all-items-gated variant: items carry the `sort-item` class.
    #[must_use]
    pub fn class_based() -> Self {
        Self {
            sort_item: ItemMatcher::Class(DEFAULT_SORT_ITEM_CLASS.to_string()),
            gating: DragGating::AllItems,
            ..Self::handle_based()
        }
    }

    /// Merges caller overrides over `self`.
    ///
    /// Selector-based options read `sort_item`/`handle`, class-based options
    /// read `sort_item_class`/`handle_class`; the other pair is ignored.
    /// Invalid values keep the current setting.
    #[must_use]
    pub fn merge(mut self, overrides: &ReorderOverrides) -> Self {
        let (item, handle) = if self.sort_item.is_class() {
            (&overrides.sort_item_class, &overrides.handle_class)
        } else {
            (&overrides.sort_item, &overrides.handle)
        };
        if let Some(pattern) = non_empty(item) {
            self.sort_item = self.sort_item.with_pattern(pattern);
        }
        if let Some(pattern) = non_empty(handle) {
            self.handle = Some(self.sort_item.with_pattern(pattern));
        }
        if let Some(easing) = non_empty(&overrides.easing) {
            self.easing = easing;
        }
        merge_duration(&mut self.animation, overrides.animation, "animation");
        merge_duration(&mut self.delay, overrides.delay, "delay");
        merge_duration(&mut self.throttle, overrides.throttle, "throttle");
        self
    }

    /// Returns the CSS `transition` value used while a slide plays.
    #[must_use]
    pub fn transition(&self) -> crate::Transition<'_> {
        crate::Transition {
            duration: self.animation,
            easing: &self.easing,
            delay: self.delay,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn merge_duration(slot: &mut f64, value: Option<f64>, _field: &'static str) {
    match value {
        Some(ms) if ms.is_finite() && ms >= 0.0 => *slot = ms,
        Some(_ms) => {
            crate::log_debug!(field = _field, value = _ms, "invalid duration, keeping default");
        }
        None => {}
    }
}

/// Caller-supplied partial configuration.
///
/// Field names follow the options object accepted by the web binding
/// (`sortItem`, `sortItemClass`, `handleClass`, ...) when deserialized.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ReorderOverrides {
    /// Item selector, for selector-based options.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub sort_item: Option<String>,
    /// Item class, for class-based options.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub sort_item_class: Option<String>,
    /// Handle selector, for selector-based options.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub handle: Option<String>,
    /// Handle class, for class-based options.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub handle_class: Option<String>,
    /// Slide duration in milliseconds.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub animation: Option<f64>,
    /// Slide delay in milliseconds.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub delay: Option<f64>,
    /// CSS timing function.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub easing: Option<String>,
    /// Drag-enter rate limit window in milliseconds.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub throttle: Option<f64>,
}

#[cfg(feature = "serde")]
mod lenient {
    use serde::de::{Deserialize, Deserializer, IgnoredAny};

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Value(T),
        Other(IgnoredAny),
    }

    /// Reads a value of the expected type, or `None` for anything else.
    pub(super) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match Lenient::<T>::deserialize(deserializer)? {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_based_defaults() {
        let options = ReorderOptions::default();
        assert_eq!(
            options.sort_item,
            ItemMatcher::Selector(".sort-item".to_string())
        );
        assert_eq!(options.handle, None);
        assert_eq!(options.gating, DragGating::Handle);
        assert_eq!(options.animation, 150.0);
        assert_eq!(options.delay, 0.0);
        assert_eq!(options.easing, "ease-out");
        assert_eq!(options.throttle, 50.0);
    }

    #[test]
    fn class_based_defaults() {
        let options = ReorderOptions::class_based();
        assert_eq!(options.sort_item, ItemMatcher::Class("sort-item".to_string()));
        assert_eq!(options.sort_item.selector(), ".sort-item");
        assert_eq!(options.gating, DragGating::AllItems);
        assert_eq!(options.animation, 150.0);
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let merged = ReorderOptions::handle_based().merge(&ReorderOverrides::default());
        assert_eq!(merged, ReorderOptions::handle_based());
    }

    #[test]
    fn selector_options_read_selector_fields() {
        let overrides = ReorderOverrides {
            sort_item: Some("li".to_string()),
            sort_item_class: Some("ignored".to_string()),
            handle: Some(".grip".to_string()),
            animation: Some(250.0),
            easing: Some("linear".to_string()),
            ..ReorderOverrides::default()
        };
        let merged = ReorderOptions::handle_based().merge(&overrides);
        assert_eq!(merged.sort_item, ItemMatcher::Selector("li".to_string()));
        assert_eq!(merged.handle, Some(ItemMatcher::Selector(".grip".to_string())));
        assert_eq!(merged.animation, 250.0);
        assert_eq!(merged.easing, "linear");
    }

    #[test]
    fn class_options_read_class_fields() {
        let overrides = ReorderOverrides {
            sort_item: Some("li".to_string()),
            sort_item_class: Some("row".to_string()),
            handle_class: Some("grip".to_string()),
            ..ReorderOverrides::default()
        };
        let merged = ReorderOptions::class_based().merge(&overrides);
        assert_eq!(merged.sort_item, ItemMatcher::Class("row".to_string()));
        assert_eq!(merged.handle, Some(ItemMatcher::Class("grip".to_string())));
        assert_eq!(merged.handle.unwrap().selector(), ".grip");
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let overrides = ReorderOverrides {
            sort_item: Some("   ".to_string()),
            animation: Some(-1.0),
            delay: Some(f64::NAN),
            throttle: Some(f64::INFINITY),
            easing: Some(String::new()),
            ..ReorderOverrides::default()
        };
        let merged = ReorderOptions::handle_based().merge(&overrides);
        assert_eq!(merged, ReorderOptions::handle_based());
    }

    #[test]
    fn zero_durations_are_accepted() {
        let overrides = ReorderOverrides {
            animation: Some(0.0),
            throttle: Some(0.0),
            ..ReorderOverrides::default()
        };
        let merged = ReorderOptions::handle_based().merge(&overrides);
        assert_eq!(merged.animation, 0.0);
        assert_eq!(merged.throttle, 0.0);
    }
}
