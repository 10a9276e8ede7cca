// SPDX-License-Identifier: MPL-2.0
//! Style records and transition declarations.
//!
//! Computed styles declare how the host should interpolate the container
//! height and the wrapper opacity. Caller overrides are merged on top,
//! key by key.
//!
//! Height durations are written in seconds and opacity durations in
//! milliseconds. Existing stylesheets depend on that mix, so it is kept.

use crate::domain::transition::{TimingFunction, TransitionDuration, Visibility};
use std::collections::BTreeMap;

/// Style property carrying a transition declaration.
pub const TRANSITION: &str = "transition";

/// Style property carrying the opacity level.
pub const OPACITY: &str = "opacity";

/// Flat string-to-string style record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a property, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the record has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Shallow merge: every key of `overrides` replaces the one in `self`.
    #[must_use]
    pub fn merged_with(&self, overrides: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (key, value) in &overrides.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `height <phase>s <timing>` for the outer container.
#[must_use]
pub fn height_transition(duration: TransitionDuration, timing: &TimingFunction) -> String {
    format!("height {}s {}", duration.phase_secs(), timing)
}

/// `opacity <phase>ms <timing>` for the item wrapper.
#[must_use]
pub fn opacity_transition(duration: TransitionDuration, timing: &TimingFunction) -> String {
    format!("opacity {}ms {}", duration.phase_millis(), timing)
}

/// Computed container style with caller overrides applied.
#[must_use]
pub fn container_style(
    duration: TransitionDuration,
    timing: &TimingFunction,
    overrides: &StyleMap,
) -> StyleMap {
    StyleMap::new()
        .with(TRANSITION, height_transition(duration, timing))
        .merged_with(overrides)
}

/// Computed item wrapper style with caller overrides applied.
#[must_use]
pub fn item_style(
    visibility: Visibility,
    duration: TransitionDuration,
    timing: &TimingFunction,
    overrides: &StyleMap,
) -> StyleMap {
    StyleMap::new()
        .with(OPACITY, visibility.value().to_string())
        .with(TRANSITION, opacity_transition(duration, timing))
        .merged_with(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_declarations_use_half_duration() {
        let duration = TransitionDuration::default();
        let timing = TimingFunction::default();

        assert_eq!(height_transition(duration, &timing), "height 0.5s ease-in-out");
        assert_eq!(opacity_transition(duration, &timing), "opacity 500ms ease-in-out");
    }

    #[test]
    fn timing_function_is_passed_through_verbatim() {
        let timing = TimingFunction::new("cubic-bezier(0.1, 0.7, 1.0, 0.1)");
        let declaration = opacity_transition(TransitionDuration::new(300.0), &timing);
        assert_eq!(declaration, "opacity 150ms cubic-bezier(0.1, 0.7, 1.0, 0.1)");
    }

    #[test]
    fn caller_overrides_win_on_collision() {
        let overrides = StyleMap::new()
            .with(OPACITY, "0.8")
            .with("padding", "4px");
        let style = item_style(
            Visibility::VISIBLE,
            TransitionDuration::default(),
            &TimingFunction::default(),
            &overrides,
        );

        assert_eq!(style.get(OPACITY), Some("0.8"));
        assert_eq!(style.get("padding"), Some("4px"));
        assert_eq!(style.get(TRANSITION), Some("opacity 500ms ease-in-out"));
    }

    #[test]
    fn container_override_replaces_transition() {
        let overrides = StyleMap::new().with(TRANSITION, "none");
        let style = container_style(
            TransitionDuration::default(),
            &TimingFunction::default(),
            &overrides,
        );
        assert_eq!(style.get(TRANSITION), Some("none"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn opacity_reflects_visibility() {
        let style = item_style(
            Visibility::HIDDEN,
            TransitionDuration::default(),
            &TimingFunction::default(),
            &StyleMap::new(),
        );
        assert_eq!(style.get(OPACITY), Some("0"));
    }

    #[test]
    fn collects_from_pairs() {
        let style: StyleMap = [("color", "red"), ("margin", "0")].into_iter().collect();
        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "margin"]);
    }
}
