// SPDX-License-Identifier: MPL-2.0
//! Render-tree contract of the step transition.
//!
//! A render tree is one container with at most one wrapped item: the item
//! at the displayed step. It is a plain description; toolkits translate it
//! into widgets.

use super::state::State;
use super::style::{self, StyleMap};
use crate::domain::transition::{Step, TimingFunction, TransitionDuration};

/// Caller-supplied transition configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionProps {
    /// Full fade-out + fade-in duration.
    pub duration: TransitionDuration,
    /// Easing curve name, passed through verbatim.
    pub timing_function: TimingFunction,
    /// Overrides merged over the item wrapper's computed style.
    pub item_style: StyleMap,
    /// Overrides merged over the container's computed style.
    pub container_style: StyleMap,
}

impl TransitionProps {
    /// Sets the full transition duration in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, millis: f64) -> Self {
        self.duration = TransitionDuration::new(millis);
        self
    }

    /// Sets the timing function name.
    #[must_use]
    pub fn with_timing_function(mut self, timing: impl Into<TimingFunction>) -> Self {
        self.timing_function = timing.into();
        self
    }

    /// Sets the item wrapper style overrides.
    #[must_use]
    pub fn with_item_style(mut self, style: StyleMap) -> Self {
        self.item_style = style;
        self
    }

    /// Sets the container style overrides.
    #[must_use]
    pub fn with_container_style(mut self, style: StyleMap) -> Self {
        self.container_style = style;
        self
    }
}

/// The item selected for rendering, with its wrapper style.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<'a, T> {
    /// Index of the item in the caller's list.
    pub step: Step,
    /// Merged wrapper style.
    pub style: StyleMap,
    /// The caller's item.
    pub item: &'a T,
}

/// One container with zero or one wrapped item.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree<'a, T> {
    /// Merged container style.
    pub container: StyleMap,
    /// The displayed item, if the displayed step is in range.
    pub item: Option<RenderedItem<'a, T>>,
}

impl<T> RenderTree<'_, T> {
    /// Number of rendered items (0 or 1).
    #[must_use]
    pub fn item_count(&self) -> usize {
        usize::from(self.item.is_some())
    }
}

/// Selects the item at the displayed step and attaches computed styles.
///
/// An out-of-range or negative displayed step renders an empty container.
pub fn render<'a, T>(state: &State, items: &'a [T], props: &TransitionProps) -> RenderTree<'a, T> {
    let container = style::container_style(
        props.duration,
        &props.timing_function,
        &props.container_style,
    );

    let step = state.displayed_step();
    let item = step
        .index()
        .and_then(|index| items.get(index))
        .map(|item| RenderedItem {
            step,
            style: style::item_style(
                state.visibility(),
                props.duration,
                &props.timing_function,
                &props.item_style,
            ),
            item,
        });

    RenderTree { container, item }
}
