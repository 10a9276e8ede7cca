// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent step transition.
//!
//! Given an ordered list of items and an externally driven step, the item at
//! the previous step fades out for half the transition duration, the item at
//! the new step replaces it, then fades in for the remaining half.
//!
//! - [`state`] - the state machine deciding which step is displayed and how
//!   visible it is
//! - [`render`] - the render-tree contract (container + at most one item)
//! - [`style`] - style records and `transition` declarations
//! - [`easing`] - timing-function names resolved to easing curves
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use step_fade::domain::transition::{OverlapPolicy, Step};
//! use step_fade::transition::{render, Message, State, TransitionProps};
//!
//! let items = ["A", "B", "C"];
//! let props = TransitionProps::default();
//! let mut state = State::new(Step::new(0), OverlapPolicy::Stack);
//!
//! let start = Instant::now();
//! state.handle(Message::Request(Step::new(2)), start, props.duration);
//! assert!(state.visibility().is_hidden());
//!
//! state.fire_due(start + Duration::from_millis(500), props.duration);
//! let tree = render(&state, &items, &props);
//! assert_eq!(tree.item.map(|rendered| *rendered.item), Some("C"));
//! ```

pub mod easing;
pub mod render;
pub mod state;
pub mod style;

pub use easing::Easing;
pub use render::{render, RenderTree, RenderedItem, TransitionProps};
pub use state::{CommitId, Effect, Message, PendingCommit, Phase, State};
pub use style::StyleMap;
