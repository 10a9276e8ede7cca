// SPDX-License-Identifier: MPL-2.0
//! Step transition value objects.

pub mod newtypes;

pub use newtypes::{
    transition_defaults, OverlapPolicy, Step, TimingFunction, TransitionDuration, Visibility,
};
