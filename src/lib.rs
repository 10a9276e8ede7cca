// SPDX-License-Identifier: MPL-2.0
//! `step_fade` cross-fades between the items of a list as an externally
//! driven step changes.
//!
//! The [`transition`] module holds the toolkit-independent state machine and
//! render-tree contract; [`ui::step_view`] adapts it to the Iced GUI
//! framework. A small demo application lives in [`app`].

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod transition;
pub mod ui;
