// SPDX-License-Identifier: MPL-2.0
//! Iced widgets and styling.

pub mod design_tokens;
pub mod step_view;

pub use step_view::StepView;
