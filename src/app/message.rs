// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::step_view;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the previous card.
    Previous,
    /// Show the next card.
    Next,
    /// Messages for the step view (timer commits, animation frames).
    StepView(step_view::Message),
    /// Periodic tick for auto-advance.
    AutoAdvance(Instant),
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides `[transition] duration_ms`.
    pub duration_ms: Option<f64>,
    /// Overrides `[transition] timing_function`.
    pub timing_function: Option<String>,
    /// Forces the coalescing overlap policy.
    pub coalesce: bool,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Cards to show, overriding the config.
    pub items: Vec<String>,
}
