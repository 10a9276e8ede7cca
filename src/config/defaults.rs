// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: Fade duration and easing
//! - **Demo**: Content and pacing of the demo window

use crate::domain::transition::transition_defaults;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default full transition duration (fade-out + fade-in) in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: f64 = transition_defaults::DURATION_MS;

/// Default timing function name.
pub const DEFAULT_TIMING_FUNCTION: &str = transition_defaults::TIMING_FUNCTION;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Cards shown when neither the command line nor the config provides any.
pub const DEFAULT_DEMO_ITEMS: [&str; 4] = [
    "Welcome",
    "Each step fades out, swaps, then fades in",
    "Use the arrow keys or the buttons",
    "That's all",
];

/// Minimum auto-advance interval (in seconds).
pub const MIN_AUTO_ADVANCE_SECS: u64 = 1;

/// Maximum auto-advance interval (in seconds).
pub const MAX_AUTO_ADVANCE_SECS: u64 = 600;
