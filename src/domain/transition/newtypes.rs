// SPDX-License-Identifier: MPL-2.0
//! Transition newtypes.
//!
//! This module provides type-safe wrappers for the values flowing through a
//! step transition, ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Transition Defaults
// =============================================================================

/// Default values for a step transition.
pub mod transition_defaults {
    /// Default full transition duration (fade-out + fade-in) in milliseconds.
    pub const DURATION_MS: f64 = 1000.0;
    /// Longest accepted transition duration in milliseconds (one day).
    pub const MAX_DURATION_MS: f64 = 86_400_000.0;
    /// Default timing function name.
    pub const TIMING_FUNCTION: &str = "ease-in-out";
}

// =============================================================================
// Step
// =============================================================================

/// Index selecting which item of an ordered list is current.
///
/// Steps are signed: callers may hand in negative or out-of-range values,
/// which simply select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Step(i64);

impl Step {
    /// Creates a step from a raw index.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Truncates a fractional step toward zero.
    ///
    /// Returns `None` for NaN and infinities.
    ///
    /// # Example
    ///
    /// ```
    /// use step_fade::domain::transition::Step;
    ///
    /// assert_eq!(Step::truncate(2.9), Some(Step::new(2)));
    /// assert_eq!(Step::truncate(-1.5), Some(Step::new(-1)));
    /// assert_eq!(Step::truncate(f64::NAN), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(value: f64) -> Option<Self> {
        if value.is_finite() {
            // Saturating float-to-int cast.
            Some(Self(value.trunc() as i64))
        } else {
            None
        }
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the step as a list index, or `None` if negative.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Returns the following step.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the preceding step.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<i64> for Step {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<usize> for Step {
    fn from(value: usize) -> Self {
        Self(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// Opacity level driving the fade, guaranteed to be within [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Visibility(f32);

impl Visibility {
    /// Fully transparent.
    pub const HIDDEN: Self = Self(0.0);
    /// Fully opaque.
    pub const VISIBLE: Self = Self(1.0);

    /// Creates a visibility level, clamping to [0, 1]. NaN maps to hidden.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self::HIDDEN
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Returns the raw opacity value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the level is fully opaque.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.0 >= 1.0
    }

    /// Returns whether the level is fully transparent.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Full transition duration in milliseconds (fade-out + fade-in).
///
/// Each phase lasts half of it. Negative and non-finite values collapse to
/// zero, which makes the transition instant; values above
/// [`transition_defaults::MAX_DURATION_MS`] are capped.
///
/// # Example
///
/// ```
/// use step_fade::domain::transition::TransitionDuration;
/// use std::time::Duration;
///
/// let duration = TransitionDuration::default();
/// assert_eq!(duration.as_millis(), 1000.0);
/// assert_eq!(duration.phase(), Duration::from_millis(500));
///
/// assert!(TransitionDuration::new(-20.0).is_instant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TransitionDuration(f64);

impl TransitionDuration {
    /// Creates a duration in milliseconds.
    #[must_use]
    pub fn new(millis: f64) -> Self {
        if millis.is_finite() && millis > 0.0 {
            Self(millis.min(transition_defaults::MAX_DURATION_MS))
        } else {
            Self(0.0)
        }
    }

    /// Returns the full duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Returns the length of one phase in milliseconds.
    #[must_use]
    pub fn phase_millis(self) -> f64 {
        self.0 / 2.0
    }

    /// Returns the length of one phase in seconds.
    #[must_use]
    pub fn phase_secs(self) -> f64 {
        self.phase_millis() / 1000.0
    }

    /// Returns the length of one phase.
    #[must_use]
    pub fn phase(self) -> Duration {
        Duration::try_from_secs_f64(self.phase_secs()).unwrap_or(Duration::MAX)
    }

    /// Returns whether the transition happens without delay.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_defaults::DURATION_MS)
    }
}

// =============================================================================
// TimingFunction
// =============================================================================

/// Name of an easing curve, handed verbatim to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimingFunction(String);

impl TimingFunction {
    /// Creates a timing function from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        Self(transition_defaults::TIMING_FUNCTION.to_string())
    }
}

impl From<&str> for TimingFunction {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TimingFunction {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// OverlapPolicy
// =============================================================================

/// How a step request treats commits that are already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Every request schedules its own commit; nothing is cancelled.
    #[default]
    Stack,
    /// A single pending slot is retargeted by later requests.
    Coalesce,
}
