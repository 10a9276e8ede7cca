// SPDX-License-Identifier: MPL-2.0
//! Easing curves resolved from timing-function names.
//!
//! The render tree carries the timing function verbatim. Toolkits that
//! interpolate opacity themselves need the actual curve, so the usual
//! keywords and `cubic-bezier(x1, y1, x2, y2)` are understood here.

use crate::domain::transition::TimingFunction;

/// Easing curve mapping normalized time to progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Jumps to the end at the start.
    StepStart,
    /// Holds the start until the end.
    StepEnd,
    /// Cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// `ease`
    pub const EASE: Self = Self::CubicBezier(0.25, 0.1, 0.25, 1.0);
    /// `ease-in`
    pub const EASE_IN: Self = Self::CubicBezier(0.42, 0.0, 1.0, 1.0);
    /// `ease-out`
    pub const EASE_OUT: Self = Self::CubicBezier(0.0, 0.0, 0.58, 1.0);
    /// `ease-in-out`
    pub const EASE_IN_OUT: Self = Self::CubicBezier(0.42, 0.0, 0.58, 1.0);

    /// Parses a timing-function name.
    ///
    /// Returns `None` for names that are not understood.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        match name {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::EASE),
            "ease-in" => Some(Self::EASE_IN),
            "ease-out" => Some(Self::EASE_OUT),
            "ease-in-out" => Some(Self::EASE_IN_OUT),
            "step-start" => Some(Self::StepStart),
            "step-end" => Some(Self::StepEnd),
            _ => parse_cubic_bezier(name),
        }
    }

    /// Resolves a timing function, falling back to ease-in-out.
    #[must_use]
    pub fn from_timing_function(timing: &TimingFunction) -> Self {
        Self::parse(timing.as_str()).unwrap_or_else(|| {
            log::warn!("unsupported timing function {timing:?}, using ease-in-out");
            Self::EASE_IN_OUT
        })
    }

    /// Applies the curve to normalized time (clamped to [0, 1]).
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::StepStart => 1.0,
            Easing::StepEnd => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let u = solve_curve_x(x1, x2, t);
                bezier(y1, y2, u)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_IN_OUT
    }
}

fn parse_cubic_bezier(name: &str) -> Option<Easing> {
    let inner = name
        .strip_prefix("cubic-bezier(")?
        .strip_suffix(')')?;

    let values: Vec<f32> = inner
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;

    let [x1, y1, x2, y2] = values[..] else {
        return None;
    };

    // x coordinates must stay within [0, 1] for the curve to be a function of time.
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return None;
    }
    if !y1.is_finite() || !y2.is_finite() {
        return None;
    }

    Some(Easing::CubicBezier(x1, y1, x2, y2))
}

/// One coordinate of the curve at parameter `u`.
fn bezier(p1: f32, p2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_slope(p1: f32, p2: f32, u: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Finds `u` such that the x coordinate equals `x`.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut u = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, u) - x;
        if error.abs() < EPSILON {
            return u;
        }
        let slope = bezier_slope(x1, x2, u);
        if slope.abs() < EPSILON {
            break;
        }
        u -= error / slope;
    }

    // Newton did not converge, bisect.
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    u = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, u);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = u;
        } else {
            high = u;
        }
        u = (low + high) / 2.0;
    }
    u
}
