// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based offset transitions.

use core::time::Duration;

/// Easing curve applied to a transition's linear progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Cubic bezier `(0.42, 0, 0.58, 1)`, the common "ease in out" curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve.
    ///
    /// Inputs outside `[0, 1]` are clamped.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => fraction,
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

const BISECTION_STEPS: usize = 40;

/// Evaluates a CSS-style cubic bezier easing curve at `fraction`.
///
/// The curve's x component is monotonic for control points in `[0, 1]`, so
/// bisection on `t` is enough to find the parameter for a given progress.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    let mut lo = 0.0;
    let mut hi = 1.0;
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) * 0.5;
        if bezier_component(x1, x2, mid) < fraction {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_component(y1, y2, (lo + hi) * 0.5)
}

fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// A horizontal offset animating from one value to another.
///
/// Transitions are sampled, not stepped: the host asks for the offset at its
/// current time and gets the eased interpolation.
///
/// ```rust
/// use core::time::Duration;
/// use understory_carousel::{Easing, Transition};
///
/// let t = Transition::new(-300.0, -600.0, Duration::ZERO, Duration::from_millis(300))
///     .with_easing(Easing::Linear);
/// assert_eq!(t.sample(Duration::from_millis(150)), -450.0);
/// assert_eq!(t.sample(Duration::from_secs(1)), -600.0);
/// assert!(t.is_finished(Duration::from_millis(300)));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Creates a transition from `from` to `to` starting at `start`.
    #[must_use]
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::default(),
        }
    }

    /// Replaces the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Offset at the start of the transition.
    #[must_use]
    pub fn from_offset(&self) -> f64 {
        self.from
    }

    /// Offset the transition ends at.
    #[must_use]
    pub fn to_offset(&self) -> f64 {
        self.to
    }

    /// Time the transition ends.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.start.saturating_add(self.duration)
    }

    /// Returns `true` once `now` reaches the end of the transition.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }

    /// Eased offset at `now`.
    ///
    /// Times before the start sample as `from`; times after the end as `to`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> f64 {
        if self.duration.is_zero() || self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start);
        let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.transform(fraction)
    }
}
