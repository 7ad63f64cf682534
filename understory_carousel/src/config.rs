// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use core::fmt;
use core::time::Duration;

use crate::binding::Binding;
use crate::transition::Easing;

/// Default duration of step and snap-back animations.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Default delay between a programmatic index change and the window rebuild.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Default autoscroll interval.
pub const DEFAULT_AUTOSCROLL_INTERVAL: Duration = Duration::from_secs(3);

/// Default commit threshold divisor: a drag commits past a third of the width.
pub const DEFAULT_COMMIT_DIVISOR: f64 = 3.0;

/// Rejected configuration value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Spacing must be finite and non-negative.
    InvalidSpacing(f64),
    /// The commit divisor must be finite and at least `1.0`.
    InvalidCommitDivisor(f64),
    /// Autoscroll intervals must be non-zero.
    ZeroInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing(value) => {
                write!(f, "spacing must be finite and non-negative, got {value}")
            }
            Self::InvalidCommitDivisor(value) => {
                write!(f, "commit divisor must be finite and at least 1, got {value}")
            }
            Self::ZeroInterval => f.write_str("autoscroll interval must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Carousel geometry and timing.
///
/// [`Carousel`](crate::Carousel) never rejects a configuration; out-of-range
/// values are replaced by their defaults. Call [`CarouselConfig::validate`]
/// first if bad input should be surfaced to the user instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Horizontal gap between adjacent slots.
    pub spacing: f64,
    /// Duration of step and snap-back animations.
    pub animation_duration: Duration,
    /// Delay before a programmatic index change re-centers the window.
    pub settle_delay: Duration,
    /// Easing curve for every animation.
    pub easing: Easing,
    /// A drag commits once it travels more than `width / commit_divisor`.
    pub commit_divisor: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            settle_delay: DEFAULT_SETTLE_DELAY,
            easing: Easing::default(),
            commit_divisor: DEFAULT_COMMIT_DIVISOR,
        }
    }
}

impl CarouselConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gap between slots.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets the settle delay used for programmatic index changes.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the commit threshold divisor.
    #[must_use]
    pub fn with_commit_divisor(mut self, divisor: f64) -> Self {
        self.commit_divisor = divisor;
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !self.commit_divisor.is_finite() || self.commit_divisor < 1.0 {
            return Err(ConfigError::InvalidCommitDivisor(self.commit_divisor));
        }
        Ok(())
    }

    /// Replaces invalid fields with their defaults.
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if let Err(error) = self.validate() {
            log::warn!("carousel config: {error}; falling back to defaults for invalid fields");
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            self.spacing = defaults.spacing;
        }
        if !self.commit_divisor.is_finite() || self.commit_divisor < 1.0 {
            self.commit_divisor = defaults.commit_divisor;
        }
        self
    }
}

/// Autoscroll configuration.
///
/// `enabled` is a two-way binding: the host may flip it at any time and the
/// carousel starts or stops its timer on the next [`Carousel::sync`](crate::Carousel::sync).
#[derive(Clone, Debug)]
pub struct AutoscrollConfig {
    /// Whether autoscroll is enabled.
    pub enabled: Binding<bool>,
    /// Time between automatic forward steps.
    pub interval: Duration,
}

impl AutoscrollConfig {
    /// Creates a configuration using [`DEFAULT_AUTOSCROLL_INTERVAL`].
    #[must_use]
    pub fn new(enabled: Binding<bool>) -> Self {
        Self {
            enabled,
            interval: DEFAULT_AUTOSCROLL_INTERVAL,
        }
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the interval in seconds.
    ///
    /// Negative, non-finite, or overflowing values keep the current interval.
    #[must_use]
    pub fn with_interval_secs(mut self, seconds: f64) -> Self {
        match Duration::try_from_secs_f64(seconds) {
            Ok(interval) => self.interval = interval,
            Err(_) => log::warn!("ignoring invalid autoscroll interval of {seconds}s"),
        }
        self
    }

    /// Checks the interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    pub(crate) fn sanitized(mut self) -> Self {
        if let Err(error) = self.validate() {
            log::warn!("autoscroll config: {error}; using the default interval");
            self.interval = DEFAULT_AUTOSCROLL_INTERVAL;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults_match_documented_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.animation_duration, Duration::from_millis(300));
        assert_eq!(config.settle_delay, Duration::from_millis(300));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert_eq!(config.commit_divisor, 3.0);
        assert_eq!(config.validate(), Ok(()));

        let autoscroll = AutoscrollConfig::new(Binding::new(true));
        assert_eq!(autoscroll.interval, Duration::from_secs(3));
    }

    #[test]
    fn validate_reports_bad_fields() {
        let config = CarouselConfig::new().with_spacing(-4.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpacing(-4.0)));

        let config = CarouselConfig::new().with_commit_divisor(0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCommitDivisor(0.5))
        );

        let autoscroll =
            AutoscrollConfig::new(Binding::new(true)).with_interval(Duration::ZERO);
        assert_eq!(autoscroll.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn sanitized_replaces_only_invalid_fields() {
        let config = CarouselConfig::new()
            .with_spacing(f64::NAN)
            .with_commit_divisor(4.0)
            .sanitized();
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.commit_divisor, 4.0);

        let autoscroll = AutoscrollConfig::new(Binding::new(false))
            .with_interval(Duration::ZERO)
            .sanitized();
        assert_eq!(autoscroll.interval, DEFAULT_AUTOSCROLL_INTERVAL);
    }

    #[test]
    fn interval_in_seconds_rejects_garbage() {
        let autoscroll = AutoscrollConfig::new(Binding::new(true)).with_interval_secs(1.5);
        assert_eq!(autoscroll.interval, Duration::from_millis(1_500));

        let autoscroll = autoscroll.with_interval_secs(-2.0).with_interval_secs(f64::INFINITY);
        assert_eq!(autoscroll.interval, Duration::from_millis(1_500));
    }

    #[test]
    fn errors_render_human_readable_messages() {
        assert_eq!(
            ConfigError::ZeroInterval.to_string(),
            "autoscroll interval must be non-zero"
        );
        assert_eq!(
            ConfigError::InvalidSpacing(-1.0).to_string(),
            "spacing must be finite and non-negative, got -1"
        );
    }
}
