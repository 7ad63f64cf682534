// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Periodic forward steps while the carousel is idle.

use core::time::Duration;

use understory_timing::{TimerId, TimerQueue};

use crate::binding::Binding;
use crate::carousel::Scheduled;
use crate::config::AutoscrollConfig;

/// Observable state of the autoscroll timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutoscrollState {
    /// No timer is scheduled.
    Stopped,
    /// A repeating timer is scheduled.
    Running {
        /// Time between ticks.
        interval: Duration,
    },
}

/// Owns the repeating autoscroll timer.
///
/// The timer exists exactly while the carousel is mounted and the enabled
/// binding reads `true`; at most one timer is ever scheduled.
#[derive(Debug)]
pub(crate) struct Autoscroll {
    enabled: Binding<bool>,
    interval: Duration,
    timer: Option<TimerId>,
}

impl Autoscroll {
    pub(crate) fn new(config: AutoscrollConfig) -> Self {
        let config = config.sanitized();
        Self {
            enabled: config.enabled,
            interval: config.interval,
            timer: None,
        }
    }

    pub(crate) fn enabled(&self) -> &Binding<bool> {
        &self.enabled
    }

    pub(crate) fn state(&self) -> AutoscrollState {
        match self.timer {
            Some(_) => AutoscrollState::Running {
                interval: self.interval,
            },
            None => AutoscrollState::Stopped,
        }
    }

    /// Starts a fresh timer, replacing any running one.
    pub(crate) fn start(&mut self, now: Duration, timers: &mut TimerQueue<Scheduled>) {
        self.stop(timers);
        self.timer = Some(timers.schedule_repeating(
            now.saturating_add(self.interval),
            self.interval,
            Scheduled::Autoscroll,
        ));
        log::debug!("autoscroll started, interval {:?}", self.interval);
    }

    /// Cancels the timer if one is running.
    pub(crate) fn stop(&mut self, timers: &mut TimerQueue<Scheduled>) {
        if let Some(timer) = self.timer.take() {
            timers.cancel(timer);
            log::debug!("autoscroll stopped");
        }
    }

    /// Starts or stops the timer so it runs iff `mounted` and enabled.
    pub(crate) fn sync(
        &mut self,
        mounted: bool,
        now: Duration,
        timers: &mut TimerQueue<Scheduled>,
    ) {
        let wanted = mounted && self.enabled.get();
        match (wanted, self.timer.is_some()) {
            (true, false) => self.start(now, timers),
            (false, true) => self.stop(timers),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autoscroll(enabled: bool) -> (Autoscroll, Binding<bool>) {
        let binding = Binding::new(enabled);
        let config = AutoscrollConfig::new(binding.clone()).with_interval(Duration::from_secs(2));
        (Autoscroll::new(config), binding)
    }

    #[test]
    fn sync_follows_binding_and_mount_state() {
        let mut timers = TimerQueue::new();
        let (mut autoscroll, enabled) = autoscroll(true);

        autoscroll.sync(false, Duration::ZERO, &mut timers);
        assert_eq!(autoscroll.state(), AutoscrollState::Stopped);

        autoscroll.sync(true, Duration::ZERO, &mut timers);
        assert_eq!(
            autoscroll.state(),
            AutoscrollState::Running {
                interval: Duration::from_secs(2)
            }
        );
        assert_eq!(timers.next_deadline(), Some(Duration::from_secs(2)));

        enabled.set(false);
        autoscroll.sync(true, Duration::ZERO, &mut timers);
        assert_eq!(autoscroll.state(), AutoscrollState::Stopped);
        assert!(timers.is_empty());
    }

    #[test]
    fn restarting_never_duplicates_timers() {
        let mut timers = TimerQueue::new();
        let (mut autoscroll, _) = autoscroll(true);

        autoscroll.start(Duration::ZERO, &mut timers);
        autoscroll.start(Duration::from_secs(1), &mut timers);
        autoscroll.sync(true, Duration::from_secs(1), &mut timers);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(Duration::from_secs(3)));

        autoscroll.stop(&mut timers);
        autoscroll.stop(&mut timers);
        assert!(timers.is_empty());
    }

    #[test]
    fn zero_interval_falls_back_to_default() {
        let config = AutoscrollConfig::new(Binding::new(true)).with_interval(Duration::ZERO);
        let mut timers = TimerQueue::new();
        let mut autoscroll = Autoscroll::new(config);
        autoscroll.start(Duration::ZERO, &mut timers);
        assert_eq!(timers.next_deadline(), Some(Duration::from_secs(3)));
    }
}
