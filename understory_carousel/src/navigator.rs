// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal offset bookkeeping for animated navigation.
//!
//! The strip of three slots rests at `-(width + spacing)`, which centers the
//! middle slot. A forward step animates toward `-2 * (width + spacing)` (the
//! next slot), a backward step toward `0` (the previous slot). Once the
//! animation settles the offset snaps back to rest and the caller rebuilds the
//! window around the new selection, so the snap itself is invisible.
//!
//! Every transition is tagged with a generation. Scheduling a new transition,
//! interrupting one, or unmounting bumps the generation, and a settle timer
//! carrying an older generation is ignored.

use core::time::Duration;

use understory_timing::{TimerId, TimerQueue};

use crate::carousel::Scheduled;
use crate::config::CarouselConfig;
use crate::index::Direction;
use crate::transition::{Easing, Transition};

#[derive(Debug)]
pub(crate) struct Navigator {
    width: Option<f64>,
    spacing: f64,
    resting: f64,
    transition: Option<Transition>,
    last_settled: usize,
    generation: u64,
    pending: Option<TimerId>,
    animation_duration: Duration,
    settle_delay: Duration,
    easing: Easing,
}

impl Navigator {
    pub(crate) fn new(config: &CarouselConfig, selected: usize) -> Self {
        Self {
            width: None,
            spacing: config.spacing,
            resting: 0.0,
            transition: None,
            last_settled: selected,
            generation: 0,
            pending: None,
            animation_duration: config.animation_duration,
            settle_delay: config.settle_delay,
            easing: config.easing,
        }
    }

    pub(crate) fn width(&self) -> Option<f64> {
        self.width
    }

    pub(crate) fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    pub(crate) fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub(crate) fn last_settled(&self) -> usize {
        self.last_settled
    }

    pub(crate) fn set_last_settled(&mut self, index: usize) {
        self.last_settled = index;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new container width. Non-positive or non-finite widths mean
    /// "not laid out yet". Returns `true` if the width changed.
    ///
    /// While nothing is animating the offset moves with the rest position, so
    /// any drag displacement from rest is kept.
    pub(crate) fn set_width(&mut self, width: f64) -> bool {
        let width = (width.is_finite() && width > 0.0).then_some(width);
        if width == self.width {
            return false;
        }
        let before = self.settle_offset();
        self.width = width;
        if self.pending.is_none() {
            self.transition = None;
            self.resting += self.settle_offset() - before;
        }
        true
    }

    /// Distance between the leading edges of adjacent slots.
    pub(crate) fn pitch(&self) -> Option<f64> {
        self.width.map(|width| width + self.spacing)
    }

    /// Offset at which the middle slot is centered.
    pub(crate) fn settle_offset(&self) -> f64 {
        self.pitch().map_or(0.0, |pitch| -pitch)
    }

    /// Offset that brings the neighbour in `direction` to the center.
    pub(crate) fn target_offset(&self, direction: Direction) -> f64 {
        match (direction, self.pitch()) {
            (Direction::Forward, Some(pitch)) => -2.0 * pitch,
            _ => 0.0,
        }
    }

    /// Render offset at `now`.
    pub(crate) fn offset_at(&self, now: Duration) -> f64 {
        match &self.transition {
            Some(transition) => transition.sample(now),
            None => self.resting,
        }
    }

    pub(crate) fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Moves the resting offset 1:1 with a drag sample.
    pub(crate) fn drag_by(&mut self, delta: f64) {
        self.resting += delta;
    }

    /// Cancels a pending settle and snaps to rest.
    ///
    /// Returns `true` if a transition was interrupted, in which case the caller
    /// must rebuild the window around [`Navigator::last_settled`].
    pub(crate) fn interrupt(&mut self, timers: &mut TimerQueue<Scheduled>) -> bool {
        let interrupted = self.invalidate(timers);
        self.transition = None;
        self.resting = self.settle_offset();
        interrupted
    }

    /// Bumps the generation and cancels the pending settle, if any.
    pub(crate) fn invalidate(&mut self, timers: &mut TimerQueue<Scheduled>) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some(timer) => {
                timers.cancel(timer);
                true
            }
            None => false,
        }
    }

    /// Animates from the current offset to `to` and schedules the settle
    /// `settle_after` from `now`. Returns the transition's generation.
    pub(crate) fn animate_to(
        &mut self,
        to: f64,
        now: Duration,
        settle_after: Duration,
        timers: &mut TimerQueue<Scheduled>,
    ) -> u64 {
        let from = self.offset_at(now);
        self.invalidate(timers);
        let generation = self.generation;
        self.transition = Some(
            Transition::new(from, to, now, self.animation_duration).with_easing(self.easing),
        );
        self.resting = to;
        self.pending = Some(timers.schedule_once(
            now.saturating_add(settle_after),
            Scheduled::Settle { generation },
        ));
        generation
    }

    /// Handles a settle timer. Returns `false` for a stale generation.
    pub(crate) fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            log::trace!(
                "ignoring stale settle (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.pending = None;
        self.transition = None;
        self.resting = self.settle_offset();
        true
    }

    /// Forgets all in-flight work, as on unmount.
    pub(crate) fn reset(&mut self, timers: &mut TimerQueue<Scheduled>) {
        self.interrupt(timers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(width: f64, spacing: f64) -> Navigator {
        let config = CarouselConfig::new().with_spacing(spacing);
        let mut navigator = Navigator::new(&config, 0);
        navigator.set_width(width);
        navigator
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn rest_and_targets_follow_pitch() {
        let navigator = laid_out(300.0, 10.0);
        assert_eq!(navigator.pitch(), Some(310.0));
        assert_eq!(navigator.settle_offset(), -310.0);
        assert_eq!(navigator.offset_at(Duration::ZERO), -310.0);
        assert_eq!(navigator.target_offset(Direction::Forward), -620.0);
        assert_eq!(navigator.target_offset(Direction::Backward), 0.0);
    }

    #[test]
    fn unknown_width_rests_at_zero() {
        let mut navigator = Navigator::new(&CarouselConfig::default(), 0);
        assert_eq!(navigator.width(), None);
        assert_eq!(navigator.settle_offset(), 0.0);
        assert!(!navigator.set_width(-5.0));
        assert!(!navigator.set_width(f64::NAN));
        assert!(navigator.set_width(200.0));
        assert!(!navigator.set_width(200.0));
    }

    #[test]
    fn animate_then_settle_returns_to_rest() {
        let mut timers = TimerQueue::new();
        let mut navigator = laid_out(300.0, 0.0);

        let generation =
            navigator.animate_to(-600.0, ms(0), navigator.animation_duration(), &mut timers);
        assert!(navigator.is_pending());
        assert_eq!(navigator.offset_at(ms(0)), -300.0);
        assert_eq!(navigator.offset_at(ms(300)), -600.0);

        let fired = timers.poll(ms(300)).unwrap();
        assert_eq!(fired.payload, Scheduled::Settle { generation });
        assert!(navigator.settle(generation));
        assert!(!navigator.is_pending());
        assert_eq!(navigator.offset_at(ms(300)), -300.0);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut navigator = laid_out(300.0, 0.0);

        let first = navigator.animate_to(0.0, ms(0), ms(300), &mut timers);
        let second = navigator.animate_to(-600.0, ms(100), ms(300), &mut timers);
        assert_ne!(first, second);
        // The superseded timer was cancelled.
        assert_eq!(timers.len(), 1);

        assert!(!navigator.settle(first));
        assert!(navigator.is_pending());
        assert!(navigator.settle(second));
    }

    #[test]
    fn interrupt_snaps_to_rest_and_cancels() {
        let mut timers = TimerQueue::new();
        let mut navigator = laid_out(300.0, 0.0);
        let generation = navigator.animate_to(0.0, ms(0), ms(300), &mut timers);

        assert!(navigator.interrupt(&mut timers));
        assert!(timers.is_empty());
        assert_eq!(navigator.offset_at(ms(100)), -300.0);
        assert!(!navigator.settle(generation));
        assert!(!navigator.interrupt(&mut timers));
    }

    #[test]
    fn drag_moves_rest_offset() {
        let mut navigator = laid_out(300.0, 0.0);
        navigator.drag_by(-40.0);
        navigator.drag_by(15.0);
        assert_eq!(navigator.offset_at(Duration::ZERO), -325.0);
    }

    #[test]
    fn width_change_keeps_drag_displacement() {
        let mut navigator = laid_out(300.0, 0.0);
        navigator.drag_by(-80.0);
        assert_eq!(navigator.offset_at(Duration::ZERO), -380.0);

        assert!(navigator.set_width(320.0));
        assert_eq!(navigator.offset_at(Duration::ZERO), -400.0);

        navigator.drag_by(80.0);
        assert_eq!(navigator.offset_at(Duration::ZERO), -320.0);
    }

    #[test]
    fn width_change_while_pending_keeps_animation() {
        let mut timers = TimerQueue::new();
        let mut navigator = laid_out(300.0, 0.0);
        navigator.animate_to(-600.0, ms(0), ms(300), &mut timers);

        navigator.set_width(400.0);
        assert!(navigator.transition().is_some());
        assert_eq!(navigator.offset_at(ms(300)), -600.0);
    }
}
