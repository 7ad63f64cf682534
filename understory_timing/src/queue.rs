// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-ordered timer queue.

use alloc::vec::Vec;
use core::time::Duration;

/// Handle to a scheduled timer.
///
/// Handles are unique for the lifetime of a [`TimerQueue`]; a cancelled or
/// fired one-shot handle is never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that came due during [`TimerQueue::poll`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<K> {
    /// Handle of the timer that fired.
    pub id: TimerId,
    /// Deadline the timer was scheduled for (at or before the polled `now`).
    pub deadline: Duration,
    /// Caller payload attached when scheduling.
    pub payload: K,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TimerId,
    deadline: Duration,
    interval: Option<Duration>,
    payload: K,
}

/// A small queue of one-shot and repeating timers.
///
/// The queue is designed for the handful of timers a single widget or view
/// controller owns, so entries live in a flat `Vec` and lookups are linear.
/// Ties between equal deadlines are broken by scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of scheduled timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules a timer that fires once at `deadline`.
    pub fn schedule_once(&mut self, deadline: Duration, payload: K) -> TimerId {
        self.push(deadline, None, payload)
    }

    /// Schedules a timer that first fires at `first` and then every `interval`.
    ///
    /// Intervals shorter than one nanosecond are treated as one nanosecond.
    pub fn schedule_repeating(
        &mut self,
        first: Duration,
        interval: Duration,
        payload: K,
    ) -> TimerId {
        let interval = interval.max(Duration::from_nanos(1));
        self.push(first, Some(interval), payload)
    }

    /// Cancels a timer. Returns `true` if it was still scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Cancels every timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if `id` is still scheduled.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the pending deadline of `id`, if it is still scheduled.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.deadline)
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts can use this to decide when to wake up next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Iterates over the payloads of all scheduled timers in scheduling order.
    pub fn payloads(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|entry| &entry.payload)
    }

    fn push(&mut self, deadline: Duration, interval: Option<Duration>, payload: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            interval,
            payload,
        });
        id
    }

    fn earliest_due(&self, now: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.id))
            .map(|(slot, _)| slot)
    }
}

impl<K: Clone> TimerQueue<K> {
    /// Pops the earliest timer whose deadline is at or before `now`.
    ///
    /// One-shot timers are removed. Repeating timers stay scheduled and their
    /// next deadline is moved to the first interval boundary strictly after
    /// `now`; intervals that elapsed between two polls are skipped rather than
    /// reported one by one.
    pub fn poll(&mut self, now: Duration) -> Option<Fired<K>> {
        let slot = self.earliest_due(now)?;
        let entry = &self.entries[slot];
        let interval = entry.interval;
        let fired = Fired {
            id: entry.id,
            deadline: entry.deadline,
            payload: entry.payload.clone(),
        };
        match interval {
            Some(interval) => {
                self.entries[slot].deadline = next_boundary(fired.deadline, interval, now);
            }
            None => {
                self.entries.remove(slot);
            }
        }
        Some(fired)
    }
}

fn next_boundary(deadline: Duration, interval: Duration, now: Duration) -> Duration {
    let interval_nanos = interval.as_nanos().max(1);
    let behind = now.saturating_sub(deadline).as_nanos();
    let advance = interval_nanos.saturating_mul(behind / interval_nanos + 1);
    deadline.saturating_add(Duration::from_nanos(
        u64::try_from(advance).unwrap_or(u64::MAX),
    ))
}
