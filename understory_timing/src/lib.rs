// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives.
//!
//! UI runtimes schedule a surprising amount of work "later": settle callbacks
//! after an animation, periodic ticks for auto-advancing views, debounce
//! windows, caret blink. This crate provides a tiny, deterministic queue for
//! that kind of work without owning a clock or an executor.
//!
//! - [`TimerQueue`] stores one-shot and repeating timers, each carrying a
//!   caller-chosen payload `K`.
//! - [`TimerId`] is the cancellable handle returned when scheduling.
//! - [`TimerQueue::poll`] pops the earliest timer whose deadline is at or
//!   before the host-supplied `now`, returning it as a [`Fired`] record.
//!
//! Time is expressed as [`Duration`](core::time::Duration) since an arbitrary,
//! host-defined epoch. The queue never reads a clock, which keeps it usable in
//! tests and on platforms without one.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::TimerQueue;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Job {
//!     Settle,
//!     Tick,
//! }
//!
//! let mut timers = TimerQueue::new();
//! let settle = timers.schedule_once(Duration::from_millis(300), Job::Settle);
//! timers.schedule_repeating(Duration::from_secs(1), Duration::from_secs(1), Job::Tick);
//!
//! // Nothing is due yet.
//! assert!(timers.poll(Duration::from_millis(100)).is_none());
//!
//! // The one-shot fires once and is removed.
//! let fired = timers.poll(Duration::from_millis(400)).unwrap();
//! assert_eq!(fired.id, settle);
//! assert_eq!(fired.payload, Job::Settle);
//! assert!(!timers.contains(settle));
//!
//! // A repeating timer fires once per poll, even if several intervals elapsed.
//! let fired = timers.poll(Duration::from_millis(3_500)).unwrap();
//! assert_eq!(fired.payload, Job::Tick);
//! assert!(timers.poll(Duration::from_millis(3_500)).is_none());
//! assert_eq!(timers.next_deadline(), Some(Duration::from_secs(4)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Fired, TimerId, TimerQueue};
