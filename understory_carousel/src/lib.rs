// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, infinite, gesture-driven carousel.
//!
//! The carousel shows an ordered collection through a three-slot window
//! (previous, current, next) that wraps around at both ends. It reacts to
//! drags, programmatic index changes, and an optional autoscroll timer, and it
//! exposes a render offset for the host to apply to the slot strip.
//!
//! The building blocks are usable on their own:
//!
//! - [`WrapIndex`]: previous/next/clamp arithmetic modulo the collection size.
//! - [`Window`] and [`build_window`]: the three visible indices around a selection.
//! - [`DragTracker`]: turns pointer samples into offset deltas and decides
//!   commit vs. cancel on release.
//! - [`Transition`] and [`Easing`]: sampled offset animations.
//! - [`Binding`]: shared two-way cells for the selection and autoscroll flag.
//! - [`InteractionSignal`]: a last-value-wins "user is interacting" flag.
//!
//! [`Carousel`] ties them together. It never reads a clock and never renders:
//! the host passes a monotonic `now` to every time-dependent call, calls
//! [`Carousel::tick`] to run due settles and autoscroll steps, and draws the
//! rendered slots at [`Carousel::render_offset`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_carousel::{Binding, Carousel, CarouselConfig};
//!
//! let index = Binding::new(2_usize);
//! let mut carousel = Carousel::with_index(
//!     vec!["A", "B", "C", "D"],
//!     index.clone(),
//!     CarouselConfig::default(),
//!     |item: &&str| item.to_string(),
//! );
//! carousel.set_container_width(300.0);
//! carousel.mount(Duration::ZERO);
//! assert_eq!(carousel.slots(), ["B", "C", "D"]);
//!
//! // Drag leftward by half the width and release: one step forward.
//! carousel.drag_began(Point::new(250.0, 0.0), Duration::ZERO);
//! carousel.drag_moved(Point::new(100.0, 0.0));
//! carousel.drag_ended(Point::new(100.0, 0.0), Duration::from_millis(50));
//! assert_eq!(index.get(), 3);
//!
//! // Once the step animation settles the window re-centers on "D".
//! carousel.tick(Duration::from_millis(500));
//! assert_eq!(carousel.slots(), ["C", "D", "A"]);
//! assert_eq!(carousel.render_offset(Duration::from_millis(500)), -300.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the `log`
//! facade; no logger is installed.

#![no_std]

extern crate alloc;

mod autoscroll;
mod binding;
mod carousel;
mod config;
pub mod drag;
mod index;
mod interaction;
mod navigator;
mod transition;
mod window;

pub use autoscroll::AutoscrollState;
pub use binding::{Binding, SelectionBinding};
pub use carousel::Carousel;
pub use config::{
    AutoscrollConfig, CarouselConfig, ConfigError, DEFAULT_ANIMATION_DURATION,
    DEFAULT_AUTOSCROLL_INTERVAL, DEFAULT_COMMIT_DIVISOR, DEFAULT_SETTLE_DELAY,
};
pub use drag::{DragPhase, DragRelease, DragTracker};
pub use index::{Direction, WrapIndex};
pub use interaction::{InteractionSignal, ObserverId};
pub use transition::{Easing, Transition};
pub use window::{Window, build_window};
