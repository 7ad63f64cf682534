// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.
//!
//! The demos are headless: they drive a [`Carousel`] with a synthetic frame
//! clock and print what a renderer would draw.

use std::time::Duration;

use understory_carousel::Carousel;

/// Frame interval of the synthetic clock (60 Hz).
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Frame timestamps from `start` (inclusive) to `end` (exclusive).
pub fn frames(start: Duration, end: Duration) -> impl Iterator<Item = Duration> {
    let mut now = start;
    std::iter::from_fn(move || {
        if now >= end {
            return None;
        }
        let frame = now;
        now += FRAME;
        Some(frame)
    })
}

/// One line summarizing what the host would draw at `now`.
pub fn describe<T: Clone + PartialEq, R: AsRef<str>>(
    carousel: &Carousel<T, R>,
    now: Duration,
) -> String {
    let mut line = format!(
        "t={:>5}ms index={} offset={:>8.1}",
        now.as_millis(),
        carousel.selected_index(),
        carousel.render_offset(now),
    );
    let slots: Vec<&str> = carousel.slots().iter().map(AsRef::as_ref).collect();
    line.push_str(&format!(" slots={slots:?}"));
    if let Some(frames) = carousel.slot_frames(now) {
        let visible: Vec<String> = frames
            .iter()
            .map(|frame| format!("{:.0}..{:.0}", frame.x0, frame.x1))
            .collect();
        line.push_str(&format!(" frames={visible:?}"));
    }
    if carousel.is_interacting() {
        line.push_str(" [dragging]");
    }
    line
}
