// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for horizontal swipe gestures.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::begin`] with the pointer location when a gesture starts.
//! 2) On each move event, call [`DragTracker::update`] to get the horizontal
//!    movement since the previous sample. Add it 1:1 to the render offset.
//! 3) On release, call [`DragTracker::end`] with the container width to learn
//!    whether the gesture commits a step or cancels.
//! 4) Call [`DragTracker::finish`] once the resulting transition settles.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::{Direction, DragRelease, DragTracker};
//!
//! let mut drag = DragTracker::new();
//! drag.begin(Point::new(200.0, 40.0));
//! assert!(drag.is_dragging());
//!
//! // Pointer moved 30px to the left.
//! assert_eq!(drag.update(Point::new(170.0, 42.0)), Some(-30.0));
//!
//! // Released 150px left of the start in a 300px container: past a third.
//! let release = drag.end(Point::new(50.0, 42.0), 300.0, 3.0);
//! assert_eq!(release, Some(DragRelease::Commit(Direction::Forward)));
//! ```

use kurbo::Point;

use crate::index::Direction;

/// Phase of the gesture state machine.
///
/// `Idle → Dragging → (Committing | Cancelling) → Idle`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down and samples are being tracked.
    Dragging {
        /// Pointer location when the gesture started.
        start: Point,
        /// Horizontal translation reported by the previous sample.
        last_translation: f64,
    },
    /// Released past the threshold; waiting for the step animation to settle.
    Committing(Direction),
    /// Released below the threshold; waiting for the snap-back to settle.
    Cancelling,
}

/// Outcome of releasing a drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragRelease {
    /// Step once in the given direction.
    Commit(Direction),
    /// Return to the settled position without changing the selection.
    Cancel,
}

/// Tracks one horizontal drag gesture at a time.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragTracker {
    phase: DragPhase,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns `true` while the pointer is down.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Returns `true` while a released gesture is still animating.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, DragPhase::Committing(_) | DragPhase::Cancelling)
    }

    /// Starts a new gesture at `location`, replacing any previous state.
    pub fn begin(&mut self, location: Point) {
        self.phase = DragPhase::Dragging {
            start: location,
            last_translation: 0.0,
        };
    }

    /// Records a movement sample and returns the horizontal delta since the
    /// previous sample, or `None` when no gesture is active.
    pub fn update(&mut self, location: Point) -> Option<f64> {
        let DragPhase::Dragging {
            start,
            last_translation,
        } = &mut self.phase
        else {
            return None;
        };
        let translation = location.x - start.x;
        let delta = translation - *last_translation;
        *last_translation = translation;
        Some(delta)
    }

    /// Total horizontal translation of the active gesture at `location`.
    #[must_use]
    pub fn translation(&self, location: Point) -> Option<f64> {
        match self.phase {
            DragPhase::Dragging { start, .. } => Some(location.x - start.x),
            _ => None,
        }
    }

    /// Releases the gesture at `location` and decides commit vs. cancel.
    ///
    /// The gesture commits when `|translation|` is strictly greater than
    /// `container_width / commit_divisor`; velocity is not considered. A
    /// gesture whose start lies to the right of `location` (content dragged
    /// leftward) commits [`Direction::Forward`], otherwise
    /// [`Direction::Backward`]. An unknown (non-positive) width always cancels.
    ///
    /// Returns `None` if no gesture was active.
    pub fn end(
        &mut self,
        location: Point,
        container_width: f64,
        commit_divisor: f64,
    ) -> Option<DragRelease> {
        let DragPhase::Dragging { start, .. } = self.phase else {
            return None;
        };
        let translation = location.x - start.x;
        let magnitude = if translation.is_sign_negative() {
            -translation
        } else {
            translation
        };
        let threshold = container_width / commit_divisor;
        let release = if container_width > 0.0 && magnitude > threshold {
            let direction = if start.x > location.x {
                Direction::Forward
            } else {
                Direction::Backward
            };
            self.phase = DragPhase::Committing(direction);
            DragRelease::Commit(direction)
        } else {
            self.phase = DragPhase::Cancelling;
            DragRelease::Cancel
        };
        Some(release)
    }

    /// Returns to [`DragPhase::Idle`].
    pub fn finish(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
