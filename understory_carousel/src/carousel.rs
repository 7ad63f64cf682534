// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.
//!
//! [`Carousel`] wires the building blocks together: it owns the collection, the
//! selection bindings, the rendered slots, and a timer queue, and it funnels
//! every index change (drag commit, programmatic set, autoscroll tick) through
//! one navigation path.
//!
//! The controller never reads a clock. Hosts pass a monotonic `now` into every
//! time-dependent call and call [`Carousel::tick`] once per frame, or whenever
//! [`Carousel::next_deadline`] has passed.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect};
use understory_timing::TimerQueue;

use crate::autoscroll::{Autoscroll, AutoscrollState};
use crate::binding::{Binding, SelectionBinding};
use crate::config::{AutoscrollConfig, CarouselConfig};
use crate::drag::{DragPhase, DragRelease, DragTracker};
use crate::index::{Direction, WrapIndex};
use crate::interaction::{InteractionSignal, ObserverId};
use crate::navigator::Navigator;
use crate::window::{Window, build_window};

/// Payload of the carousel's internal timers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scheduled {
    /// Re-center after a transition tagged with `generation`.
    Settle { generation: u64 },
    /// Autoscroll interval elapsed.
    Autoscroll,
}

type RenderFn<T, R> = Box<dyn Fn(&T) -> R>;

/// An infinite, gesture-driven carousel over a fixed collection.
///
/// The carousel keeps exactly three rendered slots (previous, current, next)
/// and a horizontal render offset. Dragging moves the offset 1:1 with the
/// pointer; releasing past the commit threshold steps once in the drag
/// direction, and releasing short of it springs back. Every step animates one
/// slot pitch and then, once settled, silently re-centers the strip and
/// rebuilds the window around the new selection.
///
/// Selection is shared with the host through a [`SelectionBinding`]. Writes
/// the host makes to that binding are picked up by [`Carousel::sync`] (which
/// [`Carousel::tick`] calls first) and animated as programmatic changes.
///
/// ```rust
/// use core::time::Duration;
/// use kurbo::Point;
/// use understory_carousel::{Binding, Carousel, CarouselConfig};
///
/// let index = Binding::new(0_usize);
/// let mut carousel = Carousel::with_index(
///     vec!["A", "B", "C"],
///     index.clone(),
///     CarouselConfig::default(),
///     |item: &&str| item.to_string(),
/// );
/// carousel.set_container_width(300.0);
/// carousel.mount(Duration::ZERO);
/// assert_eq!(carousel.slots(), ["C", "A", "B"]);
///
/// // Swipe left by more than a third of the width.
/// carousel.drag_began(Point::new(250.0, 10.0), Duration::ZERO);
/// carousel.drag_moved(Point::new(120.0, 10.0));
/// carousel.drag_ended(Point::new(120.0, 10.0), Duration::from_millis(16));
/// assert_eq!(index.get(), 1);
///
/// carousel.tick(Duration::from_millis(400));
/// assert_eq!(carousel.slots(), ["A", "B", "C"]);
/// ```
pub struct Carousel<T, R> {
    items: Vec<T>,
    index: Binding<usize>,
    index_seen: u64,
    item: Binding<Option<T>>,
    item_seen: u64,
    render: RenderFn<T, R>,
    window: Option<Window>,
    slots: Vec<R>,
    navigator: Navigator,
    drag: DragTracker,
    commit_divisor: f64,
    autoscroll: Option<Autoscroll>,
    interaction: InteractionSignal,
    timers: TimerQueue<Scheduled>,
    height: f64,
    mounted: bool,
}

impl<T: Clone + PartialEq, R> Carousel<T, R> {
    /// Creates a carousel over `items`.
    ///
    /// In [`SelectionBinding::Index`] mode the bound index is clamped into
    /// range. In [`SelectionBinding::Item`] mode the selection starts at the
    /// first item equal to the bound value, or at `0` when there is none.
    ///
    /// `render` is called once per slot whenever the window changes, and never
    /// for items outside the window.
    pub fn new(
        items: Vec<T>,
        selection: SelectionBinding<T>,
        config: CarouselConfig,
        render: impl Fn(&T) -> R + 'static,
    ) -> Self {
        let config = config.sanitized();
        let ring = WrapIndex::new(items.len());
        let (index, item, selected) = match selection {
            SelectionBinding::Index(index) => {
                let selected = ring.clamp(index.get()).unwrap_or(0);
                if !items.is_empty() && index.get() != selected {
                    index.set(selected);
                }
                (index, Binding::constant(None), selected)
            }
            SelectionBinding::Item(item) => {
                let selected = item
                    .with(|bound| {
                        bound
                            .as_ref()
                            .and_then(|bound| items.iter().position(|it| it == bound))
                    })
                    .unwrap_or(0);
                (Binding::new(selected), item, selected)
            }
        };
        Self {
            index_seen: index.revision(),
            item_seen: item.revision(),
            index,
            item,
            items,
            render: Box::new(render),
            window: None,
            slots: Vec::new(),
            navigator: Navigator::new(&config, selected),
            drag: DragTracker::new(),
            commit_divisor: config.commit_divisor,
            autoscroll: None,
            interaction: InteractionSignal::new(),
            timers: TimerQueue::new(),
            height: 0.0,
            mounted: false,
        }
    }

    /// Creates a carousel bound to a selected index.
    pub fn with_index(
        items: Vec<T>,
        index: Binding<usize>,
        config: CarouselConfig,
        render: impl Fn(&T) -> R + 'static,
    ) -> Self {
        Self::new(items, SelectionBinding::Index(index), config, render)
    }

    /// Creates a carousel bound to a selected item value.
    pub fn with_item(
        items: Vec<T>,
        item: Binding<Option<T>>,
        config: CarouselConfig,
        render: impl Fn(&T) -> R + 'static,
    ) -> Self {
        Self::new(items, SelectionBinding::Item(item), config, render)
    }

    /// Attaches autoscroll, replacing any previous configuration.
    ///
    /// The timer starts on [`Carousel::mount`] (or the next
    /// [`Carousel::sync`] while mounted) when the enabled binding is `true`.
    #[must_use]
    pub fn autoscroll(mut self, config: AutoscrollConfig) -> Self {
        if let Some(mut previous) = self.autoscroll.take() {
            previous.stop(&mut self.timers);
        }
        self.autoscroll = Some(Autoscroll::new(config));
        self
    }

    /// Registers `observer` to run whenever the interaction signal changes.
    pub fn on_interaction(&mut self, observer: impl FnMut(bool) + 'static) -> ObserverId {
        self.interaction.subscribe(observer)
    }

    /// Removes an interaction observer.
    pub fn remove_interaction_observer(&mut self, id: ObserverId) -> bool {
        self.interaction.unsubscribe(id)
    }

    /// Feeds an external interaction source into the signal.
    ///
    /// The most recent report wins, whether it came from this carousel's own
    /// drag handling or from the host.
    pub fn report_interaction(&mut self, active: bool) {
        self.interaction.report(active);
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Shows the carousel: builds the window and starts autoscroll if enabled.
    pub fn mount(&mut self, now: Duration) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::debug!("carousel mounted with {} items", self.items.len());
        self.rebuild_window();
        self.sync(now);
    }

    /// Hides the carousel and releases every timer.
    ///
    /// Pending settles are dropped, an active drag ends without committing,
    /// and the interaction signal returns to `false`.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.navigator.reset(&mut self.timers);
        if let Some(autoscroll) = &mut self.autoscroll {
            autoscroll.stop(&mut self.timers);
        }
        self.drag.finish();
        self.interaction.report(false);
        log::debug!("carousel unmounted");
    }

    /// Returns `true` between [`Carousel::mount`] and [`Carousel::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Records the measured container width.
    ///
    /// Non-positive or non-finite widths mean the carousel is not laid out.
    /// While nothing is animating the offset snaps to the settle position.
    pub fn set_container_width(&mut self, width: f64) {
        if self.navigator.set_width(width) {
            log::debug!("container width is now {:?}", self.navigator.width());
        }
    }

    /// Records a measured slot height. The carousel is as tall as the tallest
    /// slot it has ever measured.
    pub fn report_slot_height(&mut self, height: f64) {
        if height.is_finite() && height > self.height {
            self.height = height;
        }
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Starts a drag at `location`.
    ///
    /// A drag interrupts any transition still in flight: the strip snaps to
    /// rest around the current selection first.
    pub fn drag_began(&mut self, location: Point, now: Duration) {
        if self.items.is_empty() || !self.mounted {
            return;
        }
        self.interrupt();
        self.drag.begin(location);
        self.interaction.report(true);
        log::trace!(
            "drag began at {location:?}, offset {}",
            self.navigator.offset_at(now)
        );
    }

    /// Tracks a movement sample. The offset follows the pointer 1:1.
    pub fn drag_moved(&mut self, location: Point) {
        if let Some(delta) = self.drag.update(location) {
            self.navigator.drag_by(delta);
            log::trace!("drag moved by {delta}");
        }
    }

    /// Ends the drag at `location`, committing a step or springing back.
    pub fn drag_ended(&mut self, location: Point, now: Duration) {
        let width = self.navigator.width().unwrap_or(0.0);
        let Some(release) = self.drag.end(location, width, self.commit_divisor) else {
            return;
        };
        self.interaction.report(false);
        match release {
            DragRelease::Commit(direction) => {
                log::debug!("drag committed {direction:?}");
                self.step(direction, now);
            }
            DragRelease::Cancel => {
                log::debug!("drag cancelled");
                if self.navigator.width().is_some() {
                    let rest = self.navigator.settle_offset();
                    let duration = self.navigator.animation_duration();
                    self.navigator.animate_to(rest, now, duration, &mut self.timers);
                } else {
                    self.navigator.interrupt(&mut self.timers);
                    self.drag.finish();
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Steps once in `direction`, as a committed drag would.
    ///
    /// Ignored while a drag is in progress or the collection is empty.
    pub fn advance(&mut self, direction: Direction, now: Duration) {
        if self.drag.is_dragging() {
            log::trace!("advance {direction:?} ignored during drag");
            return;
        }
        self.step(direction, now);
    }

    /// Selects `index`, animating one step toward it.
    ///
    /// `index` is clamped into range. The step is forward when `index` is
    /// after the current selection, or when wrapping from the last item to the
    /// first; otherwise it is backward. Selecting the current index does
    /// nothing. Before the container is laid out the change applies at once
    /// without animation.
    pub fn set_index(&mut self, index: usize, now: Duration) {
        let ring = WrapIndex::new(self.items.len());
        let Some(index) = ring.clamp(index) else {
            return;
        };
        let from = self.navigator.last_settled();
        let Some(direction) = ring.direction_between(from, index) else {
            if self.index.get() != index {
                self.write_selection(index);
            }
            return;
        };
        log::debug!("selecting {index} (from {from}, {direction:?})");
        self.interrupt();
        self.write_selection(index);
        if self.can_animate() {
            let target = self.navigator.target_offset(direction);
            let delay = self.navigator.settle_delay();
            self.navigator.animate_to(target, now, delay, &mut self.timers);
        } else {
            self.rebuild_window();
        }
    }

    /// Starts or stops autoscroll by writing its enabled binding.
    ///
    /// Does nothing if no autoscroll was attached.
    pub fn set_autoscroll_enabled(&mut self, enabled: bool, now: Duration) {
        if let Some(autoscroll) = &mut self.autoscroll {
            autoscroll.enabled().set(enabled);
            autoscroll.sync(self.mounted, now, &mut self.timers);
        }
    }

    /// Reconciles host writes to the bindings.
    ///
    /// A changed index binding is routed through [`Carousel::set_index`]; in
    /// item mode a changed item binding selects the first equal item. The
    /// autoscroll timer is started or stopped to match its enabled binding.
    pub fn sync(&mut self, now: Duration) {
        let revision = self.index.revision();
        if revision != self.index_seen {
            self.index_seen = revision;
            let index = self.index.get();
            self.set_index(index, now);
        }

        let revision = self.item.revision();
        if revision != self.item_seen {
            self.item_seen = revision;
            let position = self.item.with(|bound| {
                bound
                    .as_ref()
                    .and_then(|bound| self.items.iter().position(|it| it == bound))
            });
            match position {
                Some(index) => self.set_index(index, now),
                None => log::trace!("bound item is not in the collection"),
            }
        }

        if let Some(autoscroll) = &mut self.autoscroll {
            autoscroll.sync(self.mounted, now, &mut self.timers);
        }
    }

    /// Advances the carousel to `now`.
    ///
    /// Reconciles the bindings, then fires every timer due by `now` in
    /// deadline order: settles re-center the window around the selection live
    /// at that moment, and autoscroll ticks step forward unless the user is
    /// interacting. Elapsed autoscroll intervals are not replayed.
    pub fn tick(&mut self, now: Duration) {
        self.sync(now);
        while let Some(fired) = self.timers.poll(now) {
            match fired.payload {
                Scheduled::Settle { generation } => {
                    if self.navigator.settle(generation) {
                        self.rebuild_window();
                        if self.drag.is_resolving() {
                            self.drag.finish();
                        }
                    }
                }
                Scheduled::Autoscroll => {
                    if self.interaction.get() || self.drag.is_dragging() {
                        log::trace!("autoscroll tick skipped while interacting");
                    } else {
                        self.step(Direction::Forward, now);
                    }
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Horizontal offset of the slot strip at `now`.
    ///
    /// At rest this is `-(width + spacing)`, which centers the middle slot.
    #[must_use]
    pub fn render_offset(&self, now: Duration) -> f64 {
        self.navigator.offset_at(now)
    }

    /// Returns `true` while an offset transition is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.navigator
            .transition()
            .is_some_and(|transition| !transition.is_finished(now))
    }

    /// Frames of the three slots at `now`, in strip coordinates.
    ///
    /// Returns `None` before layout or when the collection is empty.
    #[must_use]
    pub fn slot_frames(&self, now: Duration) -> Option<[Rect; 3]> {
        self.window?;
        let width = self.navigator.width()?;
        let pitch = self.navigator.pitch()?;
        let offset = self.navigator.offset_at(now);
        let frame = |slot: u8| {
            let origin = Point::new(offset + f64::from(slot) * pitch, 0.0);
            Rect::from_origin_size(origin, (width, self.height))
        };
        Some([frame(0), frame(1), frame(2)])
    }

    /// Selected index, or `0` for an empty collection.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.navigator.last_settled()
    }

    /// Selected item, or `None` for an empty collection.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index())
    }

    /// The window currently rendered, if any.
    #[must_use]
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Items shown in the three slots.
    #[must_use]
    pub fn window_items(&self) -> Option<[&T; 3]> {
        self.window?.resolve(&self.items)
    }

    /// Rendered slots, in display order. Empty until mounted and for an empty
    /// collection.
    #[must_use]
    pub fn slots(&self) -> &[R] {
        &self.slots
    }

    /// Returns `true` while the interaction signal is set.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.interaction.get()
    }

    /// Phase of the drag state machine.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// State of the autoscroll timer.
    #[must_use]
    pub fn autoscroll_state(&self) -> AutoscrollState {
        self.autoscroll
            .as_ref()
            .map_or(AutoscrollState::Stopped, Autoscroll::state)
    }

    /// Height of the tallest slot measured so far.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The collection.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest pending timer deadline, if any.
    ///
    /// Hosts that do not tick every frame can sleep until this instant.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Number of scheduled timers, settle and autoscroll combined.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn can_animate(&self) -> bool {
        self.mounted && self.navigator.width().is_some()
    }

    /// One step in `direction` from the current selection.
    fn step(&mut self, direction: Direction, now: Duration) {
        let ring = WrapIndex::new(self.items.len());
        let Some(index) = ring.step(self.navigator.last_settled(), direction) else {
            return;
        };
        self.interrupt();
        self.write_selection(index);
        if self.can_animate() {
            let target = self.navigator.target_offset(direction);
            let duration = self.navigator.animation_duration();
            self.navigator.animate_to(target, now, duration, &mut self.timers);
        } else {
            self.rebuild_window();
        }
    }

    /// Finishes a transition still in flight at once.
    ///
    /// Without a pending settle the offset and drag phase are left alone, so a
    /// committed drag animates on from where the pointer let go.
    fn interrupt(&mut self) {
        if !self.navigator.is_pending() {
            return;
        }
        self.navigator.interrupt(&mut self.timers);
        log::trace!("interrupted pending transition");
        self.rebuild_window();
        if self.drag.is_resolving() {
            self.drag.finish();
        }
    }

    /// Accepts `index` as the selection and mirrors it into both bindings.
    fn write_selection(&mut self, index: usize) {
        self.navigator.set_last_settled(index);
        self.index.set(index);
        self.index_seen = self.index.revision();
        if let Some(item) = self.items.get(index) {
            self.item.set(Some(item.clone()));
            self.item_seen = self.item.revision();
        }
    }

    /// Re-renders the slots if the window moved.
    fn rebuild_window(&mut self) {
        if !self.mounted {
            return;
        }
        let mut selected = self.navigator.last_settled();
        let window = build_window(&self.items, &mut selected);
        if window == self.window {
            return;
        }
        self.window = window;
        self.slots.clear();
        if let Some(items) = window.and_then(|window| window.resolve(&self.items)) {
            let render = &self.render;
            self.slots.extend(items.into_iter().map(|item| render(item)));
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Carousel<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items)
            .field("index", &self.index)
            .field("window", &self.window)
            .field("navigator", &self.navigator)
            .field("drag", &self.drag)
            .field("autoscroll", &self.autoscroll)
            .field("interaction", &self.interaction)
            .field("height", &self.height)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    const WIDTH: f64 = 300.0;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mounted(selected: usize) -> (Carousel<char, char>, Binding<usize>) {
        let index = Binding::new(selected);
        let mut carousel = Carousel::with_index(
            vec!['A', 'B', 'C', 'D'],
            index.clone(),
            CarouselConfig::default(),
            |item: &char| *item,
        );
        carousel.set_container_width(WIDTH);
        carousel.mount(Duration::ZERO);
        (carousel, index)
    }

    #[test]
    fn construction_clamps_the_bound_index() {
        let index = Binding::new(10);
        let carousel: Carousel<u8, ()> = Carousel::with_index(
            vec![1, 2, 3],
            index.clone(),
            CarouselConfig::default(),
            |_: &u8| (),
        );
        assert_eq!(index.get(), 2);
        assert_eq!(carousel.selected_index(), 2);
    }

    #[test]
    fn window_is_built_on_mount_only() {
        let index = Binding::new(1);
        let mut carousel = Carousel::with_index(
            vec!['A', 'B', 'C'],
            index,
            CarouselConfig::default(),
            |c: &char| *c,
        );
        assert!(carousel.slots().is_empty());
        carousel.mount(Duration::ZERO);
        assert_eq!(carousel.slots(), ['A', 'B', 'C']);
    }

    #[test]
    fn step_animates_then_rebuilds_at_settle() {
        let (mut carousel, index) = mounted(0);
        assert_eq!(carousel.render_offset(ms(0)), -WIDTH);

        carousel.advance(Direction::Forward, ms(0));
        assert_eq!(index.get(), 1);
        assert!(carousel.is_animating(ms(100)));
        assert_eq!(carousel.render_offset(ms(300)), -2.0 * WIDTH);
        // The window is still the old one until the settle fires.
        assert_eq!(carousel.slots(), ['D', 'A', 'B']);

        carousel.tick(ms(300));
        assert_eq!(carousel.slots(), ['A', 'B', 'C']);
        assert_eq!(carousel.render_offset(ms(300)), -WIDTH);
        assert_eq!(carousel.pending_timers(), 0);
    }

    #[test]
    fn superseding_step_settles_the_previous_one_first() {
        let (mut carousel, index) = mounted(0);
        carousel.advance(Direction::Forward, ms(0));
        carousel.advance(Direction::Forward, ms(100));
        assert_eq!(index.get(), 2);
        // The first step was settled early, so the window moved once already.
        assert_eq!(carousel.slots(), ['A', 'B', 'C']);
        assert_eq!(carousel.pending_timers(), 1);

        carousel.tick(ms(400));
        assert_eq!(carousel.slots(), ['B', 'C', 'D']);
    }

    #[test]
    fn drag_below_threshold_springs_back() {
        let (mut carousel, index) = mounted(1);
        carousel.drag_began(Point::new(200.0, 0.0), ms(0));
        carousel.drag_moved(Point::new(150.0, 0.0));
        assert_eq!(carousel.render_offset(ms(0)), -WIDTH - 50.0);

        carousel.drag_ended(Point::new(150.0, 0.0), ms(10));
        assert_eq!(carousel.drag_phase(), DragPhase::Cancelling);
        assert!(!carousel.is_interacting());
        assert_eq!(index.get(), 1);

        carousel.tick(ms(310));
        assert_eq!(carousel.drag_phase(), DragPhase::Idle);
        assert_eq!(carousel.render_offset(ms(310)), -WIDTH);
    }

    #[test]
    fn render_runs_once_per_slot_per_window() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut carousel = Carousel::with_index(
            vec![1, 2, 3, 4],
            Binding::new(0),
            CarouselConfig::default(),
            move |item: &i32| {
                counter.set(counter.get() + 1);
                *item
            },
        );
        carousel.set_container_width(WIDTH);
        carousel.mount(ms(0));
        assert_eq!(calls.get(), 3);

        // A cancelled drag settles onto the same window: no re-render.
        carousel.drag_began(Point::new(100.0, 0.0), ms(0));
        carousel.drag_ended(Point::new(110.0, 0.0), ms(0));
        carousel.tick(ms(300));
        assert_eq!(calls.get(), 3);

        carousel.advance(Direction::Backward, ms(300));
        carousel.tick(ms(600));
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn slot_frames_follow_offset_and_height() {
        let index = Binding::new(0);
        let mut carousel = Carousel::with_index(
            vec!['A', 'B'],
            index,
            CarouselConfig::default().with_spacing(10.0),
            |c: &char| *c,
        );
        assert_eq!(carousel.slot_frames(ms(0)), None);
        carousel.set_container_width(100.0);
        carousel.mount(ms(0));
        carousel.report_slot_height(40.0);
        carousel.report_slot_height(25.0);

        let frames = carousel.slot_frames(ms(0)).unwrap();
        assert_eq!(frames[0], Rect::new(-110.0, 0.0, -10.0, 40.0));
        assert_eq!(frames[1], Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(frames[2], Rect::new(110.0, 0.0, 210.0, 40.0));
    }

    #[test]
    fn unmounted_changes_apply_on_mount() {
        let index = Binding::new(0);
        let mut carousel = Carousel::with_index(
            vec!['A', 'B', 'C'],
            index.clone(),
            CarouselConfig::default(),
            |c: &char| *c,
        );
        carousel.set_index(2, ms(0));
        assert_eq!(index.get(), 2);
        assert!(carousel.slots().is_empty());
        assert_eq!(carousel.pending_timers(), 0);

        carousel.mount(ms(0));
        assert_eq!(carousel.slots(), ['B', 'C', 'A']);
    }
}
