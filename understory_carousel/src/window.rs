// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-slot visible window.

use crate::index::WrapIndex;

/// Indices of the previous, current, and next items around a selection.
///
/// For collections of one or two items the slots may refer to the same index;
/// that is ordinary wrap-around, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// Index shown in the leading slot.
    pub previous: usize,
    /// Index of the selected item, shown in the middle slot.
    pub current: usize,
    /// Index shown in the trailing slot.
    pub next: usize,
}

impl Window {
    /// Number of slots in a window.
    pub const SLOTS: usize = 3;

    /// Builds the window around `selected` in a collection of `len` items.
    ///
    /// `selected` is clamped into range first. Returns `None` when `len == 0`.
    #[must_use]
    pub const fn around(len: usize, selected: usize) -> Option<Self> {
        let ring = WrapIndex::new(len);
        match (ring.previous(selected), ring.clamp(selected), ring.next(selected)) {
            (Some(previous), Some(current), Some(next)) => Some(Self {
                previous,
                current,
                next,
            }),
            _ => None,
        }
    }

    /// Returns the slot indices in display order.
    #[must_use]
    pub const fn indices(&self) -> [usize; 3] {
        [self.previous, self.current, self.next]
    }

    /// Resolves the slot indices against `items`.
    ///
    /// Returns `None` if any slot is out of bounds for `items`, which only
    /// happens when the window was built for a different collection.
    #[must_use]
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Option<[&'a T; 3]> {
        Some([
            items.get(self.previous)?,
            items.get(self.current)?,
            items.get(self.next)?,
        ])
    }
}

/// Builds the window for `items`, clamping `selected` into range in place.
///
/// This mirrors what a carousel does every time it re-centers: the selected
/// index is normalized first, then the three neighbours are derived from it.
///
/// ```rust
/// use understory_carousel::{Window, build_window};
///
/// let items = ["A", "B", "C", "D"];
/// let mut selected = 9;
/// let window = build_window(&items, &mut selected).unwrap();
/// assert_eq!(selected, 3);
/// assert_eq!(window.resolve(&items), Some([&"C", &"D", &"A"]));
///
/// let empty: [&str; 0] = [];
/// assert_eq!(build_window(&empty, &mut selected), None);
/// ```
pub fn build_window<T>(items: &[T], selected: &mut usize) -> Option<Window> {
    let window = Window::around(items.len(), *selected)?;
    *selected = window.current;
    Some(window)
}
