// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap-around index arithmetic.

/// Direction of a single carousel step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices, wrapping from the last item to the first.
    Forward,
    /// Toward lower indices, wrapping from the first item to the last.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Modular index arithmetic over a collection of `len` items.
///
/// Every operation first clamps its input into `0..len`, so out-of-range
/// indices never panic. All operations return `None` for an empty collection.
///
/// ```rust
/// use understory_carousel::WrapIndex;
///
/// let ring = WrapIndex::new(4);
/// assert_eq!(ring.previous(0), Some(3));
/// assert_eq!(ring.next(3), Some(0));
/// assert_eq!(ring.clamp(10), Some(3));
/// assert_eq!(WrapIndex::new(0).next(0), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct WrapIndex {
    len: usize,
}

impl WrapIndex {
    /// Creates index arithmetic for a collection of `len` items.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the collection size.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Clamps `index` into `0..len`.
    #[must_use]
    pub const fn clamp(self, index: usize) -> Option<usize> {
        if self.len == 0 {
            None
        } else if index >= self.len {
            Some(self.len - 1)
        } else {
            Some(index)
        }
    }

    /// Returns the index before `index`, wrapping from `0` to `len - 1`.
    #[must_use]
    pub const fn previous(self, index: usize) -> Option<usize> {
        match self.clamp(index) {
            Some(0) => Some(self.len - 1),
            Some(index) => Some(index - 1),
            None => None,
        }
    }

    /// Returns the index after `index`, wrapping from `len - 1` to `0`.
    #[must_use]
    pub const fn next(self, index: usize) -> Option<usize> {
        match self.clamp(index) {
            Some(index) => Some((index + 1) % self.len),
            None => None,
        }
    }

    /// Steps once from `index` in `direction`.
    #[must_use]
    pub const fn step(self, index: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.next(index),
            Direction::Backward => self.previous(index),
        }
    }

    /// Direction to animate when the selection moves from `from` to `to`.
    ///
    /// Moving to a higher index is forward, and so is wrapping from the last
    /// item back to the first. Everything else is backward. Returns `None` when
    /// the clamped indices are equal or the collection is empty.
    #[must_use]
    pub const fn direction_between(self, from: usize, to: usize) -> Option<Direction> {
        let (Some(from), Some(to)) = (self.clamp(from), self.clamp(to)) else {
            return None;
        };
        if from == to {
            None
        } else if to > from || (from == self.len - 1 && to == 0) {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }
}
