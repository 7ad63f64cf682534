// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared two-way bindings between a host and the carousel.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

#[derive(Debug)]
struct Shared<T> {
    value: T,
    revision: u64,
}

/// A shared, single-threaded value cell that both a host and a carousel can
/// read and write.
///
/// Clones share the same storage. Every accepted write bumps a revision
/// counter, which lets the carousel notice writes it did not make itself.
///
/// A binding created with [`Binding::constant`] ignores writes; it stands in
/// for a binding mode the host did not choose.
///
/// ```rust
/// use understory_carousel::Binding;
///
/// let host = Binding::new(0_usize);
/// let carousel = host.clone();
/// carousel.set(3);
/// assert_eq!(host.get(), 3);
/// assert_eq!(host.revision(), 1);
///
/// let fixed = Binding::constant(7_usize);
/// assert!(!fixed.set(1));
/// assert_eq!(fixed.get(), 7);
/// ```
pub struct Binding<T> {
    shared: Rc<RefCell<Shared<T>>>,
    constant: bool,
}

impl<T> Binding<T> {
    /// Creates a writable binding holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::with_mode(value, false)
    }

    /// Creates a binding that always holds `value` and ignores writes.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::with_mode(value, true)
    }

    fn with_mode(value: T, constant: bool) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared { value, revision: 0 })),
            constant,
        }
    }

    /// Returns `true` if writes through this binding are ignored.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.constant
    }

    /// Writes `value`. Returns `false` (and drops `value`) for constant bindings.
    pub fn set(&self, value: T) -> bool {
        if self.constant {
            return false;
        }
        let mut shared = self.shared.borrow_mut();
        shared.value = value;
        shared.revision = shared.revision.wrapping_add(1);
        true
    }

    /// Number of accepted writes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.borrow().revision
    }

    /// Calls `f` with a reference to the current value.
    ///
    /// `f` must not write to the same binding.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.borrow().value)
    }

    /// Returns `true` if `other` shares storage with `self`.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<T: Clone> Binding<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            constant: self.constant,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Binding")
            .field("value", &shared.value)
            .field("revision", &shared.revision)
            .field("constant", &self.constant)
            .finish()
    }
}

/// How the host observes the carousel's selection.
///
/// Exactly one mode is active; the carousel keeps the unused side as a
/// constant binding internally.
#[derive(Clone, Debug)]
pub enum SelectionBinding<T> {
    /// Two-way binding to the selected index.
    Index(Binding<usize>),
    /// Two-way binding to the selected item value.
    Item(Binding<Option<T>>),
}
