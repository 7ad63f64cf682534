// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "user is interacting" signal.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Handle returned by [`InteractionSignal::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A boolean "user is interacting" flag with change observers.
///
/// Any number of sources may report into the same signal; the most recently
/// reported value wins. Observers run once per change of the stored value,
/// never for a redundant report.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use understory_carousel::InteractionSignal;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut signal = InteractionSignal::new();
/// let log = Rc::clone(&seen);
/// signal.subscribe(move |active| log.borrow_mut().push(active));
///
/// signal.report(true);
/// signal.report(true);
/// signal.report(false);
/// assert_eq!(*seen.borrow(), vec![true, false]);
/// ```
#[derive(Default)]
pub struct InteractionSignal {
    value: bool,
    next_id: u64,
    observers: Vec<(ObserverId, Box<dyn FnMut(bool)>)>,
}

impl InteractionSignal {
    /// Creates an inactive signal with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> bool {
        self.value
    }

    /// Reports a new value from any source. Returns `true` if it changed.
    pub fn report(&mut self, value: bool) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, observer) in &mut self.observers {
            observer(value);
        }
        true
    }

    /// Registers `observer` to run on every change.
    pub fn subscribe(&mut self, observer: impl FnMut(bool) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for InteractionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSignal")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
