use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::mem;

use super::handle::Handle;

enum Slot<T> {
    Live(T),
    /// Next vacant slot in the chain.
    Vacant(Option<Handle>),
}

/// Slab storage for tree nodes.
///
/// Vacated slots are chained through the slots themselves and handed out
/// again, most recent first, so a handle stays valid exactly until its slot
/// is taken.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// Head of the vacant chain.
    vacant: Option<Handle>,
    live: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            vacant: None,
            live: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            vacant: None,
            live: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live elements.
    pub(crate) const fn len(&self) -> usize {
        self.live
    }

    /// Vacant slots that `alloc` will reuse before growing.
    fn spare(&self) -> usize {
        self.slots.len() - self.live
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional.saturating_sub(self.spare()));
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.slots.try_reserve(additional.saturating_sub(self.spare()))
    }

    /// Drops trailing vacant slots, relinks the rest and releases spare
    /// capacity.
    pub(crate) fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(Slot::Vacant(_))) {
            self.slots.pop();
        }

        let mut head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Slot::Vacant(next) = slot {
                *next = head;
                head = Handle::new(index);
            }
        }
        self.vacant = head;
        self.slots.shrink_to_fit();
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        let Some(handle) = self.vacant else {
            let handle = Handle::new(self.slots.len()).unwrap_or_else(|| {
                panic!("`Arena::alloc()` - arena is at maximum capacity ({})", Handle::COUNT)
            });
            self.slots.push(Slot::Live(element));
            self.live += 1;
            return handle;
        };

        match mem::replace(&mut self.slots[handle.index()], Slot::Live(element)) {
            Slot::Vacant(next) => self.vacant = next,
            Slot::Live(_) => unreachable!("`Arena::alloc()` - vacant chain reached a live slot"),
        }
        self.live += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.index()] {
            Slot::Live(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.index()] {
            Slot::Live(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    /// Vacates the slot at `handle` and returns its element.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.index()];
        assert!(matches!(slot, Slot::Live(_)), "`Arena::take()` - `handle` is invalid!");

        let Slot::Live(element) = mem::replace(slot, Slot::Vacant(self.vacant)) else {
            unreachable!()
        };
        self.vacant = Some(handle);
        self.live -= 1;
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant = None;
        self.live = 0;
    }
}
