//! Generational table of the views currently owned by the C surface.
//!
//! A handle packs the slot index (high 32 bits) with the generation the slot
//! had when the view was stored (low 32 bits). Destroying a view bumps the
//! slot's generation, so the old handle stops resolving. A slot whose
//! generation is exhausted is retired and never handed out again.

use tensorview_core::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    slot: u32,
    generation: u32,
}

impl Handle {
    fn from_bits(bits: u64) -> Self {
        Self {
            slot: (bits >> 32) as u32,
            generation: bits as u32,
        }
    }

    fn to_bits(self) -> u64 {
        (u64::from(self.slot) << 32) | u64::from(self.generation)
    }
}

enum Slot<T> {
    Live { generation: u32, view: View<T> },
    /// Free for reuse. Vacant slots form a singly linked list.
    Vacant { generation: u32, next_free: Option<u32> },
    Retired,
}

impl<T> Slot<T> {
    fn live_generation(&self) -> Option<u32> {
        match self {
            Slot::Live { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    fn view(&self) -> Option<&View<T>> {
        match self {
            Slot::Live { view, .. } => Some(view),
            _ => None,
        }
    }

    fn view_mut(&mut self) -> Option<&mut View<T>> {
        match self {
            Slot::Live { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Replace a live slot with `next`, returning its view.
    fn vacate(&mut self, next: Slot<T>) -> Option<View<T>> {
        match std::mem::replace(self, next) {
            Slot::Live { view, .. } => Some(view),
            previous => {
                *self = previous;
                None
            }
        }
    }
}

/// Views addressed by opaque `u64` handles.
pub(crate) struct ViewTable<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: usize,
}

// SAFETY: a table is only reachable through its `Mutex`, so at most one
// thread touches any stored view, or a buffer through one, at a time. Raw
// pointers handed out by `tensorview_*_data` carry the caller's own
// synchronization contract.
#[allow(unsafe_code)]
unsafe impl<T: Send> Send for ViewTable<T> {}

impl<T> ViewTable<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Store `view` and return the handle that addresses it.
    pub(crate) fn insert(&mut self, view: View<T>) -> u64 {
        self.live += 1;
        if let Some(slot) = self.free_head {
            if let Slot::Vacant {
                generation,
                next_free,
            } = self.slots[slot as usize]
            {
                self.free_head = next_free;
                self.slots[slot as usize] = Slot::Live { generation, view };
                return Handle { slot, generation }.to_bits();
            }
        }
        let slot = self.slots.len() as u32;
        self.slots.push(Slot::Live {
            generation: 0,
            view,
        });
        Handle { slot, generation: 0 }.to_bits()
    }

    /// Decode `handle` if it addresses a live slot. Stale, retired and
    /// never-issued handles resolve to `None`.
    fn locate(&self, handle: u64) -> Option<Handle> {
        let handle = Handle::from_bits(handle);
        let live = self.slots.get(handle.slot as usize)?.live_generation();
        (live == Some(handle.generation)).then_some(handle)
    }

    /// The view behind `handle`.
    pub(crate) fn view(&self, handle: u64) -> Option<&View<T>> {
        let handle = self.locate(handle)?;
        self.slots[handle.slot as usize].view()
    }

    /// Mutable access to the view behind `handle`.
    pub(crate) fn view_mut(&mut self, handle: u64) -> Option<&mut View<T>> {
        let handle = self.locate(handle)?;
        self.slots[handle.slot as usize].view_mut()
    }

    /// Take the view out of the table and invalidate `handle`.
    pub(crate) fn remove(&mut self, handle: u64) -> Option<View<T>> {
        let handle = self.locate(handle)?;
        let next = match handle.generation.checked_add(1) {
            Some(generation) => Slot::Vacant {
                generation,
                next_free: self.free_head,
            },
            None => Slot::Retired,
        };
        let reusable = matches!(next, Slot::Vacant { .. });
        let view = self.slots[handle.slot as usize].vacate(next)?;
        if reusable {
            self.free_head = Some(handle.slot);
        }
        self.live -= 1;
        Some(view)
    }

    /// Number of views currently stored.
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(values: &[u8]) -> View<u8> {
        View::from_vec(values.to_vec())
    }

    #[test]
    fn inserted_view_resolves() {
        let mut table = ViewTable::new();
        let h = table.insert(bytes(&[4, 5]));
        assert_eq!(table.view(h).map(|v| v.get(2)), Some(Ok(5)));
        assert_eq!(table.live(), 1);
    }

    #[test]
    fn mutation_through_handle_is_visible() {
        let mut table = ViewTable::new();
        let h = table.insert(bytes(&[0, 0]));
        assert_eq!(table.view_mut(h).map(|v| v.set(1, 9)), Some(Ok(())));
        assert_eq!(table.view(h).map(|v| v.to_vec()), Some(vec![9, 0]));
    }

    #[test]
    fn removed_handle_resolves_nowhere() {
        let mut table = ViewTable::new();
        let h = table.insert(bytes(&[3]));
        assert_eq!(table.remove(h).map(|v| v.to_vec()), Some(vec![3]));
        assert!(table.view(h).is_none());
        assert!(table.view_mut(h).is_none());
        assert!(table.remove(h).is_none());
        assert_eq!(table.live(), 0);
    }

    #[test]
    fn vacated_slot_is_reused_under_a_new_generation() {
        let mut table = ViewTable::new();
        let old = table.insert(bytes(&[1]));
        table.remove(old);
        let new = table.insert(bytes(&[2]));
        let (old, new) = (Handle::from_bits(old), Handle::from_bits(new));
        assert_eq!(old.slot, new.slot);
        assert_eq!(new.generation, old.generation + 1);
        assert!(table.view(old.to_bits()).is_none());
        assert_eq!(table.view(new.to_bits()).map(|v| v.get(1)), Some(Ok(2)));
    }

    #[test]
    fn free_slots_are_reused_most_recent_first() {
        let mut table = ViewTable::new();
        let a = table.insert(bytes(&[1]));
        let b = table.insert(bytes(&[2]));
        table.remove(a);
        table.remove(b);
        let next = Handle::from_bits(table.insert(bytes(&[3])));
        assert_eq!(next.slot, Handle::from_bits(b).slot);
        let after = Handle::from_bits(table.insert(bytes(&[4])));
        assert_eq!(after.slot, Handle::from_bits(a).slot);
        assert_eq!(table.live(), 2);
    }

    #[test]
    fn never_issued_handle_is_none() {
        let table: ViewTable<u8> = ViewTable::new();
        let bogus = Handle {
            slot: 12,
            generation: 0,
        };
        assert!(table.view(bogus.to_bits()).is_none());
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut table = ViewTable::new();
        table.slots.push(Slot::Vacant {
            generation: u32::MAX,
            next_free: None,
        });
        table.free_head = Some(0);

        let last = table.insert(bytes(&[1]));
        assert_eq!(
            Handle::from_bits(last),
            Handle {
                slot: 0,
                generation: u32::MAX
            }
        );
        assert!(table.remove(last).is_some());

        assert!(matches!(table.slots[0], Slot::Retired));
        assert_eq!(table.free_head, None);
        let first_epoch = Handle {
            slot: 0,
            generation: 0,
        };
        assert!(table.view(first_epoch.to_bits()).is_none());
        let fresh = Handle::from_bits(table.insert(bytes(&[2])));
        assert_eq!(fresh.slot, 1);
    }
}
