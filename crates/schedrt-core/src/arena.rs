//! Preallocated generational thread table.
//!
//! All storage is reserved at construction, so registering and removing
//! threads never allocates.

use schedrt_errors::{SchedError, SchedResult};

use crate::host::ThreadHandle;

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Fixed-capacity table of per-thread records addressed by [`ThreadHandle`].
#[derive(Debug)]
pub struct ThreadArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> ThreadArena<T> {
    /// Reserve `capacity` slots. Capacity above `u32::MAX` is clamped.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = u32::try_from(capacity).unwrap_or(u32::MAX);
        let mut slots = Vec::with_capacity(capacity as usize);
        slots.extend((0..capacity).map(|_| Slot {
            generation: 0,
            value: None,
        }));
        Self {
            slots,
            free: (0..capacity).rev().collect(),
            len: 0,
        }
    }

    /// Number of live records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no record is live.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` in a free slot.
    ///
    /// # Errors
    ///
    /// [`SchedError::CapacityExhausted`] when every slot is taken.
    pub fn insert(&mut self, value: T) -> SchedResult<ThreadHandle> {
        let index = self.free.pop().ok_or(SchedError::CapacityExhausted)?;
        let Some(slot) = self.slots.get_mut(index as usize) else {
            return Err(SchedError::CapacityExhausted);
        };
        slot.value = Some(value);
        self.len = self.len.saturating_add(1);
        Ok(ThreadHandle::new(index, slot.generation))
    }

    /// Remove and return the record behind `handle`.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale or foreign handle.
    pub fn remove(&mut self, handle: ThreadHandle) -> SchedResult<T> {
        let slot = self
            .slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .ok_or(SchedError::UnknownThread)?;
        let value = slot.value.take().ok_or(SchedError::UnknownThread)?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index());
        self.len = self.len.saturating_sub(1);
        Ok(value)
    }

    /// Shared access to the record behind `handle`.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale or foreign handle.
    pub fn get(&self, handle: ThreadHandle) -> SchedResult<&T> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.value.as_ref())
            .ok_or(SchedError::UnknownThread)
    }

    /// Exclusive access to the record behind `handle`.
    ///
    /// # Errors
    ///
    /// [`SchedError::UnknownThread`] for a stale or foreign handle.
    pub fn get_mut(&mut self, handle: ThreadHandle) -> SchedResult<&mut T> {
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.value.as_mut())
            .ok_or(SchedError::UnknownThread)
    }

    /// Whether `handle` names a live record.
    #[must_use]
    pub fn contains(&self, handle: ThreadHandle) -> bool {
        self.get(handle).is_ok()
    }

    /// Live records with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ThreadHandle, &T)> {
        self.slots.iter().zip(0u32..).filter_map(|(slot, index)| {
            slot.value
                .as_ref()
                .map(|value| (ThreadHandle::new(index, slot.generation), value))
        })
    }
}
