use std::sync::atomic::{AtomicU8, Ordering};

use derive_more::Deref;

use crate::{Discriminant, TauError};

/// Each admissible triple is counted for itself and for its conjugate with
/// negative real part.
pub const MULTIPLICITY: u8 = 2;

/// A slot holding this value cannot take another increment.
pub const OVERFLOW_GUARD: u8 = u8::MAX - 1;

/// One byte counter per slot, see [`crate::slot_index`].
///
/// Slots are atomics so that the parallel strategy can share the buffer. The
/// sequential strategy goes through `&mut self` and never pays for the
/// synchronisation.
#[derive(Debug, Deref)]
pub struct CountingBuffer {
    #[deref(forward)]
    slots: Vec<AtomicU8>,
}

impl CountingBuffer {
    /// Allocates `n_slots` zeroed counters, failing instead of aborting the
    /// process when the memory is not available.
    pub fn try_new(n_slots: usize) -> Result<Self, TauError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(n_slots)
            .map_err(|_| TauError::Allocation { bytes: n_slots })?;
        slots.resize_with(n_slots, || AtomicU8::new(0));
        Ok(Self { slots })
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot.get_mut() = 0;
        }
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).map(|slot| slot.load(Ordering::Relaxed))
    }

    pub fn max_count(&self) -> u8 {
        self.slots
            .iter()
            .map(|slot| slot.load(Ordering::Relaxed))
            .max()
            .unwrap_or(0)
    }

    /// Adds [`MULTIPLICITY`] to the slot of `x` and returns the new value.
    pub fn bump(&mut self, index: u64, x: Discriminant) -> Result<u8, TauError> {
        let n_slots = self.slots.len();
        let value = usize::try_from(index)
            .ok()
            .and_then(|i| self.slots.get_mut(i))
            .ok_or(TauError::IndexOutOfRange {
                index,
                slots: n_slots,
            })?
            .get_mut();
        if *value >= OVERFLOW_GUARD {
            return Err(TauError::CounterOverflow { x });
        }
        *value += MULTIPLICITY;
        Ok(*value)
    }

    /// Same as [`Self::bump`] through a shared reference. The slot is updated
    /// with a compare-and-swap that refuses to cross [`OVERFLOW_GUARD`].
    pub fn bump_shared(&self, index: u64, x: Discriminant) -> Result<u8, TauError> {
        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| self.slots.get(i))
            .ok_or(TauError::IndexOutOfRange {
                index,
                slots: self.slots.len(),
            })?;
        slot.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |value| {
            (value < OVERFLOW_GUARD).then(|| value + MULTIPLICITY)
        })
        .map(|previous| previous + MULTIPLICITY)
        .map_err(|_| TauError::CounterOverflow { x })
    }
}

impl From<Vec<u8>> for CountingBuffer {
    fn from(values: Vec<u8>) -> Self {
        Self {
            slots: values.into_iter().map(AtomicU8::new).collect(),
        }
    }
}
