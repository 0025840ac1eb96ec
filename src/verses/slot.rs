//! Slot selection.
//!
//! A slot partitions the verse cache and is sent upstream as `position`.

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::constants::slots::MAX_SLOT;

/// Verse slot in `0..=200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Slot(u8);

impl Slot {
    /// Lowest slot.
    pub const MIN: Self = Self(0);
    /// Highest slot.
    pub const MAX: Self = Self(MAX_SLOT);

    /// Create a slot, or `None` if `index` is out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index <= MAX_SLOT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The slot index.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chooses the slot for a request.
pub trait SlotPicker: Send + Sync {
    /// Draw a slot.
    fn pick(&self) -> Slot;
}

/// Uniform random slot over the whole range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSlotPicker;

impl SlotPicker for RandomSlotPicker {
    fn pick(&self) -> Slot {
        Slot(rand::thread_rng().gen_range(0..=MAX_SLOT))
    }
}

/// Always the same slot.
#[derive(Debug, Clone, Copy)]
pub struct FixedSlot(pub Slot);

impl SlotPicker for FixedSlot {
    fn pick(&self) -> Slot {
        self.0
    }
}
