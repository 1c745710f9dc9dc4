// Rust guideline compliant 2026-02-06

//! Three-slot deck rotation.
//!
//! The deck shows three physical card slots. Each slot has a priority
//! (0 = frontmost) and a data index into the flattened doha sequence. Every
//! swipe sends the front card to the back and, every third swipe, the slots
//! leap forward by [`DECK_SIZE`] so the deck keeps a look-ahead window of
//! three cards.

use crate::Doha;
use serde::Serialize;

/// Number of physical card slots.
pub const DECK_SIZE: usize = 3;

/// One of the three physical card slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// First physical slot.
    One,
    /// Second physical slot.
    Two,
    /// Third physical slot.
    Three,
}

impl Slot {
    /// All slots in physical order.
    pub const ALL: [Slot; DECK_SIZE] = [Slot::One, Slot::Two, Slot::Three];

    /// Returns the zero-based physical position of the slot.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
            Slot::Three => 2,
        }
    }
}

/// Rotating priority and data-index registers for the three card slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRotator {
    /// Physical slots in rotation order; `order[0]` is the slot last sent back.
    order: [usize; DECK_SIZE],
    /// Priority of each physical slot.
    priorities: [usize; DECK_SIZE],
    /// Unbounded data index of each physical slot.
    data_indices: [usize; DECK_SIZE],
}

impl Default for DeckRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckRotator {
    /// Creates a rotator with priorities and data indices `(0, 1, 2)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: [0, 1, 2],
            priorities: [0, 1, 2],
            data_indices: [0, 1, 2],
        }
    }

    /// Restores the initial registers.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advances the deck by one swipe.
    ///
    /// The rotation order shifts left by one and every slot's priority becomes
    /// its position in the new order. When slot one re-enters at the back,
    /// slot three is pointed two cards past slot one; when slot three does,
    /// slots one and two both jump a full deck ahead.
    pub fn shuffle(&mut self) {
        self.order.rotate_left(1);

        for (slot, priority) in self.priorities.iter_mut().enumerate() {
            *priority = self.order.iter().position(|&s| s == slot).unwrap_or(slot);
        }

        if self.order[0] == 0 {
            self.data_indices[2] = self.data_indices[0] + DECK_SIZE - 1;
        } else if self.order[0] == DECK_SIZE - 1 {
            self.data_indices[0] += DECK_SIZE;
            self.data_indices[1] += DECK_SIZE;
        }

        tracing::debug!(
            order = ?self.order,
            priorities = ?self.priorities,
            data_indices = ?self.data_indices,
            "deck shuffled"
        );
    }

    /// Returns the current priority of a slot.
    #[must_use]
    pub fn priority(&self, slot: Slot) -> usize {
        self.priorities[slot.index()]
    }

    /// Returns all three priorities in physical slot order.
    #[must_use]
    pub fn priorities(&self) -> [usize; DECK_SIZE] {
        self.priorities
    }

    /// Returns the unbounded data index of a slot.
    #[must_use]
    pub fn data_index(&self, slot: Slot) -> usize {
        self.data_indices[slot.index()]
    }

    /// Returns all three data indices in physical slot order.
    #[must_use]
    pub fn data_indices(&self) -> [usize; DECK_SIZE] {
        self.data_indices
    }

    /// Overrides the data index of a slot.
    ///
    /// # Arguments
    ///
    /// * `slot` - Slot to update
    /// * `index` - Requested index; may be negative or past the end
    /// * `len` - Length of the flattened sequence
    ///
    /// # Returns
    ///
    /// The stored index: `index` wrapped into `0..len`, or 0 when `len` is 0.
    pub fn set_data_index(&mut self, slot: Slot, index: i64, len: usize) -> usize {
        let wrapped = if len == 0 {
            0
        } else {
            // len fits in i64 for any sequence that fits in memory.
            index.rem_euclid(len as i64) as usize
        };
        self.data_indices[slot.index()] = wrapped;
        wrapped
    }

    /// Resolves a slot's data index against a sequence length.
    ///
    /// # Returns
    ///
    /// `None` for an empty sequence, otherwise the wrapped index.
    #[must_use]
    pub fn resolve(&self, slot: Slot, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.data_index(slot) % len)
        }
    }

    /// Returns the doha shown by each physical slot.
    #[must_use]
    pub fn visible<'a>(&self, dohas: &'a [Doha]) -> [Option<&'a Doha>; DECK_SIZE] {
        Slot::ALL.map(|slot| self.resolve(slot, dohas.len()).map(|i| &dohas[i]))
    }
}
