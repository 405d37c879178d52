//! Slot list management: active slot, creation, deletion, cycling.

use crate::error::{SlotError, SlotResult};
use crate::slot::Slot;

/// Maximum number of slots the device can hold.
pub const MAX_SLOTS: usize = 5;

/// Owns the slot list and the active-slot index.
///
/// Starts with a single baseline slot named `mouse`. All operations keep
/// at least one slot alive and never leave the active index dangling.
#[derive(Debug, Clone)]
pub struct SlotManager {
    slots: Vec<Slot>,
    active: usize,
}

impl SlotManager {
    /// A manager holding the baseline slot.
    pub fn new() -> Self {
        SlotManager {
            slots: vec![Slot::baseline("mouse")],
            active: 0,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the manager holds no slots. Never true in practice.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the active slot.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active slot.
    pub fn active(&self) -> &Slot {
        &self.slots[self.active]
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Names of all slots in order.
    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.name.as_str()).collect()
    }

    /// Make the slot at `index` active.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.slots.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    /// Advance to the next slot, wrapping around after the last.
    pub fn next(&mut self) -> &Slot {
        self.active = (self.active + 1) % self.slots.len();
        self.active()
    }

    /// Step back to the previous slot, wrapping around before the first.
    pub fn previous(&mut self) -> &Slot {
        self.active = if self.active > 0 { self.active - 1 } else { self.slots.len() - 1 };
        self.active()
    }

    /// Replace the active slot's contents.
    pub fn replace_active(&mut self, slot: Slot) {
        self.slots[self.active] = slot;
    }

    /// Clone the active slot under a generated unique name (`Slot1`,
    /// `Slot2`, …) and make the clone active.
    ///
    /// Refused with no state change once [`MAX_SLOTS`] is reached.
    pub fn add_slot(&mut self) -> SlotResult<&Slot> {
        if self.slots.len() >= MAX_SLOTS {
            return Err(SlotError::SlotLimit { max: MAX_SLOTS });
        }
        let mut counter = 1;
        let name = loop {
            let candidate = format!("Slot{counter}");
            if self.slots.iter().all(|s| s.name != candidate) {
                break candidate;
            }
            counter += 1;
        };
        let mut slot = self.slots[self.active].clone();
        slot.name = name;
        self.slots.push(slot);
        self.active = self.slots.len() - 1;
        Ok(self.active())
    }

    /// Delete the active slot.
    ///
    /// Deleting the sole remaining slot is refused with no state change;
    /// otherwise the active index moves to the previous slot when needed.
    pub fn delete_active(&mut self) -> SlotResult<Slot> {
        if self.slots.len() <= 1 {
            return Err(SlotError::LastSlot);
        }
        let removed = self.slots.remove(self.active);
        if self.active > 0 {
            self.active -= 1;
        }
        Ok(removed)
    }
}

impl Default for SlotManager {
    fn default() -> Self {
        SlotManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_mouse_slot() {
        let manager = SlotManager::new();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active().name, "mouse");
    }

    #[test]
    fn test_add_slot_clones_active() {
        let mut manager = SlotManager::new();
        let lines = manager.active().lines.clone();
        let added = manager.add_slot().unwrap();
        assert_eq!(added.name, "Slot1");
        assert_eq!(added.lines, lines);
        assert_eq!(manager.active_index(), 1);
    }

    #[test]
    fn test_add_slot_names_are_unique() {
        let mut manager = SlotManager::new();
        manager.add_slot().unwrap();
        manager.add_slot().unwrap();
        let names = manager.names();
        assert_eq!(names, vec!["mouse", "Slot1", "Slot2"]);
    }

    #[test]
    fn test_add_slot_capacity() {
        let mut manager = SlotManager::new();
        for _ in 1..MAX_SLOTS {
            manager.add_slot().unwrap();
        }
        let err = manager.add_slot().unwrap_err();
        assert!(matches!(err, SlotError::SlotLimit { max: MAX_SLOTS }));
        assert_eq!(manager.len(), MAX_SLOTS);
    }

    #[test]
    fn test_delete_last_slot_is_refused() {
        let mut manager = SlotManager::new();
        let err = manager.delete_active().unwrap_err();
        assert!(matches!(err, SlotError::LastSlot));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_delete_decrements_and_keeps_others() {
        let mut manager = SlotManager::new();
        manager.add_slot().unwrap();
        manager.add_slot().unwrap();
        manager.select(1);
        let removed = manager.delete_active().unwrap();
        assert_eq!(removed.name, "Slot1");
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.names(), vec!["mouse", "Slot2"]);
        assert_eq!(manager.active().name, "mouse");
    }

    #[test]
    fn test_next_previous_wrap() {
        let mut manager = SlotManager::new();
        manager.add_slot().unwrap();
        manager.select(0);
        assert_eq!(manager.next().name, "Slot1");
        assert_eq!(manager.next().name, "mouse");
        assert_eq!(manager.previous().name, "Slot1");
    }
}
