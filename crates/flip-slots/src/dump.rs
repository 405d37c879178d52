//! Collector for multi-slot dumps (`AT LA` responses).
//!
//! The firmware answers a load-all request with one `SLOT:<name>` marker
//! per stored slot, the slot's AT lines, and a final `END`. The collector
//! is fed one received line at a time by the serial reader and assembles
//! the slots as they stream in.

use flip_at_protocol::constants::PREFIX_AT_COMMAND;
use flip_at_protocol::DeviceLine;

use crate::slot::Slot;

/// Accumulates slots from a streamed multi-slot dump.
#[derive(Debug, Default)]
pub struct DumpCollector {
    slots: Vec<Slot>,
    current: Option<Slot>,
    complete: bool,
}

impl DumpCollector {
    /// A fresh collector.
    pub fn new() -> Self {
        DumpCollector::default()
    }

    /// Feed one received line.
    ///
    /// `SLOT:` opens a new slot, AT lines accumulate into it, `END`
    /// completes the dump. Everything else (acknowledgements, raw-value
    /// reports, status text) is ignored at this layer. Returns `true`
    /// once the end marker has been seen.
    pub fn feed(&mut self, line: &str) -> bool {
        if self.complete {
            return true;
        }
        let classified =
            DeviceLine::classify(line).unwrap_or_else(|_| DeviceLine::Log(line.to_string()));
        match classified {
            DeviceLine::SlotBegin { name } => {
                if let Some(finished) = self.current.take() {
                    self.slots.push(finished);
                }
                self.current = Some(Slot::new(name));
            }
            DeviceLine::EndOfSlots => {
                if let Some(finished) = self.current.take() {
                    self.slots.push(finished);
                }
                self.complete = true;
            }
            DeviceLine::Log(text) if text.starts_with(PREFIX_AT_COMMAND) => {
                if let Some(slot) = self.current.as_mut() {
                    slot.lines.push(text);
                } else {
                    log::debug!("AT line outside a slot dump: '{}'", text);
                }
            }
            _ => {}
        }
        self.complete
    }

    /// Whether the end marker has been seen.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of completed slots so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been completed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the collector, yielding the collected slots.
    pub fn into_slots(self) -> Vec<Slot> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slot_dump() {
        let mut collector = DumpCollector::new();
        assert!(!collector.feed("SLOT:mouse"));
        assert!(!collector.feed("AT AX 70"));
        assert!(!collector.feed("AT AY 60"));
        assert!(collector.feed("END"));

        let slots = collector.into_slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].name, "mouse");
        assert_eq!(slots[0].lines, vec!["AT AX 70", "AT AY 60"]);
    }

    #[test]
    fn test_two_slot_dump() {
        let mut collector = DumpCollector::new();
        collector.feed("SLOT:mouse");
        collector.feed("AT AX 70");
        collector.feed("SLOT:keyboard");
        collector.feed("AT AX 40");
        collector.feed("END");

        assert!(collector.is_complete());
        let slots = collector.into_slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name, "mouse");
        assert_eq!(slots[1].name, "keyboard");
        assert_eq!(slots[1].lines, vec!["AT AX 40"]);
    }

    #[test]
    fn test_noise_is_ignored() {
        let mut collector = DumpCollector::new();
        collector.feed("OK");
        collector.feed("VALUES:512,512,512,512,512");
        collector.feed("SLOT:mouse");
        collector.feed("OK");
        collector.feed("AT AX 70");
        collector.feed("END");

        let slots = collector.into_slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].lines, vec!["AT AX 70"]);
    }

    #[test]
    fn test_lines_after_end_are_dropped() {
        let mut collector = DumpCollector::new();
        collector.feed("SLOT:mouse");
        collector.feed("END");
        assert!(collector.feed("AT AX 70"));
        assert_eq!(collector.into_slots()[0].lines.len(), 0);
    }
}
