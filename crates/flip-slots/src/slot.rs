//! The slot model: one named device configuration.

use serde::{Deserialize, Serialize};

/// One complete named device configuration, expressed as an ordered list
/// of AT-command lines.
///
/// The line order is significant and fixed by the binding registration
/// order; `lines` is the literal save/load format exchanged with the
/// device and with on-disk profile files, with no additional framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot name.
    pub name: String,
    /// Protocol lines, one command with optional argument per entry.
    pub lines: Vec<String>,
}

impl Slot {
    /// An empty slot with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Slot { name: name.into(), lines: Vec::new() }
    }

    /// The hard-coded baseline configuration under the given name.
    ///
    /// Key press parameters carry a trailing space because key lists are
    /// built as sequences of `KEY_X ` tokens.
    pub fn baseline(name: impl Into<String>) -> Self {
        let lines = [
            "AT AX 70",
            "AT AY 60",
            "AT DX 20",
            "AT DY 20",
            "AT TS 500",
            "AT TP 525",
            "AT WS 3",
            "AT MM 1",
            "AT GU 50",
            "AT GD 50",
            "AT GL 50",
            "AT GR 50",
            "AT SM 700",
            "AT HM 300",
            "AT BM 01",
            "AT NE",
            "AT BM 02",
            "AT KP KEY_ESC ",
            "AT BM 03",
            "AT NC",
            "AT BM 04",
            "AT KP KEY_UP ",
            "AT BM 05",
            "AT KP KEY_DOWN ",
            "AT BM 06",
            "AT KP KEY_LEFT ",
            "AT BM 07",
            "AT KP KEY_RIGHT ",
            "AT BM 08",
            "AT PL",
            "AT BM 09",
            "AT NC",
            "AT BM 10",
            "AT CR",
            "AT BM 11",
            "AT CA",
        ];
        Slot {
            name: name.into(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Slot {
    /// The baseline configuration under the name `default`.
    fn default() -> Self {
        Slot::baseline("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_literals() {
        let slot = Slot::default();
        assert_eq!(slot.name, "default");
        assert_eq!(slot.lines[0], "AT AX 70");
        let bm1 = slot.lines.iter().position(|l| l == "AT BM 01").unwrap();
        assert_eq!(slot.lines[bm1 + 1], "AT NE");
        // 14 settings plus 11 selector/action pairs.
        assert_eq!(slot.lines.len(), 14 + 22);
    }
}
