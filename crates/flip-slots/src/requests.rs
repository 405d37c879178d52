//! One-shot AT requests and the apply sequence.
//!
//! These are the request lines a configuration front end issues directly,
//! outside of slot serialization: identification, calibration, raw-value
//! reporting, EEPROM slot housekeeping, and the full "apply" sequence that
//! pushes the current binding values to the device.

use flip_at_protocol::CommandRegistry;

use crate::bindings::{is_button_code, BindingTable};
use crate::error::SlotResult;
use crate::serializer::value_line;

/// `AT ID` — request the identification string.
pub fn identify() -> String {
    "AT ID".to_string()
}

/// `AT NE` — switch to the next stored configuration.
pub fn next_slot() -> String {
    "AT NE".to_string()
}

/// `AT LA` — dump all stored slots.
pub fn load_all() -> String {
    "AT LA".to_string()
}

/// `AT SR` — start raw-value reports.
pub fn start_reporting() -> String {
    "AT SR".to_string()
}

/// `AT ER` — end raw-value reports.
pub fn end_reporting() -> String {
    "AT ER".to_string()
}

/// `AT CA` — calibrate the zero point.
pub fn calibrate() -> String {
    "AT CA".to_string()
}

/// `AT SA <name>` — save the current settings under a slot name.
pub fn save_slot(name: &str) -> String {
    format!("AT SA {name}")
}

/// `AT LO <name>` — load the named slot.
pub fn load_slot(name: &str) -> String {
    format!("AT LO {name}")
}

/// `AT DE` — delete all stored slots.
pub fn clear_eeprom() -> String {
    "AT DE".to_string()
}

/// The full apply sequence for the current binding values.
///
/// Settings first, then the eleven button functions as selector/action
/// pairs. Unlike stored slot lines, the selector here uses the unpadded
/// button number (`AT BM 1` … `AT BM 11`), matching what the firmware
/// expects on the live link.
pub fn apply_lines(table: &BindingTable, registry: &CommandRegistry) -> SlotResult<Vec<String>> {
    let mut lines = Vec::with_capacity(table.len() * 2);
    let mut button = 0;
    for binding in table.iter() {
        if is_button_code(&binding.code) {
            button += 1;
            lines.push(format!("AT BM {button}"));
        }
        lines.push(value_line(registry, &binding.code, &binding.value)?);
    }
    Ok(lines)
}
