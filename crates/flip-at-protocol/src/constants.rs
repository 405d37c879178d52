//! Protocol constants.
//!
//! These constants define the literal prefixes and framing rules of the
//! FLipMouse serial protocol. Commands are sent as `AT <code>[ <param>]`
//! lines terminated with a carriage return; the firmware answers with
//! plain text lines recognized by the fixed prefixes below.

/// Every request line starts with this prefix.
pub const PREFIX_AT_COMMAND: &str = "AT ";

/// Identification/version response, e.g. `FLIPMOUSE V2.0`.
pub const PREFIX_IDENTIFICATION: &str = "FLIPMOUSE ";

/// Raw sensor-value report, e.g. `VALUES:512,512,512,512,512`.
pub const PREFIX_RAW_VALUES: &str = "VALUES:";

/// Begin-of-slot marker within a multi-slot dump; the slot name follows.
pub const PREFIX_SLOT_NAME: &str = "SLOT:";

/// End-of-slot-dump marker.
pub const END_OF_SLOTS: &str = "END";

/// Generic acknowledgement.
pub const ACK: &str = "OK";

/// Every command code is exactly `AT ` plus a 2-letter suffix.
///
/// The protocol only ever uses 2-letter codes, so slot parsing slices the
/// code token out of an action line at this fixed width.
pub const CODE_LENGTH: usize = 5;

/// Number of programmable buttons (3 physical plus 8 virtual functions).
pub const BUTTON_COUNT: usize = 11;

/// Number of sensor values in a raw-value report.
pub const RAW_VALUE_COUNT: usize = 5;

/// Request lines are finished with a carriage return.
pub const COMMAND_TERMINATOR: u8 = b'\r';

/// Serial link speed used by the firmware.
pub const BAUD_RATE: u32 = 115_200;
