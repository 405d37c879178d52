//! Wire-line building and classification.
//!
//! Outgoing lines are rendered from a command description plus its
//! parameter; incoming lines are classified by the fixed literal prefixes
//! the firmware uses for its responses. No deeper parsing happens at this
//! layer — recognized forms are routed downstream to slot population or
//! status display.

use crate::constants::{
    ACK, END_OF_SLOTS, PREFIX_IDENTIFICATION, PREFIX_RAW_VALUES, PREFIX_SLOT_NAME,
    RAW_VALUE_COUNT,
};
use crate::error::{ProtocolError, ProtocolResult};
use crate::registry::{CommandRegistry, ParamKind};

/// Render the wire line for a command chosen by description.
///
/// The argument is appended per the command's parameter shape: integer
/// kinds take `int_param`, text kinds take `text_param`, parameterless
/// commands are emitted bare. Returns `None` when the description is not
/// in the catalogue.
pub fn build_action_line(
    registry: &CommandRegistry,
    description: &str,
    text_param: &str,
    int_param: i32,
) -> Option<String> {
    let code = registry.command(description)?;
    let line = match registry.param_kind(description)? {
        ParamKind::UnsignedInt | ParamKind::SignedInt => format!("{code} {int_param}"),
        ParamKind::Text => format!("{code} {text_param}"),
        ParamKind::None => code.to_string(),
    };
    Some(line)
}

/// One raw sensor-value report (`VALUES:` line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValues {
    /// Pressure sensor (sip/puff).
    pub pressure: i32,
    /// Force sensor, up direction.
    pub up: i32,
    /// Force sensor, down direction.
    pub down: i32,
    /// Force sensor, left direction.
    pub left: i32,
    /// Force sensor, right direction.
    pub right: i32,
}

impl RawValues {
    /// Parse the comma-separated payload of a `VALUES:` report.
    pub fn parse(payload: &str) -> ProtocolResult<RawValues> {
        let parts: Vec<&str> = payload.split(',').collect();
        if parts.len() != RAW_VALUE_COUNT {
            return Err(ProtocolError::MalformedValues {
                payload: payload.to_string(),
                reason: format!("expected {} values, got {}", RAW_VALUE_COUNT, parts.len()),
            });
        }
        let mut values = [0i32; RAW_VALUE_COUNT];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.trim().parse().map_err(|_| ProtocolError::MalformedValues {
                payload: payload.to_string(),
                reason: format!("invalid integer '{}'", part),
            })?;
        }
        Ok(RawValues {
            pressure: values[0],
            up: values[1],
            down: values[2],
            left: values[3],
            right: values[4],
        })
    }
}

/// A line received from the device, classified by its fixed prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceLine {
    /// Identification/version response (`FLIPMOUSE <version>`).
    Identification {
        /// Firmware version text after the prefix.
        version: String,
    },
    /// Raw sensor-value report (`VALUES:<p>,<u>,<d>,<l>,<r>`).
    RawValues(RawValues),
    /// Begin-of-slot marker within a multi-slot dump (`SLOT:<name>`).
    SlotBegin {
        /// Name of the slot that follows.
        name: String,
    },
    /// End-of-slot-dump marker (`END`).
    EndOfSlots,
    /// Generic acknowledgement (`OK`).
    Ack,
    /// Anything else; shown in the activity log as-is.
    Log(String),
}

impl DeviceLine {
    /// Classify one received text line.
    ///
    /// Trailing CR/LF is ignored. Only `VALUES:` reports are parsed
    /// further; a malformed report is an error rather than a log line so
    /// the caller can surface it.
    pub fn classify(line: &str) -> ProtocolResult<DeviceLine> {
        let line = line.trim_end_matches(['\r', '\n']);
        if let Some(version) = line.strip_prefix(PREFIX_IDENTIFICATION) {
            return Ok(DeviceLine::Identification { version: version.to_string() });
        }
        if let Some(payload) = line.strip_prefix(PREFIX_RAW_VALUES) {
            return Ok(DeviceLine::RawValues(RawValues::parse(payload)?));
        }
        if let Some(name) = line.strip_prefix(PREFIX_SLOT_NAME) {
            return Ok(DeviceLine::SlotBegin { name: name.to_string() });
        }
        if line == END_OF_SLOTS {
            return Ok(DeviceLine::EndOfSlots);
        }
        if line == ACK {
            return Ok(DeviceLine::Ack);
        }
        Ok(DeviceLine::Log(line.to_string()))
    }
}
