//! Slot serialization: bindings to protocol lines and back.
//!
//! `store` walks the binding table in registration order and renders one
//! line per binding — two for each button slot (selector line, then the
//! resolved action line). `display` is the reverse: a single pass over a
//! slot's lines with one unit of lookahead state (a pending button
//! selector), resolving each line to a binding by first-match-by-prefix.
//!
//! The round-trip law `display(store(table)) == table` holds for any
//! fully-populated, in-range table and is the core correctness property.

use flip_at_protocol::constants::CODE_LENGTH;
use flip_at_protocol::{build_action_line, CommandRegistry, UiKind};

use crate::bindings::{is_button_code, BindingTable, FieldValue};
use crate::error::{SlotError, SlotResult};
use crate::slot::Slot;

/// Derived readout over the axis slider pairs.
///
/// The combined speed/deadzone values mirror the X-axis sliders;
/// `split_axes` is true iff the X and Y variants of speed or deadzone
/// differ. Pure function of the sliders, never stored in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AxisReadout {
    /// Combined speed (the X acceleration slider).
    pub speed: i32,
    /// Combined deadzone (the X deadzone slider).
    pub deadzone: i32,
    /// Whether the X and Y sliders have diverged.
    pub split_axes: bool,
}

/// Compute the derived axis readout from the current slider values.
pub fn axis_readout(table: &BindingTable) -> AxisReadout {
    let slider = |code: &str| table.get(code).and_then(|b| b.value.slider()).unwrap_or(0);
    let (ax, ay) = (slider("AT AX"), slider("AT AY"));
    let (dx, dy) = (slider("AT DX"), slider("AT DY"));
    AxisReadout {
        speed: ax,
        deadzone: dx,
        split_axes: ax != ay || dx != dy,
    }
}

/// Render the line a binding's current value serializes to.
///
/// For button bindings this is the *action* line only; the selector line
/// is the binding's own code.
pub(crate) fn value_line(
    registry: &CommandRegistry,
    code: &str,
    value: &FieldValue,
) -> SlotResult<String> {
    let line = match value {
        FieldValue::Choice { action, number, text } => build_action_line(registry, action, text, *number)
            .ok_or_else(|| SlotError::UnknownAction(action.clone()))?,
        FieldValue::Slider { value } | FieldValue::Int { value } => format!("{code} {value}"),
        FieldValue::Text { value } => format!("{code} {value}"),
        FieldValue::Boolean { primary } => {
            format!("{code} {}", if *primary { 1 } else { 0 })
        }
    };
    Ok(line)
}

/// Serialize the binding table into a slot with the given name.
///
/// Emits lines in table order; each button slot contributes exactly two
/// lines. Field values are taken as-is — range validation is the
/// responsibility of whatever edits the table.
pub fn store_slot(
    name: impl Into<String>,
    table: &BindingTable,
    registry: &CommandRegistry,
) -> SlotResult<Slot> {
    let mut slot = Slot::new(name);
    for binding in table.iter() {
        if is_button_code(&binding.code) {
            slot.lines.push(binding.code.clone());
        }
        slot.lines.push(value_line(registry, &binding.code, &binding.value)?);
    }
    Ok(slot)
}

fn parse_int(slot: &Slot, line: &str, arg: &str) -> SlotResult<i32> {
    arg.trim().parse().map_err(|_| SlotError::MalformedLine {
        slot: slot.name.clone(),
        line: line.to_string(),
        reason: format!("invalid integer argument '{}'", arg),
    })
}

/// Argument text after a code of the given length plus one separator.
fn argument(line: &str, code_len: usize) -> &str {
    line.get(code_len + 1..).unwrap_or("")
}

/// Populate the pending button binding from the resolved action line.
///
/// The action code is the fixed-width `AT XX` token at the start of the
/// line; the selected action is recovered through its selection index so
/// that storing and displaying translate positions identically. Lines
/// whose code is unknown are skipped, mirroring the lookup-miss policy.
fn apply_action_line(
    slot: &Slot,
    line: &str,
    index: usize,
    table: &mut BindingTable,
    registry: &CommandRegistry,
) -> SlotResult<()> {
    let Some(code) = line.get(..CODE_LENGTH) else {
        return Err(SlotError::MalformedLine {
            slot: slot.name.clone(),
            line: line.to_string(),
            reason: "action line shorter than a command code".to_string(),
        });
    };
    let Some(ui) = registry.ui_kind(code) else {
        log::debug!("unknown action code in '{}', skipping", line);
        return Ok(());
    };
    let Some(action) = registry.selectable_description_at(registry.selection_index_of(code)) else {
        log::debug!("no selectable action resolves '{}', skipping", line);
        return Ok(());
    };

    let arg = argument(line, CODE_LENGTH);
    let FieldValue::Choice { action: a, number, text } = &mut table.binding_mut(index).value else {
        log::debug!("binding for '{}' is not a button slot, skipping", line);
        return Ok(());
    };
    *a = action.to_string();
    match ui {
        UiKind::IntField => *number = parse_int(slot, line, arg)?,
        UiKind::TextField | UiKind::KeySelect => *text = arg.to_string(),
        // Parameterless actions only move the selection.
        _ => {}
    }
    Ok(())
}

/// Deserialize a slot back into the binding table.
///
/// Single pass with pending-selector lookahead; lines matching no binding
/// are skipped. Returns the recomputed [`AxisReadout`].
pub fn display_slot(
    slot: &Slot,
    table: &mut BindingTable,
    registry: &CommandRegistry,
) -> SlotResult<AxisReadout> {
    let mut pending: Option<usize> = None;

    for line in &slot.lines {
        if let Some(index) = pending.take() {
            apply_action_line(slot, line, index, table, registry)?;
            continue;
        }

        let Some(index) = table.match_prefix(line) else {
            log::debug!("no binding matches '{}', skipping", line);
            continue;
        };
        if is_button_code(&table.binding(index).code) {
            pending = Some(index);
            continue;
        }

        let code_len = table.binding(index).code.len();
        let arg = argument(line, code_len);
        match &mut table.binding_mut(index).value {
            FieldValue::Slider { value } | FieldValue::Int { value } => {
                *value = parse_int(slot, line, arg)?;
            }
            FieldValue::Text { value } => *value = arg.to_string(),
            FieldValue::Boolean { primary } => {
                *primary = parse_int(slot, line, arg)? == 1;
            }
            // Button slots are handled through the pending selector.
            FieldValue::Choice { .. } => {}
        }
    }

    Ok(axis_readout(table))
}
