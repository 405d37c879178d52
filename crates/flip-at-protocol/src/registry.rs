//! The FLipMouse AT-command catalogue.
//!
//! Every command the firmware understands is described by a [`CommandSpec`]:
//! its wire code (`AT XX`), parameter shape, human-readable description,
//! whether it may be assigned to a button, and how a bound configuration
//! field is rendered and serialized.
//!
//! The catalogue is populated once via [`CommandRegistry::standard`] and is
//! read-only afterwards. Both the code and the description act as unique
//! keys; the registry keeps a hash index over each so lookups in either
//! direction are O(1).

use std::collections::HashMap;

/// Parameter shape of an AT-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// The command takes no argument.
    None,
    /// Unsigned integer argument.
    UnsignedInt,
    /// Signed integer argument.
    SignedInt,
    /// String argument running to the end of the line.
    Text,
}

/// How a command's bound configuration field is rendered and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKind {
    /// Plain action without an editable value.
    Standard,
    /// Numeric entry field.
    IntField,
    /// Free text entry field.
    TextField,
    /// Key-identifier selection (space-separated `KEY_*` list).
    KeySelect,
    /// Slider with an integer value.
    Slider,
    /// Pair of mutually exclusive flags serialized as `1`/`0`.
    Boolean,
}

/// One supported AT-command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Wire token, e.g. `AT BM`. Unique within the registry.
    pub code: &'static str,
    /// Parameter shape.
    pub param: ParamKind,
    /// Human-readable label. Unique within the registry; this is the
    /// externally visible identity used by UI-facing lookups.
    pub description: &'static str,
    /// Whether the command may appear as a chooseable button action.
    pub selectable: bool,
    /// UI representation of a field bound to this command.
    pub ui: UiKind,
}

/// Static catalogue of every supported AT-command.
#[derive(Debug)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
    by_code: HashMap<&'static str, usize>,
    by_description: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    fn with_capacity(capacity: usize) -> Self {
        CommandRegistry {
            specs: Vec::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
            by_description: HashMap::with_capacity(capacity),
        }
    }

    /// Add a command to the catalogue.
    ///
    /// Duplicate codes or descriptions are programmer errors and fail hard.
    fn add(&mut self, spec: CommandSpec) {
        let index = self.specs.len();
        assert!(
            self.by_code.insert(spec.code, index).is_none(),
            "duplicate command code {}",
            spec.code
        );
        assert!(
            self.by_description.insert(spec.description, index).is_none(),
            "duplicate command description {}",
            spec.description
        );
        self.specs.push(spec);
    }

    /// Number of commands in the catalogue.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over the specs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    /// Look up a command's description by its wire code.
    pub fn describe(&self, code: &str) -> Option<&'static str> {
        self.by_code.get(code).map(|&i| self.specs[i].description)
    }

    /// Look up a command's wire code by its description.
    pub fn command(&self, description: &str) -> Option<&'static str> {
        self.by_description.get(description).map(|&i| self.specs[i].code)
    }

    /// Parameter shape of the command with the given description.
    pub fn param_kind(&self, description: &str) -> Option<ParamKind> {
        self.by_description.get(description).map(|&i| self.specs[i].param)
    }

    /// UI kind of the command with the given wire code.
    pub fn ui_kind(&self, code: &str) -> Option<UiKind> {
        self.by_code.get(code).map(|&i| self.specs[i].ui)
    }

    /// UI kind of the command with the given description.
    pub fn ui_kind_by_description(&self, description: &str) -> Option<UiKind> {
        self.by_description.get(description).map(|&i| self.specs[i].ui)
    }

    /// Whether the command at the given registry position is selectable.
    ///
    /// Out-of-range positions report `false`.
    pub fn selectable(&self, index: usize) -> bool {
        self.specs.get(index).map(|s| s.selectable).unwrap_or(false)
    }

    /// Whether the command with the given description is selectable.
    pub fn selectable_by_description(&self, description: &str) -> bool {
        self.by_description
            .get(description)
            .map(|&i| self.specs[i].selectable)
            .unwrap_or(false)
    }

    /// Count of selectable commands strictly before the given registry
    /// position. Out-of-range positions report 0.
    pub fn selection_index(&self, index: usize) -> usize {
        if index >= self.specs.len() {
            return 0;
        }
        self.specs[..index].iter().filter(|s| s.selectable).count()
    }

    /// Position of the command with the given code within the subset of
    /// selectable commands.
    ///
    /// Walks the catalogue with a running count that starts at -1 and is
    /// incremented at each selectable entry; the running value is returned
    /// as soon as the code matches. A code that never matches yields the
    /// final running value, not an error. Both the early return and the
    /// fall-through value are part of the slot display contract and must
    /// not be changed.
    pub fn selection_index_of(&self, code: &str) -> i32 {
        let mut selection_index = -1;
        for spec in &self.specs {
            if spec.selectable {
                selection_index += 1;
            }
            if spec.code == code {
                return selection_index;
            }
        }
        selection_index
    }

    /// Description of the selectable command at the given selection index.
    ///
    /// This is the inverse of [`selection_index_of`](Self::selection_index_of)
    /// for selectable commands: entry `n` of an action picker built from
    /// [`selectable_descriptions`](Self::selectable_descriptions).
    pub fn selectable_description_at(&self, selection_index: i32) -> Option<&'static str> {
        if selection_index < 0 {
            return None;
        }
        self.specs
            .iter()
            .filter(|s| s.selectable)
            .nth(selection_index as usize)
            .map(|s| s.description)
    }

    /// Descriptions of all selectable commands, in registry order.
    ///
    /// This is the content of an action picker; non-selectable commands
    /// (pure settings) are excluded.
    pub fn selectable_descriptions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().filter(|s| s.selectable).map(|s| s.description)
    }

    /// The full FLipMouse command set.
    pub fn standard() -> Self {
        let mut r = CommandRegistry::with_capacity(48);
        let mut cmd = |code, param, description, selectable, ui| {
            r.add(CommandSpec { code, param, description, selectable, ui })
        };

        use ParamKind::{None, SignedInt, Text, UnsignedInt};
        use UiKind::{Boolean, IntField, KeySelect, Slider, Standard, TextField};

        cmd("AT ID", None, "Get Id String", false, Standard);
        cmd("AT BM", UnsignedInt, "Update Button mode", false, Standard);
        cmd("AT CL", None, "Click Left Mouse Button", true, Standard);
        cmd("AT CR", None, "Click Right Mouse Button", true, Standard);
        cmd("AT CM", None, "Click Middle Mouse Button", true, Standard);
        cmd("AT CD", None, "Double Click Left Mouse Button", true, Standard);
        cmd("AT PL", None, "Hold Left Mouse Button", true, Standard);
        cmd("AT PR", None, "Hold Right Mouse Button", true, Standard);
        cmd("AT PM", None, "Hold Middle Mouse Button", true, Standard);
        cmd("AT RL", None, "Release Left Mouse Button", false, Standard);
        cmd("AT RR", None, "Release Right Mouse Button", false, Standard);
        cmd("AT RM", None, "Release Middle Mouse Button", false, Standard);
        cmd("AT WU", None, "Wheel Up", true, Standard);
        cmd("AT WD", None, "Wheel Down", true, Standard);
        cmd("AT WS", UnsignedInt, "Mouse Wheel Step Size", false, Standard);
        cmd("AT MX", SignedInt, "Move Mouse X", true, IntField);
        cmd("AT MY", SignedInt, "Move Mouse Y", true, IntField);
        cmd("AT KW", Text, "Write Text", true, TextField);
        cmd("AT KP", Text, "Press Keys", true, KeySelect);
        cmd("AT KR", Text, "Release Keys", false, Standard);
        cmd("AT RA", None, "Release All", false, Standard);
        cmd("AT SA", Text, "Save Slot", false, Standard);
        cmd("AT LO", Text, "Load Slot", false, Standard);
        cmd("AT LA", None, "Load All", false, Standard);
        cmd("AT LI", None, "List Slots", false, Standard);
        cmd("AT NE", None, "Switch to next configuration", true, Standard);
        cmd("AT DE", None, "Delete all configurations", false, Standard);
        cmd("AT NC", None, "No Command", true, Standard);
        cmd("AT MM", UnsignedInt, "Mouse Mode (1) or Alternative (0)", false, Boolean);
        cmd("AT SW", None, "Switch Mouse/Alternative", true, Standard);
        cmd("AT SR", None, "Start Rawvalue reports", false, Standard);
        cmd("AT ER", None, "End Rawvalue reports", false, Standard);
        cmd("AT CA", None, "Calibrate Middle Position", true, Standard);
        cmd("AT AX", UnsignedInt, "Acceleration X", false, Slider);
        cmd("AT AY", UnsignedInt, "Acceleration Y", false, Slider);
        cmd("AT DX", UnsignedInt, "Deadzone X", false, Slider);
        cmd("AT DY", UnsignedInt, "Deadzone Y", false, Slider);
        cmd("AT TS", UnsignedInt, "Theshold Sip", false, Slider);
        cmd("AT TP", UnsignedInt, "Theshold Puff", false, Slider);
        cmd("AT SM", UnsignedInt, "Threshold Special Mode", false, Slider);
        cmd("AT HM", UnsignedInt, "Threshold Hold Mode", false, Slider);
        cmd("AT GU", UnsignedInt, "Gain for Up Sensor", false, Slider);
        cmd("AT GD", UnsignedInt, "Gain for Down Sensor", false, Slider);
        cmd("AT GL", UnsignedInt, "Gain for Left Sensor", false, Slider);
        cmd("AT GR", UnsignedInt, "Gain for Right Sensor", false, Slider);
        cmd("AT IR", Text, "Record Infrared Command", true, TextField);
        cmd("AT IP", Text, "Play Infrared Command", true, TextField);
        cmd("AT IC", Text, "Clear Infrared Command", true, TextField);
        cmd("AT IL", None, "List Infrared Commands", true, Standard);

        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_key_lookup() {
        let registry = CommandRegistry::standard();
        assert_eq!(registry.describe("AT KP"), Some("Press Keys"));
        assert_eq!(registry.command("Press Keys"), Some("AT KP"));
        assert_eq!(registry.describe("AT XX"), None);
        assert_eq!(registry.command("Frobnicate"), None);
    }

    #[test]
    fn test_param_and_ui_kind() {
        let registry = CommandRegistry::standard();
        assert_eq!(registry.param_kind("Move Mouse X"), Some(ParamKind::SignedInt));
        assert_eq!(registry.param_kind("Press Keys"), Some(ParamKind::Text));
        assert_eq!(registry.ui_kind("AT AX"), Some(UiKind::Slider));
        assert_eq!(registry.ui_kind("AT MM"), Some(UiKind::Boolean));
        assert_eq!(registry.ui_kind_by_description("Write Text"), Some(UiKind::TextField));
    }

    #[test]
    fn test_selection_index_first_selectable() {
        let registry = CommandRegistry::standard();
        // AT CL is the first selectable command (AT ID and AT BM are not).
        assert_eq!(registry.selection_index_of("AT CL"), 0);
        assert_eq!(registry.selectable_description_at(0), Some("Click Left Mouse Button"));
    }

    #[test]
    fn test_selection_index_monotonic() {
        let registry = CommandRegistry::standard();
        let mut previous = -1;
        for spec in registry.iter().filter(|s| s.selectable) {
            let index = registry.selection_index_of(spec.code);
            assert!(index > previous, "{} is not monotonic", spec.code);
            previous = index;
        }
    }

    #[test]
    fn test_selection_index_not_found_yields_running_count() {
        let registry = CommandRegistry::standard();
        let selectable = registry.iter().filter(|s| s.selectable).count() as i32;
        // An unknown code falls through with the accumulated count.
        assert_eq!(registry.selection_index_of("AT ZZ"), selectable - 1);
    }

    #[test]
    fn test_selection_index_by_position() {
        let registry = CommandRegistry::standard();
        assert_eq!(registry.selection_index(0), 0);
        // Positions 0 and 1 (AT ID, AT BM) are not selectable.
        assert_eq!(registry.selection_index(2), 0);
        assert_eq!(registry.selection_index(3), 1);
        assert_eq!(registry.selection_index(9999), 0);
    }

    #[test]
    fn test_roundtrip_selection_index_inverse() {
        let registry = CommandRegistry::standard();
        for spec in registry.iter().filter(|s| s.selectable) {
            let index = registry.selection_index_of(spec.code);
            assert_eq!(registry.selectable_description_at(index), Some(spec.description));
        }
    }
}
