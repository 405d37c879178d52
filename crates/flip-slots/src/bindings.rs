//! Field bindings: the abstract editable fields behind the commands.
//!
//! A [`FieldBinding`] associates one command code (or, for the per-button
//! commands, a selector prefix like `AT BM 04`) with a plain editable
//! value. The bindings replace the original tool's widget-bound state:
//! any rendering surface becomes a thin adapter reading and writing this
//! table.
//!
//! The table order is load-bearing twice over:
//!
//! 1. it fixes the line order written when a slot is stored, and
//! 2. slot display resolves each incoming line to a binding by a
//!    first-match-by-prefix scan in this same order — the first binding
//!    whose code is a string prefix of the line wins, even if a later
//!    binding would match more specifically.
//!
//! First-match-wins is inherited from the protocol and must be kept:
//! already-deployed profile files depend on it. Button selector codes are
//! registered after the settings codes, and no settings code is a prefix
//! of another; a future code that introduces a prefix collision is a
//! design defect (checked in debug builds), not something to resolve
//! silently with longest-prefix matching.

use serde::{Deserialize, Serialize};

use flip_at_protocol::constants::BUTTON_COUNT;

/// The value held by a bound field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// A chooseable action (button slots): the selected action's
    /// description plus its parameter, of which at most one of `number`
    /// and `text` is meaningful depending on the action's parameter kind.
    Choice {
        /// Description of the selected action.
        action: String,
        /// Integer parameter for actions taking a number.
        number: i32,
        /// Text parameter for actions taking a string.
        text: String,
    },
    /// Slider value.
    Slider {
        /// Current position.
        value: i32,
    },
    /// Numeric entry field.
    Int {
        /// Current value.
        value: i32,
    },
    /// Free text field.
    Text {
        /// Current text.
        value: String,
    },
    /// Pair of mutually exclusive flags.
    Boolean {
        /// Whether the primary flag is set; the secondary flag is its
        /// complement.
        primary: bool,
    },
}

impl FieldValue {
    /// Slider position, if this is a slider.
    pub fn slider(&self) -> Option<i32> {
        match self {
            FieldValue::Slider { value } => Some(*value),
            _ => None,
        }
    }

    /// Primary flag, if this is a boolean pair.
    pub fn primary(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean { primary } => Some(*primary),
            _ => None,
        }
    }

    /// Secondary flag, if this is a boolean pair.
    pub fn secondary(&self) -> Option<bool> {
        self.primary().map(|p| !p)
    }
}

/// One command-to-field association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Command code, or selector prefix for button bindings.
    pub code: String,
    /// The bound value.
    pub value: FieldValue,
}

/// Selector prefix shared by all button bindings.
pub const BUTTON_SELECTOR_PREFIX: &str = "AT BM";

/// Selector code for button `n` (1-based), zero-padded as stored in
/// slots, e.g. `AT BM 04`.
pub fn button_code(n: usize) -> String {
    format!("{} {:02}", BUTTON_SELECTOR_PREFIX, n)
}

/// Whether a binding code is a button selector.
pub fn is_button_code(code: &str) -> bool {
    code.starts_with(BUTTON_SELECTOR_PREFIX)
}

/// Ordered table of all field bindings.
///
/// Built once at startup; the serialization engine only ever reads it or
/// writes values into it, never reshapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingTable {
    bindings: Vec<FieldBinding>,
}

impl BindingTable {
    /// The standard FLipMouse binding set: the twelve setting sliders,
    /// the mouse-mode boolean, then the eleven button slots.
    pub fn standard() -> Self {
        let mut bindings = Vec::with_capacity(13 + BUTTON_COUNT);
        let mut slider = |code: &str| {
            bindings.push(FieldBinding {
                code: code.to_string(),
                value: FieldValue::Slider { value: 0 },
            })
        };
        slider("AT AX");
        slider("AT AY");
        slider("AT DX");
        slider("AT DY");
        slider("AT TS");
        slider("AT TP");
        slider("AT SM");
        slider("AT HM");
        slider("AT GU");
        slider("AT GD");
        slider("AT GL");
        slider("AT GR");
        bindings.push(FieldBinding {
            code: "AT MM".to_string(),
            value: FieldValue::Boolean { primary: true },
        });
        for n in 1..=BUTTON_COUNT {
            bindings.push(FieldBinding {
                code: button_code(n),
                value: FieldValue::Choice {
                    action: "No Command".to_string(),
                    number: 0,
                    text: String::new(),
                },
            });
        }

        let table = BindingTable { bindings };
        table.debug_check_prefixes();
        table
    }

    /// Flag registration orders where an earlier code shadows a later one.
    fn debug_check_prefixes(&self) {
        if cfg!(debug_assertions) {
            for (i, earlier) in self.bindings.iter().enumerate() {
                for later in &self.bindings[i + 1..] {
                    assert!(
                        !later.code.starts_with(&earlier.code),
                        "binding '{}' shadows '{}' under first-match-by-prefix",
                        earlier.code,
                        later.code
                    );
                }
            }
        }
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over the bindings in table order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldBinding> {
        self.bindings.iter()
    }

    /// The binding at the given table position.
    pub fn binding(&self, index: usize) -> &FieldBinding {
        &self.bindings[index]
    }

    /// Mutable access to the binding at the given table position.
    pub fn binding_mut(&mut self, index: usize) -> &mut FieldBinding {
        &mut self.bindings[index]
    }

    /// The binding with the exact given code.
    pub fn get(&self, code: &str) -> Option<&FieldBinding> {
        self.bindings.iter().find(|b| b.code == code)
    }

    /// Mutable access to the binding with the exact given code.
    pub fn get_mut(&mut self, code: &str) -> Option<&mut FieldBinding> {
        self.bindings.iter_mut().find(|b| b.code == code)
    }

    /// First binding whose code is a prefix of the given line.
    ///
    /// This is the documented first-match-wins policy; the scan order is
    /// the registration order.
    pub fn match_prefix(&self, line: &str) -> Option<usize> {
        self.bindings.iter().position(|b| line.starts_with(&b.code))
    }

    /// Set a slider value. No-op for codes bound to another field shape.
    pub fn set_slider(&mut self, code: &str, value: i32) {
        if let Some(FieldValue::Slider { value: v }) = self.get_mut(code).map(|b| &mut b.value) {
            *v = value;
        }
    }

    /// Set a boolean pair; `primary = true` selects the primary flag.
    pub fn set_boolean(&mut self, code: &str, primary: bool) {
        if let Some(FieldValue::Boolean { primary: p }) = self.get_mut(code).map(|b| &mut b.value) {
            *p = primary;
        }
    }

    /// Bind button `n` (1-based) to the action with the given description.
    pub fn set_button_action(&mut self, n: usize, action: &str) {
        if let Some(FieldValue::Choice { action: a, .. }) =
            self.get_mut(&button_code(n)).map(|b| &mut b.value)
        {
            *a = action.to_string();
        }
    }

    /// Set the integer parameter of button `n`.
    pub fn set_button_number(&mut self, n: usize, number: i32) {
        if let Some(FieldValue::Choice { number: v, .. }) =
            self.get_mut(&button_code(n)).map(|b| &mut b.value)
        {
            *v = number;
        }
    }

    /// Set the text parameter of button `n`.
    pub fn set_button_text(&mut self, n: usize, text: &str) {
        if let Some(FieldValue::Choice { text: t, .. }) =
            self.get_mut(&button_code(n)).map(|b| &mut b.value)
        {
            *t = text.to_string();
        }
    }
}
