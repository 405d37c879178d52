//! Key identifiers accepted by the key press/release commands.
//!
//! `AT KP` and `AT KR` take a space-separated list of these identifiers,
//! e.g. `AT KP KEY_CTRL KEY_ALT KEY_DELETE`.

/// All key identifiers supported by the firmware.
pub const KEY_IDENTIFIERS: &[&str] = &[
    "KEY_A", "KEY_B", "KEY_C", "KEY_D", "KEY_E", "KEY_F", "KEY_G", "KEY_H",
    "KEY_I", "KEY_J", "KEY_K", "KEY_L", "KEY_M", "KEY_N", "KEY_O", "KEY_P",
    "KEY_Q", "KEY_R", "KEY_S", "KEY_T", "KEY_U", "KEY_V", "KEY_W", "KEY_X",
    "KEY_Y", "KEY_Z", "KEY_1", "KEY_2", "KEY_3", "KEY_4", "KEY_5", "KEY_6",
    "KEY_7", "KEY_8", "KEY_9", "KEY_0", "KEY_F1", "KEY_F2", "KEY_F3",
    "KEY_F4", "KEY_F5", "KEY_F6", "KEY_F7", "KEY_F8", "KEY_F9", "KEY_F10",
    "KEY_F11", "KEY_F12", "KEY_RIGHT", "KEY_LEFT", "KEY_DOWN", "KEY_UP",
    "KEY_ENTER", "KEY_ESC", "KEY_BACKSPACE", "KEY_TAB", "KEY_HOME",
    "KEY_PAGE_UP", "KEY_PAGE_DOWN", "KEY_DELETE", "KEY_INSERT", "KEY_END",
    "KEY_NUM_LOCK", "KEY_SCROLL_LOCK", "KEY_SPACE", "KEY_CAPS_LOCK",
    "KEY_PAUSE", "KEY_SHIFT", "KEY_CTRL", "KEY_ALT", "KEY_RIGHT_ALT",
    "KEY_GUI", "KEY_RIGHT_GUI",
];

/// Whether the given token is a supported key identifier.
pub fn is_key_identifier(token: &str) -> bool {
    KEY_IDENTIFIERS.contains(&token)
}

/// Check a space-separated key list; returns the first unknown token.
pub fn first_unknown_key(list: &str) -> Option<&str> {
    list.split_whitespace().find(|token| !is_key_identifier(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key_identifier() {
        assert!(is_key_identifier("KEY_UP"));
        assert!(is_key_identifier("KEY_RIGHT_GUI"));
        assert!(!is_key_identifier("KEY_WINDOWS"));
    }

    #[test]
    fn test_first_unknown_key() {
        assert_eq!(first_unknown_key("KEY_CTRL KEY_ALT KEY_DELETE"), None);
        assert_eq!(first_unknown_key("KEY_CTRL KEY_BOGUS"), Some("KEY_BOGUS"));
        assert_eq!(first_unknown_key(""), None);
    }
}
