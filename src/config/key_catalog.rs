//! Key catalog: which DirectInput codes may be bound, and what they are called

use thiserror::Error;

use crate::constants::keys;

/// Codes that are never accepted as a binding target.
///
/// These either can't be captured as a single press or are owned by the OS.
const IGNORED_KEYS: &[u8] = &[
    // Unassigned
    keys::NONE,
    // Escape cancels a capture
    keys::ESCAPE,
    // Lock keys
    keys::CAPITAL,
    keys::NUMLOCK,
    keys::SCROLL,
    // Windows / menu keys
    keys::LWIN,
    keys::RWIN,
    keys::APPS,
    // Media transport
    keys::PLAYPAUSE,
    keys::MEDIASTOP,
    keys::NEXTTRACK,
    keys::PREVTRACK,
    keys::MUTE,
    keys::VOLUMEDOWN,
    keys::VOLUMEUP,
    keys::MEDIASELECT,
    // Power management
    keys::POWER,
    keys::SLEEP,
    keys::WAKE,
    // IME composition
    keys::KANA,
    keys::KANJI,
    keys::CONVERT,
    keys::NOCONVERT,
    // Browser
    keys::WEBBACK,
    keys::WEBFORWARD,
    keys::WEBHOME,
    keys::WEBREFRESH,
    keys::WEBSEARCH,
    keys::WEBSTOP,
    keys::WEBFAVORITES,
    // Application launchers
    keys::CALCULATOR,
    keys::MAIL,
    keys::MYCOMPUTER,
];

const IGNORED_MASK: [bool; 256] = build_mask(IGNORED_KEYS);

const fn build_mask(codes: &[u8]) -> [bool; 256] {
    let mut mask = [false; 256];
    let mut i = 0;
    while i < codes.len() {
        mask[codes[i] as usize] = true;
        i += 1;
    }
    mask
}

/// Human-readable key labels
const KEY_NAMES: &[(u8, &str)] = &[
    (keys::ESCAPE, "Escape"),
    (keys::KEY_1, "1"),
    (keys::KEY_2, "2"),
    (keys::KEY_3, "3"),
    (keys::KEY_4, "4"),
    (keys::KEY_5, "5"),
    (keys::KEY_6, "6"),
    (keys::KEY_7, "7"),
    (keys::KEY_8, "8"),
    (keys::KEY_9, "9"),
    (keys::KEY_0, "0"),
    (keys::MINUS, "-"),
    (keys::EQUALS, "="),
    (keys::BACK, "Back"),
    (keys::TAB, "Tab"),
    (keys::Q, "Q"),
    (keys::W, "W"),
    (keys::E, "E"),
    (keys::R, "R"),
    (keys::T, "T"),
    (keys::Y, "Y"),
    (keys::U, "U"),
    (keys::I, "I"),
    (keys::O, "O"),
    (keys::P, "P"),
    (keys::LBRACKET, "["),
    (keys::RBRACKET, "]"),
    (keys::RETURN, "Enter"),
    (keys::LCONTROL, "Left Ctrl"),
    (keys::A, "A"),
    (keys::S, "S"),
    (keys::D, "D"),
    (keys::F, "F"),
    (keys::G, "G"),
    (keys::H, "H"),
    (keys::J, "J"),
    (keys::K, "K"),
    (keys::L, "L"),
    (keys::SEMICOLON, ";"),
    (keys::APOSTROPHE, "'"),
    (keys::GRAVE, "`"),
    (keys::LSHIFT, "Shift"),
    (keys::BACKSLASH, "\\"),
    (keys::Z, "Z"),
    (keys::X, "X"),
    (keys::C, "C"),
    (keys::V, "V"),
    (keys::B, "B"),
    (keys::N, "N"),
    (keys::M, "M"),
    (keys::COMMA, ","),
    (keys::PERIOD, "."),
    (keys::SLASH, "/"),
    (keys::RSHIFT, "Right Shift"),
    (keys::MULTIPLY, "Num *"),
    (keys::LMENU, "Alt"),
    (keys::SPACE, "Space"),
    (keys::CAPITAL, "Caps Lock"),
    (keys::F1, "F1"),
    (keys::F2, "F2"),
    (keys::F3, "F3"),
    (keys::F4, "F4"),
    (keys::F5, "F5"),
    (keys::F6, "F6"),
    (keys::F7, "F7"),
    (keys::F8, "F8"),
    (keys::F9, "F9"),
    (keys::F10, "F10"),
    (keys::NUMLOCK, "Num Lock"),
    (keys::SCROLL, "Scroll Lock"),
    (keys::NUMPAD7, "Num 7"),
    (keys::NUMPAD8, "Num 8"),
    (keys::NUMPAD9, "Num 9"),
    (keys::SUBTRACT, "Num -"),
    (keys::NUMPAD4, "Num 4"),
    (keys::NUMPAD5, "Num 5"),
    (keys::NUMPAD6, "Num 6"),
    (keys::ADD, "Num +"),
    (keys::NUMPAD1, "Num 1"),
    (keys::NUMPAD2, "Num 2"),
    (keys::NUMPAD3, "Num 3"),
    (keys::NUMPAD0, "Num 0"),
    (keys::DECIMAL, "Num ."),
    (keys::OEM_102, "OEM 102"),
    (keys::F11, "F11"),
    (keys::F12, "F12"),
    (keys::F13, "F13"),
    (keys::F14, "F14"),
    (keys::F15, "F15"),
    (keys::KANA, "Kana"),
    (keys::ABNT_C1, "ABNT C1"),
    (keys::CONVERT, "Convert"),
    (keys::NOCONVERT, "No Convert"),
    (keys::YEN, "Yen"),
    (keys::ABNT_C2, "ABNT C2"),
    (keys::NUMPADEQUALS, "Num ="),
    (keys::PREVTRACK, "Previous Track"),
    (keys::AT, "@"),
    (keys::COLON, ":"),
    (keys::UNDERLINE, "_"),
    (keys::KANJI, "Kanji"),
    (keys::STOP, "Stop"),
    (keys::AX, "AX"),
    (keys::UNLABELED, "Unlabeled"),
    (keys::NEXTTRACK, "Next Track"),
    (keys::NUMPADENTER, "Num Enter"),
    (keys::RCONTROL, "Right Ctrl"),
    (keys::MUTE, "Mute"),
    (keys::CALCULATOR, "Calculator"),
    (keys::PLAYPAUSE, "Play/Pause"),
    (keys::MEDIASTOP, "Media Stop"),
    (keys::VOLUMEDOWN, "Volume Down"),
    (keys::VOLUMEUP, "Volume Up"),
    (keys::WEBHOME, "Web Home"),
    (keys::NUMPADCOMMA, "Num ,"),
    (keys::DIVIDE, "Num /"),
    (keys::SYSRQ, "SysRq"),
    (keys::RMENU, "Right Alt"),
    (keys::PAUSE, "Pause"),
    (keys::HOME, "Home"),
    (keys::UP, "Up"),
    (keys::PRIOR, "Page Up"),
    (keys::LEFT, "Left"),
    (keys::RIGHT, "Right"),
    (keys::END, "End"),
    (keys::DOWN, "Down"),
    (keys::NEXT, "Page Down"),
    (keys::INSERT, "Insert"),
    (keys::DELETE, "Delete"),
    (keys::LWIN, "Left Win"),
    (keys::RWIN, "Right Win"),
    (keys::APPS, "Menu"),
    (keys::POWER, "Power"),
    (keys::SLEEP, "Sleep"),
    (keys::WAKE, "Wake"),
    (keys::WEBSEARCH, "Web Search"),
    (keys::WEBFAVORITES, "Web Favorites"),
    (keys::WEBREFRESH, "Web Refresh"),
    (keys::WEBSTOP, "Web Stop"),
    (keys::WEBFORWARD, "Web Forward"),
    (keys::WEBBACK, "Web Back"),
    (keys::MYCOMPUTER, "My Computer"),
    (keys::MAIL, "Mail"),
    (keys::MEDIASELECT, "Media Select"),
];

/// Error returned when a key description can't be resolved to a code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key description")]
    Empty,
    #[error("unknown key '{0}'")]
    Unknown(String),
    #[error("key code '{0}' is out of range (0-255)")]
    OutOfRange(String),
}

/// Returns true if `code` must never be used as a binding
pub fn is_ignored(code: u8) -> bool {
    IGNORED_MASK[code as usize]
}

/// Convert a key code to a human-readable name (for UI display)
pub fn key_name(code: u8) -> String {
    KEY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("0x{:X}", code))
}

/// Resolve a key from its display name, a `0x`-prefixed hex code, or a decimal code
pub fn parse_key(text: &str) -> Result<u8, KeyParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if let Some((code, _)) = KEY_NAMES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(text))
    {
        return Ok(*code);
    }

    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16)
            .map_err(|_| KeyParseError::OutOfRange(text.to_string()));
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        return text
            .parse::<u8>()
            .map_err(|_| KeyParseError::OutOfRange(text.to_string()));
    }

    Err(KeyParseError::Unknown(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_are_ignored() {
        for code in [
            keys::ESCAPE,
            keys::CAPITAL,
            keys::NUMLOCK,
            keys::SCROLL,
            keys::LWIN,
            keys::RWIN,
            keys::APPS,
            keys::PLAYPAUSE,
            keys::VOLUMEUP,
            keys::POWER,
            keys::KANJI,
            keys::WEBBACK,
            keys::CALCULATOR,
            keys::MYCOMPUTER,
        ] {
            assert!(is_ignored(code), "0x{:X} should be ignored", code);
        }
    }

    #[test]
    fn test_default_binding_keys_are_bindable() {
        use crate::constants::defaults::bindings;
        for code in [
            bindings::UP,
            bindings::DOWN,
            bindings::LEFT,
            bindings::RIGHT,
            bindings::ACTION_A,
            bindings::ACTION_B,
            bindings::ACTION_X,
            bindings::ACTION_Y,
            bindings::START,
        ] {
            assert!(!is_ignored(code), "0x{:X} should be bindable", code);
        }
    }

    #[test]
    fn test_mask_matches_list() {
        let count = (0..=u8::MAX).filter(|c| is_ignored(*c)).count();
        assert_eq!(count, IGNORED_KEYS.len());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(keys::SPACE), "Space");
        assert_eq!(key_name(keys::NUMPAD0), "Num 0");
        assert_eq!(key_name(keys::NUMPADENTER), "Num Enter");
        assert_eq!(key_name(keys::RCONTROL), "Right Ctrl");
        assert_eq!(key_name(0xFF), "0xFF");
    }

    #[test]
    fn test_key_names_are_unique() {
        for (i, (code, name)) in KEY_NAMES.iter().enumerate() {
            for (other_code, other_name) in &KEY_NAMES[i + 1..] {
                assert_ne!(code, other_code, "duplicate code for {}", name);
                assert!(
                    !name.eq_ignore_ascii_case(other_name),
                    "duplicate name {}",
                    name
                );
            }
        }
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("Space"), Ok(keys::SPACE));
        assert_eq!(parse_key("page up"), Ok(keys::PRIOR));
        assert_eq!(parse_key("q"), Ok(keys::Q));
        assert_eq!(parse_key("0x39"), Ok(keys::SPACE));
        assert_eq!(parse_key("57"), Ok(keys::SPACE));
        // Digit keys resolve by name before falling back to decimal
        assert_eq!(parse_key("1"), Ok(keys::KEY_1));

        assert_eq!(parse_key("  "), Err(KeyParseError::Empty));
        assert_eq!(
            parse_key("0x1FF"),
            Err(KeyParseError::OutOfRange("0x1FF".to_string()))
        );
        assert_eq!(
            parse_key("300"),
            Err(KeyParseError::OutOfRange("300".to_string()))
        );
        assert_eq!(
            parse_key("Hyper"),
            Err(KeyParseError::Unknown("Hyper".to_string()))
        );
    }
}
