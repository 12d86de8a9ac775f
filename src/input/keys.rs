//! Symbolic shortcut-key vocabulary and mapping to OS key codes
//!
//! The four shortcut slots each hold one of 40 symbolic names:
//! `None`, the three modifiers, `A`-`Z` and `0`-`9`. The string form is also
//! the serialized form in `settings.json`.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// One shortcut slot selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ShortcutKey {
    /// Empty slot; skipped when the shortcut is sent
    None,
    Ctrl,
    Alt,
    Shift,
    /// `'A'..='Z'`, stored uppercase
    Letter(char),
    /// `'0'..='9'`
    Digit(char),
}

impl ShortcutKey {
    /// Full selector vocabulary, in the order the combo boxes list it
    pub fn all() -> Vec<ShortcutKey> {
        let mut keys = vec![
            ShortcutKey::None,
            ShortcutKey::Ctrl,
            ShortcutKey::Alt,
            ShortcutKey::Shift,
        ];
        keys.extend(('A'..='Z').map(ShortcutKey::Letter));
        keys.extend(('0'..='9').map(ShortcutKey::Digit));
        keys
    }

    /// Map to the key code `rdev` injects. `None` has no key code.
    /// Letters and digits map to their unshifted (lowercase) codes.
    pub fn to_rdev(self) -> Option<rdev::Key> {
        use rdev::Key;
        let key = match self {
            ShortcutKey::None => return Option::None,
            ShortcutKey::Ctrl => Key::ControlLeft,
            ShortcutKey::Alt => Key::Alt,
            ShortcutKey::Shift => Key::ShiftLeft,
            ShortcutKey::Letter(c) => match c {
                'A' => Key::KeyA,
                'B' => Key::KeyB,
                'C' => Key::KeyC,
                'D' => Key::KeyD,
                'E' => Key::KeyE,
                'F' => Key::KeyF,
                'G' => Key::KeyG,
                'H' => Key::KeyH,
                'I' => Key::KeyI,
                'J' => Key::KeyJ,
                'K' => Key::KeyK,
                'L' => Key::KeyL,
                'M' => Key::KeyM,
                'N' => Key::KeyN,
                'O' => Key::KeyO,
                'P' => Key::KeyP,
                'Q' => Key::KeyQ,
                'R' => Key::KeyR,
                'S' => Key::KeyS,
                'T' => Key::KeyT,
                'U' => Key::KeyU,
                'V' => Key::KeyV,
                'W' => Key::KeyW,
                'X' => Key::KeyX,
                'Y' => Key::KeyY,
                'Z' => Key::KeyZ,
                _ => return Option::None,
            },
            ShortcutKey::Digit(c) => match c {
                '0' => Key::Num0,
                '1' => Key::Num1,
                '2' => Key::Num2,
                '3' => Key::Num3,
                '4' => Key::Num4,
                '5' => Key::Num5,
                '6' => Key::Num6,
                '7' => Key::Num7,
                '8' => Key::Num8,
                '9' => Key::Num9,
                _ => return Option::None,
            },
        };
        Some(key)
    }
}

impl fmt::Display for ShortcutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutKey::None => write!(f, "None"),
            ShortcutKey::Ctrl => write!(f, "CTRL"),
            ShortcutKey::Alt => write!(f, "ALT"),
            ShortcutKey::Shift => write!(f, "SHIFT"),
            ShortcutKey::Letter(c) | ShortcutKey::Digit(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for ShortcutKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(ShortcutKey::None),
            "CTRL" => Ok(ShortcutKey::Ctrl),
            "ALT" => Ok(ShortcutKey::Alt),
            "SHIFT" => Ok(ShortcutKey::Shift),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => Ok(ShortcutKey::Letter(c)),
                    (Some(c), None) if c.is_ascii_digit() => Ok(ShortcutKey::Digit(c)),
                    _ => Err(anyhow!("unknown shortcut key name: {s:?}")),
                }
            }
        }
    }
}

impl From<ShortcutKey> for String {
    fn from(key: ShortcutKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ShortcutKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_40_entries() {
        assert_eq!(ShortcutKey::all().len(), 40);
    }

    #[test]
    fn display_parse_round_trip() {
        for key in ShortcutKey::all() {
            let parsed: ShortcutKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("CMD".parse::<ShortcutKey>().is_err());
        assert!("u".parse::<ShortcutKey>().is_err());
        assert!("AB".parse::<ShortcutKey>().is_err());
        assert!("".parse::<ShortcutKey>().is_err());
    }

    #[test]
    fn maps_to_key_codes() {
        assert_eq!(ShortcutKey::Ctrl.to_rdev(), Some(rdev::Key::ControlLeft));
        assert_eq!(ShortcutKey::Shift.to_rdev(), Some(rdev::Key::ShiftLeft));
        assert_eq!(ShortcutKey::Letter('U').to_rdev(), Some(rdev::Key::KeyU));
        assert_eq!(ShortcutKey::Digit('7').to_rdev(), Some(rdev::Key::Num7));
        assert_eq!(ShortcutKey::None.to_rdev(), None);
    }

    #[test]
    fn serializes_as_plain_strings() {
        let json = serde_json::to_string(&vec![
            ShortcutKey::Ctrl,
            ShortcutKey::Letter('U'),
            ShortcutKey::None,
        ])
        .unwrap();
        assert_eq!(json, r#"["CTRL","U","None"]"#);
    }
}
