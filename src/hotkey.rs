//! Key-chord string handling for the hotkey settings fields.
//!
//! The engine owns registration and delivery of global hotkeys; the
//! front-end only validates chord strings at the edit boundary and keeps
//! them in a canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed key chord: optional modifiers plus exactly one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parse a chord like `Ctrl+Shift+F12`. Returns `None` for unknown keys and
/// for modifier-only chords.
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<String> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => {
                key = Some(canonical_key(&upper)?);
            }
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        shift,
        alt,
    })
}

/// True when `s` parses to a usable chord. Empty strings are valid: they
/// mean "binding disabled".
pub fn is_valid_key_combo(s: &str) -> bool {
    s.trim().is_empty() || parse_hotkey(s).is_some()
}

fn canonical_key(upper: &str) -> Option<String> {
    let named = match upper {
        "SPACE" => Some("Space"),
        "TAB" => Some("Tab"),
        "ENTER" | "RETURN" => Some("Enter"),
        "ESC" | "ESCAPE" => Some("Escape"),
        "DELETE" => Some("Delete"),
        "BACKSPACE" => Some("Backspace"),
        "HOME" => Some("Home"),
        "END" => Some("End"),
        "PAGEUP" => Some("PageUp"),
        "PAGEDOWN" => Some("PageDown"),
        "LEFT" | "LEFTARROW" => Some("Left"),
        "RIGHT" | "RIGHTARROW" => Some("Right"),
        "UP" | "UPARROW" => Some("Up"),
        "DOWN" | "DOWNARROW" => Some("Down"),
        _ => None,
    };
    if let Some(name) = named {
        return Some(name.to_string());
    }
    let mut chars = upper.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_alphanumeric().then(|| c.to_string());
    }
    if let Some(number) = upper.strip_prefix('F') {
        return number
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=24).contains(n))
            .map(|n| format!("F{n}"));
    }
    None
}
