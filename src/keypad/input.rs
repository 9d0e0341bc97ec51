//! Toolkit-neutral keyboard input.

/// Named keys the calculator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedKey {
    Return,
    Enter,
    Backspace,
}

/// Keyboard shortcuts the calculator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Copy,
    Paste,
    Undo,
    Redo,
}

/// One keyboard event, after the shell has translated it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character typed without modifiers.
    Char(char),
    Named(NamedKey),
    Shortcut(Shortcut),
}

impl KeyInput {
    /// Translate a key name as reported by the windowing layer.
    ///
    /// `key` is the lowercase key name (`"enter"`, `"backspace"`, `"v"`),
    /// `key_char` the character the key would type, if any.
    pub fn from_key(
        key: &str,
        key_char: Option<&str>,
        secondary: bool,
        shift: bool,
    ) -> Option<Self> {
        if secondary {
            return match key {
                "c" => Some(Self::Shortcut(Shortcut::Copy)),
                "v" => Some(Self::Shortcut(Shortcut::Paste)),
                "z" if shift => Some(Self::Shortcut(Shortcut::Redo)),
                "z" => Some(Self::Shortcut(Shortcut::Undo)),
                "y" => Some(Self::Shortcut(Shortcut::Redo)),
                _ => None,
            };
        }

        match key {
            "enter" | "return" => return Some(Self::Named(NamedKey::Return)),
            "kp_enter" | "numpadenter" => return Some(Self::Named(NamedKey::Enter)),
            "backspace" => return Some(Self::Named(NamedKey::Backspace)),
            _ => {}
        }

        let mut chars = key_char?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Char(c)),
            _ => None,
        }
    }
}
