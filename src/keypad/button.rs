//! Keypad buttons and the label-to-action registry.

use std::collections::BTreeMap;

/// What a button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the buffer.
    Insert(char),
    /// Empty the buffer.
    Clear,
    /// Evaluate the buffer and replace it with the result.
    Evaluate,
}

/// Visual grouping of a button, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonRole {
    Digit,
    Operator,
    Clear,
    Equals,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: char,
    pub action: Action,
    pub role: ButtonRole,
}

/// Visible keypad, top row first.
pub const KEYPAD_ROWS: &[&[char]] = &[
    &['C', '(', ')', '/'],
    &['7', '8', '9', '*'],
    &['4', '5', '6', '-'],
    &['1', '2', '3', '+'],
    &['0', '.', '='],
];

/// Label of the hidden button that types the decimal point from a comma key.
const DECIMAL_COMMA: char = ',';

impl Button {
    /// Build the button for a keypad label.
    pub fn for_label(label: char) -> Option<Self> {
        let (action, role) = match label {
            '0'..='9' => (Action::Insert(label), ButtonRole::Digit),
            '(' | ')' | '/' | '*' | '-' | '+' | '.' => {
                (Action::Insert(label), ButtonRole::Operator)
            }
            DECIMAL_COMMA => (Action::Insert('.'), ButtonRole::Operator),
            'C' => (Action::Clear, ButtonRole::Clear),
            '=' => (Action::Evaluate, ButtonRole::Equals),
            _ => return None,
        };
        Some(Self {
            label,
            action,
            role,
        })
    }
}

/// Buttons by label. Filled once, read-only afterwards.
#[derive(Clone, Debug)]
pub struct ButtonRegistry {
    buttons: BTreeMap<char, Button>,
}

impl ButtonRegistry {
    /// The standard keypad. With `decimal_comma`, a hidden `,` button
    /// types the decimal point as well.
    pub fn standard(decimal_comma: bool) -> Self {
        let mut buttons = BTreeMap::new();

        let labels = KEYPAD_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .chain(decimal_comma.then_some(DECIMAL_COMMA));

        for label in labels {
            if let Some(button) = Button::for_label(label) {
                let previous = buttons.insert(label, button);
                debug_assert!(previous.is_none(), "duplicate keypad label {label:?}");
            }
        }

        Self { buttons }
    }

    pub fn get(&self, label: char) -> Option<&Button> {
        self.buttons.get(&label)
    }

    #[cfg(test)]
    fn contains(&self, label: char) -> bool {
        self.buttons.contains_key(&label)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.values()
    }
}
