//! Colors and sizes for the calculator window.

use gpui::{Hsla, Pixels, hsla, px};
use lazy_static::lazy_static;

use crate::keypad::ButtonRole;

pub struct CalculatorTheme {
    pub background: Hsla,
    pub padding: Pixels,
    pub gap: Pixels,

    pub display_background: Hsla,
    pub display_color: Hsla,
    pub display_height: Pixels,
    pub display_radius: Pixels,

    pub error_color: Hsla,

    pub button_height: Pixels,
    pub button_radius: Pixels,
    pub button_text_color: Hsla,
    pub digit_background: Hsla,
    pub operator_background: Hsla,
    pub clear_background: Hsla,
    pub equals_background: Hsla,
    pub equals_text_color: Hsla,
}

impl CalculatorTheme {
    pub fn button_background(&self, role: ButtonRole) -> Hsla {
        match role {
            ButtonRole::Digit => self.digit_background,
            ButtonRole::Operator => self.operator_background,
            ButtonRole::Clear => self.clear_background,
            ButtonRole::Equals => self.equals_background,
        }
    }

    pub fn button_text(&self, role: ButtonRole) -> Hsla {
        match role {
            ButtonRole::Equals => self.equals_text_color,
            _ => self.button_text_color,
        }
    }
}

lazy_static! {
    static ref THEME: CalculatorTheme = CalculatorTheme {
        background: hsla(0.0, 0.0, 0.09, 1.0),
        padding: px(8.0),
        gap: px(6.0),

        display_background: hsla(0.0, 0.0, 0.14, 1.0),
        display_color: hsla(0.0, 0.0, 0.95, 1.0),
        display_height: px(40.0),
        display_radius: px(6.0),

        // orange/red-ish
        error_color: hsla(15.0 / 360.0, 0.7, 0.6, 1.0),

        button_height: px(40.0),
        button_radius: px(6.0),
        button_text_color: hsla(0.0, 0.0, 0.9, 1.0),
        digit_background: hsla(0.0, 0.0, 0.2, 1.0),
        operator_background: hsla(0.0, 0.0, 0.26, 1.0),
        clear_background: hsla(0.0, 0.45, 0.35, 1.0),
        equals_background: hsla(210.0 / 360.0, 0.6, 0.5, 1.0),
        equals_text_color: hsla(0.0, 0.0, 1.0, 1.0),
    };
}

pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
