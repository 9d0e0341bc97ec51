//! Keypad buttons and keyboard input.
//!
//! Every way of feeding the calculator (tapping a button, typing a
//! character, pressing a named key, using a shortcut) is described here
//! independently of the GUI toolkit.

mod button;
mod input;

pub use button::{Action, Button, ButtonRegistry, ButtonRole, KEYPAD_ROWS};
pub use input::{KeyInput, NamedKey, Shortcut};
