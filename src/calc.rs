//! The calculator: buffer, buttons, error line and clipboard wired together.
//!
//! All input arrives through [`Calculator::press`] (on-screen buttons) or
//! [`Calculator::handle_input`] (keyboard and shortcuts). Both end up on the
//! same small set of actions.

use crate::calculator::{
    CalcError, ClipboardProvider, evaluate_expression, format_result, is_plain_number,
    normalize_decimal, validate,
};
use crate::config::Config;
use crate::editor::Editor;
use crate::keypad::{Action, ButtonRegistry, KeyInput, NamedKey, Shortcut};
use crate::status::ErrorLine;

pub struct Calculator {
    editor: Editor,
    buttons: ButtonRegistry,
    status: ErrorLine,
    clipboard: Box<dyn ClipboardProvider>,
}

impl Calculator {
    pub fn new(config: &Config, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            editor: Editor::new(config.history_limit),
            buttons: ButtonRegistry::standard(config.keypad.decimal_comma),
            status: ErrorLine::default(),
            clipboard,
        }
    }

    /// Current expression text.
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn status(&self) -> &ErrorLine {
        &self.status
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    /// Press the button with the given label. Returns `false` if there is none.
    pub fn press(&mut self, label: char) -> bool {
        let Some(button) = self.buttons.get(label) else {
            return false;
        };
        let action = button.action;
        tracing::debug!(?label, ?action, "button pressed");
        self.perform(action);
        true
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Insert(c) => self.editor.append(c),
            Action::Clear => self.editor.clear(),
            Action::Evaluate => self.evaluate(),
        }
    }

    /// Handle one keyboard event.
    pub fn handle_input(&mut self, input: KeyInput) {
        match input {
            KeyInput::Char(c) => self.on_typed_char(c),
            KeyInput::Named(key) => self.on_typed_key(key),
            KeyInput::Shortcut(shortcut) => self.on_shortcut(shortcut),
        }
    }

    fn on_typed_char(&mut self, c: char) {
        // the clear button is labelled with a capital C
        let label = if c == 'c' { 'C' } else { c };
        self.press(label);
    }

    fn on_typed_key(&mut self, key: NamedKey) {
        match key {
            NamedKey::Return | NamedKey::Enter => self.evaluate(),
            NamedKey::Backspace => self.editor.backspace(),
        }
    }

    fn on_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Copy => self.copy(),
            Shortcut::Paste => self.paste(),
            Shortcut::Undo => {
                self.editor.undo();
            }
            Shortcut::Redo => {
                self.editor.redo();
            }
        }
    }

    /// Copy the whole buffer to the clipboard, valid or not.
    pub fn copy(&mut self) {
        if let Err(e) = self.clipboard.set_text(self.editor.text()) {
            tracing::warn!("{}", e);
        }
    }

    /// Type the clipboard content if it is a plain number, otherwise ignore it.
    pub fn paste(&mut self) {
        let content = match self.clipboard.get_text() {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("{}", e);
                return;
            }
        };

        if !is_plain_number(&content) {
            tracing::debug!("ignoring paste of non-numeric clipboard content");
            return;
        }

        for c in content.trim().chars() {
            self.editor.append(c);
        }
    }

    /// Evaluate the buffer, replacing it with the result or showing an error.
    ///
    /// On failure the buffer is left as it was.
    pub fn evaluate(&mut self) {
        match compute(self.editor.text()) {
            Ok(result) => {
                tracing::debug!(expression = self.editor.text(), %result, "evaluated");
                self.editor.replace_all(&result);
                self.status.hide();
            }
            Err(e) => {
                tracing::debug!(expression = self.editor.text(), error = %e, "evaluation failed");
                self.status.show(e.to_string());
            }
        }
    }
}

/// Validate, evaluate and format an expression.
pub fn compute(expression: &str) -> Result<String, CalcError> {
    let normalized = normalize_decimal(expression);
    let sanitized = validate(&normalized).map_err(|run| CalcError::InvalidInput(run.run))?;
    let value = evaluate_expression(sanitized)?;
    Ok(format_result(value))
}
