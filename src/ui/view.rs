//! The calculator window content.

use crate::Calculator;
use crate::keypad::{KEYPAD_ROWS, KeyInput};
use crate::ui::keypad::{render_button, render_display, render_error_line};
use crate::ui::theme::theme;
use gpui::{
    App, ClickEvent, Context, Div, FocusHandle, Focusable, KeyDownEvent, Window, div, prelude::*,
};

/// Root view: owns the calculator and forwards clicks and keys to it.
pub struct CalculatorView {
    calculator: Calculator,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(calculator: Calculator, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            calculator,
            focus_handle,
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let Some(input) = KeyInput::from_key(
            &keystroke.key,
            keystroke.key_char.as_deref(),
            keystroke.modifiers.secondary(),
            keystroke.modifiers.shift,
        ) else {
            return;
        };

        tracing::trace!(?input, "key input");
        self.calculator.handle_input(input);
        cx.stop_propagation();
        cx.notify();
    }

    fn render_row(&self, row: &[char], cx: &Context<Self>) -> Div {
        let t = theme();
        let mut container = div().w_full().flex().flex_row().gap(t.gap);

        for &label in row {
            let Some(button) = self.calculator.buttons().get(label) else {
                continue;
            };

            container = container.child(render_button(button).on_click(cx.listener(
                move |this, _event: &ClickEvent, _window, cx| {
                    this.calculator.press(label);
                    cx.notify();
                },
            )));
        }

        container
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let t = theme();

        let mut root = div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .flex()
            .flex_col()
            .gap(t.gap)
            .p(t.padding)
            .bg(t.background)
            .child(render_display(self.calculator.text()));

        let status = self.calculator.status();
        if status.is_visible() {
            root = root.child(render_error_line(status.message()));
        }

        for row in KEYPAD_ROWS {
            root = root.child(self.render_row(row, cx));
        }

        root
    }
}
