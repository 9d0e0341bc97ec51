//! Rendering for the expression display, the error line and keypad buttons.

use crate::keypad::Button;
use crate::ui::theme::theme;
use gpui::{Div, ElementId, SharedString, Stateful, div, prelude::*};

/// Render the single-line expression display.
pub fn render_display(text: &str) -> Div {
    let t = theme();

    div()
        .w_full()
        .h(t.display_height)
        .flex_shrink_0()
        .px_2()
        .flex()
        .items_center()
        .justify_end()
        .bg(t.display_background)
        .rounded(t.display_radius)
        .text_lg()
        .text_color(t.display_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .child(SharedString::from(text.to_string()))
}

/// Render the error line below the display.
pub fn render_error_line(message: &str) -> Div {
    let t = theme();

    div()
        .w_full()
        .px_2()
        .text_xs()
        .text_color(t.error_color)
        .whitespace_nowrap()
        .overflow_hidden()
        .text_ellipsis()
        .child(SharedString::from(message.to_string()))
}

/// Render one keypad button without its click handler.
pub fn render_button(button: &Button) -> Stateful<Div> {
    let t = theme();
    let hover_bg = t.button_background(button.role).opacity(0.8);

    div()
        .id(ElementId::NamedInteger("key".into(), button.label as u64))
        .flex_1()
        .h(t.button_height)
        .flex()
        .items_center()
        .justify_center()
        .bg(t.button_background(button.role))
        .rounded(t.button_radius)
        .text_color(t.button_text(button.role))
        .font_weight(gpui::FontWeight::MEDIUM)
        .cursor_pointer()
        .hover(move |style| style.bg(hover_bg))
        .child(SharedString::from(button.label.to_string()))
}
