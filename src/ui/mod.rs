pub mod keypad;
pub mod theme;
pub mod view;

pub use theme::{CalculatorTheme, theme};
pub use view::CalculatorView;

use crate::Calculator;
use crate::calculator::open_clipboard;
use crate::config::Config;
use gpui::{App, AppContext, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size};

/// Open the calculator window.
pub fn open_window(config: &Config, cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(
        None,
        size(px(config.window.width), px(config.window.height)),
        cx,
    );
    let calculator = Calculator::new(config, open_clipboard());

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(config.window.title.clone().into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| cx.new(|cx| CalculatorView::new(calculator, window, cx)),
    )?;

    Ok(())
}
