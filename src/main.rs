use anyhow::Result;
use clap::Parser;
use gpui::{App, Application};
use padcalc::{Config, ui};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "padcalc", version, about = "A small keypad calculator")]
struct Args {
    /// Path to a config file (defaults to ~/.config/padcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(args.config.as_deref())?;

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = ui::open_window(&config, cx) {
            tracing::error!("Failed to open calculator window: {:#}", e);
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| cx.quit()).detach();
        cx.activate(true);
    });

    Ok(())
}
