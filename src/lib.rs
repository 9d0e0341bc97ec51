pub mod calc;
pub mod calculator;
pub mod config;
pub mod editor;
pub mod keypad;
pub mod status;
pub mod ui;

pub use calc::Calculator;
pub use config::Config;
