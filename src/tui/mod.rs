mod app;
mod event;
pub mod form;
pub mod keymap;
pub mod list;
pub mod theme;
mod ui;

pub use app::{App, MenuChoice, Mode};

use anyhow::Result;

use crate::config::Config;
use crate::store::Store;

/// Run the TUI until the user quits from the home screen. Items are saved
/// on the way out; the terminal is restored even when that fails.
pub fn run(store: Store, config: &Config) -> Result<()> {
    let mut app = App::new(store, config)?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}
