use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Other,
}

/// Block until the terminal delivers one event.
pub fn next() -> Result<AppEvent> {
    Ok(match event::read()? {
        // Some terminals also report release/repeat; only presses count.
        Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
        Event::Resize(..) => AppEvent::Resize,
        _ => AppEvent::Other,
    })
}
