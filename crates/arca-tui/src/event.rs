//! Terminal event polling
//!
//! crossterm stays on this side of the boundary: key presses are translated
//! into [`InputKey`] before they reach the app layer.

use std::time::Duration;

use arca_app::{InputKey, Message};
use arca_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Frame interval; a quiet poll turns into a `Tick` for the loading animation.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Translate a crossterm key press. Keys the app has no use for yield `None`.
pub fn translate_key(key: KeyEvent) -> Option<InputKey> {
    // AltGr arrives as Ctrl+Alt on some layouts and must still type characters
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        KeyCode::F(n) => InputKey::F(n),
        _ => return None,
    };
    Some(input)
}

/// Wait up to [`POLL_INTERVAL`] for terminal input.
///
/// Returns `Message::Tick` when nothing arrived, `None` for events the app
/// ignores (mouse, resize, key releases).
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(translate_key(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
