//! Terminal key handling
//!
//! Maps crossterm key events onto calculator events, plus the keys that
//! leave the interactive session.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pocketcalc::input::{key_to_event, CalcEvent};

/// What a terminal key press means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Feed an event to the calculator
    Calc(CalcEvent),
    /// Leave the session
    Quit,
    /// Nothing to do
    None,
}

/// Maps a key event to a command
///
/// Release and repeat events are ignored; only presses count.
#[must_use]
pub fn handle_key(event: KeyEvent) -> KeyCommand {
    if event.kind != KeyEventKind::Press {
        return KeyCommand::None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c' | 'q') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    let event = match event.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => return KeyCommand::Quit,
        KeyCode::Enter => key_to_event("Enter"),
        KeyCode::Backspace => key_to_event("Backspace"),
        KeyCode::Delete => Some(CalcEvent::Clear),
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            key_to_event(c.encode_utf8(&mut buf))
        }
        _ => None,
    };

    event.map_or(KeyCommand::None, KeyCommand::Calc)
}
