use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc::Sender;

use crate::core::action::Key;

/// What a raw terminal event means to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputUnit {
    Key(Key),
    /// Esc or Ctrl+C: end the session.
    Terminate,
    Ignored,
}

pub fn translate(event: Event) -> InputUnit {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        _ => InputUnit::Ignored,
    }
}

fn translate_key(key_event: KeyEvent) -> InputUnit {
    // Terminals with keyboard enhancement also report releases and repeats.
    if key_event.kind != KeyEventKind::Press {
        return InputUnit::Ignored;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => InputUnit::Terminate,
        // Some terminals send Ctrl+H (^H) for the backspace key.
        (KeyModifiers::CONTROL, KeyCode::Char('h')) => InputUnit::Key(Key::Backspace),
        (_, KeyCode::Esc) => InputUnit::Terminate,
        (_, KeyCode::Tab) => InputUnit::Key(Key::Cycle),
        (_, KeyCode::Enter) => InputUnit::Key(Key::Commit),
        (_, KeyCode::Backspace) => InputUnit::Key(Key::Backspace),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            InputUnit::Key(Key::Char(c))
        }
        _ => InputUnit::Ignored,
    }
}

/// Reads terminal events on a dedicated thread and forwards keys.
///
/// The thread stops on a terminate key, on a read error, or when the
/// receiver is dropped; in every case `keys` is dropped, which the
/// dispatcher sees as the end of input.
pub fn spawn_reader(keys: Sender<Key>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    warn!("Error reading input: {}", e);
                    return;
                }
            };
            match translate(event) {
                InputUnit::Key(key) => {
                    debug!("Key: {:?}", key);
                    if keys.blocking_send(key).is_err() {
                        return;
                    }
                }
                InputUnit::Terminate => {
                    debug!("Terminate key pressed");
                    return;
                }
                InputUnit::Ignored => {}
            }
        }
    })
}
