//! Key mapping from terminal events to user actions.

use crate::types::UserAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: UserAction,
    /// Only meaningful for [`UserAction::Down`], where it requests a hard drop
    pub hold: bool,
}

impl InputEvent {
    pub fn new(action: UserAction) -> Self {
        Self {
            action,
            hold: false,
        }
    }

    pub fn held(action: UserAction) -> Self {
        Self { action, hold: true }
    }
}

/// Map a key press to a user action.
///
/// Key releases and repeats of release-reporting terminals are ignored.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::new(UserAction::Terminate));
    }

    let event = match key.code {
        KeyCode::Enter => InputEvent::new(UserAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => InputEvent::new(UserAction::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::new(UserAction::Terminate),

        KeyCode::Left => InputEvent::new(UserAction::Left),
        KeyCode::Right => InputEvent::new(UserAction::Right),
        KeyCode::Up => InputEvent::new(UserAction::Up),
        KeyCode::Down => InputEvent::held(UserAction::Down),

        KeyCode::Char(' ') => InputEvent::new(UserAction::Action),

        _ => return None,
    };
    Some(event)
}
