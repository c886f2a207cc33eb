//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Line navigation keys resolve to scroll
/// actions; the event loop reinterprets them as catalog moves when the catalog
/// pane has focus.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let none = KeyModifiers::NONE;
        let defaults = [
            // Vim-style scrolling
            (KeyCode::Char('j'), none, KeyAction::ScrollDown),
            (KeyCode::Char('k'), none, KeyAction::ScrollUp),
            (KeyCode::Char('g'), none, KeyAction::ScrollToTop),
            (KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom),
            (KeyCode::Home, none, KeyAction::ScrollToTop),
            (KeyCode::End, none, KeyAction::ScrollToBottom),
            // Arrow key scrolling
            (KeyCode::Down, none, KeyAction::ScrollDown),
            (KeyCode::Up, none, KeyAction::ScrollUp),
            // Page navigation
            (KeyCode::PageDown, none, KeyAction::PageDown),
            (KeyCode::PageUp, none, KeyAction::PageUp),
            (KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown),
            (KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp),
            // Catalog
            (KeyCode::Enter, none, KeyAction::SelectLog),
            (KeyCode::Char('R'), KeyModifiers::SHIFT, KeyAction::ReloadCatalog),
            // Pagination
            (KeyCode::Char(':'), none, KeyAction::StartJump),
            (KeyCode::Char('g'), KeyModifiers::CONTROL, KeyAction::StartJump),
            (KeyCode::Char('r'), none, KeyAction::Retry),
            // Focus
            (KeyCode::Tab, none, KeyAction::ToggleFocus),
            // Application
            (KeyCode::Char('q'), none, KeyAction::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit),
        ];

        let bindings = defaults
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn vim_keys_scroll() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::ScrollDown)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::ScrollToBottom)
        );
    }

    #[test]
    fn colon_opens_jump_input() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char(':'), KeyModifiers::NONE)),
            Some(KeyAction::StartJump)
        );
    }

    #[test]
    fn lowercase_r_retries_and_shift_r_reloads() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(KeyAction::Retry)
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(KeyAction::ReloadCatalog)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }
}
