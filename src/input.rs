//! Key bindings.
//!
//! Maps crossterm key events to [`Command`]s. What a key means depends on
//! the current [`Screen`]: `Enter` retries on the error screen and toggles
//! a favorite on the lists.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Screen;

/// User intents the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    SelectNext,
    SelectPrevious,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,
    ToggleFavorite,
    ToggleView,
    Retry,
}

/// Resolve `key` on `screen` to a command, if it is bound.
pub fn command_for_key(key: &KeyEvent, screen: Screen) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        _ => {}
    }

    match screen {
        Screen::Loading => None,
        Screen::Error => match key.code {
            KeyCode::Char('r') | KeyCode::Enter => Some(Command::Retry),
            _ => None,
        },
        Screen::AllPosts | Screen::Favorites => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrevious),
            KeyCode::PageDown => Some(Command::PageDown),
            KeyCode::PageUp => Some(Command::PageUp),
            KeyCode::Home | KeyCode::Char('g') => Some(Command::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(Command::SelectLast),
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
                Some(Command::ToggleFavorite)
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('v') => Some(Command::ToggleView),
            _ => None,
        },
    }
}

/// Keybind hints for the footer.
pub fn hints_for(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Loading => &[("q", "quit")],
        Screen::Error => &[("r", "retry"), ("q", "quit")],
        Screen::AllPosts => &[
            ("↑↓", "move"),
            ("f", "favorite"),
            ("Tab", "view favorites"),
            ("q", "quit"),
        ],
        Screen::Favorites => &[
            ("↑↓", "move"),
            ("f", "unfavorite"),
            ("Tab", "view all"),
            ("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for screen in [Screen::Loading, Screen::Error, Screen::AllPosts, Screen::Favorites] {
            assert_eq!(command_for_key(&key(KeyCode::Char('q')), screen), Some(Command::Quit));
            assert_eq!(command_for_key(&key(KeyCode::Esc), screen), Some(Command::Quit));
            assert_eq!(command_for_key(&ctrl_c, screen), Some(Command::Quit));
        }
    }

    #[test]
    fn test_enter_depends_on_screen() {
        assert_eq!(
            command_for_key(&key(KeyCode::Enter), Screen::Error),
            Some(Command::Retry)
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Enter), Screen::AllPosts),
            Some(Command::ToggleFavorite)
        );
        assert_eq!(command_for_key(&key(KeyCode::Enter), Screen::Loading), None);
    }

    #[test]
    fn test_retry_only_on_error() {
        assert_eq!(
            command_for_key(&key(KeyCode::Char('r')), Screen::Error),
            Some(Command::Retry)
        );
        assert_eq!(command_for_key(&key(KeyCode::Char('r')), Screen::AllPosts), None);
    }

    #[test]
    fn test_list_navigation() {
        let screen = Screen::Favorites;
        assert_eq!(command_for_key(&key(KeyCode::Down), screen), Some(Command::SelectNext));
        assert_eq!(
            command_for_key(&key(KeyCode::Char('k')), screen),
            Some(Command::SelectPrevious)
        );
        assert_eq!(command_for_key(&key(KeyCode::Home), screen), Some(Command::SelectFirst));
        assert_eq!(command_for_key(&key(KeyCode::End), screen), Some(Command::SelectLast));
        assert_eq!(command_for_key(&key(KeyCode::Tab), screen), Some(Command::ToggleView));
        assert_eq!(command_for_key(&key(KeyCode::Char('x')), screen), None);
    }

    #[test]
    fn test_hints_mention_view_switch() {
        assert!(hints_for(Screen::AllPosts)
            .iter()
            .any(|(_, label)| *label == "view favorites"));
        assert!(hints_for(Screen::Favorites)
            .iter()
            .any(|(_, label)| *label == "view all"));
    }
}
