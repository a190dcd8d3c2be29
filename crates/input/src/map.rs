//! Key mapping from terminal events to session intents.
//!
//! The same physical key means different things depending on the screen: `a`
//! steers the snake, but it is a letter while typing an answer. Callers pick a
//! [`KeyContext`] from the current mode before mapping.

use crate::types::{Direction, Intent, ModeTag};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which key table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Menus, pause and game-over screens
    Navigation,
    /// Snake board (movement plus answer options)
    Snake,
    /// Arcade mini-games
    Arcade,
    /// Typed-answer sub-games: printable keys are text
    TextEntry,
}

impl KeyContext {
    pub fn for_mode(mode: ModeTag) -> Self {
        match mode {
            ModeTag::Playing => KeyContext::Snake,
            ModeTag::ArcadePlaying => KeyContext::Arcade,
            ModeTag::EducationPlaying => KeyContext::TextEntry,
            ModeTag::Menu
            | ModeTag::CategorySelect
            | ModeTag::EducationSelect
            | ModeTag::ArcadeSelect
            | ModeTag::Paused
            | ModeTag::GameOver => KeyContext::Navigation,
        }
    }
}

/// Arrow keys and WASD.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

fn digit(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char(c @ '1'..='9') => Some(c as u8 - b'0'),
        _ => None,
    }
}

/// Map a key press to an intent for the given context.
pub fn map_key(key: KeyEvent, context: KeyContext) -> Option<Intent> {
    if context == KeyContext::TextEntry {
        return match key.code {
            KeyCode::Enter => Some(Intent::Submit),
            KeyCode::Backspace => Some(Intent::Backspace),
            KeyCode::Esc => Some(Intent::Escape),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Intent::TypeChar(c))
            }
            _ => None,
        };
    }

    if let Some(n) = digit(key.code) {
        return Some(Intent::SelectOption(n));
    }

    if context != KeyContext::Navigation {
        if let Some(dir) = direction_for_key(key.code) {
            return Some(Intent::from_direction(dir));
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::PauseToggle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Esc => Some(Intent::Escape),
        KeyCode::Char(' ') if context == KeyContext::Arcade => Some(Intent::Fire),
        KeyCode::Char(' ') | KeyCode::Enter if context == KeyContext::Navigation => {
            Some(Intent::Start)
        }
        KeyCode::Char('l') | KeyCode::Char('L') if context == KeyContext::Navigation => {
            Some(Intent::ToggleLanguage)
        }
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Backspace
            if context == KeyContext::Navigation =>
        {
            Some(Intent::Back)
        }
        _ => None,
    }
}

/// Check if key should quit regardless of context (Ctrl-C).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(key(KeyCode::Left), KeyContext::Snake),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('W')), KeyContext::Snake),
            Some(Intent::MoveUp)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('s')), KeyContext::Arcade),
            Some(Intent::MoveDown)
        );
        // Menus do not steer.
        assert_eq!(map_key(key(KeyCode::Up), KeyContext::Navigation), None);
    }

    #[test]
    fn test_digits_select_options() {
        assert_eq!(
            map_key(key(KeyCode::Char('2')), KeyContext::Navigation),
            Some(Intent::SelectOption(2))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('9')), KeyContext::Arcade),
            Some(Intent::SelectOption(9))
        );
        assert_eq!(map_key(key(KeyCode::Char('0')), KeyContext::Snake), None);
    }

    #[test]
    fn test_space_depends_on_context() {
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), KeyContext::Navigation),
            Some(Intent::Start)
        );
        assert_eq!(
            map_key(key(KeyCode::Char(' ')), KeyContext::Arcade),
            Some(Intent::Fire)
        );
        assert_eq!(map_key(key(KeyCode::Char(' ')), KeyContext::Snake), None);
    }

    #[test]
    fn test_text_entry_captures_letters() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), KeyContext::TextEntry),
            Some(Intent::TypeChar('q'))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), KeyContext::TextEntry),
            Some(Intent::Submit)
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), KeyContext::TextEntry),
            Some(Intent::Backspace)
        );
        assert_eq!(
            map_key(key(KeyCode::Esc), KeyContext::TextEntry),
            Some(Intent::Escape)
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('l')), KeyContext::Navigation),
            Some(Intent::ToggleLanguage)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('b')), KeyContext::Navigation),
            Some(Intent::Back)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('r')), KeyContext::Navigation),
            Some(Intent::Restart)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('p')), KeyContext::Snake),
            Some(Intent::PauseToggle)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), KeyContext::Snake),
            Some(Intent::Quit)
        );
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_context_for_mode() {
        assert_eq!(KeyContext::for_mode(ModeTag::Playing), KeyContext::Snake);
        assert_eq!(
            KeyContext::for_mode(ModeTag::EducationPlaying),
            KeyContext::TextEntry
        );
        assert_eq!(
            KeyContext::for_mode(ModeTag::GameOver),
            KeyContext::Navigation
        );
    }
}
