//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleMenu,
    ToggleLinks,
    OpenHelp,
    FocusForm,
    DownloadCv,
    Confirm,
    Cancel,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    NextEntry,
    PrevEntry,
    JumpTo(usize),
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        KeyCode::Char('a') => Some(Action::ToggleLinks),
        KeyCode::Char('v') => Some(Action::DownloadCv),
        KeyCode::Char('i') => Some(Action::FocusForm),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextEntry),
        KeyCode::BackTab => Some(Action::PrevEntry),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Char('g') => Some(Action::ScrollTop),
        KeyCode::Char('G') => Some(Action::ScrollBottom),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            if digit == 0 {
                return None;
            }
            Some(Action::JumpTo(digit - 1))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_digits_map_to_nav_entries() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::JumpTo(0)));
        assert_eq!(map_key(key(KeyCode::Char('5'))), Some(Action::JumpTo(4)));
        assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_vim_and_arrow_scrolling() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::ScrollDown));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::ScrollDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::ScrollUp));
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::ScrollUp));
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            None
        );
    }
}
