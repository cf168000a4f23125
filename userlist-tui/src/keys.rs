//! Key bindings.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Type(char),
    Backspace,
    ClearSearch,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    GoToPage(u32),
    LimitUp,
    LimitDown,
    /// Toggle sort on the column at this index.
    Sort(usize),
    Retry,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let command = match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::Char('r') if ctrl => Command::Retry,
        KeyCode::Char('u') if ctrl => Command::ClearSearch,
        KeyCode::Char(c @ '1'..='9') if alt => Command::GoToPage(c.to_digit(10)?),
        KeyCode::Char('[') => Command::LimitDown,
        KeyCode::Char(']') => Command::LimitUp,
        KeyCode::Char(c) if !ctrl && !alt => Command::Type(c),
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Left => Command::PreviousPage,
        KeyCode::Right => Command::NextPage,
        KeyCode::Home => Command::FirstPage,
        KeyCode::End => Command::LastPage,
        KeyCode::F(n @ 1..=4) => Command::Sort(usize::from(n - 1)),
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_typing() {
        assert_eq!(command_for(key(KeyCode::Char('a'))), Some(Command::Type('a')));
        assert_eq!(
            command_for(with(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Command::Type('A'))
        );
        assert_eq!(command_for(key(KeyCode::Backspace)), Some(Command::Backspace));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            command_for(with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for(with(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Command::Retry)
        );
        assert_eq!(command_for(with(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_page_jump() {
        assert_eq!(
            command_for(with(KeyCode::Char('3'), KeyModifiers::ALT)),
            Some(Command::GoToPage(3))
        );
        assert_eq!(command_for(key(KeyCode::Char('3'))), Some(Command::Type('3')));
    }

    #[test]
    fn test_sort_keys() {
        assert_eq!(command_for(key(KeyCode::F(1))), Some(Command::Sort(0)));
        assert_eq!(command_for(key(KeyCode::F(4))), Some(Command::Sort(3)));
        assert_eq!(command_for(key(KeyCode::F(5))), None);
    }
}
