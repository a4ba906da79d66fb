use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Heading;

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Steer(Heading),
    Restart,
    Quit,
}

/// Maps one key event to a game input. Releases and repeats are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Steer(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Steer(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Steer(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Steer(Heading::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Drains every terminal event already queued, waiting at most `timeout`
/// for the first one.
pub fn poll_inputs(timeout: Duration) -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    let mut wait = timeout;

    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            inputs.extend(map_key(key));
        }
        wait = Duration::ZERO;
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{GameInput, map_key};
    use crate::grid::Heading;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(GameInput::Steer(Heading::Up)));
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Steer(Heading::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(GameInput::Steer(Heading::Right))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('s'))),
            Some(GameInput::Steer(Heading::Down))
        );
    }

    #[test]
    fn enter_restarts_and_q_quits() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key(release), None);
    }
}
