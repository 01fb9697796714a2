use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Exit the application
    Exit,

    /// Stop or resume automatic stepping
    TogglePause,

    /// Randomize the grid again
    Reseed,

    /// Advance a single generation
    Step,

    /// The terminal was resized to `cols x rows`
    Resize { cols: u16, rows: u16 },
}

/// Converts a crossterm event into an application event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } => Some(Event::Exit),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::TogglePause),
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => Some(Event::Reseed),
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => Some(Event::Step),
            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event as CrossTermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyModifiers;

    use super::Event;
    use super::convert_event;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn keybinds() {
        let cases = [
            (KeyCode::Char('q'), KeyModifiers::NONE, Some(Event::Exit)),
            (KeyCode::Esc, KeyModifiers::NONE, Some(Event::Exit)),
            (KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Event::Exit)),
            (KeyCode::Char('c'), KeyModifiers::NONE, None),
            (KeyCode::Char(' '), KeyModifiers::NONE, Some(Event::TogglePause)),
            (KeyCode::Char('r'), KeyModifiers::NONE, Some(Event::Reseed)),
            (KeyCode::Char('n'), KeyModifiers::NONE, Some(Event::Step)),
            (KeyCode::Char('x'), KeyModifiers::NONE, None),
        ];

        for (code, modifiers, want) in cases {
            assert_eq!(
                convert_event(press(code, modifiers)),
                want,
                "{code:?} with {modifiers:?}"
            );
        }
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(convert_event(CrossTermEvent::Key(key)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            convert_event(CrossTermEvent::Resize(80, 24)),
            Some(Event::Resize { cols: 80, rows: 24 })
        );
    }

    #[test]
    fn other_events_are_ignored() {
        assert_eq!(convert_event(CrossTermEvent::FocusGained), None);
    }
}
