use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events.
///
/// Translation is deliberately dumb: printable characters always come
/// through as `InputChar`, and the event loop decides whether a given
/// character is a page shortcut or text for the focused input, based on
/// the page currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C. Quits regardless of what is focused.
    ForceQuit,
    /// Esc. Steps back through the page stack.
    Escape,
    /// Enter.
    Submit,
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Tab. Next form field / next filter.
    NextField,
    /// Shift+Tab.
    PrevField,
    /// Ctrl+S. Cycles the selected user's status.
    CycleStatus,
    /// Ctrl+D. Deletes the selected user (press twice to confirm).
    DeleteEntry,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read() {
            Ok(Event::Key(key_event)) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::CycleStatus),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::DeleteEntry),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Tab) => Some(TuiEvent::NextField),
                    (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
                    _ => None,
                }
            }
            Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
