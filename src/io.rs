use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::Event;

/// Converts a crossterm event into a lifeview event
///
/// ```notrust
/// arrows, h j k l      move the cursor
/// H J K L              scroll
/// space, enter         toggle the cell under the cursor
/// n, .                 step one generation
/// p                    play / pause
/// q, esc, ctrl-c       quit
/// ```
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    // Some platforms report releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Event::Quit,

        KeyEvent {
            code: KeyCode::Up | KeyCode::Char('k'),
            ..
        } => Event::MoveUp,
        KeyEvent {
            code: KeyCode::Down | KeyCode::Char('j'),
            ..
        } => Event::MoveDown,
        KeyEvent {
            code: KeyCode::Left | KeyCode::Char('h'),
            ..
        } => Event::MoveLeft,
        KeyEvent {
            code: KeyCode::Right | KeyCode::Char('l'),
            ..
        } => Event::MoveRight,

        KeyEvent {
            code: KeyCode::Char('K'),
            ..
        } => Event::ScrollUp,
        KeyEvent {
            code: KeyCode::Char('J'),
            ..
        } => Event::ScrollDown,
        KeyEvent {
            code: KeyCode::Char('H'),
            ..
        } => Event::ScrollLeft,
        KeyEvent {
            code: KeyCode::Char('L'),
            ..
        } => Event::ScrollRight,

        KeyEvent {
            code: KeyCode::Char(' ') | KeyCode::Enter,
            ..
        } => Event::ToggleCell,
        KeyEvent {
            code: KeyCode::Char('n') | KeyCode::Char('.'),
            ..
        } => Event::StepGeneration,
        KeyEvent {
            code: KeyCode::Char('p'),
            ..
        } => Event::TogglePlay,

        _ => return None,
    };

    Some(event)
}
