//! Keyboard input
//!
//! The simulation only sees `InputEvent`; this module turns crossterm
//! terminal events into them.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::clock::FixedStep;
use crate::sim::Direction;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    /// Start / acknowledge (Enter)
    Confirm,
    /// Pause toggle (Space)
    Pause,
}

/// Abstract input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    Other,
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return InputEvent::Other;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
            KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
            KeyCode::Up | KeyCode::Char('w') => InputEvent::KeyDown(Key::Arrow(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => InputEvent::KeyDown(Key::Arrow(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => InputEvent::KeyDown(Key::Arrow(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => {
                InputEvent::KeyDown(Key::Arrow(Direction::Right))
            }
            KeyCode::Enter => InputEvent::KeyDown(Key::Confirm),
            KeyCode::Char(' ') => InputEvent::KeyDown(Key::Pause),
            _ => InputEvent::Other,
        }
    }
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => key.into(),
            _ => InputEvent::Other,
        }
    }
}

/// Collect terminal events until the clock's next tick is due
pub fn collect_until(clock: &FixedStep) -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    loop {
        let remaining = clock.remaining(Instant::now());
        if !event::poll(remaining)? {
            break;
        }
        match InputEvent::from(event::read()?) {
            InputEvent::Other => {}
            ev => events.push(ev),
        }
        if remaining.is_zero() {
            break;
        }
    }
    Ok(events)
}
