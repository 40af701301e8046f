use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Input the main loop cares about. Click events carry their own
/// coordinates so handlers never reach for ambient state.
#[derive(Debug, Clone, Copy)]
pub enum Input {
    Key(KeyEvent),
    Click { x: u16, y: u16 },
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn next_input(timeout: Duration) -> color_eyre::Result<Option<Input>> {
    loop {
        match poll_event(timeout)? {
            Some(Event::Key(key)) => return Ok(Some(Input::Key(key))),
            Some(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            })) => return Ok(Some(Input::Click { x: column, y: row })),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}
