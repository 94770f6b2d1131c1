//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::app::message::Message;
use crate::common::prelude::*;

/// Poll for terminal events with the given timeout.
///
/// A timeout yields a `Tick` so the loading animation keeps moving while
/// nothing is typed. Only key presses become messages; release and repeat
/// events from enhanced keyboard protocols are dropped.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Message::Key(key))),
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
