//! Terminal event polling

use crate::app::message::Message;
use crate::common::prelude::*;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

/// Poll for terminal events with timeout
///
/// Returns a `Key` message for key presses, `Tick` on timeout so
/// animations keep moving, and `None` for events we do not handle.
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Message::Key(key))),
            other => {
                trace!("Ignoring terminal event: {:?}", other);
                Ok(None)
            }
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
