use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_rate: Duration,
}

/// Result of an async contact relay delivery
pub enum SendResult {
    /// Message accepted by the relay
    Success,
    /// Delivery failed
    Failure { error: String },
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate: Duration::from_millis(animation_rate_ms),
        }
    }

    /// Poll for the next event. When `fast` is set the poll window
    /// shrinks to the animation rate so in-flight effects keep moving.
    pub fn next(&self, fast: bool) -> Result<Option<AppEvent>> {
        let timeout = if fast {
            self.animation_rate
        } else {
            self.tick_rate
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
