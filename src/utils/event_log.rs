//! User-facing log of game events with local timestamps.
//!
//! Separate from `tracing` diagnostics: this is the record a player can
//! review at the end of a session.

use std::fmt;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    logged_at: DateTime<Local>,
    description: String,
}

impl Event {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            logged_at: Local::now(),
            description: description.into(),
        }
    }

    pub fn logged_at(&self) -> DateTime<Local> {
        self.logged_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.logged_at.format("%Y-%m-%d %H:%M:%S"),
            self.description
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_event(&mut self, description: impl Into<String>) {
        self.events.push(Event::new(description));
    }

    /// Drop every event, leaving a single note that the log was cleared.
    pub fn clear(&mut self) {
        self.events.clear();
        self.log_event("Event log cleared.");
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

/// One event per line, oldest first.
impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
