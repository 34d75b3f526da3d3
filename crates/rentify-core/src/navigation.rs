//! Navigation state - history and current location
//!
//! The shell never reads a global: the current location lives here and is
//! passed to [`Shell`](crate::Shell) on every resolution. One owner mutates
//! it (the navigation subsystem); views only read.

use crate::Result;
use rentify_router::Location;

/// A navigation event, applied in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Go to a new path, adding a history entry
    Push(String),
    /// Go to a new path, overwriting the current entry
    Replace(String),
    Back,
    Forward,
    /// Move through history by a relative offset
    Go(isize),
}

/// Current location plus session history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    entries: Vec<Location>,
    cursor: usize,
}

impl NavigationState {
    /// Start at `/`
    pub fn new() -> Self {
        Self {
            entries: vec![Location::default()],
            cursor: 0,
        }
    }

    /// Start at an arbitrary path, e.g. the one the page was loaded with
    pub fn starting_at(path: &str) -> Result<Self> {
        Ok(Self {
            entries: vec![Location::parse(path)?],
            cursor: 0,
        })
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn pathname(&self) -> &str {
        self.current().pathname()
    }

    /// Number of history entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Apply an event; returns `false` when a history move is out of range
    pub fn apply(&mut self, event: &Navigation) -> Result<bool> {
        match event {
            Navigation::Push(path) => self.push(path).map(|_| true),
            Navigation::Replace(path) => self.replace(path).map(|_| true),
            Navigation::Back => Ok(self.back().is_some()),
            Navigation::Forward => Ok(self.forward().is_some()),
            Navigation::Go(delta) => Ok(self.go(*delta).is_some()),
        }
    }

    /// Push a new entry, dropping any forward history
    ///
    /// Pushing the current location again leaves history unchanged.
    pub fn push(&mut self, path: &str) -> Result<&Location> {
        let location = Location::parse(path)?;
        if location != *self.current() {
            self.entries.truncate(self.cursor + 1);
            self.entries.push(location);
            self.cursor += 1;
            tracing::trace!(path, depth = self.cursor, "navigation push");
        }
        Ok(self.current())
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, path: &str) -> Result<&Location> {
        let location = Location::parse(path)?;
        self.entries[self.cursor] = location;
        tracing::trace!(path, depth = self.cursor, "navigation replace");
        Ok(self.current())
    }

    pub fn back(&mut self) -> Option<&Location> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Location> {
        self.go(1)
    }

    /// Move by `delta` entries; out-of-range moves change nothing
    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let target = self.cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        tracing::trace!(delta, depth = self.cursor, "navigation go");
        Some(self.current())
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
