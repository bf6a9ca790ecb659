//! Bounded undo/redo history over whole-collection snapshots.
//!
//! Each entry is a full, independently owned copy of the shape collection.
//! Pushing stores a clone of the caller's shapes, discards any redo branch,
//! and evicts the oldest entries once the bound is exceeded. Readers get
//! clones back, so nothing outside the store can alias a stored snapshot.
//!
//! Listeners registered with [`HistoryStore::subscribe`] run after every push
//! and may propose a follow-up collection (derived state). Follow-ups raised
//! while a push is being handled are coalesced to the latest one and
//! committed as a single extra entry, and the cascade stops after
//! [`MAX_CASCADE_DEPTH`] rounds.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;
use std::fmt;

use crate::consts::{MAX_CASCADE_DEPTH, MAX_HISTORY_LENGTH};
use crate::doc::Shape;

/// Called with the committed snapshot after a push. Returning a collection
/// queues it as a follow-up push.
pub type HistoryListener = Box<dyn FnMut(&[Shape]) -> Option<Vec<Shape>>>;

pub struct HistoryStore {
    entries: VecDeque<Vec<Shape>>,
    current_index: usize,
    limit: usize,
    listeners: Vec<HistoryListener>,
}

impl fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries.len())
            .field("current_index", &self.current_index)
            .field("limit", &self.limit)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(MAX_HISTORY_LENGTH)
    }
}

impl HistoryStore {
    /// An empty history holding at most `limit` entries (at least one).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(Vec::new());
        Self { entries, current_index: 0, limit: limit.max(1), listeners: Vec::new() }
    }

    /// Record `shapes` as the new current state.
    pub fn push(&mut self, shapes: &[Shape]) {
        self.commit(shapes.to_vec());

        let mut pending = self.notify();
        let mut depth = 0;
        while let Some(next) = pending {
            if depth >= MAX_CASCADE_DEPTH {
                tracing::warn!(depth, "history follow-up cascade too deep; dropping follow-up");
                return;
            }
            depth += 1;
            tracing::debug!(depth, "committing history follow-up");
            self.commit(next);
            pending = self.notify();
        }
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        tracing::debug!(index = self.current_index, "history undo");
        true
    }

    /// Step forward one entry. Returns `false` at the end of history.
    pub fn redo(&mut self) -> bool {
        if self.current_index + 1 >= self.entries.len() {
            return false;
        }
        self.current_index += 1;
        tracing::debug!(index = self.current_index, "history redo");
        true
    }

    /// A clone of the current snapshot.
    #[must_use]
    pub fn current(&self) -> Vec<Shape> {
        self.entries.get(self.current_index).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    /// Number of stored entries, including the current one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Register a listener run after every push.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Shape]) -> Option<Vec<Shape>> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self, snapshot: Vec<Shape>) {
        self.entries.truncate(self.current_index + 1);
        self.entries.push_back(snapshot);

        let mut evicted = 0usize;
        while self.entries.len() > self.limit {
            self.entries.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            tracing::debug!(evicted, "history evicted oldest entries");
        }

        self.current_index = self.entries.len() - 1;
        tracing::debug!(entries = self.entries.len(), index = self.current_index, "history push");
    }

    /// Run every listener against the current snapshot; the last proposal wins.
    fn notify(&mut self) -> Option<Vec<Shape>> {
        let current = self.entries.get(self.current_index)?;
        let mut follow_up = None;
        for listener in &mut self.listeners {
            if let Some(next) = listener(current.as_slice()) {
                follow_up = Some(next);
            }
        }
        follow_up
    }
}
