//! Bounded linear undo history.
//!
//! `current` is the last committed snapshot. Each commit pushes the previous
//! `current` onto the stack, evicting the oldest entry once the stack is
//! full. Undo pops the stack and makes the popped snapshot current. There is
//! no redo.

use crate::constants::MAX_HISTORY_STATES;
use crate::snapshot::Snapshot;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct History {
    stack: VecDeque<Snapshot>,
    current: Option<Snapshot>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_HISTORY_STATES)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            stack: VecDeque::with_capacity(max_depth.min(MAX_HISTORY_STATES)),
            current: None,
            max_depth,
        }
    }

    /// Set the baseline without touching the stack (initial load).
    pub fn set_current(&mut self, snapshot: Snapshot) {
        self.current = Some(snapshot);
    }

    /// Record a committed state.
    pub fn commit(&mut self, snapshot: Snapshot) {
        if let Some(previous) = self.current.replace(snapshot) {
            self.stack.push_back(previous);
            while self.stack.len() > self.max_depth {
                self.stack.pop_front();
            }
        }
    }

    /// Step back one commit. Returns the state to restore.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let previous = self.stack.pop_back()?;
        self.current = Some(previous.clone());
        Some(previous)
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
