//! Undo history for the Guitar Tab Editor
//!
//! Snapshot-based undo: every mutating operation captures the full
//! engine-relevant state (grid, tuning selection, formatting options)
//! before applying its change, so one undo restores the exact prior state.

use crate::models::core::{RenderOptions, TabGrid};
use crate::models::tuning::TuningSpec;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of snapshots retained; the oldest is evicted first.
pub const MAX_HISTORY: usize = 50;

/// Deep copy of the engine-relevant state at the moment before a mutation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub grid: TabGrid,
    pub tuning: TuningSpec,
    pub options: RenderOptions,
}

/// Bounded stack of pre-mutation snapshots.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryStack {
    snapshots: VecDeque<Snapshot>,
    max_size: usize,
}

impl HistoryStack {
    /// Create a history stack with the given maximum depth.
    pub fn new(max_size: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_size,
        }
    }

    /// Push a pre-mutation snapshot, evicting the oldest entry when the
    /// stack is full.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.max_size {
            self.snapshots.pop_front();
        }
    }

    /// Pop the most recent snapshot, or `None` when there is nothing to
    /// undo.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Check whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discard all history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_title(title: &str) -> Snapshot {
        Snapshot {
            grid: TabGrid::default(),
            tuning: TuningSpec::Standard,
            options: RenderOptions {
                title: title.to_string(),
                ..RenderOptions::default()
            },
        }
    }

    #[test]
    fn test_pop_returns_most_recent() {
        let mut stack = HistoryStack::default();
        stack.push(snapshot_with_title("first"));
        stack.push(snapshot_with_title("second"));

        assert_eq!(stack.pop().unwrap().options.title, "second");
        assert_eq!(stack.pop().unwrap().options.title, "first");
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_empty_stack_reports_nothing_to_undo() {
        let mut stack = HistoryStack::default();
        assert!(!stack.can_undo());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_max_size_enforcement() {
        let mut stack = HistoryStack::new(3);
        for i in 0..5 {
            stack.push(snapshot_with_title(&i.to_string()));
        }
        assert_eq!(stack.len(), 3);
        // Oldest two were evicted; the bottom of the stack is now "2"
        assert_eq!(stack.pop().unwrap().options.title, "4");
        assert_eq!(stack.pop().unwrap().options.title, "3");
        assert_eq!(stack.pop().unwrap().options.title, "2");
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_default_cap_is_fifty() {
        let mut stack = HistoryStack::default();
        for i in 0..51 {
            stack.push(snapshot_with_title(&i.to_string()));
        }
        assert_eq!(stack.len(), MAX_HISTORY);
        // The very first push is unrecoverable
        let mut bottom = None;
        while let Some(snap) = stack.pop() {
            bottom = Some(snap);
        }
        assert_eq!(bottom.unwrap().options.title, "1");
    }

    #[test]
    fn test_clear() {
        let mut stack = HistoryStack::default();
        stack.push(snapshot_with_title("x"));
        stack.clear();
        assert!(stack.is_empty());
    }
}
