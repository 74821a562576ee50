//! Core data structures for the Guitar Tab Editor
//!
//! This module defines the tab grid: a fixed 6-row matrix of free-form
//! tokens (fret numbers, technique symbols) with one column per beat and a
//! parallel array of per-beat column labels (e.g. chord names).

use serde::{Deserialize, Serialize};

/// Number of guitar strings; the grid always has exactly this many rows.
pub const STRING_COUNT: usize = 6;

/// Default number of beats in a freshly created grid.
pub const DEFAULT_BEAT_COUNT: usize = 8;

/// The editable tab grid.
///
/// Rows are stored in display order (row 0 = highest-pitched string, the top
/// line of conventional tab layout). An empty string in a cell means "no
/// mark" and renders as dashes.
///
/// Invariant: every row holds exactly `beat_count` cells and `col_labels`
/// holds exactly `beat_count` entries. Every structural mutation restores
/// this invariant before returning.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TabGrid {
    /// Cell tokens, one `Vec` per string row.
    pub cells: Vec<Vec<String>>,

    /// Per-beat column annotations (chord names etc.), parallel to columns.
    pub col_labels: Vec<String>,

    /// Number of beats (columns); always >= 1.
    pub beat_count: usize,
}

impl TabGrid {
    /// Create an empty grid with the given number of beats (minimum 1).
    pub fn new(beat_count: usize) -> Self {
        let beat_count = beat_count.max(1);
        Self {
            cells: vec![vec![String::new(); beat_count]; STRING_COUNT],
            col_labels: vec![String::new(); beat_count],
            beat_count,
        }
    }

    /// Get the token at (row, beat). Out-of-range positions read as empty.
    pub fn cell(&self, row: usize, beat: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(beat.wrapping_sub(1)))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Get the column label for a beat. Out-of-range positions read as empty.
    pub fn label(&self, beat: usize) -> &str {
        self.col_labels
            .get(beat.wrapping_sub(1))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the token at (row, beat). Positions outside the grid are
    /// ignored; no shifting occurs.
    pub fn set_cell(&mut self, row: usize, beat: usize, value: &str) {
        if row >= STRING_COUNT || beat < 1 || beat > self.beat_count {
            return;
        }
        self.cells[row][beat - 1] = value.to_string();
    }

    /// Replace the column label for a beat. Out-of-range beats are ignored.
    pub fn set_label(&mut self, beat: usize, value: &str) {
        if beat < 1 || beat > self.beat_count {
            return;
        }
        self.col_labels[beat - 1] = value.to_string();
    }

    /// Grow or shrink the grid to `target` beats.
    ///
    /// Growing appends empty cells/labels; shrinking truncates trailing
    /// columns. A target below 1 is refused (no-op).
    pub fn set_beat_count(&mut self, target: usize) {
        if target < 1 {
            return;
        }
        for row in &mut self.cells {
            row.resize(target, String::new());
        }
        self.col_labels.resize(target, String::new());
        self.beat_count = target;
    }

    /// Insert one empty beat at a 1-based position, clamped into
    /// `[1, beat_count + 1]`. Columns at or after the position shift right.
    pub fn insert_beat_at(&mut self, pos: usize) {
        let idx = pos.clamp(1, self.beat_count + 1) - 1;
        for row in &mut self.cells {
            row.insert(idx, String::new());
        }
        self.col_labels.insert(idx, String::new());
        self.beat_count += 1;
    }

    /// Delete the beat at a 1-based position, clamped into
    /// `[1, beat_count]`. Columns after it shift left. The last remaining
    /// beat is never deleted (no-op).
    pub fn delete_beat_at(&mut self, pos: usize) {
        if self.beat_count <= 1 {
            return;
        }
        let idx = pos.clamp(1, self.beat_count) - 1;
        for row in &mut self.cells {
            row.remove(idx);
        }
        self.col_labels.remove(idx);
        self.beat_count -= 1;
    }

    /// Reset every cell and label to empty without changing the beat count.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                cell.clear();
            }
        }
        for label in &mut self.col_labels {
            label.clear();
        }
    }

    /// Check the row/label length invariant (used by tests).
    pub fn is_consistent(&self) -> bool {
        self.cells.len() == STRING_COUNT
            && self.cells.iter().all(|r| r.len() == self.beat_count)
            && self.col_labels.len() == self.beat_count
            && self.beat_count >= 1
    }
}

impl Default for TabGrid {
    fn default() -> Self {
        Self::new(DEFAULT_BEAT_COUNT)
    }
}

/// Formatting options supplied by the shell for each render call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Render the title/notes header line.
    pub include_title: bool,

    /// Header text; a blank title renders as "(notes)".
    pub title: String,

    /// Append the technique legend after the string lines.
    pub include_legend: bool,

    /// Render the column-label header line (when any label is non-empty)
    /// and include label widths in column-width computation.
    pub show_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            title: String::new(),
            include_legend: false,
            show_labels: true,
        }
    }
}
