//! Layout Engine - Computes column widths and renders the tab text block
//!
//! This module contains the core layout logic that takes a tab grid, a
//! tuning, and formatting options, and produces the aligned monospace text
//! the shell displays and copies to the clipboard.
//!
//! Two modes share the same column conventions: template mode produces a
//! blank starter tab from a width preset alone, grid mode lays out the
//! grid's tokens against per-column computed widths.

use crate::models::core::{RenderOptions, TabGrid};
use crate::models::tuning::{fallback_display_tuning, to_display_order, TuningSpec};
use serde::{Deserialize, Serialize};

/// Explanatory text for technique symbols, appended when the legend is on.
pub const LEGEND_TEXT: &str = "h = hammer-on   p = pull-off   b = bend   / = slide";

/// Placeholder header when the title is enabled but blank.
const EMPTY_TITLE: &str = "(notes)";

/// Output width presets offered by the shell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizePreset {
    Short,
    Medium,
    Long,
}

impl SizePreset {
    /// Parse a shell size value; unknown names fall back to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "short" => SizePreset::Short,
            "long" => SizePreset::Long,
            _ => SizePreset::Medium,
        }
    }

    /// Dashes per line in simple template mode.
    pub fn template_width(self) -> usize {
        match self {
            SizePreset::Short => 40,
            SizePreset::Medium => 80,
            SizePreset::Long => 120,
        }
    }

    /// Dashes per measure in bar template mode.
    pub fn bar_width(self) -> usize {
        match self {
            SizePreset::Short => 12,
            SizePreset::Medium => 20,
            SizePreset::Long => 28,
        }
    }
}

/// Configuration constants for layout calculations.
///
/// These are tunable to taste; the defaults match the original tool.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LayoutConfig {
    /// Floor for computed column widths; an all-empty column still renders
    /// this many dashes.
    pub min_col_width: usize,

    /// Pad width for the tuning label ahead of the opening barline. Two
    /// characters accommodate note names like `Eb` without shifting it.
    pub label_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_col_width: 3,
            label_width: 2,
        }
    }
}

/// Result of a render call: the text block plus advisory warnings.
///
/// Warnings never block rendering; invalid input degrades to a safe default
/// (e.g. an unresolvable custom tuning renders with standard labels).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderResult {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Main layout engine for rendering tab text.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a layout engine with the default constants.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Create a layout engine with explicit constants.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Render the grid as an aligned tab text block.
    ///
    /// This is the engine's sole required entry point: pure, synchronous,
    /// and deterministic given its inputs. Tuning failures downgrade to the
    /// fallback display tuning plus a warning.
    pub fn render(
        &self,
        grid: &TabGrid,
        tuning: &TuningSpec,
        options: &RenderOptions,
    ) -> RenderResult {
        let mut warnings = Vec::new();

        let display_labels = match tuning.resolve() {
            Ok(storage) => to_display_order(&storage),
            Err(err) => {
                warnings.push(err.to_string());
                fallback_display_tuning()
            }
        };

        let widths = self.column_widths(grid, options.show_labels);

        let mut lines: Vec<String> = Vec::new();

        if options.include_title {
            let title = options.title.trim();
            lines.push(if title.is_empty() {
                EMPTY_TITLE.to_string()
            } else {
                title.to_string()
            });
            lines.push(String::new());
        }

        let any_label = grid.col_labels.iter().any(|l| !l.trim().is_empty());
        if options.show_labels && any_label {
            lines.push(self.label_line(grid, &widths));
            lines.push(String::new());
        }

        for (row, label) in display_labels.iter().enumerate() {
            let cells = grid.cells.get(row).map(Vec::as_slice).unwrap_or(&[]);
            lines.push(self.string_line(label, cells, &widths));
        }

        if options.include_legend {
            lines.push(String::new());
            lines.push(LEGEND_TEXT.to_string());
        }

        RenderResult {
            text: lines.join("\n"),
            warnings,
        }
    }

    /// Compute per-column widths: the widest trimmed token in the column
    /// (and its label, when labels are shown), floored at `min_col_width`.
    pub fn column_widths(&self, grid: &TabGrid, include_labels: bool) -> Vec<usize> {
        (0..grid.beat_count)
            .map(|c| {
                let mut width = self.config.min_col_width;
                for row in &grid.cells {
                    if let Some(token) = row.get(c) {
                        width = width.max(token.trim().chars().count());
                    }
                }
                if include_labels {
                    if let Some(label) = grid.col_labels.get(c) {
                        width = width.max(label.trim().chars().count());
                    }
                }
                width
            })
            .collect()
    }

    /// One string line: padded tuning label, opening barline, then each
    /// column's token dash-padded to its width and closed by a barline.
    fn string_line(&self, label: &str, row: &[String], widths: &[usize]) -> String {
        let mut line = pad_with(label, self.config.label_width, ' ');
        line.push('|');
        for (c, width) in widths.iter().enumerate() {
            let token = row.get(c).map(|t| t.trim()).unwrap_or("");
            line.push_str(&pad_with(token, *width, '-'));
            line.push('|');
        }
        line
    }

    /// The column-label header line, aligned to the same widths but with
    /// spaces for padding and at barline positions; trailing space trimmed.
    fn label_line(&self, grid: &TabGrid, widths: &[usize]) -> String {
        let mut line = " ".repeat(self.config.label_width + 1);
        for (c, width) in widths.iter().enumerate() {
            let label = grid.col_labels.get(c).map(|l| l.trim()).unwrap_or("");
            line.push_str(&pad_with(label, *width, ' '));
            line.push(' ');
        }
        line.trim_end().to_string()
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank starter tab: six lines in display order, each
/// `<label>|<width dashes>|`.
pub fn build_template(width: usize) -> String {
    let dashes = "-".repeat(width);
    fallback_display_tuning()
        .iter()
        .map(|label| format!("{}|{}|", label, dashes))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Blank starter tab divided into measures: six lines, each
/// `<label>|` followed by `bars` repetitions of the per-measure dash run
/// plus a closing barline. The bar count is clamped into `[1, 16]`.
pub fn build_bar_template(preset: SizePreset, bars: usize) -> String {
    let bars = bars.clamp(1, 16);
    let chunk = "-".repeat(preset.bar_width());
    fallback_display_tuning()
        .iter()
        .map(|label| {
            let mut line = format!("{}|", label);
            for _ in 0..bars {
                line.push_str(&chunk);
                line.push('|');
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Left-justify `text` and pad with `fill` to `width` (char-counted).
fn pad_with(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut padded = String::with_capacity(width.max(len));
    padded.push_str(text);
    for _ in len..width {
        padded.push(fill);
    }
    padded
}
