//! WASM API for the Guitar Tab Editor
//!
//! This module provides the JavaScript-facing session object. The shell
//! owns DOM rendering, clipboard access, and event wiring; it drives this
//! API after every user edit and displays the returned text and warnings.
//!
//! Every mutating call pushes a pre-mutation snapshot, so a single `undo`
//! restores the exact prior state including tuning selection and
//! formatting flags, not just grid contents.

use crate::models::core::{RenderOptions, TabGrid};
use crate::models::tuning::{fallback_display_tuning, to_display_order, TuningSpec};
use crate::renderers::layout_engine::{
    build_bar_template, build_template, LayoutEngine, RenderResult, SizePreset,
};
use crate::undo::{HistoryStack, Snapshot};
use wasm_bindgen::prelude::*;

/// One editing session: grid, tuning, options, and undo history.
///
/// The shell owns exactly one of these per editor instance; there are no
/// module-level globals.
#[wasm_bindgen]
pub struct TabSession {
    grid: TabGrid,
    tuning: TuningSpec,
    options: RenderOptions,
    engine: LayoutEngine,
    history: HistoryStack,
}

#[wasm_bindgen]
impl TabSession {
    /// Create a session with an empty 8-beat grid, standard tuning, and
    /// default formatting options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TabSession {
        log::info!("TabSession created");
        TabSession {
            grid: TabGrid::default(),
            tuning: TuningSpec::Standard,
            options: RenderOptions::default(),
            engine: LayoutEngine::new(),
            history: HistoryStack::default(),
        }
    }

    /// Render the current state as `{ text, warnings }`.
    pub fn render(&self) -> Result<JsValue, JsValue> {
        let result = self.render_result();
        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Set the token at (row, beat); 1-based beat, row 0 = top tab line.
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, row: usize, beat: usize, value: String) {
        self.checkpoint();
        self.grid.set_cell(row, beat, &value);
    }

    /// Set the column label (e.g. chord name) for a 1-based beat.
    #[wasm_bindgen(js_name = setLabel)]
    pub fn set_label(&mut self, beat: usize, value: String) {
        self.checkpoint();
        self.grid.set_label(beat, &value);
    }

    /// Insert an empty beat at a 1-based position (clamped).
    #[wasm_bindgen(js_name = insertBeatAt)]
    pub fn insert_beat_at(&mut self, pos: usize) {
        self.checkpoint();
        self.grid.insert_beat_at(pos);
    }

    /// Delete the beat at a 1-based position (clamped; the last beat is
    /// never deleted).
    #[wasm_bindgen(js_name = deleteBeatAt)]
    pub fn delete_beat_at(&mut self, pos: usize) {
        self.checkpoint();
        self.grid.delete_beat_at(pos);
    }

    /// Grow or shrink the grid to `target` beats (targets below 1 are
    /// refused).
    #[wasm_bindgen(js_name = setBeatCount)]
    pub fn set_beat_count(&mut self, target: usize) {
        self.checkpoint();
        self.grid.set_beat_count(target);
    }

    /// Reset every cell and label without changing the beat count.
    #[wasm_bindgen(js_name = clearGrid)]
    pub fn clear_grid(&mut self) {
        self.checkpoint();
        self.grid.clear();
    }

    /// Select a tuning by shell name (`standard`, `dropd`, `halfdown`,
    /// `custom`); `custom_text` is only consulted for `custom`. An
    /// unresolvable custom tuning is not an error here: render degrades to
    /// the fallback tuning and reports a warning.
    #[wasm_bindgen(js_name = setTuning)]
    pub fn set_tuning(&mut self, name: &str, custom_text: &str) {
        self.checkpoint();
        self.tuning = TuningSpec::from_shell(name, custom_text);
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: String) {
        self.checkpoint();
        self.options.title = title;
    }

    #[wasm_bindgen(js_name = setIncludeTitle)]
    pub fn set_include_title(&mut self, on: bool) {
        self.checkpoint();
        self.options.include_title = on;
    }

    #[wasm_bindgen(js_name = setIncludeLegend)]
    pub fn set_include_legend(&mut self, on: bool) {
        self.checkpoint();
        self.options.include_legend = on;
    }

    #[wasm_bindgen(js_name = setShowLabels)]
    pub fn set_show_labels(&mut self, on: bool) {
        self.checkpoint();
        self.options.show_labels = on;
    }

    /// Restore the most recent snapshot. Returns false when there is
    /// nothing to undo (not an error).
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.grid = snapshot.grid;
                self.tuning = snapshot.tuning;
                self.options = snapshot.options;
                true
            }
            None => {
                log::info!("undo requested with empty history");
                false
            }
        }
    }

    /// Current number of beats (columns).
    #[wasm_bindgen(js_name = beatCount)]
    pub fn beat_count(&self) -> usize {
        self.grid.beat_count
    }

    /// Display-order tuning labels for the shell's row headers (falls back
    /// to standard when a custom tuning does not resolve).
    #[wasm_bindgen(js_name = tuningLabels)]
    pub fn tuning_labels(&self) -> js_sys::Array {
        let labels = match self.tuning.resolve() {
            Ok(storage) => to_display_order(&storage),
            Err(_) => fallback_display_tuning(),
        };
        labels
            .iter()
            .map(|label| JsValue::from_str(label))
            .collect()
    }

    /// Dump the session state (grid, tuning, options) as JSON for
    /// debugging.
    #[wasm_bindgen(js_name = stateToJson)]
    pub fn state_to_json(&self) -> Result<String, JsValue> {
        let snapshot = Snapshot {
            grid: self.grid.clone(),
            tuning: self.tuning.clone(),
            options: self.options.clone(),
        };
        serde_json::to_string(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl TabSession {
    /// Render without crossing the WASM boundary (native callers, tests).
    pub fn render_result(&self) -> RenderResult {
        self.engine.render(&self.grid, &self.tuning, &self.options)
    }

    /// Push the pre-mutation state onto the undo stack.
    fn checkpoint(&mut self) {
        self.history.push(Snapshot {
            grid: self.grid.clone(),
            tuning: self.tuning.clone(),
            options: self.options.clone(),
        });
    }
}

impl Default for TabSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank starter tab for a shell size value (`short`, `medium`, `long`).
#[wasm_bindgen(js_name = buildTemplate)]
pub fn build_template_js(size: &str) -> String {
    build_template(SizePreset::from_name(size).template_width())
}

/// Blank starter tab divided into measures; `bars` is clamped into
/// `[1, 16]`.
#[wasm_bindgen(js_name = buildBarTemplate)]
pub fn build_bar_template_js(size: &str, bars: usize) -> String {
    build_bar_template(SizePreset::from_name(size), bars)
}
