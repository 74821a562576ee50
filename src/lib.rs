//! Guitar Tab Editor WASM Module
//!
//! This is the main WASM module for the guitar tab editor. It provides the
//! tab-layout engine: grid storage, tuning resolution, text layout, and undo.

pub mod api;
pub mod models;
pub mod renderers;
pub mod undo;

// Re-export commonly used types
pub use models::core::*;
pub use models::tuning::*;
pub use renderers::layout_engine::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Guitar Tab Editor WASM module initialized");
}
