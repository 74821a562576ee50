//! Renderers module for the Guitar Tab Editor
//!
//! This module contains the layout logic that converts the tab grid into
//! aligned, monospace plain text.

pub mod layout_engine;

// Re-export commonly used types
pub use layout_engine::*;
