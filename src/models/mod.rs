//! Models module for the Guitar Tab Editor
//!
//! This module contains the data models for the tab grid and
//! the tuning tables that label its rows.

pub mod core;
pub mod tuning;

// Re-export commonly used types
pub use self::core::*;
pub use self::tuning::*;
