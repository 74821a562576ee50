//! Tuning resolution for the Guitar Tab Editor
//!
//! Maps a tuning selection (preset name or free-form custom string) to six
//! note labels in storage order (lowest string first) and handles the
//! storage-to-display reordering used by conventional tab layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tuning selection, either a preset or a free-form custom string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum TuningSpec {
    Standard,
    DropD,
    HalfStepDown,
    /// Whitespace-separated note names, low string first.
    Custom(String),
}

/// Tuning resolution failure. The `Display` text is the advisory warning
/// shown to the user; rendering falls back to standard tuning.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum TuningError {
    #[error("Custom tuning must be 6 notes like: E A D G B e")]
    InvalidCustom,
}

/// Display-order labels (highest string first) used when a custom tuning
/// fails to resolve.
pub fn fallback_display_tuning() -> Vec<String> {
    ["e", "B", "G", "D", "A", "E"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Reverse a storage-order tuning (low to high) into display order
/// (top tab line first, i.e. highest string first).
pub fn to_display_order(storage: &[String]) -> Vec<String> {
    storage.iter().rev().cloned().collect()
}

impl TuningSpec {
    /// Build a spec from the shell's tuning select value. Unknown names map
    /// to standard; `custom_text` is only consulted for `"custom"`.
    pub fn from_shell(name: &str, custom_text: &str) -> Self {
        match name {
            "dropd" => TuningSpec::DropD,
            "halfdown" => TuningSpec::HalfStepDown,
            "custom" => TuningSpec::Custom(custom_text.to_string()),
            _ => TuningSpec::Standard,
        }
    }

    /// Resolve to six note labels in storage order (low string first).
    ///
    /// A custom tuning must contain exactly 6 whitespace-separated tokens;
    /// anything else resolves to `TuningError::InvalidCustom`.
    pub fn resolve(&self) -> Result<Vec<String>, TuningError> {
        let preset: &[&str; 6] = match self {
            TuningSpec::Standard => &["E", "A", "D", "G", "B", "e"],
            TuningSpec::DropD => &["D", "A", "D", "G", "B", "e"],
            TuningSpec::HalfStepDown => &["Eb", "Ab", "Db", "Gb", "Bb", "eb"],
            TuningSpec::Custom(text) => {
                let parts: Vec<String> = text
                    .split_whitespace()
                    .map(|s| s.to_string())
                    .collect();
                if parts.len() != 6 {
                    return Err(TuningError::InvalidCustom);
                }
                return Ok(parts);
            }
        };
        Ok(preset.iter().map(|s| s.to_string()).collect())
    }
}

impl Default for TuningSpec {
    fn default() -> Self {
        TuningSpec::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_preset() {
        let tuning = TuningSpec::Standard.resolve().unwrap();
        assert_eq!(tuning, vec!["E", "A", "D", "G", "B", "e"]);
    }

    #[test]
    fn test_drop_d_preset() {
        let tuning = TuningSpec::DropD.resolve().unwrap();
        assert_eq!(tuning[0], "D");
        assert_eq!(tuning[5], "e");
    }

    #[test]
    fn test_half_step_down_preset() {
        let tuning = TuningSpec::HalfStepDown.resolve().unwrap();
        assert_eq!(tuning, vec!["Eb", "Ab", "Db", "Gb", "Bb", "eb"]);
    }

    #[test]
    fn test_custom_six_notes() {
        let spec = TuningSpec::Custom("E A D G B e".to_string());
        assert_eq!(
            spec.resolve().unwrap(),
            vec!["E", "A", "D", "G", "B", "e"]
        );
    }

    #[test]
    fn test_custom_extra_whitespace() {
        let spec = TuningSpec::Custom("  D  A   D  G  B   e ".to_string());
        assert_eq!(
            spec.resolve().unwrap(),
            vec!["D", "A", "D", "G", "B", "e"]
        );
    }

    #[test]
    fn test_custom_wrong_count() {
        let spec = TuningSpec::Custom("E A D G".to_string());
        let err = spec.resolve().unwrap_err();
        assert_eq!(err, TuningError::InvalidCustom);
        assert_eq!(
            err.to_string(),
            "Custom tuning must be 6 notes like: E A D G B e"
        );
    }

    #[test]
    fn test_display_order_reverses_storage() {
        let storage: Vec<String> = ["E", "A", "D", "G", "B", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let display = to_display_order(&storage);
        assert_eq!(display, vec!["e", "B", "G", "D", "A", "E"]);
    }

    #[test]
    fn test_from_shell_names() {
        assert_eq!(TuningSpec::from_shell("standard", ""), TuningSpec::Standard);
        assert_eq!(TuningSpec::from_shell("dropd", ""), TuningSpec::DropD);
        assert_eq!(
            TuningSpec::from_shell("halfdown", ""),
            TuningSpec::HalfStepDown
        );
        assert_eq!(
            TuningSpec::from_shell("custom", "D A D F# A D"),
            TuningSpec::Custom("D A D F# A D".to_string())
        );
        // Unknown select values fall back to standard
        assert_eq!(TuningSpec::from_shell("bogus", ""), TuningSpec::Standard);
    }
}
