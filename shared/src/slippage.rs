//! # Slippage Tolerance
//!
//! Preset values and display helpers for the slippage control.
//!
//! Slippage is kept as the exact text the user picked or typed. There is no
//! range check; `"250"` or `"abc"` are stored as given.

/// Preset slippage values in percent, in display order.
pub const SLIPPAGE_PRESETS: &[&str] = &["0.1", "0.5", "1.0"];

/// Slippage a freshly mounted panel starts with (0.5%).
pub const DEFAULT_SLIPPAGE: &str = "0.5";

/// Whether `value` is exactly one of the preset strings.
///
/// Matching is textual: `"1"` is not the `"1.0"` preset.
pub fn is_preset(value: &str) -> bool {
    SLIPPAGE_PRESETS.contains(&value)
}

/// Format a slippage value for display, e.g. `"0.5"` -> `"0.5%"`.
pub fn percent_label(value: &str) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a_preset() {
        assert!(is_preset(DEFAULT_SLIPPAGE));
    }

    #[test]
    fn test_preset_matching_is_textual() {
        assert!(is_preset("1.0"));
        assert!(!is_preset("1"));
        assert!(!is_preset("0.50"));
        assert!(!is_preset(""));
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label("0.1"), "0.1%");
        assert_eq!(percent_label(""), "%");
    }
}
