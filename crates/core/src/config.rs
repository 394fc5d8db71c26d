use serde::{Deserialize, Serialize};

/// Language used when rendering a [`ReadabilityLabel`](crate::ReadabilityLabel) for humans.
///
/// Serialized output always uses the English label; the locale only affects
/// presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    #[default]
    English,
    Portuguese,
}

/// Unit used to measure the raw document length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharUnit {
    /// Unicode scalar values.
    Chars,
    /// UTF-16 code units, i.e. what a JavaScript `String.length` reports.
    #[default]
    Utf16,
    /// UTF-8 bytes.
    Bytes,
}

impl CharUnit {
    /// Measures `text` in this unit.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Utf16 => text.chars().map(char::len_utf16).sum(),
            Self::Bytes => text.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub locale: LabelLocale,
    pub char_unit: CharUnit,
    /// Emit a line break at block element boundaries during extraction.
    pub separate_blocks: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_units_differ_on_non_ascii() {
        let text = "ação 😀";
        assert_eq!(CharUnit::Chars.measure(text), 6);
        assert_eq!(CharUnit::Utf16.measure(text), 7);
        assert_eq!(CharUnit::Bytes.measure(text), 11);
    }

    #[test]
    fn defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.locale, LabelLocale::English);
        assert_eq!(config.char_unit, CharUnit::Utf16);
        assert!(!config.separate_blocks);
    }
}
