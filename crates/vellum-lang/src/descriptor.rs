//! The language descriptor model.
//!
//! A [`LanguageDescriptor`] captures everything the editor derives from a
//! language: lexer assignment, comment token, tab/indent policy, per-style
//! coloring, keyword sets, and named properties. Descriptors are deserialized
//! from the declarative language table and are read-only afterwards.

use serde::Deserialize;
use std::collections::BTreeMap;

fn default_tab_width() -> usize {
    4
}

/// Whether indentation uses hard tabs or spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPolicy {
    /// Indent with hard tabs (the default).
    #[default]
    Tabs,
    /// Indent with spaces.
    Spaces,
}

/// Raw style entry: colors plus an optional packed font-style bitmask.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleDefinition {
    /// Foreground color, `0xRRGGBB`.
    #[serde(default)]
    pub fg_color: Option<u32>,
    /// Background color, `0xRRGGBB`.
    #[serde(default)]
    pub bg_color: Option<u32>,
    /// Packed font flags; see [`FontFlags::from_bits`].
    #[serde(default)]
    pub font_style: Option<u8>,
}

/// Independent font attribute flags decomposed from a packed bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontFlags {
    /// Bold face.
    pub bold: bool,
    /// Italic face.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Background fill extends to the end of the line.
    pub eol_filled: bool,
}

impl FontFlags {
    /// Decompose a packed bitmask: bit 1 = bold, bit 2 = italic, bit 4 =
    /// underline, bit 8 = eol-filled.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            bold: bits & 1 == 1,
            italic: bits & 2 == 2,
            underline: bits & 4 == 4,
            eol_filled: bits & 8 == 8,
        }
    }
}

/// One language's declarative configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageDescriptor {
    /// Unique language name (the table key).
    pub name: String,
    /// Lexer assigned to documents of this language.
    pub lexer: String,
    /// Single-line comment token (e.g. `//`, `#`).
    #[serde(default)]
    pub line_comment: Option<String>,
    /// Hard tabs vs spaces; defaults to tabs.
    #[serde(default)]
    pub tab_policy: TabPolicy,
    /// Tab width in columns; defaults to 4.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    /// Suppress the fold margin for this language.
    #[serde(default)]
    pub disable_fold_margin: bool,
    /// File extensions (without the dot) used for file-type detection.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Optional regex matched against the first line of a content sample
    /// (shebangs, markup preambles) for path-less detection.
    #[serde(default)]
    pub first_line_match: Option<String>,
    /// Style entries keyed by style id.
    #[serde(default)]
    pub styles: BTreeMap<u32, StyleDefinition>,
    /// Keyword sets keyed by set id.
    #[serde(default)]
    pub keywords: BTreeMap<u32, String>,
    /// Free-form lexer properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_flags_decompose_bitwise() {
        let flags = FontFlags::from_bits(5); // bold + underline
        assert!(flags.bold);
        assert!(!flags.italic);
        assert!(flags.underline);
        assert!(!flags.eol_filled);

        assert_eq!(FontFlags::from_bits(0), FontFlags::default());
        let all = FontFlags::from_bits(15);
        assert!(all.bold && all.italic && all.underline && all.eol_filled);
    }

    #[test]
    fn descriptor_defaults_from_minimal_yaml() {
        let descriptor: LanguageDescriptor =
            serde_yaml::from_str("name: Text\nlexer: null_lexer\n").unwrap();
        assert_eq!(descriptor.tab_policy, TabPolicy::Tabs);
        assert_eq!(descriptor.tab_width, 4);
        assert!(!descriptor.disable_fold_margin);
        assert!(descriptor.extensions.is_empty());
        assert!(descriptor.styles.is_empty());
    }
}
