//! Language detection and application.
//!
//! The resolver owns the loaded [`LanguageTable`] and answers two questions:
//! which language a document is in (by extension, falling back to content
//! sniffing), and what applying that language to the document means.

use tracing::{debug, info};
use vellum_core::TextBuffer;

use crate::descriptor::{FontFlags, TabPolicy};
use crate::document::{AppliedStyle, Document};
use crate::table::LanguageTable;

/// The fallback language for undetected documents.
pub const DEFAULT_LANGUAGE: &str = "Text";

/// How many bytes of the buffer head content sniffing samples.
pub const CONTENT_SAMPLE_BYTES: usize = 64;

/// Fold margin width (pixels) for languages with folding enabled.
const FOLD_MARGIN_WIDTH: usize = 16;

/// Notification payload delivered after a language is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChange {
    /// The applied language.
    pub language_name: String,
    /// The lexer now assigned to the document.
    pub lexer: String,
}

/// Subscriber callback for language-changed notifications.
pub type LanguageChangeCallback = Box<dyn FnMut(&LanguageChange) + Send>;

/// Detects and applies languages from a loaded table.
pub struct LanguageResolver {
    table: LanguageTable,
    callbacks: Vec<LanguageChangeCallback>,
}

impl LanguageResolver {
    /// Create a resolver over a loaded table.
    pub fn new(table: LanguageTable) -> Self {
        Self {
            table,
            callbacks: Vec::new(),
        }
    }

    /// The underlying table.
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    /// Subscribe to language-changed notifications (UI chrome, status bars).
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&LanguageChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Resolve a file extension (without the dot, case-sensitive exact
    /// match) to a language name.
    ///
    /// Languages are tried in declaration order, so when two languages claim
    /// the same extension the first declared wins. Unknown extensions
    /// resolve to [`DEFAULT_LANGUAGE`].
    pub fn resolve_by_extension(&self, extension: &str) -> &str {
        for language in self.table.iter() {
            if language.extensions.iter().any(|e| e == extension) {
                return &language.name;
            }
        }
        DEFAULT_LANGUAGE
    }

    /// Resolve a language from the buffer's leading content.
    ///
    /// Samples up to [`CONTENT_SAMPLE_BYTES`] bytes and matches each
    /// language's `first_line_match` pattern against the sample's first line
    /// (shebangs, markup preambles), in declaration order.
    pub fn resolve_by_contents(&self, buffer: &TextBuffer) -> &str {
        if buffer.is_empty() {
            return DEFAULT_LANGUAGE;
        }

        let sample = buffer.sample_head(CONTENT_SAMPLE_BYTES);
        let first_line = sample.lines().next().unwrap_or("");

        for (language, sniffer) in self.table.iter_with_sniffers() {
            if let Some(re) = sniffer
                && re.is_match(first_line)
            {
                return &language.name;
            }
        }
        DEFAULT_LANGUAGE
    }

    /// Detect a document's language.
    ///
    /// Documents with an on-disk path try extension resolution first and
    /// fall back to content resolution when that yields the default;
    /// path-less documents go straight to content resolution.
    pub fn detect_language(&self, document: &Document) -> &str {
        let mut name = DEFAULT_LANGUAGE;

        if let Some(extension) = document.extension() {
            name = self.resolve_by_extension(extension);
        }

        if name == DEFAULT_LANGUAGE {
            name = self.resolve_by_contents(document.buffer());
        }

        debug!(language = name, "language detected");
        name
    }

    /// Apply `language_name` to a document.
    ///
    /// Clears all prior style/keyword/property state, assigns the lexer and
    /// comment token, applies tab settings (honoring the document's skip
    /// markers), fold margin, styles with font-flag decomposition, keyword
    /// sets, and properties; `fold=1` and `fold.compact=0` are forced
    /// unconditionally. Subscribers are notified afterwards.
    ///
    /// # Panics
    ///
    /// Panics when `language_name` is not in the table; the table is
    /// controlled input, so an unknown name is a programming error.
    pub fn apply_language(&mut self, document: &mut Document, language_name: &str) {
        let descriptor = self
            .table
            .get(language_name)
            .unwrap_or_else(|| panic!("unknown language '{language_name}' requested"));

        let skip_use_tabs = document.skip_use_tabs;
        let skip_tab_width = document.skip_tab_width;
        let binding = document.binding_mut();

        // Assigning a lexer does not clear styling on its own.
        binding.clear_styling();

        binding.language_name = descriptor.name.clone();
        binding.lexer = descriptor.lexer.clone();
        binding.line_comment = descriptor.line_comment.clone().unwrap_or_default();

        if !skip_use_tabs {
            binding.use_tabs = descriptor.tab_policy == TabPolicy::Tabs;
        }
        if !skip_tab_width {
            binding.tab_width = descriptor.tab_width;
        }

        binding.fold_margin_width = if descriptor.disable_fold_margin {
            0
        } else {
            FOLD_MARGIN_WIDTH
        };

        for (&id, style) in &descriptor.styles {
            let flags = style.font_style.map(FontFlags::from_bits).unwrap_or_default();
            binding.styles.insert(
                id,
                AppliedStyle {
                    fg_color: style.fg_color,
                    bg_color: style.bg_color,
                    bold: flags.bold,
                    italic: flags.italic,
                    underline: flags.underline,
                    eol_filled: flags.eol_filled,
                },
            );
        }

        for (&id, keywords) in &descriptor.keywords {
            binding.keywords.insert(id, keywords.clone());
        }

        for (key, value) in &descriptor.properties {
            binding.properties.insert(key.clone(), value.clone());
        }

        binding
            .properties
            .insert("fold".to_string(), "1".to_string());
        binding
            .properties
            .insert("fold.compact".to_string(), "0".to_string());

        let change = LanguageChange {
            language_name: descriptor.name.clone(),
            lexer: descriptor.lexer.clone(),
        };
        info!(language = %change.language_name, lexer = %change.lexer, "language applied");

        for callback in self.callbacks.iter_mut() {
            callback(&change);
        }
    }
}
