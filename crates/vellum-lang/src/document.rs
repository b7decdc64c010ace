//! Documents and their applied language state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vellum_core::TextBuffer;

/// A style as applied to a document: colors plus decomposed font flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppliedStyle {
    /// Foreground color, `0xRRGGBB`.
    pub fg_color: Option<u32>,
    /// Background color, `0xRRGGBB`.
    pub bg_color: Option<u32>,
    /// Bold face.
    pub bold: bool,
    /// Italic face.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Background fill extends to the end of the line.
    pub eol_filled: bool,
}

/// Per-document association of a language with its applied lexer, styling,
/// keyword, and property state.
///
/// Created when a document is opened; mutated by the resolver on every
/// language (re)application; dropped with the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorLanguageBinding {
    /// Name of the applied language, empty before first application.
    pub language_name: String,
    /// Assigned lexer.
    pub lexer: String,
    /// Single-line comment token (empty when the language has none).
    pub line_comment: String,
    /// Indent with hard tabs.
    pub use_tabs: bool,
    /// Tab width in columns.
    pub tab_width: usize,
    /// Fold margin width in pixels; 0 when folding is disabled.
    pub fold_margin_width: usize,
    /// Applied styles keyed by style id.
    pub styles: BTreeMap<u32, AppliedStyle>,
    /// Applied keyword sets keyed by set id.
    pub keywords: BTreeMap<u32, String>,
    /// Applied lexer properties.
    pub properties: BTreeMap<String, String>,
}

impl EditorLanguageBinding {
    /// Drop all style, keyword, and property state.
    ///
    /// The resolver calls this before re-applying a language; assigning a
    /// lexer does not clear styling on its own.
    pub fn clear_styling(&mut self) {
        self.styles.clear();
        self.keywords.clear();
        self.properties.clear();
    }
}

/// An open document: optional on-disk path, buffer, and language binding.
pub struct Document {
    path: Option<PathBuf>,
    buffer: TextBuffer,
    binding: EditorLanguageBinding,
    /// Keep the document's current tab-use setting on language application.
    pub skip_use_tabs: bool,
    /// Keep the document's current tab width on language application.
    pub skip_tab_width: bool,
}

impl Document {
    /// Create a path-less (scratch) document.
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            path: None,
            buffer,
            binding: EditorLanguageBinding::default(),
            skip_use_tabs: false,
            skip_tab_width: false,
        }
    }

    /// Create a document backed by an on-disk path.
    pub fn with_path(buffer: TextBuffer, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new(buffer)
        }
    }

    /// The on-disk path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The file extension (without the dot), if the document has a path.
    pub fn extension(&self) -> Option<&str> {
        self.path.as_deref().and_then(|p| p.extension()).and_then(|e| e.to_str())
    }

    /// The document's text buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable access to the text buffer.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// The applied language state.
    pub fn binding(&self) -> &EditorLanguageBinding {
        &self.binding
    }

    /// Mutable access to the applied language state.
    pub fn binding_mut(&mut self) -> &mut EditorLanguageBinding {
        &mut self.binding
    }
}
