#![warn(missing_docs)]
//! `vellum-lang` - declarative language configuration for vellum.
//!
//! Loads a YAML language table into [`LanguageDescriptor`]s, detects a
//! document's language from its file extension or leading content, and
//! applies the descriptor (lexer, comment token, tabs, styles, keywords,
//! properties) onto the document's [`EditorLanguageBinding`]. The table
//! replaces the original design's embedded scripting engine with a static
//! configuration loader; live extensibility goes through the resolver's
//! subscription API instead.
//!
//! ```rust
//! use vellum_core::TextBuffer;
//! use vellum_lang::{Document, LanguageResolver, LanguageTable};
//!
//! let table = LanguageTable::from_yaml(
//!     "languages:\n  - { name: Python, lexer: python, extensions: [py] }\n",
//! )
//! .unwrap();
//! let mut resolver = LanguageResolver::new(table);
//!
//! let mut doc = Document::with_path(TextBuffer::from_text("x = 1\n"), "demo.py");
//! let name = resolver.detect_language(&doc).to_string();
//! assert_eq!(name, "Python");
//!
//! resolver.apply_language(&mut doc, &name);
//! assert_eq!(doc.binding().lexer, "python");
//! ```

pub mod descriptor;
pub mod document;
pub mod resolver;
pub mod table;

pub use descriptor::{FontFlags, LanguageDescriptor, StyleDefinition, TabPolicy};
pub use document::{AppliedStyle, Document, EditorLanguageBinding};
pub use resolver::{
    CONTENT_SAMPLE_BYTES, DEFAULT_LANGUAGE, LanguageChange, LanguageChangeCallback,
    LanguageResolver,
};
pub use table::{LanguageConfigError, LanguageTable};
