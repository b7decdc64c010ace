//! Language table loading.
//!
//! The table is a declarative YAML document listing [`LanguageDescriptor`]s.
//! It is loaded once at startup (or on explicit reload) and is read-only
//! afterwards. Declaration order is preserved: when two languages claim the
//! same file extension, the first declared wins.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::LanguageDescriptor;

/// Errors produced while loading the language table.
///
/// A malformed table is a startup-fatal configuration error; callers report
/// it to the user rather than falling back silently.
#[derive(Debug, Error)]
pub enum LanguageConfigError {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two languages were declared under the same name.
    #[error("duplicate language name '{0}'")]
    DuplicateName(String),

    /// A `first_line_match` pattern failed to compile.
    #[error("bad first_line_match for '{name}': {message}")]
    BadSniffPattern {
        /// The declaring language.
        name: String,
        /// Compiler message.
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawTable {
    languages: Vec<LanguageDescriptor>,
}

/// The loaded, immutable language table.
#[derive(Debug)]
pub struct LanguageTable {
    languages: Vec<LanguageDescriptor>,
    by_name: HashMap<String, usize>,
    /// Compiled `first_line_match` patterns, parallel to `languages`.
    sniffers: Vec<Option<Regex>>,
}

impl LanguageTable {
    /// Parse a table from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, LanguageConfigError> {
        let raw: RawTable = serde_yaml::from_str(text)?;

        let mut by_name = HashMap::with_capacity(raw.languages.len());
        let mut sniffers = Vec::with_capacity(raw.languages.len());

        for (idx, lang) in raw.languages.iter().enumerate() {
            if by_name.insert(lang.name.clone(), idx).is_some() {
                return Err(LanguageConfigError::DuplicateName(lang.name.clone()));
            }

            let sniffer = match &lang.first_line_match {
                Some(pattern) => Some(Regex::new(pattern).map_err(|err| {
                    LanguageConfigError::BadSniffPattern {
                        name: lang.name.clone(),
                        message: err.to_string(),
                    }
                })?),
                None => None,
            };
            sniffers.push(sniffer);
        }

        Ok(Self {
            languages: raw.languages,
            by_name,
            sniffers,
        })
    }

    /// Load a table from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LanguageConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Look up a language by name.
    pub fn get(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.by_name.get(name).map(|&idx| &self.languages[idx])
    }

    /// Languages in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages.iter()
    }

    /// Languages paired with their compiled first-line patterns, in
    /// declaration order.
    pub(crate) fn iter_with_sniffers(
        &self,
    ) -> impl Iterator<Item = (&LanguageDescriptor, Option<&Regex>)> {
        self.languages
            .iter()
            .zip(self.sniffers.iter().map(|s| s.as_ref()))
    }

    /// All language names, sorted case-insensitively for UI listings.
    pub fn names_sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.languages.iter().map(|l| l.name.clone()).collect();
        names.sort_by_key(|n| n.to_lowercase());
        names
    }

    /// Number of declared languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` if the table declares no languages.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
