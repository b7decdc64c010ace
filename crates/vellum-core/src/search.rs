//! Plain-text search over a `&str` in character offsets.
//!
//! The query is escaped and compiled into a regex, which keeps the scan
//! Unicode-correct without a hand-rolled matcher. All public inputs/outputs
//! are **character offsets** (not byte offsets).

use regex::{Regex, RegexBuilder};

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// A match expressed as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl SearchMatch {
    /// Length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Search errors.
#[derive(Debug)]
pub enum SearchError {
    /// The escaped query failed to compile.
    InvalidQuery(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(err) => write!(f, "Invalid query: {}", err),
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug)]
struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

fn compile_query(query: &str, options: SearchOptions) -> Result<Regex, SearchError> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(SearchError::InvalidQuery)
}

/// Find the next occurrence of `query` in `text` within the half-open
/// character range `[from_char, to_char)`.
///
/// Returns `Ok(None)` when there is no further occurrence fully inside the
/// range (or if `query` is empty).
pub fn find_in_range(
    text: &str,
    query: &str,
    options: SearchOptions,
    from_char: usize,
    to_char: usize,
) -> Result<Option<SearchMatch>, SearchError> {
    if query.is_empty() || from_char >= to_char {
        return Ok(None);
    }

    let re = compile_query(query, options)?;
    let index = CharIndex::new(text);

    let start_byte = index.char_to_byte(from_char.min(index.char_count()));
    let Some(m) = re.find_at(text, start_byte) else {
        return Ok(None);
    };

    let candidate = SearchMatch {
        start: index.byte_to_char(m.start()),
        end: index.byte_to_char(m.end()),
    };

    if candidate.is_empty() || candidate.end > to_char.min(index.char_count()) {
        return Ok(None);
    }

    Ok(Some(candidate))
}
