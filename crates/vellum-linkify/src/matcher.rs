//! URL-shaped substring matching over one line of text.

use regex::Regex;

/// The fixed URL grammar: `http` or `https` scheme, `://`, 1-256 characters
/// of a restricted URL-safe alphabet up to a `.` plus 1-6 alphanumeric
/// host/TLD characters, then any number of additional path characters. The
/// scheme match is case-sensitive.
const URL_PATTERN: &str =
    r"\bhttps?://[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*";

/// Scans a line of text for URL-shaped substrings.
///
/// Stateless across scans: the result is a pure function of the line text.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    regex: Regex,
}

impl UrlMatcher {
    /// Create a matcher with the fixed grammar compiled once.
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant; failure would be a bug.
            regex: Regex::new(URL_PATTERN).expect("URL pattern must compile"),
        }
    }

    /// Distinct URL-shaped substrings of `line`, in order of first
    /// appearance. Duplicates collapse to one entry; empties never occur.
    pub fn matches(&self, line: &str) -> Vec<String> {
        let mut texts: Vec<String> = Vec::new();
        for m in self.regex.find_iter(line) {
            let text = m.as_str();
            if !texts.iter().any(|t| t == text) {
                texts.push(text.to_string());
            }
        }
        texts
    }
}

impl Default for UrlMatcher {
    fn default() -> Self {
        Self::new()
    }
}
