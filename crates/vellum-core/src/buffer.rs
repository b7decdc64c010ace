//! Rope-backed text buffer.
//!
//! Provides O(log n) line access over a mutable character sequence. All public
//! offsets are **character offsets** (Unicode scalar values), matching the rest
//! of the kernel; line numbers are 0-based logical lines.

use ropey::Rope;

/// A mutable text buffer with line-aware addressing.
///
/// The buffer stores text only; fold state, wrap counts, and indicator
/// annotations live on the owning [`EditorView`](crate::EditorView).
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from initial text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the buffer contains no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of logical lines.
    ///
    /// A trailing newline produces a final empty line, consistent with rope
    /// semantics.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Character offset of the first character of `line`.
    ///
    /// Clamps to the end of the buffer for out-of-range lines.
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// Character offset one past the last content character of `line`,
    /// excluding the line terminator.
    pub fn line_end(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        // Strip the terminator ("\n" or "\r\n") from the span.
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        start + len
    }

    /// The text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> String {
        let start = self.line_start(line);
        let end = self.line_end(line);
        self.text_range(start, end)
    }

    /// Extract the text in the half-open character range `[start, end)`.
    ///
    /// Offsets are clamped to the buffer length.
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Single-character lookup at a character offset.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset >= self.rope.len_chars() {
            return None;
        }
        Some(self.rope.char(offset))
    }

    /// The logical line containing the character offset `offset`.
    pub fn line_of_char(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    /// Up to `max_bytes` bytes from the start of the buffer, cut at a
    /// character boundary. Used for content sniffing.
    pub fn sample_head(&self, max_bytes: usize) -> String {
        let mut out = String::new();
        for ch in self.rope.chars() {
            if out.len() + ch.len_utf8() > max_bytes {
                break;
            }
            out.push(ch);
        }
        out
    }

    /// Insert `text` at a character offset (clamped to the buffer length).
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
    }

    /// Delete the half-open character range `[start, end)` (clamped).
    pub fn delete(&mut self, start: usize, end: usize) {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_offsets_exclude_terminator() {
        let buffer = TextBuffer::from_text("abc\ndef\r\nghi");

        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_start(0), 0);
        assert_eq!(buffer.line_end(0), 3);
        assert_eq!(buffer.line_start(1), 4);
        assert_eq!(buffer.line_end(1), 7);
        assert_eq!(buffer.line_text(1), "def");
        assert_eq!(buffer.line_text(2), "ghi");
    }

    #[test]
    fn text_range_clamps() {
        let buffer = TextBuffer::from_text("hello");
        assert_eq!(buffer.text_range(1, 4), "ell");
        assert_eq!(buffer.text_range(3, 100), "lo");
        assert_eq!(buffer.text_range(4, 2), "");
    }

    #[test]
    fn char_at_and_line_of_char() {
        let buffer = TextBuffer::from_text("ab\ncd");
        assert_eq!(buffer.char_at(3), Some('c'));
        assert_eq!(buffer.char_at(99), None);
        assert_eq!(buffer.line_of_char(3), 1);
    }

    #[test]
    fn sample_head_respects_char_boundaries() {
        let buffer = TextBuffer::from_text("ab你好");
        // '你' is 3 bytes; a 4-byte budget cannot include it.
        assert_eq!(buffer.sample_head(4), "ab");
        assert_eq!(buffer.sample_head(5), "ab你");
    }

    #[test]
    fn edits_shift_content() {
        let mut buffer = TextBuffer::from_text("ac");
        buffer.insert(1, "b");
        assert_eq!(buffer.text_range(0, 3), "abc");
        buffer.delete(0, 1);
        assert_eq!(buffer.text_range(0, 2), "bc");
    }
}
