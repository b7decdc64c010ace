//! Display-width layout helpers.
//!
//! Computes how many display rows a logical line occupies for a given viewport
//! width, based on UAX #11 character cell widths with tab-stop expansion. The
//! viewport iterator uses these wrap counts to budget visible rows.

use unicode_width::UnicodeWidthChar;

/// Default tab width (in cells) used when a caller does not specify one.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Visual width of a character (based on UAX #11).
///
/// Narrow characters yield 1, wide (CJK/fullwidth) characters 2, zero-width
/// characters 0.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Visual width (in cells) for a character at a specific cell offset within
/// the line. `'\t'` advances to the next tab stop based on `tab_width`.
pub fn cell_width_at(ch: char, cell_offset_in_line: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        tab_width - (cell_offset_in_line % tab_width)
    } else {
        char_width(ch)
    }
}

/// Number of display rows `text` occupies when soft-wrapped at
/// `viewport_width` cells.
///
/// A `viewport_width` of 0 disables wrapping (every line is one row). Wrapping
/// is at character boundaries; a double-width character that does not fit in
/// the remaining cells wraps intact to the next row.
pub fn wrap_count(text: &str, viewport_width: usize, tab_width: usize) -> usize {
    if viewport_width == 0 {
        return 1;
    }

    let mut rows = 1usize;
    let mut x_in_row = 0usize;
    let mut x_in_line = 0usize;

    for ch in text.chars() {
        let ch_width = cell_width_at(ch, x_in_line, tab_width);

        if x_in_row + ch_width > viewport_width {
            rows += 1;
            x_in_row = 0;
        }

        x_in_row = x_in_row.saturating_add(ch_width);
        x_in_line = x_in_line.saturating_add(ch_width);
    }

    // An exact fit does not open an empty continuation row.
    rows
}
