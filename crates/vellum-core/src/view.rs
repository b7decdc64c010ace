//! The editor view facade.
//!
//! [`EditorView`] combines the text buffer, fold state, wrap layout, scroll
//! viewport, and indicator channels behind one API. Decorators read positions
//! and text through it and write indicator annotations back onto it; the view
//! itself never renders.

use crate::buffer::TextBuffer;
use crate::folding::FoldingManager;
use crate::indicators::{Indicator, IndicatorId, IndicatorSet};
use crate::layout::{self, DEFAULT_TAB_WIDTH};
use crate::search::{self, SearchMatch, SearchOptions};

/// The currently visible span of display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible logical line.
    pub first_line: usize,
    /// Number of display rows on screen.
    pub rows_on_screen: usize,
}

/// A headless editor view over a [`TextBuffer`].
pub struct EditorView {
    buffer: TextBuffer,
    folding: FoldingManager,
    indicators: IndicatorSet,
    viewport: Viewport,
    /// Viewport width in cells; 0 disables soft wrapping.
    viewport_width: usize,
    tab_width: usize,
}

impl EditorView {
    /// Create a view over `text` with the given viewport width (in cells).
    pub fn new(text: &str, viewport_width: usize) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            folding: FoldingManager::new(),
            indicators: IndicatorSet::new(),
            viewport: Viewport {
                first_line: 0,
                rows_on_screen: 0,
            },
            viewport_width,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Fold state.
    pub fn folding(&self) -> &FoldingManager {
        &self.folding
    }

    /// Mutable fold state.
    pub fn folding_mut(&mut self) -> &mut FoldingManager {
        &mut self.folding
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Scroll so that `first_line` is the first visible logical line.
    pub fn scroll_to(&mut self, first_line: usize) {
        self.viewport.first_line = first_line.min(self.buffer.line_count().saturating_sub(1));
    }

    /// Set the number of display rows on screen.
    pub fn set_rows_on_screen(&mut self, rows: usize) {
        self.viewport.rows_on_screen = rows;
    }

    /// Set the viewport width in cells (0 disables soft wrapping).
    pub fn set_viewport_width(&mut self, width: usize) {
        self.viewport_width = width;
    }

    /// Set the tab width used for wrap-count calculation.
    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width.max(1);
    }

    /// Number of display rows `line` occupies under the current width.
    pub fn wrap_count(&self, line: usize) -> usize {
        layout::wrap_count(
            &self.buffer.line_text(line),
            self.viewport_width,
            self.tab_width,
        )
    }

    /// The ordered sequence of logical lines actually rendered on screen.
    ///
    /// Lines hidden inside collapsed folds are skipped without consuming row
    /// budget; a collapsed fold header jumps straight past its descendants;
    /// wrapped lines consume their full wrap count from the budget. The line
    /// partially visible at the bottom edge still counts as rendered, so the
    /// budget runs to zero inclusively. A zero-height viewport yields an
    /// empty sequence.
    pub fn visible_lines(&self) -> Vec<usize> {
        if self.viewport.rows_on_screen == 0 {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut budget = self.viewport.rows_on_screen as isize;
        let mut line = self.viewport.first_line;
        let line_count = self.buffer.line_count();

        while budget >= 0 && line < line_count {
            if !self.folding.is_line_visible(line) {
                line += 1;
                continue;
            }

            lines.push(line);
            budget -= self.wrap_count(line) as isize;

            match self.folding.collapsed_end_at(line) {
                Some(end) => line = end + 1,
                None => line += 1,
            }
        }

        lines
    }

    /// Insert `text` at a character offset, shifting fold regions.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let line_delta = text.matches('\n').count() as isize;
        let edit_line = self.buffer.line_of_char(offset);
        self.buffer.insert(offset, text);
        if line_delta != 0 {
            self.folding.apply_line_delta(edit_line + 1, line_delta);
        }
    }

    /// Delete the half-open character range `[start, end)`, shifting fold
    /// regions and clamping them to the new line count.
    pub fn delete(&mut self, start: usize, end: usize) {
        let removed = self
            .buffer
            .line_of_char(end)
            .saturating_sub(self.buffer.line_of_char(start));
        let edit_line = self.buffer.line_of_char(start);
        self.buffer.delete(start, end);
        if removed > 0 {
            self.folding
                .apply_line_delta(edit_line + 1, -(removed as isize));
        }
        self.folding.clamp_to_line_count(self.buffer.line_count());
    }

    /// Find the next occurrence of `query` within `[from, to)` (absolute
    /// character offsets), case-sensitively.
    pub fn find_text(&self, query: &str, from: usize, to: usize) -> Option<SearchMatch> {
        let window = self.buffer.text_range(from, to);
        let found = search::find_in_range(
            &window,
            query,
            SearchOptions::default(),
            0,
            window.chars().count(),
        )
        .ok()
        .flatten()?;
        Some(SearchMatch {
            start: found.start + from,
            end: found.end + from,
        })
    }

    /// Allocate (or look up) an indicator channel by name.
    pub fn allocate_indicator(&mut self, name: &str) -> IndicatorId {
        self.indicators.allocate(name)
    }

    /// Borrow an indicator channel.
    pub fn indicator(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.get(id)
    }

    /// Mutably borrow an indicator channel.
    pub fn indicator_mut(&mut self, id: IndicatorId) -> Option<&mut Indicator> {
        self.indicators.get_mut(id)
    }

    /// Ids of all indicator channels annotating `position`.
    pub fn indicators_at(&self, position: usize) -> Vec<IndicatorId> {
        self.indicators.ids_at(position)
    }
}
