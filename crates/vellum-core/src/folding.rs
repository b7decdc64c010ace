//! Code folding regions and visibility queries.
//!
//! A fold region covers an inclusive line range whose first line is the fold
//! header. When collapsed, every line after the header up to and including the
//! end line is hidden from the viewport.

/// A foldable region of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// Header line number (stays visible when collapsed).
    pub start_line: usize,
    /// End line number (inclusive).
    pub end_line: usize,
    /// Whether the region is currently collapsed.
    pub is_collapsed: bool,
}

impl FoldRegion {
    /// Create an expanded region for an inclusive line range.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            is_collapsed: false,
        }
    }

    /// Check if `line` is within the region (header included).
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Manages fold regions and answers viewport visibility queries.
pub struct FoldingManager {
    /// Regions kept sorted by `(start_line, end_line)` and deduplicated.
    regions: Vec<FoldRegion>,
}

impl FoldingManager {
    /// Create an empty folding manager.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    fn normalize(&mut self) {
        self.regions.sort_by_key(|r| (r.start_line, r.end_line));
        self.regions
            .dedup_by(|a, b| a.start_line == b.start_line && a.end_line == b.end_line);
        self.regions.retain(|r| r.end_line > r.start_line);
    }

    /// Add a fold region. Degenerate regions (`end <= start`) are dropped.
    pub fn add_region(&mut self, region: FoldRegion) {
        self.regions.push(region);
        self.normalize();
    }

    /// Remove the region with the exact given bounds. Returns `true` if found.
    pub fn remove_region(&mut self, start_line: usize, end_line: usize) -> bool {
        let before = self.regions.len();
        self.regions
            .retain(|r| !(r.start_line == start_line && r.end_line == end_line));
        self.regions.len() != before
    }

    /// Collapse the region whose header is `line`. Returns `true` if found.
    pub fn collapse_at(&mut self, line: usize) -> bool {
        self.set_collapsed_at(line, true)
    }

    /// Expand the region whose header is `line`. Returns `true` if found.
    pub fn expand_at(&mut self, line: usize) -> bool {
        self.set_collapsed_at(line, false)
    }

    fn set_collapsed_at(&mut self, line: usize, collapsed: bool) -> bool {
        // Several regions can share a header; toggle all of them so
        // `collapsed_end_at` sees the widest collapsed one.
        let mut found = false;
        for region in self.regions.iter_mut() {
            if region.start_line == line {
                region.is_collapsed = collapsed;
                found = true;
            }
        }
        found
    }

    /// Returns `true` if `line` is rendered, i.e. not hidden inside any
    /// collapsed region. A collapsed region's header line stays visible.
    pub fn is_line_visible(&self, line: usize) -> bool {
        !self
            .regions
            .iter()
            .any(|r| r.is_collapsed && line > r.start_line && line <= r.end_line)
    }

    /// If a collapsed region starts at `line`, returns its last hidden line.
    ///
    /// The viewport iterator uses this to jump past all descendants of a
    /// collapsed header in one step. When several collapsed regions share the
    /// header, the widest one wins.
    pub fn collapsed_end_at(&self, line: usize) -> Option<usize> {
        self.regions
            .iter()
            .filter(|r| r.is_collapsed && r.start_line == line)
            .map(|r| r.end_line)
            .max()
    }

    /// All regions, sorted.
    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    /// Remove all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Shift regions after a line insertion/deletion at `edit_line`.
    ///
    /// `line_delta` is positive for inserted lines, negative for deleted ones.
    /// Regions that shrink to a single line are dropped.
    pub fn apply_line_delta(&mut self, edit_line: usize, line_delta: isize) {
        if line_delta == 0 {
            return;
        }

        let shift = |line: usize| -> usize {
            if line < edit_line {
                line
            } else if line_delta >= 0 {
                line + line_delta as usize
            } else {
                line.saturating_sub((-line_delta) as usize).max(edit_line)
            }
        };

        for region in self.regions.iter_mut() {
            region.start_line = shift(region.start_line);
            region.end_line = shift(region.end_line);
        }
        self.normalize();
    }

    /// Clamp all regions to the current buffer line count.
    pub fn clamp_to_line_count(&mut self, line_count: usize) {
        let max_line = line_count.saturating_sub(1);
        for region in self.regions.iter_mut() {
            region.start_line = region.start_line.min(max_line);
            region.end_line = region.end_line.min(max_line);
        }
        self.normalize();
    }
}

impl Default for FoldingManager {
    fn default() -> Self {
        Self::new()
    }
}
