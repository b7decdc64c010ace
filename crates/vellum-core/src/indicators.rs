//! Indicator channels (overlay annotations).
//!
//! An indicator is a named visual-highlight channel independent of syntax
//! styles, used for transient markup such as link underlines. Each channel
//! carries a base style/color, a hover style/color, and a set of
//! non-overlapping `[start, end)` character ranges over the buffer.

/// Handle to an allocated indicator channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndicatorId(pub u32);

/// Visual rendering style for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// Plain single underline.
    #[default]
    Plain,
    /// Dotted underline.
    Dots,
}

/// An indicator channel and its current ranges.
#[derive(Debug, Clone)]
pub struct Indicator {
    name: String,
    /// Base rendering style.
    pub style: IndicatorStyle,
    /// Base color, `0xRRGGBB`.
    pub fore: u32,
    /// Style used while the pointer hovers a range.
    pub hover_style: IndicatorStyle,
    /// Hover color, `0xRRGGBB`.
    pub hover_fore: u32,
    /// Filled ranges, sorted by start, non-overlapping.
    ranges: Vec<(usize, usize)>,
}

impl Indicator {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            style: IndicatorStyle::Plain,
            fore: 0x000000,
            hover_style: IndicatorStyle::Plain,
            hover_fore: 0x000000,
            ranges: Vec::new(),
        }
    }

    /// The name the channel was allocated under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currently filled ranges, sorted and non-overlapping.
    pub fn ranges(&self) -> &[(usize, usize)] {
        &self.ranges
    }

    /// Fill the half-open range `[start, start + length)`.
    ///
    /// Overlapping or adjacent ranges are merged to keep the non-overlap
    /// invariant. Zero-length fills are ignored.
    pub fn fill_range(&mut self, start: usize, length: usize) {
        if length == 0 {
            return;
        }
        let end = start + length;
        self.ranges.push((start, end));
        self.ranges.sort_by_key(|&(s, _)| s);

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(self.ranges.len());
        for &(s, e) in &self.ranges {
            match merged.last_mut() {
                Some(last) if s <= last.1 => last.1 = last.1.max(e),
                _ => merged.push((s, e)),
            }
        }
        self.ranges = merged;
    }

    /// Clear every filled range.
    pub fn clear_all(&mut self) {
        self.ranges.clear();
    }

    /// The range containing `position`, if any.
    pub fn range_at(&self, position: usize) -> Option<(usize, usize)> {
        self.ranges
            .iter()
            .copied()
            .find(|&(s, e)| position >= s && position < e)
    }
}

/// Owns the indicator channels of one view.
#[derive(Debug, Default)]
pub struct IndicatorSet {
    indicators: Vec<Indicator>,
}

impl IndicatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a channel under `name`, or return the existing allocation.
    pub fn allocate(&mut self, name: &str) -> IndicatorId {
        if let Some(idx) = self.indicators.iter().position(|i| i.name == name) {
            return IndicatorId(idx as u32);
        }
        self.indicators.push(Indicator::new(name));
        IndicatorId((self.indicators.len() - 1) as u32)
    }

    /// Borrow a channel.
    pub fn get(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.get(id.0 as usize)
    }

    /// Mutably borrow a channel.
    pub fn get_mut(&mut self, id: IndicatorId) -> Option<&mut Indicator> {
        self.indicators.get_mut(id.0 as usize)
    }

    /// Ids of every channel with a range containing `position`.
    pub fn ids_at(&self, position: usize) -> Vec<IndicatorId> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, ind)| ind.range_at(position).is_some())
            .map(|(idx, _)| IndicatorId(idx as u32))
            .collect()
    }
}
