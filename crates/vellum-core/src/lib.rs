#![warn(missing_docs)]
//! `vellum-core` - headless buffer/view kernel.
//!
//! # Overview
//!
//! `vellum-core` provides the buffer-and-view substrate that decorators and
//! language tooling operate on: a rope-backed text buffer, code folding,
//! wrap-count layout, a scroll viewport, named indicator channels, and
//! in-range text search. It does not render; a host supplies the screen and
//! feeds change notifications back in as [`EditorEvent`]s.
//!
//! # Quick start
//!
//! ```rust
//! use vellum_core::EditorView;
//!
//! let mut view = EditorView::new("fn main() {}\nsee https://example.com\n", 80);
//! view.set_rows_on_screen(10);
//!
//! let id = view.allocate_indicator("links");
//! view.indicator_mut(id).unwrap().fill_range(16, 23);
//! assert_eq!(view.indicators_at(20), vec![id]);
//! ```
//!
//! # Modules
//!
//! - [`buffer`] - rope-backed text storage with line-aware addressing
//! - [`layout`] - cell widths and per-line wrap counts
//! - [`folding`] - fold regions and visibility queries
//! - [`indicators`] - named overlay annotation channels
//! - [`search`] - in-range plain-text search in char offsets
//! - [`events`] - change-notification event type
//! - [`view`] - the [`EditorView`] facade and viewport iteration

pub mod buffer;
pub mod events;
pub mod folding;
pub mod indicators;
pub mod layout;
pub mod search;
pub mod view;

pub use buffer::TextBuffer;
pub use events::{ContentChange, EditorEvent, Modifiers};
pub use folding::{FoldRegion, FoldingManager};
pub use indicators::{Indicator, IndicatorId, IndicatorSet, IndicatorStyle};
pub use search::{SearchError, SearchMatch, SearchOptions};
pub use view::{EditorView, Viewport};
