#![warn(missing_docs)]
//! `vellum-linkify` - viewport-scoped URL detection and highlighting.
//!
//! Scans only the lines currently visible in a [`vellum_core::EditorView`]
//! for URL-shaped text, paints them onto a dedicated indicator channel, and
//! opens them on ctrl-activation. Scans are debounced: bursts of typing,
//! scrolling, or zooming collapse into one pass per idle window.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use vellum_core::{EditorEvent, EditorView};
//! use vellum_linkify::{NullOpener, UrlDecorator};
//!
//! let mut view = EditorView::new("see https://example.com for details\n", 0);
//! view.set_rows_on_screen(10);
//!
//! let mut decorator = UrlDecorator::new(&mut view);
//! let mut opener = NullOpener;
//!
//! let t0 = Instant::now();
//! decorator.notify(&view, &EditorEvent::Scrolled, t0, &mut opener);
//! assert!(decorator.poll(&mut view, t0 + Duration::from_millis(250)));
//!
//! let ranges = view.indicator(decorator.indicator()).unwrap().ranges();
//! assert_eq!(ranges, &[(4, 23)]);
//! ```

pub mod debounce;
pub mod decorator;
pub mod matcher;
pub mod opener;

pub use debounce::{DEFAULT_DEBOUNCE, DebounceTimer};
pub use decorator::{INDICATOR_NAME, UrlDecorator};
pub use matcher::UrlMatcher;
pub use opener::{NullOpener, UrlOpener};
