//! The URL decorator.
//!
//! Watches a view's change notifications, debounces them, and repaints a
//! dedicated indicator channel over every URL visible in the viewport. A
//! ctrl-activation on an annotated range resolves the range back to text,
//! validates it, and hands it to the host's [`UrlOpener`].

use std::time::Instant;

use tracing::{debug, info, warn};
use url::Url;
use vellum_core::{ContentChange, EditorEvent, EditorView, IndicatorId, IndicatorStyle};

use crate::debounce::DebounceTimer;
use crate::matcher::UrlMatcher;
use crate::opener::UrlOpener;

/// Name the decorator allocates its indicator channel under.
pub const INDICATOR_NAME: &str = "url_finder";

const URL_COLOR: u32 = 0xFF0000;

/// Highlights URLs in the visible viewport and opens them on ctrl-activation.
pub struct UrlDecorator {
    indicator: IndicatorId,
    matcher: UrlMatcher,
    timer: DebounceTimer,
}

impl UrlDecorator {
    /// Attach a decorator to `view`, allocating and configuring its
    /// indicator channel (plain red underline, dotted red hover).
    pub fn new(view: &mut EditorView) -> Self {
        let indicator = view.allocate_indicator(INDICATOR_NAME);
        if let Some(ind) = view.indicator_mut(indicator) {
            ind.style = IndicatorStyle::Plain;
            ind.fore = URL_COLOR;
            ind.hover_style = IndicatorStyle::Dots;
            ind.hover_fore = URL_COLOR;
        }

        Self {
            indicator,
            matcher: UrlMatcher::new(),
            timer: DebounceTimer::default(),
        }
    }

    /// The indicator channel this decorator paints.
    pub fn indicator(&self) -> IndicatorId {
        self.indicator
    }

    /// Returns `true` if a re-scan is pending.
    pub fn is_scan_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Dispatch one change notification.
    ///
    /// Content changes, scrolls, zooms, and resizes restart the debounce
    /// window; a ctrl-activation on one of our ranges opens the URL.
    pub fn notify(
        &mut self,
        view: &EditorView,
        event: &EditorEvent,
        now: Instant,
        opener: &mut dyn UrlOpener,
    ) {
        match event {
            EditorEvent::ContentChanged(ContentChange::Insert { .. })
            | EditorEvent::ContentChanged(ContentChange::Delete { .. })
            | EditorEvent::Scrolled
            | EditorEvent::Zoomed
            | EditorEvent::Resized => self.timer.restart(now),
            EditorEvent::IndicatorActivated {
                position,
                modifiers,
            } if modifiers.ctrl => self.activate(view, *position, opener),
            EditorEvent::IndicatorActivated { .. } => {}
        }
    }

    /// Run the pending re-scan if the debounce window has elapsed.
    ///
    /// Returns `true` when a scan ran. Hosts call this from their event loop;
    /// N triggers inside one window produce exactly one scan.
    pub fn poll(&mut self, view: &mut EditorView, now: Instant) -> bool {
        if self.timer.fire_ready(now) {
            self.rescan(view);
            true
        } else {
            false
        }
    }

    /// One full scan pass: clear every prior range, then re-annotate all
    /// URLs on the currently visible lines.
    pub fn rescan(&mut self, view: &mut EditorView) {
        if let Some(ind) = view.indicator_mut(self.indicator) {
            ind.clear_all();
        }

        for line in view.visible_lines() {
            let line_start = view.buffer().line_start(line);
            let line_end = view.buffer().line_end(line);
            let line_text = view.buffer().text_range(line_start, line_end);

            for matched_text in self.matcher.matches(&line_text) {
                self.annotate_occurrences(view, &matched_text, line_start, line_end);
            }
        }

        debug!(
            ranges = view
                .indicator(self.indicator)
                .map(|i| i.ranges().len())
                .unwrap_or(0),
            "url scan complete"
        );
    }

    /// Annotate every occurrence of `matched_text` within `[from, to)`,
    /// resuming each search after the previous hit. A buffer edited between
    /// the match phase and the search phase can make the re-search miss; the
    /// loop then ends cleanly and the next debounced scan corrects it.
    fn annotate_occurrences(
        &mut self,
        view: &mut EditorView,
        matched_text: &str,
        from: usize,
        to: usize,
    ) {
        let mut search_from = from;

        while let Some(found) = view.find_text(matched_text, search_from, to) {
            let start = found.start;
            let mut end = found.end;

            // The grammar admits a trailing bracket into the match; when the
            // character before the range pairs with the last matched
            // character, exclude that bracket from the highlight.
            let prev = start.checked_sub(1).and_then(|p| view.buffer().char_at(p));
            let last = view.buffer().char_at(end - 1);
            if let (Some(prev), Some(last)) = (prev, last)
                && matches!((prev, last), ('(', ')') | ('[', ']') | ('<', '>') | ('"', '"'))
            {
                end -= 1;
            }

            if let Some(ind) = view.indicator_mut(self.indicator) {
                ind.fill_range(start, end - start);
            }

            search_from = found.end;
        }
    }

    fn activate(&self, view: &EditorView, position: usize, opener: &mut dyn UrlOpener) {
        let Some(range) = view
            .indicator(self.indicator)
            .and_then(|ind| ind.range_at(position))
        else {
            return;
        };

        let text = view.buffer().text_range(range.0, range.1);
        match Url::parse(&text) {
            Ok(url) => {
                info!(url = %text, "URL hotspot activated");
                if let Err(err) = opener.open(&url) {
                    warn!(url = %text, error = %err, "platform opener failed");
                }
            }
            Err(err) => {
                warn!(text = %text, error = %err, "invalid url at activation");
            }
        }
    }
}
