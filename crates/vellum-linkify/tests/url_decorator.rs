use std::time::{Duration, Instant};

use url::Url;
use vellum_core::{ContentChange, EditorEvent, EditorView, Modifiers};
use vellum_linkify::{NullOpener, UrlDecorator, UrlOpener};

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &Url) -> Result<(), String> {
        self.opened.push(url.as_str().to_string());
        Ok(())
    }
}

fn view_of(text: &str) -> EditorView {
    let mut view = EditorView::new(text, 0);
    view.set_rows_on_screen(50);
    view
}

fn ranges(view: &EditorView, decorator: &UrlDecorator) -> Vec<(usize, usize)> {
    view.indicator(decorator.indicator())
        .map(|ind| ind.ranges().to_vec())
        .unwrap_or_default()
}

#[test]
fn scan_annotates_visible_urls() {
    let mut view = view_of("intro line\nvisit https://example.com today\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);

    let start = view.buffer().line_start(1) + "visit ".len();
    assert_eq!(
        ranges(&view, &decorator),
        vec![(start, start + "https://example.com".len())]
    );
}

#[test]
fn duplicate_url_annotates_every_occurrence() {
    let mut view = view_of("http://a.io/x and again http://a.io/x\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);

    assert_eq!(ranges(&view, &decorator), vec![(0, 13), (24, 37)]);
}

#[test]
fn bracket_pair_is_trimmed_from_highlight() {
    let mut view = view_of("(http://a.io/x)\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);

    // The grammar matches "http://a.io/x)"; the trailing ')' pairs with the
    // preceding '(' and is excluded.
    let got = ranges(&view, &decorator);
    assert_eq!(got, vec![(1, 14)]);
    assert_eq!(view.buffer().text_range(got[0].0, got[0].1), "http://a.io/x");
}

#[test]
fn quote_pair_is_trimmed_from_highlight() {
    let mut view = view_of("\"http://a.io/x\"\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);

    let got = ranges(&view, &decorator);
    assert_eq!(view.buffer().text_range(got[0].0, got[0].1), "http://a.io/x");
}

#[test]
fn rescan_is_idempotent_without_edits() {
    let mut view = view_of("a http://a.io/x b https://b.io/y c\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);
    let first = ranges(&view, &decorator);
    decorator.rescan(&mut view);
    let second = ranges(&view, &decorator);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn rescan_clears_stale_ranges() {
    let mut view = view_of("http://a.io/x\nplain line\n");
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);
    assert_eq!(ranges(&view, &decorator).len(), 1);

    // Delete the URL; the next pass repaints from scratch.
    let end = view.buffer().line_end(0);
    view.delete(0, end);
    decorator.rescan(&mut view);
    assert!(ranges(&view, &decorator).is_empty());
}

#[test]
fn only_viewport_lines_are_scanned() {
    let mut text = String::from("http://top.io/a\n");
    for i in 0..100 {
        text.push_str(&format!("filler {i}\n"));
    }
    text.push_str("http://bottom.io/z\n");

    let mut view = EditorView::new(&text, 0);
    view.set_rows_on_screen(5);
    let mut decorator = UrlDecorator::new(&mut view);

    decorator.rescan(&mut view);
    assert_eq!(ranges(&view, &decorator).len(), 1);

    view.scroll_to(101);
    decorator.rescan(&mut view);
    let got = ranges(&view, &decorator);
    assert_eq!(got.len(), 1);
    assert_eq!(
        view.buffer().text_range(got[0].0, got[0].1),
        "http://bottom.io/z"
    );
}

#[test]
fn burst_of_triggers_runs_one_scan() {
    let mut view = view_of("http://a.io/x\n");
    let mut decorator = UrlDecorator::new(&mut view);
    let mut opener = NullOpener;
    let t0 = Instant::now();

    for i in 0..10 {
        let at = t0 + Duration::from_millis(i * 10);
        decorator.notify(
            &view,
            &EditorEvent::ContentChanged(ContentChange::Insert {
                offset: 0,
                length: 1,
            }),
            at,
            &mut opener,
        );
    }

    let mut scans = 0;
    for i in 0..100 {
        if decorator.poll(&mut view, t0 + Duration::from_millis(90 + i * 10)) {
            scans += 1;
        }
    }
    assert_eq!(scans, 1);
}

#[test]
fn spaced_triggers_each_run_a_scan() {
    let mut view = view_of("http://a.io/x\n");
    let mut decorator = UrlDecorator::new(&mut view);
    let mut opener = NullOpener;
    let t0 = Instant::now();

    let mut scans = 0;
    for i in 0..3u64 {
        let at = t0 + Duration::from_millis(i * 1000);
        decorator.notify(&view, &EditorEvent::Scrolled, at, &mut opener);
        if decorator.poll(&mut view, at + Duration::from_millis(300)) {
            scans += 1;
        }
    }
    assert_eq!(scans, 3);
}

#[test]
fn ctrl_activation_opens_the_url_under_the_pointer() {
    let mut view = view_of("see http://a.io/x here\n");
    let mut decorator = UrlDecorator::new(&mut view);
    let mut opener = RecordingOpener::default();

    decorator.rescan(&mut view);
    decorator.notify(
        &view,
        &EditorEvent::IndicatorActivated {
            position: 8,
            modifiers: Modifiers::CTRL,
        },
        Instant::now(),
        &mut opener,
    );

    assert_eq!(opener.opened, vec!["http://a.io/x".to_string()]);
}

#[test]
fn activation_without_ctrl_is_ignored() {
    let mut view = view_of("see http://a.io/x here\n");
    let mut decorator = UrlDecorator::new(&mut view);
    let mut opener = RecordingOpener::default();

    decorator.rescan(&mut view);
    decorator.notify(
        &view,
        &EditorEvent::IndicatorActivated {
            position: 8,
            modifiers: Modifiers::default(),
        },
        Instant::now(),
        &mut opener,
    );

    assert!(opener.opened.is_empty());
}

#[test]
fn activation_outside_ranges_is_ignored() {
    let mut view = view_of("see http://a.io/x here\n");
    let mut decorator = UrlDecorator::new(&mut view);
    let mut opener = RecordingOpener::default();

    decorator.rescan(&mut view);
    decorator.notify(
        &view,
        &EditorEvent::IndicatorActivated {
            position: 1,
            modifiers: Modifiers::CTRL,
        },
        Instant::now(),
        &mut opener,
    );

    assert!(opener.opened.is_empty());
}

#[test]
fn urls_inside_collapsed_folds_are_not_annotated() {
    let mut view = view_of("header\nhttp://hidden.io/x\ntail\n");
    view.folding_mut()
        .add_region(vellum_core::FoldRegion::new(0, 1));
    view.folding_mut().collapse_at(0);

    let mut decorator = UrlDecorator::new(&mut view);
    decorator.rescan(&mut view);

    assert!(ranges(&view, &decorator).is_empty());
}
