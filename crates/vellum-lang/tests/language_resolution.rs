use std::sync::{Arc, Mutex};

use vellum_core::TextBuffer;
use vellum_lang::{
    DEFAULT_LANGUAGE, Document, LanguageChange, LanguageResolver, LanguageTable, TabPolicy,
};

const TABLE_YAML: &str = r##"
languages:
  - name: Python
    lexer: python
    line_comment: "#"
    tab_policy: spaces
    tab_width: 4
    extensions: [py, pyw]
    first_line_match: '^#!.*\bpython'
    styles:
      2: { fg_color: 0x007F00, font_style: 5 }
      5: { fg_color: 0x00007F, bg_color: 0xFFFFFF }
    keywords:
      1: "def class return import"
    properties:
      lexer.python.strings.f: "1"
  - name: Xml
    lexer: xml
    disable_fold_margin: true
    extensions: [xml]
    first_line_match: '^<\?xml'
  - name: Makefile
    lexer: makefile
    extensions: [mk]
  - name: Text
    lexer: null_lexer
    extensions: [txt]
"##;

fn resolver() -> LanguageResolver {
    LanguageResolver::new(LanguageTable::from_yaml(TABLE_YAML).unwrap())
}

#[test]
fn extension_resolution_first_match_and_default() {
    let resolver = resolver();
    assert_eq!(resolver.resolve_by_extension("py"), "Python");
    assert_eq!(resolver.resolve_by_extension("pyw"), "Python");
    assert_eq!(resolver.resolve_by_extension("xyz"), DEFAULT_LANGUAGE);
    // Case-sensitive exact match.
    assert_eq!(resolver.resolve_by_extension("PY"), DEFAULT_LANGUAGE);
}

#[test]
fn overlapping_extensions_resolve_to_first_declared() {
    let yaml = r##"
languages:
  - { name: First, lexer: a, extensions: [conf] }
  - { name: Second, lexer: b, extensions: [conf] }
"##;
    let resolver = LanguageResolver::new(LanguageTable::from_yaml(yaml).unwrap());
    assert_eq!(resolver.resolve_by_extension("conf"), "First");
}

#[test]
fn content_resolution_matches_first_line() {
    let resolver = resolver();

    let shebang = TextBuffer::from_text("#!/usr/bin/env python3\nimport sys\n");
    assert_eq!(resolver.resolve_by_contents(&shebang), "Python");

    let xml = TextBuffer::from_text("<?xml version=\"1.0\"?>\n<root/>\n");
    assert_eq!(resolver.resolve_by_contents(&xml), "Xml");

    let plain = TextBuffer::from_text("just some notes\n");
    assert_eq!(resolver.resolve_by_contents(&plain), DEFAULT_LANGUAGE);

    let empty = TextBuffer::from_text("");
    assert_eq!(resolver.resolve_by_contents(&empty), DEFAULT_LANGUAGE);
}

#[test]
fn detection_prefers_extension_then_contents() {
    let resolver = resolver();

    let by_ext = Document::with_path(TextBuffer::from_text("print(1)\n"), "/tmp/x.py");
    assert_eq!(resolver.detect_language(&by_ext), "Python");

    // Unknown extension falls back to the content sniff.
    let by_contents = Document::with_path(
        TextBuffer::from_text("#!/usr/bin/env python\n"),
        "/tmp/tool.unknown",
    );
    assert_eq!(resolver.detect_language(&by_contents), "Python");

    // Path-less documents go straight to contents.
    let scratch = Document::new(TextBuffer::from_text("#!/usr/bin/env python\n"));
    assert_eq!(resolver.detect_language(&scratch), "Python");

    let nothing = Document::new(TextBuffer::from_text("hello\n"));
    assert_eq!(resolver.detect_language(&nothing), DEFAULT_LANGUAGE);
}

#[test]
fn apply_language_populates_the_binding() {
    let mut resolver = resolver();
    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/x.py");

    resolver.apply_language(&mut doc, "Python");
    let binding = doc.binding();

    assert_eq!(binding.language_name, "Python");
    assert_eq!(binding.lexer, "python");
    assert_eq!(binding.line_comment, "#");
    assert!(!binding.use_tabs); // tab_policy: spaces
    assert_eq!(binding.tab_width, 4);
    assert_eq!(binding.fold_margin_width, 16);

    // font_style 5 decomposes to bold + underline.
    let style = binding.styles.get(&2).unwrap();
    assert_eq!(style.fg_color, Some(0x007F00));
    assert!(style.bold && style.underline);
    assert!(!style.italic && !style.eol_filled);

    // No bitmask means no flags set.
    let plain = binding.styles.get(&5).unwrap();
    assert!(!plain.bold && !plain.italic && !plain.underline && !plain.eol_filled);

    assert_eq!(
        binding.keywords.get(&1).map(String::as_str),
        Some("def class return import")
    );
    assert_eq!(
        binding.properties.get("lexer.python.strings.f").map(String::as_str),
        Some("1")
    );

    // Forced unconditionally, after user properties.
    assert_eq!(binding.properties.get("fold").map(String::as_str), Some("1"));
    assert_eq!(
        binding.properties.get("fold.compact").map(String::as_str),
        Some("0")
    );
}

#[test]
fn apply_language_clears_previous_styling() {
    let mut resolver = resolver();
    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/x.py");

    resolver.apply_language(&mut doc, "Python");
    assert!(!doc.binding().styles.is_empty());
    assert!(!doc.binding().keywords.is_empty());

    resolver.apply_language(&mut doc, "Makefile");
    let binding = doc.binding();
    assert_eq!(binding.language_name, "Makefile");
    assert!(binding.styles.is_empty());
    assert!(binding.keywords.is_empty());
    // Python's lexer property is gone; the forced ones remain.
    assert!(!binding.properties.contains_key("lexer.python.strings.f"));
    assert_eq!(binding.properties.get("fold").map(String::as_str), Some("1"));
}

#[test]
fn skip_markers_preserve_document_tab_settings() {
    let mut resolver = resolver();
    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/x.py");
    doc.binding_mut().use_tabs = true;
    doc.binding_mut().tab_width = 8;
    doc.skip_use_tabs = true;
    doc.skip_tab_width = true;

    resolver.apply_language(&mut doc, "Python");

    assert!(doc.binding().use_tabs);
    assert_eq!(doc.binding().tab_width, 8);
}

#[test]
fn tab_settings_default_to_tabs_width_4() {
    let mut resolver = resolver();
    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/build.mk");

    // Makefile declares no tab fields in the table.
    resolver.apply_language(&mut doc, "Makefile");
    assert!(doc.binding().use_tabs);
    assert_eq!(doc.binding().tab_width, 4);

    let descriptor = resolver.table().get("Makefile").unwrap();
    assert_eq!(descriptor.tab_policy, TabPolicy::Tabs);
}

#[test]
fn disabled_fold_margin_collapses_to_zero() {
    let mut resolver = resolver();
    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/x.xml");

    resolver.apply_language(&mut doc, "Xml");
    assert_eq!(doc.binding().fold_margin_width, 0);
}

#[test]
fn subscribers_see_language_changes() {
    let mut resolver = resolver();
    let seen: Arc<Mutex<Vec<LanguageChange>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    resolver.subscribe(move |change| {
        seen_clone.lock().unwrap().push(change.clone());
    });

    let mut doc = Document::with_path(TextBuffer::from_text(""), "/tmp/x.py");
    resolver.apply_language(&mut doc, "Python");
    resolver.apply_language(&mut doc, "Xml");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].language_name, "Python");
    assert_eq!(seen[1].lexer, "xml");
}

#[test]
#[should_panic(expected = "unknown language")]
fn unknown_language_is_a_programming_error() {
    let mut resolver = resolver();
    let mut doc = Document::new(TextBuffer::from_text(""));
    resolver.apply_language(&mut doc, "NoSuchLanguage");
}
