//! Edge case integration tests
//!
//! Unusual inputs and boundary conditions. Conversion never fails, so these
//! assert on the output shape.

use markify::{convert, convert_with_options, Options};

#[test]
fn test_no_body_element() {
    assert_eq!(convert("<html><head><title>No Body</title></head></html>"), "");
}

#[test]
fn test_malformed_html_is_repaired() {
    let html = "<div><p>Unclosed paragraph<p>Second <b>bold <i>nested</b> tail</div>";
    let out = convert(html);
    assert!(out.contains("Unclosed paragraph"));
    assert!(out.contains("Second"));
    assert!(out.contains("**bold"));
}

#[test]
fn test_uppercase_tags() {
    assert_eq!(
        convert("<H2>Loud</H2><UL><LI>Item</LI></UL>"),
        "## Loud\n\n* Item"
    );
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(convert("<p>Before<!-- secret -->After</p>"), "BeforeAfter");
}

#[test]
fn test_entities_decoded() {
    assert_eq!(convert("<p>Fish &amp; chips &lt;3&nbsp;&copy;</p>"), "Fish & chips <3 ©");
}

#[test]
fn test_deeply_nested_containers() {
    let mut html = String::new();
    for _ in 0..200 {
        html.push_str("<div>");
    }
    html.push_str("<p>Deep content</p>");
    for _ in 0..200 {
        html.push_str("</div>");
    }
    assert_eq!(convert(&html), "Deep content");
}

#[test]
fn test_unicode_content() {
    assert_eq!(
        convert("<h1>日本語のタイトル</h1><p>Ünïcödé ✓ ok</p>"),
        "# 日本語のタイトル\n\nÜnïcödé ✓ ok"
    );
}

#[test]
fn test_table_without_rows_and_list_without_items() {
    assert_eq!(convert("<table><caption>Empty</caption></table><ul></ul>"), "");
}

#[test]
fn test_table_with_huge_spans() {
    let html = r#"<table><tr><td rowspan="999999" colspan="3">x</td></tr><tr><td>y</td></tr></table>"#;
    assert_eq!(
        convert(html),
        "| x | x | x |  |\n| --- | --- | --- | --- |\n| x | x | x | y |"
    );
}

#[test]
fn test_whitespace_only_selectors_ignored() {
    let options = Options {
        ignore_selectors: vec![String::new(), "  ".to_string()],
        ..Options::default()
    };
    assert_eq!(convert_with_options("<p>Safe</p>", &options), "Safe");
}

#[test]
fn test_relative_urls_without_base_stay_relative() {
    assert_eq!(
        convert(r##"<a href="#top">Top</a> <a href="/x">X</a> <img src="/i.png">"##),
        "[Top](#top) [X](/x) ![Image](/i.png)"
    );
}

#[test]
fn test_invalid_base_url_keeps_values() {
    let options = Options {
        base_url: Some("not a url".to_string()),
        ..Options::default()
    };
    assert_eq!(
        convert_with_options(r#"<a href="/x">X</a>"#, &options),
        "[X](/x)"
    );
}
