//! Feature combination integration tests
//!
//! Several options enabled together on the same document.

use markify::{convert, convert_with_options, generate_with_fetcher, FetchOptions, GenerateRequest, Options, Result};

const PAGE: &str = r##"<html><body>
    <a class="skip-link" href="#main">Skip to content</a>
    <header><nav><a href="/">Home</a> <a href="/blog">Blog</a></nav></header>
    <main id="main">
        <h1>Release notes</h1>
        <div class="promo">Subscribe to our newsletter</div>
        <p style="display:none">Tracking pixel text</p>
        <p>Version 2 ships a faster parser</p>
        <a href="/changelog"><img src="/img/chart.png" alt="Chart">See the full changelog</a>
        <table>
            <tr><th>Area</th><th>Change</th></tr>
            <tr><td>Parser</td><td>Faster</td></tr>
            <tr><td>CLI</td><td>New flags</td></tr>
        </table>
    </main>
    <footer>Copyright notice</footer>
</body></html>"##;

#[test]
fn test_defaults_keep_chrome_and_hidden_content() {
    let out = convert(PAGE);
    assert!(out.contains("[Home](/)"));
    assert!(out.contains("Tracking pixel text"));
    assert!(out.contains("Copyright notice"));
    assert!(out.contains("Subscribe to our newsletter"));
}

#[test]
fn test_all_filters_together() {
    let options = Options {
        ignore_hidden_elements: true,
        ignore_page_chrome: true,
        ignore_selectors: vec![".promo".to_string()],
        ..Options::default()
    };
    let out = convert_with_options(PAGE, &options);

    assert!(!out.contains("Skip to content"));
    assert!(!out.contains("Home"));
    assert!(!out.contains("Tracking pixel"));
    assert!(!out.contains("newsletter"));
    assert!(!out.contains("Copyright"));
    assert!(out.starts_with("# Release notes"));
    assert!(out.contains("Version 2 ships a faster parser"));
}

#[test]
fn test_base_url_with_row_limit_and_sentences() {
    let options = Options {
        base_url: Some("https://news.example.org/releases/2".to_string()),
        max_table_rows: 1,
        terminate_sentences: true,
        link_image_separator: false,
        ..Options::default()
    };
    let out = convert_with_options(PAGE, &options);

    assert!(out.contains("Version 2 ships a faster parser."));
    assert!(out.contains(
        "![Chart](https://news.example.org/img/chart.png)\n\nSee the full changelog.\n\nhttps://news.example.org/changelog"
    ));
    assert!(!out.contains("---\n"));
    assert!(out.contains("| Parser. | Faster. |"));
    assert!(!out.contains("New flags"));
}

#[test]
fn test_strip_backslashes_with_tables() {
    let html = r"<p>C:\Users\me</p><table><tr><td>a|b</td></tr></table>";

    let kept = convert(html);
    assert!(kept.contains(r"C:\Users\me"));
    assert!(kept.contains(r"| a\|b |"));

    let options = Options {
        strip_backslashes: true,
        ..Options::default()
    };
    let stripped = convert_with_options(html, &options);
    assert!(stripped.contains("C:Usersme"));
    assert!(stripped.contains("| a|b |"));
}

#[test]
fn test_fetched_url_is_base_unless_overridden() -> Result<()> {
    let fetcher = |_url: &str, _opts: &FetchOptions| -> Result<String> {
        Ok(r#"<p><a href="/a">Alpha</a> <img src="/b.png" alt="Beta"></p>"#.to_string())
    };

    let request = GenerateRequest::from_url("https://site.example/dir/page");
    assert_eq!(
        generate_with_fetcher(&request, &fetcher)?,
        "[Alpha](https://site.example/a) ![Beta](https://site.example/b.png)"
    );

    let request = GenerateRequest::from_url("https://site.example/dir/page").with_options(Options {
        base_url: Some("https://cdn.example".to_string()),
        ..Options::default()
    });
    assert_eq!(
        generate_with_fetcher(&request, &fetcher)?,
        "[Alpha](https://cdn.example/a) ![Beta](https://cdn.example/b.png)"
    );
    Ok(())
}

#[test]
fn test_html_wins_over_url_but_url_still_resolves() -> Result<()> {
    let fetcher = |_url: &str, _opts: &FetchOptions| -> Result<String> {
        Ok("<p>Should not be fetched</p>".to_string())
    };
    let request = GenerateRequest {
        html: Some(r#"<a href="/local">Local</a>"#.to_string()),
        url: Some("https://origin.example/x".to_string()),
        ..GenerateRequest::default()
    };
    assert_eq!(
        generate_with_fetcher(&request, &fetcher)?,
        "[Local](https://origin.example/local)"
    );
    Ok(())
}
