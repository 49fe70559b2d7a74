//! Real-world style page tests
//!
//! Pages shaped like typical blogs, documentation and news sites.

use markify::{convert_with_options, Options};

fn reader_options(base: &str) -> Options {
    Options {
        base_url: Some(base.to_string()),
        ignore_hidden_elements: true,
        ignore_page_chrome: true,
        ..Options::default()
    }
}

#[test]
fn test_blog_post() {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Understanding Ownership</title>
    <script>window.dataLayer = [];</script>
</head>
<body>
    <nav class="top"><a href="/">Blog</a> <a href="/about">About</a></nav>
    <article>
        <h1>Understanding Ownership</h1>
        <p class="byline">By <a href="/authors/sam">Sam</a> on March 3</p>
        <p>Ownership is a set of rules that govern how memory is managed.
           Each value has an <em>owner</em>, and there can only be one owner at a time.</p>
        <h2>Moves</h2>
        <p>Assigning a value to another variable <strong>moves</strong> it:</p>
        <pre><code class="language-rust">let a = String::from("hi");
let b = a;</code></pre>
        <blockquote><p>When the owner goes out of scope, the value is dropped.</p></blockquote>
        <figure>
            <img src="//cdn.example.com/diagrams/move.png" alt="Move diagram">
        </figure>
    </article>
    <footer><p>Comments are closed.</p></footer>
</body>
</html>"#;

    let out = convert_with_options(html, &reader_options("https://blog.example.com/posts/ownership"));

    assert_eq!(
        out,
        "# Understanding Ownership\n\n\
         By [Sam](https://blog.example.com/authors/sam) on March 3\n\n\
         Ownership is a set of rules that govern how memory is managed. \
         Each value has an *owner*, and there can only be one owner at a time.\n\n\
         ## Moves\n\n\
         Assigning a value to another variable **moves** it:\n\n\
         ```rust\nlet a = String::from(\"hi\");\nlet b = a;\n```\n\n\
         > When the owner goes out of scope, the value is dropped.\n\n\
         ![Move diagram](https://cdn.example.com/diagrams/move.png)"
    );
}

#[test]
fn test_documentation_page() {
    let html = r##"<html><body>
    <a href="#content" class="skip-to-content">Skip to content</a>
    <aside class="sidebar"><ul><li><a href="/docs/intro">Intro</a></li></ul></aside>
    <div id="content">
        <h1>Configuration</h1>
        <p>Settings are read in this order:</p>
        <ol>
            <li>Command line flags</li>
            <li>Environment variables, for example <code>APP_LOG</code></li>
            <li>The config file
                <ul><li>Global</li><li>Per project</li></ul>
            </li>
        </ol>
        <h3>Options</h3>
        <table>
            <thead><tr><th>Name</th><th>Default</th><th>Description</th></tr></thead>
            <tbody>
                <tr><td><code>timeout</code></td><td>30</td><td>Seconds before giving up</td></tr>
                <tr><td><code>retries</code></td><td>3</td><td>Attempts <br>per request</td></tr>
            </tbody>
        </table>
        <p>See <a href="#env">environment</a> for details.</p>
    </div>
</body></html>"##;

    let mut options = reader_options("https://docs.example.com/guide/config");
    options.ignore_selectors = vec![".sidebar".to_string()];
    let out = convert_with_options(html, &options);

    assert!(out.starts_with("# Configuration\n\nSettings are read in this order:"));
    assert!(out.contains("1. Command line flags\n2. Environment variables, for example `APP_LOG`\n3. The config file"));
    assert!(out.contains("* Global"));
    assert!(out.contains("* Per project"));
    assert!(out.contains(
        "| Name | Default | Description |\n\
         | --- | --- | --- |\n\
         | `timeout` | 30 | Seconds before giving up |\n\
         | `retries` | 3 | Attempts<br>per request |"
    ));
    assert!(out.ends_with("See [environment](https://docs.example.com/guide/config#env) for details."));
    assert!(!out.contains("Intro"));
    assert!(!out.contains("Skip to content"));
}

#[test]
fn test_news_listing_with_cards() {
    let html = r#"<html><body>
    <header><h1>Daily News</h1></header>
    <main>
        <h2>Top stories</h2>
        <ul class="cards">
            <li>
                <a href="/2024/markets"><img src="/thumbs/markets.jpg" alt="Trading floor">Markets rally on rate news</a>
            </li>
            <li>
                <a href="/2024/weather"><img src="/thumbs/storm.svg" alt="Storm icon">Storm expected this weekend</a>
            </li>
        </ul>
        <div class="ad" aria-hidden="true">Advertisement</div>
        <div class="cookie" role="dialog">We use cookies</div>
    </main>
</body></html>"#;

    let out = convert_with_options(html, &reader_options("https://news.example.net/"));

    assert!(out.starts_with("## Top stories"));
    assert!(out.contains(
        "![Trading floor](https://news.example.net/thumbs/markets.jpg)\n\n\
         Markets rally on rate news\n\n\
         https://news.example.net/2024/markets\n\n---"
    ));
    // SVG thumbnails are dropped, leaving a plain link in an unmarked card item.
    assert!(out.contains("---\n[Storm expected this weekend](https://news.example.net/2024/weather)"));
    assert!(!out.contains("Daily News"));
    assert!(!out.contains("Advertisement"));
    assert!(!out.contains("cookies"));
}
