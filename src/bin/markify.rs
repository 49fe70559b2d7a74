//! Command-line entry point: convert a URL, an HTML string or an HTML file
//! to Markdown and write it to a file (or stdout).

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use markify::{encoding, FetchOptions, GenerateRequest, Options};

/// Convert HTML to clean Markdown
#[derive(Parser, Debug)]
#[command(name = "markify", author, version, about)]
struct Cli {
    /// URL to fetch; also the base for relative links when HTML is given
    #[arg(long)]
    url: Option<String>,

    /// Raw HTML to convert (takes precedence over fetching --url)
    #[arg(long, conflicts_with = "file")]
    html: Option<String>,

    /// Read HTML from a file, or from stdin with "-"
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output path, or "-" for stdout
    #[arg(short, long, value_name = "PATH", default_value = "outputs/markdown.md")]
    output: PathBuf,

    /// CSS selectors of elements to drop (comma-separated, repeatable)
    #[arg(long, value_name = "SELECTORS", value_delimiter = ',')]
    ignore: Vec<String>,

    /// Drop elements hidden via inline style, aria-hidden or the hidden attribute
    #[arg(long)]
    ignore_hidden: bool,

    /// Drop header, footer, nav, iframe and svg elements
    #[arg(long)]
    ignore_chrome: bool,

    /// Base URL for resolving relative links and images
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Write the JSON result (markdown, sourceHtml, timestamp) instead of Markdown
    #[arg(long)]
    json: bool,

    /// User-Agent header for --url requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Extra request header for --url requests (repeatable)
    #[arg(long = "header", value_name = "NAME:VALUE", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> markify::Result<()> {
    let html = match (&cli.html, &cli.file) {
        (Some(html), _) => Some(html.clone()),
        (None, Some(path)) => Some(read_html(path)?),
        (None, None) => None,
    };

    let request = GenerateRequest {
        html,
        url: cli.url,
        options: Options {
            base_url: cli.base_url,
            ignore_selectors: cli.ignore.into_iter().filter(|s| !s.trim().is_empty()).collect(),
            ignore_hidden_elements: cli.ignore_hidden,
            ignore_page_chrome: cli.ignore_chrome,
            ..Options::default()
        },
        fetch_options: FetchOptions {
            headers: cli.headers,
            user_agent: cli.user_agent,
            timeout: (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout)),
        },
    };

    let result = markify::markify(&request)?;
    let mut rendered = if cli.json {
        serde_json::to_string_pretty(&result).map_err(io::Error::other)?
    } else {
        result.markdown
    };
    rendered.push('\n');

    write_output(&cli.output, &rendered)
}

/// Read HTML bytes from a file or stdin and decode them.
fn read_html(path: &Path) -> markify::Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(path)?
    };
    Ok(encoding::transcode_to_utf8(&bytes))
}

fn write_output(path: &Path, content: &str) -> markify::Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    eprintln!("Markdown saved to {}", path.display());
    Ok(())
}
