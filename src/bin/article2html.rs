//! CLI binary for article2html.
//!
//! A thin shim over the library crate that maps CLI flags to
//! [`RenderConfig`] and prints results.

use anyhow::{Context, Result};
use article2html::{detect_content_type, process_article_content, RenderConfig};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Normalise an article body into consistently styled HTML.
#[derive(Parser, Debug)]
#[command(name = "article2html", version, about)]
struct Cli {
    /// Input file; "-" or absent reads stdin.
    input: Option<PathBuf>,

    /// Write output here instead of stdout (atomic: temp file + rename).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the detected content type and exit.
    #[arg(long)]
    detect: bool,

    /// Emit a JSON object with the content type and the rendered HTML.
    #[arg(long)]
    json: bool,

    /// Disable the GitHub-flavored markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Disable syntax highlighting of fenced code blocks.
    #[arg(long)]
    no_highlight: bool,

    /// Render soft line breaks as <br>.
    #[arg(long)]
    hard_breaks: bool,

    /// Enable typographic replacements (curly quotes, dashes).
    #[arg(long)]
    smart_punctuation: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let content = read_input(cli.input.as_deref())?;
    let kind = detect_content_type(&content);

    if cli.detect {
        if cli.json {
            println!("{}", serde_json::json!({ "content_type": kind }));
        } else {
            println!("{kind}");
        }
        return Ok(());
    }

    let config = RenderConfig::builder()
        .gfm(!cli.no_gfm)
        .highlight(!cli.no_highlight)
        .hard_breaks(cli.hard_breaks)
        .smart_punctuation(cli.smart_punctuation)
        .build();

    let html = process_article_content(&content, &config);

    let out = if cli.json {
        serde_json::json!({ "content_type": kind, "html": html.as_str() }).to_string()
    } else {
        html.into_string()
    };

    write_output(cli.output.as_deref(), &out)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Write to stdout, or atomically (temp file + rename) when a path is given
/// so readers never observe a half-written file.
fn write_output(path: Option<&Path>, out: &str) -> Result<()> {
    let Some(path) = path else {
        println!("{out}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let tmp = path.with_extension("html.tmp");
    std::fs::write(&tmp, out).with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("renaming into {}", path.display()))?;
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
