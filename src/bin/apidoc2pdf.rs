//! CLI binary for apidoc2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and writes the Markdown + CSS artefacts.

use anyhow::{Context, Result};
use apidoc2pdf::{convert, convert_to_files, ConversionConfig, DocumentSource};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Flatten a Postman export (Markdown to stdout)
  apidoc2pdf collection.json

  # Write both artefacts: docs.md + docs.css
  apidoc2pdf collection.json -o docs

  # Custom running header
  apidoc2pdf collection.json -o docs --header-text "Payments API v2"

  # Pass a hand-written Markdown file through (stylesheet still composed)
  apidoc2pdf guide.md -o guide

  # Structured JSON output (markdown, stylesheet, stats)
  apidoc2pdf --json collection.json > artefacts.json

OUTPUT:
  The tool emits two artefacts: a flattened Markdown document and a page
  stylesheet with the header text embedded in an @top-center declaration.
  Feed both to any paged-media renderer that supports fenced code blocks,
  GFM tables, and @page margin boxes to produce the final PDF.

ENVIRONMENT VARIABLES:
  APIDOC2PDF_HEADER     Default for --header-text
  APIDOC2PDF_OUTPUT     Default for --output
  APIDOC2PDF_MAX_DEPTH  Default for --max-depth
"#;

/// Convert Postman collections and Markdown into print-ready documents.
#[derive(Parser, Debug)]
#[command(
    name = "apidoc2pdf",
    version,
    about = "Convert Postman collections and Markdown into print-ready documents",
    long_about = "Flatten a Postman Collection v2 export (or pass a Markdown file through) and \
compose the page stylesheet needed to print it with a custom running header.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input file: a Postman export (.json) or Markdown (.md, .markdown).
    input: PathBuf,

    /// Output stem: writes <stem>.md and <stem>.css instead of stdout.
    #[arg(short, long, env = "APIDOC2PDF_OUTPUT")]
    output: Option<PathBuf>,

    /// Text for the top-centre running header on every page.
    #[arg(long, env = "APIDOC2PDF_HEADER", default_value = "Documentation")]
    header_text: String,

    /// Input format; auto detects from the file extension.
    #[arg(long, value_enum, default_value = "auto")]
    format: FormatArg,

    /// Recursion ceiling for the collection folder tree.
    #[arg(long, env = "APIDOC2PDF_MAX_DEPTH", default_value_t = 64)]
    max_depth: usize,

    /// Output structured JSON (markdown, stylesheet, stats) instead of
    /// plain Markdown.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum FormatArg {
    Auto,
    Markdown,
    Postman,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Read and classify input ──────────────────────────────────────────
    let contents = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file {:?}", cli.input))?;

    let source = match cli.format {
        FormatArg::Auto => DocumentSource::from_path_hint(&cli.input, contents)
            .context("Could not classify input; use --format to override")?,
        FormatArg::Markdown => DocumentSource::Markdown(contents),
        FormatArg::Postman => DocumentSource::PostmanJson(contents),
    };

    let config = ConversionConfig::builder()
        .header_text(&cli.header_text)
        .max_depth(cli.max_depth)
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref stem) = cli.output {
        let output = convert_to_files(source, stem, &config).context("Conversion failed")?;

        if !cli.quiet {
            eprintln!(
                "✔  {} requests, {} folders  →  {}.md + {}.css",
                output.stats.requests,
                output.stats.folders,
                stem.display(),
                stem.display(),
            );
            if output.stats.skipped_items > 0 {
                eprintln!(
                    "   {} unrecognised items skipped",
                    output.stats.skipped_items
                );
            }
        }
    } else {
        let output = convert(source, &config).context("Conversion failed")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.markdown.as_bytes())
                .context("Failed to write to stdout")?;
            if !output.markdown.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }
    }

    Ok(())
}
