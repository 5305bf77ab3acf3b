//! CLI binary for txt2tex.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use txt2tex::{convert_to_file, ConversionConfig};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert SRL.txt in the current directory to SRL.tex
  txt2tex

  # Explicit input, default output (SRL.tex)
  txt2tex extracted/paper.txt

  # Explicit input and output
  txt2tex extracted/paper.txt build/paper.tex

  # Override the title block written into the preamble
  txt2tex paper.txt paper.tex --title "My Paper" --author "A. Author" --author "B. Author"

  # Print line statistics as JSON after writing
  txt2tex --json paper.txt paper.tex

INPUT:
  Plain text as produced by a PDF extractor (e.g. pdftotext -layout).
  Invalid UTF-8 bytes are replaced with U+FFFD.

ENVIRONMENT VARIABLES:
  RUST_LOG          Log filter, overrides --verbose/--quiet (e.g. txt2tex=debug)
  TXT2TEX_TITLE     Same as --title
  TXT2TEX_DATE      Same as --date
  TXT2TEX_JSON      Same as --json
  TXT2TEX_VERBOSE   Same as --verbose
  TXT2TEX_QUIET     Same as --quiet
"#;

/// Convert an extracted-text paper to a structured LaTeX document.
#[derive(Parser, Debug)]
#[command(
    name = "txt2tex",
    version,
    about = "Convert a plain-text PDF extraction to a structured LaTeX document",
    long_about = "Convert the plain-text extraction of an academic paper to LaTeX. Section and \
subsection headings are inferred from layout cues (lone heading numbers, blank lines, title \
casing); everything else becomes escaped paragraphs.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Extracted text file.
    #[arg(default_value = "SRL.txt")]
    input: PathBuf,

    /// LaTeX file to write (overwritten if it exists).
    #[arg(default_value = "SRL.tex")]
    output: PathBuf,

    /// Document title for \title{}.
    #[arg(long, env = "TXT2TEX_TITLE")]
    title: Option<String>,

    /// Author for \author{}; repeat for several authors.
    #[arg(long = "author", value_name = "AUTHOR")]
    authors: Vec<String>,

    /// Date line for \date{}.
    #[arg(long, env = "TXT2TEX_DATE")]
    date: Option<String>,

    /// Print conversion statistics as JSON on stdout after writing.
    #[arg(long, env = "TXT2TEX_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TXT2TEX_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "TXT2TEX_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert_to_file(&cli.input, &cli.output, &config).context("Conversion failed")?;

    if !cli.quiet {
        println!("Wrote {}", cli.output.display());
    }

    if cli.json {
        let json =
            serde_json::to_string_pretty(&output.stats).context("Failed to serialise stats")?;
        println!("{json}");
    }

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder();

    if let Some(ref title) = cli.title {
        builder = builder.title(title.as_str());
    }
    if !cli.authors.is_empty() {
        builder = builder.authors(cli.authors.iter().cloned());
    }
    if let Some(ref date) = cli.date {
        builder = builder.date(date.as_str());
    }

    builder.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_srl_files() {
        let cli = Cli::try_parse_from(["txt2tex"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("SRL.txt"));
        assert_eq!(cli.output, PathBuf::from("SRL.tex"));
    }

    #[test]
    fn one_positional_sets_input_only() {
        let cli = Cli::try_parse_from(["txt2tex", "paper.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("paper.txt"));
        assert_eq!(cli.output, PathBuf::from("SRL.tex"));
    }

    #[test]
    fn repeated_author_flags() {
        let cli =
            Cli::try_parse_from(["txt2tex", "a.txt", "b.tex", "--author", "X", "--author", "Y"])
                .unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.header.authors, vec!["X", "Y"]);
    }

    #[test]
    fn empty_title_rejected() {
        let cli = Cli::try_parse_from(["txt2tex", "--title", ""]).unwrap();
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn after_help_lists_every_env_fallback() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        for arg in cmd.get_arguments() {
            if let Some(var) = arg.get_env() {
                let var = var.to_string_lossy();
                assert!(AFTER_HELP.contains(var.as_ref()), "{var} missing from help");
            }
        }
    }
}
