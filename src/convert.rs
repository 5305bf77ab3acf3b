//! Conversion entry points.
//!
//! [`convert_lines`] is the core; the other functions only differ in where
//! the lines come from and where the LaTeX goes.

use crate::config::ConversionConfig;
use crate::error::Txt2TexError;
use crate::output::ConversionOutput;
use crate::pipeline::{input, render, scan};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert already-split lines to a LaTeX document.
///
/// Never fails: unrecognised lines become paragraphs.
pub fn convert_lines(lines: &[String], config: &ConversionConfig) -> ConversionOutput {
    let start = Instant::now();

    let (blocks, mut stats) = scan::scan(lines, &config.rules);
    let latex = render::render_document(&config.header, &blocks);

    stats.duration_ms = start.elapsed().as_millis() as u64;
    debug!(
        "Scanned {} lines into {} blocks ({} sections, {} subsections, {} paragraphs)",
        stats.total_lines,
        blocks.len(),
        stats.sections,
        stats.subsections,
        stats.paragraphs
    );

    ConversionOutput {
        latex,
        blocks,
        stats,
    }
}

/// Convert extracted text held in memory.
pub fn convert_text(text: &str, config: &ConversionConfig) -> ConversionOutput {
    convert_lines(&input::split_lines(text), config)
}

/// Read the text file at `input_path` and convert it.
///
/// Invalid UTF-8 is replaced, not rejected.
///
/// # Errors
/// - [`Txt2TexError::FileNotFound`] / [`Txt2TexError::PermissionDenied`]
/// - [`Txt2TexError::ReadFailed`] for any other read error
pub fn convert_file(
    input_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Txt2TexError> {
    let input_path = input_path.as_ref();
    info!("Starting conversion: {}", input_path.display());

    let lines = input::read_lines(input_path)?;
    let output = convert_lines(&lines, config);

    info!(
        "Conversion complete: {} lines, {} sections, {} subsections, {}ms",
        output.stats.total_lines,
        output.stats.sections,
        output.stats.subsections,
        output.stats.duration_ms
    );
    Ok(output)
}

/// Convert `input_path` and write the LaTeX to `output_path`.
///
/// The document is written to a temporary file next to the target and then
/// renamed over it, so an existing file is replaced only by a complete one
/// and a failed run leaves no partial output behind.
pub fn convert_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Txt2TexError> {
    let output = convert_file(input_path, config)?;
    write_atomic(output_path.as_ref(), &output.latex)?;
    Ok(output)
}

/// Write `contents` to `path` through a temp file in the same directory.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), Txt2TexError> {
    let write_err = |source: std::io::Error| Txt2TexError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
