//! Input loading: read the extracted text and split it into lines.
//!
//! The text comes out of a PDF extractor and may contain byte sequences that
//! are not valid UTF-8. Those are replaced with U+FFFD rather than failing the
//! run; only a missing or unreadable file is an error.

use crate::error::Txt2TexError;
use std::path::Path;
use tracing::debug;

/// Split `content` into lines with trailing whitespace removed.
///
/// Besides `\n`, `\r\n` and lone `\r`, the form feed that extractors put
/// between pages and the other Unicode line separators end a line too. A
/// terminator at the very end does not start an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(is_line_break) {
            Some(pos) => {
                lines.push(rest[..pos].trim_end().to_string());
                let tail = &rest[pos..];
                let skip = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[skip..];
            }
            None => {
                lines.push(rest.trim_end().to_string());
                break;
            }
        }
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Decode raw bytes leniently and split them into lines.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    split_lines(&String::from_utf8_lossy(bytes))
}

/// Read the file at `path` and return its lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Txt2TexError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Txt2TexError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Txt2TexError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Txt2TexError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let lines = decode_lines(&bytes);
    debug!("Read {} bytes, {} lines from {}", bytes.len(), lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_trailing_whitespace() {
        assert_eq!(split_lines("a  \n  b\t\nc"), vec!["a", "  b", "c"]);
    }

    #[test]
    fn test_split_handles_crlf_and_cr() {
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_on_form_feed() {
        assert_eq!(split_lines("12\x0cNext page"), vec!["12", "Next page"]);
    }

    #[test]
    fn test_split_keeps_blank_lines_but_no_phantom_last_line() {
        assert_eq!(split_lines("a\n\n\nb\n"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let lines = decode_lines(b"caf\xe9\nok");
        assert_eq!(lines, vec!["caf\u{FFFD}", "ok"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Txt2TexError::FileNotFound { .. }));
    }
}
