//! Paragraph input.
//!
//! The parser consumes trimmed, non-empty paragraphs. Documents arrive here
//! as plain text exports with one paragraph per line; decoding the original
//! office format happens upstream.

use std::path::Path;

use crate::error::{ParserError, Result};

/// Split text into trimmed, non-empty paragraphs.
///
/// # Examples
/// ```
/// use jomun_parser::paragraphs::paragraphs_from_text;
///
/// let paragraphs = paragraphs_from_text("  제1조 정의\r\n\n\t내용  \n");
/// assert_eq!(paragraphs, vec!["제1조 정의", "내용"]);
/// ```
#[must_use]
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Split raw bytes into paragraphs.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected;
/// a warning naming `context` is logged when that happens.
#[must_use]
pub fn paragraphs_from_bytes(bytes: &[u8], context: &str) -> Vec<String> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => std::borrow::Cow::Borrowed(text),
        Err(e) => {
            tracing::warn!(
                context = %context,
                valid_up_to = e.valid_up_to(),
                "Input contains invalid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(bytes)
        }
    };
    // A UTF-8 byte order mark would otherwise stick to the first paragraph.
    paragraphs_from_text(text.trim_start_matches('\u{feff}'))
}

/// Read a paragraph file from disk.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(ParserError::InvalidInput(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)?;
    Ok(paragraphs_from_bytes(&bytes, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraphs_from_text_skips_blank_lines() {
        let text = "대출약정서\n\n   \n제1조\t정의\n";
        assert_eq!(paragraphs_from_text(text), vec!["대출약정서", "제1조\t정의"]);
    }

    #[test]
    fn test_paragraphs_from_bytes_strips_bom() {
        let bytes = "\u{feff}대출약정서\n제1조 정의".as_bytes();
        assert_eq!(paragraphs_from_bytes(bytes, "test"), vec!["대출약정서", "제1조 정의"]);
    }

    #[test]
    fn test_paragraphs_from_bytes_lossy() {
        let mut bytes = "제1조 정의\n".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice("내용".as_bytes());

        let paragraphs = paragraphs_from_bytes(&bytes, "test");
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "제1조 정의");
        assert!(paragraphs[1].contains('\u{fffd}'));
        assert_eq!(paragraphs[2], "내용");
    }

    #[test]
    fn test_read_paragraphs_missing_file() {
        let err = read_paragraphs(Path::new("/nonexistent/paragraphs.txt")).unwrap_err();
        assert!(matches!(err, ParserError::InvalidInput(_)));
    }

    #[test]
    fn test_read_paragraphs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "대출약정서\n제1조 정의\n내용\n").unwrap();

        let paragraphs = read_paragraphs(&path).unwrap();
        assert_eq!(paragraphs, vec!["대출약정서", "제1조 정의", "내용"]);
    }
}
