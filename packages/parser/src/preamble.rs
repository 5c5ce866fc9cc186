//! Preamble (text before the body) handling.

use crate::config::ParseOptions;
use crate::normalize::{normalize_whitespace, strip_whitespace};

/// Information derived from the paragraphs preceding the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    /// Normalized title line, if one of the title markers was found.
    pub name: Option<String>,

    /// All preamble paragraphs joined with `\n`.
    pub text: String,
}

impl Preamble {
    /// Resolve the document name, falling back to the caller's name.
    #[must_use]
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Extract the preamble from `paragraphs[..body_start]`.
///
/// Markers are matched ignoring all whitespace, so `대 출 약 정 서` still
/// counts as a title line.
#[must_use]
pub fn extract_preamble<S: AsRef<str>>(
    paragraphs: &[S],
    body_start: usize,
    options: &ParseOptions,
) -> Preamble {
    let preamble = &paragraphs[..body_start.min(paragraphs.len())];

    let name = preamble.iter().find_map(|para| {
        let para: &str = para.as_ref();
        let compact = strip_whitespace(para);
        options
            .title_markers
            .iter()
            .any(|marker| compact.contains(strip_whitespace(marker).as_str()))
            .then(|| normalize_whitespace(para))
    });

    match &name {
        Some(name) => tracing::debug!(name = %name, "Document name found in preamble"),
        None => tracing::debug!(paragraphs = preamble.len(), "No title marker in preamble"),
    }

    let text = preamble
        .iter()
        .map(|para| para.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    Preamble { name, text }
}
