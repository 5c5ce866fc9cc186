//! Parse entry point tying boundary detection, preamble extraction and
//! assembly together.

use crate::assembler::assemble;
use crate::boundary::find_body_start;
use crate::config::ParseOptions;
use crate::preamble::extract_preamble;
use crate::types::ParsedDocument;

/// Parse paragraphs into a document with the default options.
///
/// `paragraphs` must be trimmed and non-empty, in document order.
/// `fallback_name` (usually the source file name) becomes the document
/// name when the preamble has no title line.
///
/// # Examples
/// ```
/// use jomun_parser::parse_paragraphs;
///
/// let doc = parse_paragraphs(
///     &["대출약정서", "제1조 정의", "제1항 차입의 종류", "본문설명", "제2조 이자", "설명"],
///     "loan.docx",
/// );
/// assert_eq!(doc.name(), "대출약정서");
/// assert_eq!(doc.article_count(), 2);
/// assert_eq!(doc.articles()[1].clauses()[0].display_number(), "본문");
/// ```
#[must_use]
pub fn parse_paragraphs<S: AsRef<str>>(paragraphs: &[S], fallback_name: &str) -> ParsedDocument {
    parse_paragraphs_with(paragraphs, fallback_name, &ParseOptions::default())
}

/// Parse paragraphs into a document with explicit options.
#[must_use]
pub fn parse_paragraphs_with<S: AsRef<str>>(
    paragraphs: &[S],
    fallback_name: &str,
    options: &ParseOptions,
) -> ParsedDocument {
    let body_start = find_body_start(paragraphs);
    let preamble = extract_preamble(paragraphs, body_start, options);
    let name = preamble.name_or(fallback_name).to_string();

    let articles = assemble(&paragraphs[body_start..]);
    let document = ParsedDocument::new(name, fallback_name, preamble.text, articles);

    tracing::info!(
        name = %document.name(),
        body_start,
        articles = document.article_count(),
        clauses = document.clause_count(),
        "Parsed document"
    );

    document
}
