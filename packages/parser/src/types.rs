//! Core data types for a parsed agreement.
//!
//! The tree is built once by the assembler and handed out read-only: fields
//! are private and exposed through accessors, and display numbers are always
//! derived from the numeric parts.

use serde::Serialize;

use crate::config::BODY_CLAUSE_LABEL;

/// Text collected under a clause.
///
/// Always carries both the original lines and their newline-joined form so
/// consumers never have to pick a representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "clause_content")]
pub struct ClauseContent {
    lines: Vec<String>,
    text: String,
}

impl ClauseContent {
    /// Package collected lines, or `None` when there is nothing to package.
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }
        let text = lines.join("\n");
        Some(Self { lines, text })
    }

    /// The lines in original order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with `\n`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Display form of an article number: `"4"` or `"4의2"`.
///
/// # Examples
/// ```
/// use jomun_parser::types::article_display_number;
///
/// assert_eq!(article_display_number(4, None), "4");
/// assert_eq!(article_display_number(4, Some(2)), "4의2");
/// ```
#[must_use]
pub fn article_display_number(number: u32, sub_number: Option<u32>) -> String {
    match sub_number {
        Some(sub) if sub > 0 => format!("{number}의{sub}"),
        _ => number.to_string(),
    }
}

/// A numbered clause (항) within an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedClause {
    number: u32,
    display_number: String,
    title: String,
    content: Option<ClauseContent>,
    order_index: usize,
}

impl ParsedClause {
    /// Create a clause from a recognized clause header, without content yet.
    pub(crate) fn numbered(number: u32, title: impl Into<String>, order_index: usize) -> Self {
        Self {
            number,
            display_number: number.to_string(),
            title: title.into(),
            content: None,
            order_index,
        }
    }

    /// Create the pseudo-clause standing in for an article's loose body text.
    pub(crate) fn body(content: ClauseContent) -> Self {
        Self {
            number: 0,
            display_number: BODY_CLAUSE_LABEL.to_string(),
            title: BODY_CLAUSE_LABEL.to_string(),
            content: Some(content),
            order_index: 1,
        }
    }

    pub(crate) fn set_content(&mut self, content: ClauseContent) {
        self.content = Some(content);
    }

    /// Clause number; `0` for the body pseudo-clause.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Display number (`"3"`, or `"본문"` for the pseudo-clause).
    #[must_use]
    pub fn display_number(&self) -> &str {
        &self.display_number
    }

    /// Normalized clause title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Collected content, `None` when no text followed the header.
    #[must_use]
    pub fn content(&self) -> Option<&ClauseContent> {
        self.content.as_ref()
    }

    /// 1-based position within the owning article.
    #[must_use]
    pub fn order_index(&self) -> usize {
        self.order_index
    }

    /// Whether this is the synthesized body-only clause.
    #[must_use]
    pub fn is_body(&self) -> bool {
        self.number == 0 && self.display_number == BODY_CLAUSE_LABEL
    }
}

/// A numbered article (조) of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedArticle {
    number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_number: Option<u32>,
    display_number: String,
    title: String,
    order_index: usize,
    clauses: Vec<ParsedClause>,
}

impl ParsedArticle {
    pub(crate) fn new(
        number: u32,
        sub_number: Option<u32>,
        title: impl Into<String>,
        order_index: usize,
    ) -> Self {
        Self {
            number,
            sub_number,
            display_number: article_display_number(number, sub_number),
            title: title.into(),
            order_index,
            clauses: Vec::new(),
        }
    }

    /// Order index the next appended clause receives.
    pub(crate) fn next_clause_order(&self) -> usize {
        self.clauses.len() + 1
    }

    pub(crate) fn push_clause(&mut self, clause: ParsedClause) {
        debug_assert_eq!(clause.order_index, self.next_clause_order());
        self.clauses.push(clause);
    }

    /// Article number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Sub-number of a `제N조의M` article.
    #[must_use]
    pub fn sub_number(&self) -> Option<u32> {
        self.sub_number
    }

    /// Display number (`"4"` or `"4의2"`).
    #[must_use]
    pub fn display_number(&self) -> &str {
        &self.display_number
    }

    /// Normalized article title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 1-based position within the document.
    #[must_use]
    pub fn order_index(&self) -> usize {
        self.order_index
    }

    /// Clauses in document order.
    #[must_use]
    pub fn clauses(&self) -> &[ParsedClause] {
        &self.clauses
    }
}

/// A fully parsed agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    name: String,
    source_file_name: String,
    description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    preamble: String,
    articles: Vec<ParsedArticle>,
}

impl ParsedDocument {
    pub(crate) fn new(
        name: impl Into<String>,
        source_file_name: impl Into<String>,
        preamble: impl Into<String>,
        articles: Vec<ParsedArticle>,
    ) -> Self {
        Self {
            name: name.into(),
            source_file_name: source_file_name.into(),
            description: format!("총 {}개 조항", articles.len()),
            preamble: preamble.into(),
            articles,
        }
    }

    /// Display title of the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name supplied by the caller, typically the source file name.
    #[must_use]
    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    /// Short summary, e.g. `"총 12개 조항"`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Newline-joined paragraphs preceding the body.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Articles in document order.
    #[must_use]
    pub fn articles(&self) -> &[ParsedArticle] {
        &self.articles
    }

    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Total clauses across all articles, pseudo-clauses included.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.articles.iter().map(|a| a.clauses.len()).sum()
    }

    /// Find the first article with the given number and sub-number.
    #[must_use]
    pub fn find_article(&self, number: u32, sub_number: Option<u32>) -> Option<&ParsedArticle> {
        self.articles
            .iter()
            .find(|a| a.number == number && a.sub_number == sub_number)
    }
}
