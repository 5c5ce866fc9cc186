//! Body-boundary detection.
//!
//! Agreements usually open with a table of contents that lists every
//! article and clause using the same header lines as the body. A listing
//! is a run of headers; the body is a header followed by actual text:
//!
//! ```text
//! TOC:   A C C A C ...
//! Body:  A C T ...   or   A T ...
//! ```

use crate::config::BOUNDARY_LOOKAHEAD;
use crate::headers::{match_article, match_clause};

/// Structural symbol used for boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Article header.
    Article,
    /// Clause header.
    Clause,
    /// Anything else, appendix headings included.
    Text,
}

impl Symbol {
    /// Classify a paragraph for boundary detection.
    #[must_use]
    pub fn of(paragraph: &str) -> Self {
        if match_article(paragraph).is_some() {
            Self::Article
        } else if match_clause(paragraph).is_some() {
            Self::Clause
        } else {
            Self::Text
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Article => 'A',
            Self::Clause => 'C',
            Self::Text => 'T',
        }
    }
}

/// Render a symbol window as a compact string (e.g. `"ACTTA"`).
fn pattern_string(window: &[Symbol]) -> String {
    window.iter().map(|s| s.as_char()).collect()
}

/// Whether a symbol window starting at an article header marks the body.
///
/// Windows shorter than three symbols (article too close to the end of the
/// document) never qualify.
fn is_body_window(window: &[Symbol]) -> bool {
    if window.len() < 3 {
        return false;
    }
    match window {
        // Article, clause, then content within the next two slots.
        [Symbol::Article, Symbol::Clause, rest @ ..] => {
            rest.iter().take(2).any(|s| *s == Symbol::Text)
        }
        // Article with content and no clause subdivision.
        [Symbol::Article, Symbol::Text, ..] => true,
        _ => false,
    }
}

/// Find the index of the first paragraph of the document body.
///
/// Returns the first article header whose lookahead window looks like real
/// content. Falls back to the first article header anywhere, and to `0`
/// when the document has no article header at all.
///
/// # Examples
/// ```
/// use jomun_parser::boundary::find_body_start;
///
/// let paragraphs = [
///     "목 차", "제1조 정의", "제1항 용어", "제2조 이자",
///     "제1조 정의", "제1항 용어", "이 약정에서 사용하는 용어는 다음과 같다.",
/// ];
/// assert_eq!(find_body_start(&paragraphs), 4);
/// ```
#[must_use]
pub fn find_body_start<S: AsRef<str>>(paragraphs: &[S]) -> usize {
    let symbols: Vec<Symbol> = paragraphs.iter().map(|p| Symbol::of(p.as_ref())).collect();

    let mut first_article = None;
    for (i, symbol) in symbols.iter().enumerate() {
        if *symbol != Symbol::Article {
            continue;
        }
        first_article.get_or_insert(i);

        let end = (i + BOUNDARY_LOOKAHEAD).min(symbols.len());
        let window = &symbols[i..end];
        if is_body_window(window) {
            tracing::debug!(index = i, pattern = %pattern_string(window), "Body start found");
            return i;
        }
        tracing::trace!(index = i, pattern = %pattern_string(window), "Skipping listing candidate");
    }

    match first_article {
        Some(i) => {
            tracing::debug!(index = i, "No content pattern found, using first article header");
            i
        }
        None => {
            tracing::debug!("No article header found, whole document is body");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_after_toc() {
        let paragraphs = [
            "대출약정서",
            "제1조 정의",
            "제1항 용어",
            "제2항 해석",
            "제2조 대출",
            "제1항 대출금",
            "제1조 정의",
            "제1항 용어",
            "이 약정에서 사용하는 용어는 다음과 같다.",
        ];
        assert_eq!(find_body_start(&paragraphs), 6);
    }

    #[test]
    fn test_article_followed_by_text() {
        let paragraphs = ["표지", "제1조 목적", "이 약정은 대출 조건을 정한다."];
        assert_eq!(find_body_start(&paragraphs), 1);
    }

    #[test]
    fn test_text_two_slots_after_clause() {
        // A, C, C, T: content sits in the second slot after the clause.
        let paragraphs = ["제1조 정의", "제1항 용어", "제2항 해석", "내용"];
        assert_eq!(find_body_start(&paragraphs), 0);
    }

    #[test]
    fn test_text_three_slots_after_clause_is_listing() {
        // A, C, C, C, T at index 0 does not qualify; the fallback is the
        // first article header anyway.
        let paragraphs = ["서문", "제1조 정의", "제1항 가", "제2항 나", "제3항 다", "내용"];
        assert_eq!(find_body_start(&paragraphs), 1);
    }

    #[test]
    fn test_toc_run_never_selected() {
        let paragraphs = [
            "목차",
            "제1조 정의",
            "제2조 대출",
            "제3조 이자",
            "제1조 정의",
            "정의 내용",
            "추가 내용",
        ];
        assert_eq!(find_body_start(&paragraphs), 4);
    }

    #[test]
    fn test_fallback_to_first_article() {
        let paragraphs = ["표지", "제1조 정의", "제1항 용어", "제2항 해석", "제3항 효력"];
        assert_eq!(find_body_start(&paragraphs), 1);
    }

    #[test]
    fn test_short_window_falls_back() {
        // Only two paragraphs from the article: window too short.
        let paragraphs = ["머리말", "제1조 정의", "내용"];
        assert_eq!(find_body_start(&paragraphs), 1);
        let paragraphs = ["머리말", "제1조 정의"];
        assert_eq!(find_body_start(&paragraphs), 1);
    }

    #[test]
    fn test_no_articles() {
        let paragraphs = ["그냥 문단", "또 다른 문단"];
        assert_eq!(find_body_start(&paragraphs), 0);

        let empty: [&str; 0] = [];
        assert_eq!(find_body_start(&empty), 0);
    }

    #[test]
    fn test_is_body_window() {
        use Symbol::{Article as A, Clause as C, Text as T};
        assert!(is_body_window(&[A, C, T]));
        assert!(is_body_window(&[A, C, C, T, A]));
        assert!(!is_body_window(&[A, C, C, C, T]));
        assert!(is_body_window(&[A, T, A]));
        assert!(!is_body_window(&[A, A, T]));
        assert!(!is_body_window(&[A, T]));
    }
}
