//! Header classifiers for article (조), clause (항) and appendix paragraphs.
//!
//! Headers look like `제 1 조 정의`, `제4조의2 시장붕괴` or `제1항 차입의 종류`,
//! with arbitrary spacing and tabs between tokens. Full-width digits are
//! accepted in numbers.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{APPENDIX_KEYWORDS, ARTICLE_TITLE_MAX_CHARS, CLAUSE_TITLE_MAX_CHARS};
use crate::normalize::clean_title;

/// `제 N 조 [의 M] title`. Title length is checked separately.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^제\s*([0-9０-９]+)\s*조(?:의\s*([0-9０-９]+))?\s+(.+)$").expect("valid regex")
});

/// `제 N 항 title`; the title may follow the marker without a space.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^제\s*([0-9０-９]+)\s*항\s*(.+)$").expect("valid regex")
});

/// Start of a clause header, used to reject article titles like `제1조 제2항에 따라`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLAUSE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^제\s*[0-9０-９]+\s*항").expect("valid regex"));

/// Index token that may follow an appendix keyword: Roman numeral, digit,
/// Hangul syllable or dash (`부록 Ⅰ`, `별첨 가-1`).
const APPENDIX_INDEX_CLASS: &str = r"[IⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩ\d가-힣\-]";

fn appendix_keyword_alternation() -> String {
    APPENDIX_KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|")
}

/// Appendix heading such as `부록 Ⅰ 조건표`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static APPENDIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:{})\s*{APPENDIX_INDEX_CLASS}+",
        appendix_keyword_alternation()
    );
    Regex::new(&pattern).expect("valid regex")
});

/// In-sentence reference such as `부록 Ⅰ에 기재된`: the index token is
/// followed by a particle.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static APPENDIX_REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:{})\s*{APPENDIX_INDEX_CLASS}+[에의을를]",
        appendix_keyword_alternation()
    );
    Regex::new(&pattern).expect("valid regex")
});

/// A recognized article header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHeader {
    pub number: u32,
    pub sub_number: Option<u32>,
    /// Normalized title, never empty.
    pub title: String,
}

/// A recognized clause header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseHeader {
    pub number: u32,
    /// Normalized title, never empty.
    pub title: String,
}

/// Classification of a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paragraph {
    Appendix,
    Article(ArticleHeader),
    Clause(ClauseHeader),
    Text,
}

impl Paragraph {
    /// Classify a paragraph. Appendix boundaries take precedence, then
    /// article headers, then clause headers.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if is_appendix_start(text) {
            Self::Appendix
        } else if let Some(header) = match_article(text) {
            Self::Article(header)
        } else if let Some(header) = match_clause(text) {
            Self::Clause(header)
        } else {
            Self::Text
        }
    }

    /// One-letter symbol: `A`, `C`, `T`, or `X` for an appendix.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Self::Appendix => 'X',
            Self::Article(_) => 'A',
            Self::Clause(_) => 'C',
            Self::Text => 'T',
        }
    }
}

/// Parse a run of ASCII or full-width digits.
fn parse_number(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '0'..='9' => u32::from(c) - u32::from('0'),
            '０'..='９' => u32::from(c) - u32::from('０'),
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// Match an article header.
///
/// Rejects titles longer than the article bound, titles that start like a
/// clause header, and titles that normalize to nothing.
///
/// # Examples
/// ```
/// use jomun_parser::headers::match_article;
///
/// let header = match_article("제4조의2 시장붕괴 12").unwrap();
/// assert_eq!((header.number, header.sub_number), (4, Some(2)));
/// assert_eq!(header.title, "시장붕괴");
///
/// assert!(match_article("제1조 제2항에 따른 통지").is_none());
/// ```
#[must_use]
pub fn match_article(text: &str) -> Option<ArticleHeader> {
    let caps = ARTICLE_PATTERN.captures(text)?;
    let raw_title = caps.get(3)?.as_str();

    if raw_title.chars().count() > ARTICLE_TITLE_MAX_CHARS {
        return None;
    }
    if CLAUSE_START.is_match(raw_title.trim_start()) {
        return None;
    }

    let number = parse_number(caps.get(1)?.as_str())?;
    let sub_number = match caps.get(2) {
        Some(m) => Some(parse_number(m.as_str())?),
        None => None,
    };

    let title = clean_title(raw_title);
    if title.is_empty() {
        return None;
    }

    Some(ArticleHeader {
        number,
        sub_number,
        title,
    })
}

/// Match a clause header.
///
/// # Examples
/// ```
/// use jomun_parser::headers::match_clause;
///
/// let header = match_clause("제1항차입의 종류").unwrap();
/// assert_eq!(header.number, 1);
/// assert_eq!(header.title, "차입의 종류");
/// ```
#[must_use]
pub fn match_clause(text: &str) -> Option<ClauseHeader> {
    let caps = CLAUSE_PATTERN.captures(text)?;
    let raw_title = caps.get(2)?.as_str();

    if raw_title.chars().count() > CLAUSE_TITLE_MAX_CHARS {
        return None;
    }

    let number = parse_number(caps.get(1)?.as_str())?;
    let title = clean_title(raw_title);
    if title.is_empty() {
        return None;
    }

    Some(ClauseHeader { number, title })
}

/// Whether the paragraph opens an appendix.
///
/// Sentences that merely refer to an appendix (`부록 Ⅰ에 기재된 ...`) are
/// body text, not boundaries.
///
/// # Examples
/// ```
/// use jomun_parser::headers::is_appendix_start;
///
/// assert!(is_appendix_start("부록 Ⅰ 조건표"));
/// assert!(!is_appendix_start("부록 Ⅰ에 기재된 조건에 따른다."));
/// ```
#[must_use]
pub fn is_appendix_start(text: &str) -> bool {
    if APPENDIX_REFERENCE_PATTERN.is_match(text) {
        return false;
    }
    APPENDIX_PATTERN.is_match(text)
}
