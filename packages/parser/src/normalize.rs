//! Whitespace and title normalization.
//!
//! Titles pulled from paginated exports often carry the page number that
//! followed the heading in the source, either after a space (`"정의 2"`)
//! or glued to the last syllable (`"정의2"`).

use regex::Regex;
use std::sync::LazyLock;

/// Any run of whitespace (tabs included).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Page number separated by whitespace at the very end.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[0-9]{1,3}$").expect("valid regex"));

/// Page number glued to a preceding Hangul syllable.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GLUED_PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣])[0-9]{1,2}$").expect("valid regex"));

/// Collapse whitespace runs to a single space and trim.
///
/// # Examples
/// ```
/// use jomun_parser::normalize::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace(" 대 출\t\t약정서 "), "대 출 약정서");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Normalize a header title: collapse whitespace, then strip page numbers.
///
/// # Examples
/// ```
/// use jomun_parser::normalize::clean_title;
///
/// assert_eq!(clean_title("정의 및 해석 2"), "정의 및 해석");
/// assert_eq!(clean_title("정의2"), "정의");
/// assert_eq!(clean_title("대출 약정   15"), "대출 약정");
/// ```
#[must_use]
pub fn clean_title(text: &str) -> String {
    let text = normalize_whitespace(text);
    let text = TRAILING_PAGE_NUMBER.replace(&text, "");
    let text = GLUED_PAGE_NUMBER.replace(&text, "$1");
    text.trim().to_string()
}

/// Remove all whitespace, for marker lookups that must ignore spacing.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
