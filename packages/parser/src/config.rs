//! Configuration constants and parse options.

/// Maximum title length (in characters) accepted on an article header.
pub const ARTICLE_TITLE_MAX_CHARS: usize = 80;

/// Maximum title length (in characters) accepted on a clause header.
pub const CLAUSE_TITLE_MAX_CHARS: usize = 100;

/// Number of paragraphs (candidate included) inspected per article candidate
/// when locating the body start.
pub const BOUNDARY_LOOKAHEAD: usize = 5;

/// Keywords that open an appendix section and end structural parsing.
pub const APPENDIX_KEYWORDS: [&str; 4] = ["부록", "별첨", "별지", "첨부"];

/// Preamble markers that identify the document title line.
pub const DEFAULT_TITLE_MARKERS: [&str; 3] = ["대출약정서", "약정서", "대출약정"];

/// Number, display number and title of a synthesized body-only clause.
pub const BODY_CLAUSE_LABEL: &str = "본문";

/// Environment variable overriding the title markers (comma-separated).
pub const TITLE_MARKERS_ENV: &str = "JOMUN_TITLE_MARKERS";

/// Settings that callers may override per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Markers searched (whitespace-insensitively) in the preamble to find
    /// the document name. First matching paragraph wins.
    pub title_markers: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            title_markers: DEFAULT_TITLE_MARKERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

impl ParseOptions {
    /// Read options from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var(TITLE_MARKERS_ENV).ok();
        Self::from_marker_list(raw.as_deref())
    }

    /// Build options from a comma-separated marker list.
    ///
    /// `None`, or a list without any non-blank entry, yields the defaults.
    ///
    /// # Examples
    /// ```
    /// use jomun_parser::config::ParseOptions;
    ///
    /// let options = ParseOptions::from_marker_list(Some("여신거래약정, 보증약정"));
    /// assert_eq!(options.title_markers, vec!["여신거래약정", "보증약정"]);
    ///
    /// assert_eq!(ParseOptions::from_marker_list(Some(" , ")), ParseOptions::default());
    /// ```
    #[must_use]
    pub fn from_marker_list(raw: Option<&str>) -> Self {
        let markers: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();

        if markers.is_empty() {
            Self::default()
        } else {
            Self {
                title_markers: markers,
            }
        }
    }

    /// Replace the title markers.
    #[must_use]
    pub fn with_title_markers(mut self, markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if !markers.is_empty() {
            self.title_markers = markers;
        }
        self
    }
}
