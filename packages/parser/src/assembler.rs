//! Structural assembler: builds the article/clause tree from body paragraphs.
//!
//! The assembler owns the article and clause currently being filled. They
//! are moved into the finished tree when the next header (or the end of
//! input) closes them, so content is always attached to the right clause
//! without positional bookkeeping.

use std::ops::ControlFlow;

use crate::headers::{ArticleHeader, ClauseHeader, Paragraph};
use crate::types::{ClauseContent, ParsedArticle, ParsedClause};

/// Assembler state. Each variant owns its pending lines.
#[derive(Debug, Default)]
enum State {
    /// Before the first article header.
    #[default]
    NoArticle,

    /// Inside an article that has no clause yet; text is article body.
    InArticle {
        article: ParsedArticle,
        body_lines: Vec<String>,
    },

    /// Inside a clause; text belongs to the clause.
    InClause {
        article: ParsedArticle,
        clause: ParsedClause,
        clause_lines: Vec<String>,
    },
}

/// Close a clause: attach its pending lines and append it to the article.
fn close_clause(article: &mut ParsedArticle, mut clause: ParsedClause, lines: Vec<String>) {
    if let Some(content) = ClauseContent::from_lines(lines) {
        clause.set_content(content);
    }
    article.push_clause(clause);
}

impl State {
    /// Close whatever article is open and return it.
    ///
    /// An article that never saw a clause header but collected body text
    /// gets a single body pseudo-clause holding that text.
    fn close(self) -> Option<ParsedArticle> {
        match self {
            Self::NoArticle => None,
            Self::InArticle {
                mut article,
                body_lines,
            } => {
                if let Some(content) = ClauseContent::from_lines(body_lines) {
                    tracing::debug!(
                        article = %article.display_number(),
                        lines = content.lines().len(),
                        "Synthesizing body clause"
                    );
                    article.push_clause(ParsedClause::body(content));
                }
                Some(article)
            }
            Self::InClause {
                mut article,
                clause,
                clause_lines,
            } => {
                close_clause(&mut article, clause, clause_lines);
                Some(article)
            }
        }
    }
}

/// State machine turning body paragraphs into articles.
#[derive(Debug, Default)]
pub struct Assembler {
    articles: Vec<ParsedArticle>,
    state: State,
    halted: bool,
}

impl Assembler {
    /// Create an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an appendix boundary has been reached.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Feed the next body paragraph.
    ///
    /// Returns `Break` once an appendix boundary is seen; every paragraph
    /// fed after that is ignored.
    pub fn feed(&mut self, paragraph: &str) -> ControlFlow<()> {
        if self.halted {
            return ControlFlow::Break(());
        }

        match Paragraph::classify(paragraph) {
            Paragraph::Appendix => {
                tracing::debug!(paragraph = %paragraph, "Appendix reached, stopping");
                self.halted = true;
                return ControlFlow::Break(());
            }
            Paragraph::Article(header) => self.open_article(header),
            Paragraph::Clause(header) => self.open_clause(header, paragraph),
            Paragraph::Text => self.push_text(paragraph),
        }

        ControlFlow::Continue(())
    }

    /// Close the open article and return the finished articles.
    #[must_use]
    pub fn finish(mut self) -> Vec<ParsedArticle> {
        if let Some(article) = std::mem::take(&mut self.state).close() {
            self.articles.push(article);
        }
        self.articles
    }

    fn open_article(&mut self, header: ArticleHeader) {
        if let Some(previous) = std::mem::take(&mut self.state).close() {
            self.articles.push(previous);
        }

        let article = ParsedArticle::new(
            header.number,
            header.sub_number,
            header.title,
            self.articles.len() + 1,
        );
        tracing::debug!(
            article = %article.display_number(),
            title = %article.title(),
            order = article.order_index(),
            "Article opened"
        );

        self.state = State::InArticle {
            article,
            body_lines: Vec::new(),
        };
    }

    fn open_clause(&mut self, header: ClauseHeader, paragraph: &str) {
        let article = match std::mem::take(&mut self.state) {
            State::NoArticle => {
                // A clause header outside any article is plain text.
                self.push_text(paragraph);
                return;
            }
            State::InArticle {
                article,
                body_lines,
            } => {
                if !body_lines.is_empty() {
                    tracing::debug!(
                        article = %article.display_number(),
                        lines = body_lines.len(),
                        "Dropping article body text superseded by clauses"
                    );
                }
                article
            }
            State::InClause {
                mut article,
                clause,
                clause_lines,
            } => {
                close_clause(&mut article, clause, clause_lines);
                article
            }
        };

        let clause = ParsedClause::numbered(header.number, header.title, article.next_clause_order());
        tracing::trace!(
            article = %article.display_number(),
            clause = clause.number(),
            order = clause.order_index(),
            "Clause opened"
        );

        self.state = State::InClause {
            article,
            clause,
            clause_lines: Vec::new(),
        };
    }

    fn push_text(&mut self, paragraph: &str) {
        match &mut self.state {
            State::NoArticle => {
                tracing::trace!(paragraph = %paragraph, "Discarding text outside any article");
            }
            State::InArticle { body_lines, .. } => body_lines.push(paragraph.to_string()),
            State::InClause { clause_lines, .. } => clause_lines.push(paragraph.to_string()),
        }
    }
}

/// Assemble articles from body paragraphs, stopping at the first appendix.
#[must_use]
pub fn assemble<S: AsRef<str>>(paragraphs: &[S]) -> Vec<ParsedArticle> {
    let mut assembler = Assembler::new();
    for paragraph in paragraphs {
        if assembler.feed(paragraph.as_ref()).is_break() {
            break;
        }
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content_lines(clause: &ParsedClause) -> Vec<&str> {
        clause
            .content()
            .map(|c| c.lines().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_article_with_clauses() {
        let articles = assemble(&[
            "제1조 정의",
            "제1항 차입의 종류",
            "첫째 줄",
            "둘째 줄",
            "제2항 차입의 방법",
            "방법 설명",
        ]);

        assert_eq!(articles.len(), 1);
        let clauses = articles[0].clauses();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].title(), "차입의 종류");
        assert_eq!(content_lines(&clauses[0]), vec!["첫째 줄", "둘째 줄"]);
        assert_eq!(clauses[0].content().map(ClauseContent::text), Some("첫째 줄\n둘째 줄"));
        assert_eq!(clauses[1].order_index(), 2);
        assert_eq!(content_lines(&clauses[1]), vec!["방법 설명"]);
    }

    #[test]
    fn test_body_clause_synthesized() {
        let articles = assemble(&["제2조 이자", "설명", "추가 설명", "제3조 상환", "상환 설명"]);

        assert_eq!(articles.len(), 2);
        for article in &articles {
            assert_eq!(article.clauses().len(), 1);
            assert!(article.clauses()[0].is_body());
        }
        assert_eq!(content_lines(&articles[0].clauses()[0]), vec!["설명", "추가 설명"]);
        assert_eq!(content_lines(&articles[1].clauses()[0]), vec!["상환 설명"]);
    }

    #[test]
    fn test_article_without_text_has_no_clauses() {
        let articles = assemble(&["제1조 정의", "제2조 이자", "설명"]);
        assert_eq!(articles.len(), 2);
        assert!(articles[0].clauses().is_empty());
        assert_eq!(articles[1].clauses().len(), 1);
    }

    #[test]
    fn test_clause_without_content_keeps_none() {
        let articles = assemble(&["제1조 정의", "제1항 용어", "제2항 해석", "해석 내용"]);
        let clauses = articles[0].clauses();
        assert!(clauses[0].content().is_none());
        assert_eq!(content_lines(&clauses[1]), vec!["해석 내용"]);
    }

    #[test]
    fn test_article_text_before_clause_is_dropped() {
        let articles = assemble(&["제1조 정의", "머리 문장", "제1항 용어", "용어 내용"]);
        let clauses = articles[0].clauses();
        assert_eq!(clauses.len(), 1);
        assert!(!clauses[0].is_body());
        assert_eq!(content_lines(&clauses[0]), vec!["용어 내용"]);
    }

    #[test]
    fn test_appendix_halts() {
        let articles = assemble(&[
            "제1조 정의",
            "제1항 차입의 종류",
            "내용",
            "부록 Ⅰ 조건표",
            "표 내용",
            "제2조 이자",
        ]);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].clauses().len(), 1);
        assert_eq!(content_lines(&articles[0].clauses()[0]), vec!["내용"]);
    }

    #[test]
    fn test_appendix_before_any_article() {
        let articles = assemble(&["부록 1 서식", "제1조 정의", "내용"]);
        assert!(articles.is_empty());
    }

    #[test]
    fn test_appendix_reference_is_text() {
        let articles = assemble(&["제5조 조건", "부록 Ⅰ에 기재된 조건에 따른다."]);
        assert_eq!(
            content_lines(&articles[0].clauses()[0]),
            vec!["부록 Ⅰ에 기재된 조건에 따른다."]
        );
    }

    #[test]
    fn test_text_before_first_article_discarded() {
        let articles = assemble(&["머리말", "제1항 고아 항", "제1조 정의", "내용"]);
        assert_eq!(articles.len(), 1);
        assert_eq!(content_lines(&articles[0].clauses()[0]), vec!["내용"]);
    }

    #[test]
    fn test_feed_after_halt_is_ignored() {
        let mut assembler = Assembler::new();
        assert!(assembler.feed("제1조 정의").is_continue());
        assert!(assembler.feed("별첨 1").is_break());
        assert!(assembler.is_halted());
        assert!(assembler.feed("제2조 이자").is_break());
        assert_eq!(assembler.finish().len(), 1);
    }

    #[test]
    fn test_order_indices_contiguous() {
        let articles = assemble(&[
            "제1조 정의",
            "제1항 가",
            "제3항 다",
            "제4조의2 시장붕괴",
            "내용",
            "제5조 기타",
            "제2항 나",
            "제7항 사",
            "제9항 자",
        ]);

        let article_orders: Vec<usize> = articles.iter().map(ParsedArticle::order_index).collect();
        assert_eq!(article_orders, vec![1, 2, 3]);
        for article in &articles {
            let orders: Vec<usize> = article.clauses().iter().map(ParsedClause::order_index).collect();
            let expected: Vec<usize> = (1..=article.clauses().len()).collect();
            assert_eq!(orders, expected);
        }
        assert_eq!(articles[1].display_number(), "4의2");
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(assemble(&empty).is_empty());
    }
}
