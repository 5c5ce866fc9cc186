//! Jomun parser - Recover the article/clause structure of Korean agreements.
//!
//! Input is the ordered list of paragraphs of a document (trimmed,
//! non-empty, no markup). The parser finds where the table of contents
//! ends and the body begins, names the document from its preamble, and
//! assembles numbered articles (조) and clauses (항) with their text,
//! stopping at the first appendix (부록, 별첨, 별지, 첨부).
//!
//! # Example
//!
//! ```
//! use jomun_parser::parse_paragraphs;
//!
//! let paragraphs = [
//!     "대출약정서",
//!     "제1조 정의",
//!     "제1항 차입의 종류",
//!     "본문설명",
//!     "제2조 이자",
//!     "설명",
//! ];
//! let doc = parse_paragraphs(&paragraphs, "loan.docx");
//!
//! assert_eq!(doc.name(), "대출약정서");
//! assert_eq!(doc.articles()[0].clauses()[0].title(), "차입의 종류");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and parse options
//! - [`error`]: Error types and Result alias
//! - [`types`]: Parsed document tree
//! - [`normalize`]: Whitespace and title normalization
//! - [`headers`]: Article, clause and appendix classifiers
//! - [`boundary`]: Table-of-contents / body boundary detection
//! - [`preamble`]: Document name from the preamble
//! - [`assembler`]: Article/clause state machine
//! - [`parser`]: Parse entry point
//! - [`paragraphs`]: Paragraph input
//! - [`output`]: JSON/YAML output
//! - [`cli`]: Command-line interface

pub mod assembler;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod error;
pub mod headers;
pub mod normalize;
pub mod output;
pub mod paragraphs;
pub mod parser;
pub mod preamble;
pub mod types;

// Re-export main functions
pub use parser::{parse_paragraphs, parse_paragraphs_with};

// Re-export commonly used items
pub use config::ParseOptions;
pub use error::{ParserError, Result};
pub use types::{ClauseContent, ParsedArticle, ParsedClause, ParsedDocument};
