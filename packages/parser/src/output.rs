//! JSON and YAML output for parsed documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

use crate::error::{ParserError, Result};
use crate::types::ParsedDocument;

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Generate a file-name-friendly slug from a document name.
///
/// # Examples
/// ```
/// use jomun_parser::output::to_slug;
///
/// assert_eq!(to_slug("한도 대출 약정서 (2024)"), "한도_대출_약정서_2024");
/// assert_eq!(to_slug("!!!"), "document");
/// ```
#[must_use]
pub fn to_slug(name: &str) -> String {
    let text = name.to_lowercase();
    let text = SLUG_NON_WORD.replace_all(&text, "");
    let text = SLUG_SPACE_DASH.replace_all(&text, "_");
    let slug = text.trim_matches('_');
    if slug.is_empty() {
        "document".to_string()
    } else {
        slug.to_string()
    }
}

/// Render a document as pretty-printed JSON.
pub fn to_json(document: &ParsedDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Render a document as YAML with a document start marker.
pub fn to_yaml(document: &ParsedDocument) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(document)?;
    let lines: Vec<&str> = yaml
        .lines()
        .filter(|l| *l != "---")
        .map(str::trim_end)
        .collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Render a document in the given format.
pub fn render(document: &ParsedDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(document),
        OutputFormat::Yaml => to_yaml(document),
    }
}

/// Save a document into `output_dir` as `<slug>.<ext>`.
///
/// Writes to a temp file, syncs it, then renames it over the target so a
/// crash never leaves a half-written file behind.
pub fn save(document: &ParsedDocument, format: OutputFormat, output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(ParserError::InvalidInput(format!(
            "Output path is not a directory: {}",
            output_dir.display()
        )));
    }

    let slug = to_slug(document.name());
    let ext = format.extension();
    let output_file = output_dir.join(format!("{slug}.{ext}"));
    let temp_file = output_dir.join(format!(".{slug}.{ext}.tmp"));

    let content = render(document, format)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;
    tracing::debug!(path = %output_file.display(), "Saved document");

    Ok(output_file)
}
