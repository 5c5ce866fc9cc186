//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::boundary::find_body_start;
use crate::config::ParseOptions;
use crate::error::{ParserError, Result};
use crate::headers::Paragraph;
use crate::output::{render, save, OutputFormat};
use crate::paragraphs::read_paragraphs;
use crate::parser::parse_paragraphs_with;
use crate::preamble::extract_preamble;

/// Jomun parser - Recover article/clause structure from agreement text.
#[derive(Parser)]
#[command(name = "jomun-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a paragraph file (one paragraph per line) into an article tree.
    Parse {
        /// Paragraph text file
        input: PathBuf,

        /// Fallback document name (default: input file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Directory to save the result in (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Title marker used to find the document name (repeatable)
        #[arg(long = "title-marker")]
        title_markers: Vec<String>,
    },

    /// Show how each paragraph is classified and where the body starts.
    Inspect {
        /// Paragraph text file
        input: PathBuf,

        /// Title marker used to find the document name (repeatable)
        #[arg(long = "title-marker")]
        title_markers: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            name,
            format,
            output,
            title_markers,
        } => parse_command(
            &input,
            name.as_deref(),
            format,
            output.as_deref(),
            title_markers,
        ),
        Commands::Inspect {
            input,
            title_markers,
        } => inspect_command(&input, title_markers),
    }
}

/// Options from the environment, overridden by command-line markers.
fn resolve_options(title_markers: Vec<String>) -> ParseOptions {
    ParseOptions::from_env().with_title_markers(title_markers)
}

/// Fallback name: explicit `--name`, else the input file name.
fn resolve_name(input: &Path, name: Option<&str>) -> Result<String> {
    match name {
        Some(name) if name.trim().is_empty() => Err(ParserError::EmptyName),
        Some(name) => Ok(name.trim().to_string()),
        None => input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ParserError::InvalidInput(format!("Input path has no file name: {}", input.display()))
            }),
    }
}

/// Execute the parse command.
fn parse_command(
    input: &Path,
    name: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
    title_markers: Vec<String>,
) -> Result<()> {
    let fallback_name = resolve_name(input, name)?;
    let options = resolve_options(title_markers);

    let paragraphs = read_paragraphs(input)?;
    let document = parse_paragraphs_with(&paragraphs, &fallback_name, &options);

    match output {
        Some(output_dir) => {
            let path = save(&document, format, output_dir)?;
            println!("  Name: {}", style(document.name()).green());
            println!("  Articles: {}", document.article_count());
            println!("  Clauses: {}", document.clause_count());
            println!();
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            print!("{}", render(&document, format)?);
            if format == OutputFormat::Json {
                println!();
            }
        }
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(input: &Path, title_markers: Vec<String>) -> Result<()> {
    let options = resolve_options(title_markers);
    let paragraphs = read_paragraphs(input)?;

    let body_start = find_body_start(&paragraphs);
    let preamble = extract_preamble(&paragraphs, body_start, &options);

    println!("  Paragraphs: {}", paragraphs.len());
    println!("  Body start: {}", style(body_start).cyan());
    println!(
        "  Name: {}",
        preamble
            .name
            .as_deref()
            .map_or_else(|| style("(none)").yellow().to_string(), |n| style(n).green().to_string())
    );
    println!();

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let symbol = Paragraph::classify(paragraph).symbol();
        let marker = if i == body_start { ">" } else { " " };
        println!("{marker} {i:>4} {symbol} {paragraph}");
    }

    Ok(())
}
