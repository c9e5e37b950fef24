//! getseq: fetch a single sequence record by identifier or search term
//!
//! Command-line surface. Every flag is optional except the query.

use clap::{ArgAction, Parser, ValueEnum};
use log::Level;

use std::{fmt, path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Args {
    /// Accession, identifier or search term to look up
    #[arg(value_parser = parse_query)]
    pub query: String,

    /// Database: ncbi:n[ucleotide], ncbi:p[rotein], a .2bit path, a FASTA path or a configured alias
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// GenBank-style location to extract, e.g. 3..6, complement(10..80), join(1..9,20..30)
    #[arg(short = 'L', long)]
    pub location: Option<String>,

    /// Reverse-complement the extracted sequence
    #[arg(short = 'r', long, default_value = "false", action = ArgAction::SetTrue)]
    pub reverse: bool,

    /// Output format
    #[arg(short = 'm', long, value_enum, default_value = "fasta")]
    pub format: OutputFormat,

    /// Force uppercase residues
    #[arg(short = 'u', long, default_value = "false", action = ArgAction::SetTrue)]
    pub upcase: bool,

    /// Remote lookups: treat the query as an identifier and skip the search step
    #[arg(short = 'i', long = "by-id", default_value = "false", action = ArgAction::SetTrue)]
    pub by_id: bool,

    /// TOML file with database aliases and defaults
    #[arg(short = 'c', long, env = "GETSEQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging verbosity level (messages go to stderr)
    #[arg(long, default_value = "warn")]
    pub level: Level,
}

fn parse_query(s: &str) -> Result<String, String> {
    let query = s.trim();
    if query.is_empty() {
        Err("query must not be empty".to_string())
    } else {
        Ok(query.to_string())
    }
}

impl Args {
    /// Arguments for a plain FASTA lookup with every transform off.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            database: None,
            location: None,
            reverse: false,
            format: OutputFormat::Fasta,
            upcase: false,
            by_id: false,
            config: None,
            level: Level::Warn,
        }
    }
}

/// Formats the Args struct as a comma-separated string of key=value pairs.
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query={}, database={}, location={}, reverse={}, format={:?}, upcase={}, by_id={}, config={}, level={}",
            self.query,
            self.database.as_deref().unwrap_or("-"),
            self.location.as_deref().unwrap_or("-"),
            self.reverse,
            self.format,
            self.upcase,
            self.by_id,
            self.config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.level,
        )
    }
}

/// What gets printed for the record.
///
/// - `Fasta`: the (optionally transformed) sequence
/// - `GenBank`: the raw annotation record, untouched
/// - `IdList`: every matching identifier, one per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    #[value(name = "fasta", alias = "fa")]
    Fasta,
    #[value(name = "genbank", alias = "gb")]
    GenBank,
    #[value(name = "gilist")]
    IdList,
}
