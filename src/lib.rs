//! getseq: fetch a single sequence record by identifier or search term
//!
//! This tool pulls one nucleotide or protein record from NCBI (E-utilities),
//! a local FASTA file (plain or gzipped) or a local 2bit database, and prints
//! it as FASTA, as a GenBank record, or as a list of matching identifiers.
//! FASTA output can be cut to a GenBank-style location, reverse-complemented
//! and uppercased.
//!
//! # Usage
//!
//! ```bash
//! Usage: getseq [OPTIONS] <QUERY>
//!
//! Arguments:
//!   <QUERY>  Accession, identifier or search term to look up
//!
//! Options:
//!   -d, --database <DATABASE>  Database: ncbi:n[ucleotide], ncbi:p[rotein], a .2bit path, a FASTA path or a configured alias
//!   -L, --location <LOCATION>  GenBank-style location to extract, e.g. 3..6, complement(10..80), join(1..9,20..30)
//!   -r, --reverse              Reverse-complement the extracted sequence
//!   -m, --format <FORMAT>      Output format [default: fasta] [possible values: fasta, genbank, gilist]
//!   -u, --upcase               Force uppercase residues
//!   -i, --by-id                Remote lookups: treat the query as an identifier and skip the search step
//!   -c, --config <CONFIG>      TOML file with database aliases and defaults [env: GETSEQ_CONFIG=]
//!       --level <LEVEL>        Logging verbosity level (messages go to stderr) [default: warn]
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```

pub mod cli;
pub mod config;
pub mod consts;
pub mod core;
pub mod error;
pub mod fasta;
pub mod location;
pub mod provider;
pub mod seq;

pub use cli::{Args, OutputFormat};
pub use config::Config;
pub use crate::core::{Source, TransformOptions, getseq, resolve, select_source};
pub use error::{GetseqError, Result};
pub use location::Location;
pub use provider::{Capability, Provider};
pub use seq::SequenceRecord;
