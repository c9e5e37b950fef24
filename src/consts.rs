//! getseq: fetch a single sequence record by identifier or search term
//!
//! Source markers, E-utilities endpoints and the nucleotide complement table.

/// Database specifier prefix selecting the remote nucleotide division
pub const NCBI_NUCLEOTIDE_PREFIX: &str = "ncbi:n";
/// Database specifier prefix selecting the remote protein division
pub const NCBI_PROTEIN_PREFIX: &str = "ncbi:p";
/// Substring marking a specifier as a local indexed (2bit) database
pub const INDEXED_DB_MARKER: &str = "2bit";

pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const ESEARCH_ENDPOINT: &str = "esearch.fcgi";
pub const EFETCH_ENDPOINT: &str = "efetch.fcgi";

/// Hard cap on a single esearch page; NCBI refuses larger retmax values.
pub const MAX_IDENTIFIERS: usize = 100_000;

pub const FASTA_LINE_WIDTH: usize = 60;

pub const COMPLEMENT_TABLE: [(u8, u8); 14] = [
    // Watson-Crick
    (b'A', b'T'),
    (b'T', b'A'),
    (b'C', b'G'),
    (b'G', b'C'),
    // RNA
    (b'U', b'A'),
    // two-base ambiguity
    (b'R', b'Y'),
    (b'Y', b'R'),
    (b'K', b'M'),
    (b'M', b'K'),
    // three-base ambiguity
    (b'B', b'V'),
    (b'V', b'B'),
    (b'D', b'H'),
    (b'H', b'D'),
    // self-complementary codes (S, W, N) fall through unchanged
    (b'N', b'N'),
];
