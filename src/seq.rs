//! In-memory sequence records and the transforms applied before printing.

use crate::consts::{COMPLEMENT_TABLE, FASTA_LINE_WIDTH};

use std::fmt;

/// A definition line paired with its residues.
///
/// Transforms consume the record and hand back a new one; the definition
/// always stays the one the record was retrieved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub definition: String,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(definition: impl Into<String>, seq: Vec<u8>) -> Self {
        Self {
            definition: definition.into(),
            seq,
        }
    }

    /// First whitespace-delimited token of the definition line.
    pub fn id(&self) -> &str {
        self.definition.split_whitespace().next().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn with_seq(self, seq: Vec<u8>) -> Self {
        Self {
            definition: self.definition,
            seq,
        }
    }

    pub fn reverse_complement(self) -> Self {
        let seq = reverse_complement(&self.seq);
        self.with_seq(seq)
    }

    pub fn upcase(self) -> Self {
        let seq = self.seq.to_ascii_uppercase();
        self.with_seq(seq)
    }

    /// Renders the record as FASTA with `width` residues per line.
    pub fn to_fasta(&self, width: usize) -> String {
        let width = width.max(1);
        let mut out = String::with_capacity(
            self.definition.len() + 2 + self.seq.len() + self.seq.len() / width + 1,
        );

        out.push('>');
        out.push_str(&self.definition);
        out.push('\n');

        for line in self.seq.chunks(width) {
            out.push_str(&String::from_utf8_lossy(line));
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fasta(FASTA_LINE_WIDTH))
    }
}

/// Complements a single nucleotide symbol, keeping its case.
///
/// Unknown symbols, gaps and the self-complementary codes S, W and N are
/// returned unchanged.
pub fn complement(base: u8) -> u8 {
    let upper = base.to_ascii_uppercase();
    let comp = COMPLEMENT_TABLE
        .iter()
        .find(|(b, _)| *b == upper)
        .map(|(_, c)| *c)
        .unwrap_or(base);

    if base.is_ascii_lowercase() {
        comp.to_ascii_lowercase()
    } else {
        comp
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}
