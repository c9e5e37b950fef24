use crate::{
    error::{GetseqError, Result},
    fasta::open_fasta,
    seq::SequenceRecord,
};

use log::debug;

use std::path::{Path, PathBuf};

/// Linear scan over a local FASTA file (optionally gzipped).
///
/// No index is built; the file is read until the first record whose
/// leading header token equals the query.
#[derive(Debug, Clone)]
pub struct FlatFileProvider {
    path: PathBuf,
}

impl FlatFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fetch_sequence(&self, query: &str) -> Result<SequenceRecord> {
        let records = open_fasta(&self.path).map_err(|e| GetseqError::io(&self.path, e))?;

        for (idx, record) in records.enumerate() {
            let record = record.map_err(|e| GetseqError::io(&self.path, e))?;
            if record.id() == query {
                debug!("'{}' found at record {} of {}", query, idx + 1, self.path.display());
                return Ok(record);
            }
        }

        Err(GetseqError::NotFound {
            query: query.to_string(),
            source_name: self.path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FASTA: &str = ">seq1 first record\nACGT\n>seq10 prefix trap\nTTTT\n>seq2\nGG\nCC\n>seq2 duplicate\nAAAA\n";

    fn fasta_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temporary file");
        file.write_all(FASTA.as_bytes())
            .expect("failed to write temporary FASTA");
        file
    }

    #[test]
    fn exact_first_token_match() {
        let file = fasta_file();
        let provider = FlatFileProvider::new(file.path());

        let record = provider.fetch_sequence("seq1").unwrap();
        assert_eq!(record, SequenceRecord::new("seq1 first record", b"ACGT".to_vec()));
    }

    #[test]
    fn first_match_wins() {
        let file = fasta_file();
        let record = FlatFileProvider::new(file.path())
            .fetch_sequence("seq2")
            .unwrap();

        assert_eq!(record.definition, "seq2");
        assert_eq!(record.seq, b"GGCC".to_vec());
    }

    #[test]
    fn partial_tokens_do_not_match() {
        let file = fasta_file();
        let provider = FlatFileProvider::new(file.path());

        for query in ["seq", "first", "seq1 first", ""] {
            assert!(
                matches!(provider.fetch_sequence(query), Err(GetseqError::NotFound { .. })),
                "{:?} should not match",
                query
            );
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let provider = FlatFileProvider::new("/nonexistent/db.fa");
        assert!(matches!(
            provider.fetch_sequence("seq1"),
            Err(GetseqError::Io { .. })
        ));
    }
}
