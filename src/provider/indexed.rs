use crate::{
    error::{GetseqError, Result},
    seq::SequenceRecord,
};

use log::{debug, info};
use twobit::TwoBitFile;

use std::path::{Path, PathBuf};

/// Point lookup by sequence name in a UCSC 2bit database.
#[derive(Debug, Clone)]
pub struct IndexedProvider {
    path: PathBuf,
}

impl IndexedProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn db_err(&self, e: impl std::fmt::Display) -> GetseqError {
        GetseqError::IndexedDb {
            path: self.path.clone(),
            msg: e.to_string(),
        }
    }

    pub fn fetch_sequence(&self, query: &str) -> Result<SequenceRecord> {
        info!("Looking up {} in {}", query, self.path.display());

        let mut db = TwoBitFile::open(&self.path)
            .map_err(|e| self.db_err(e))?
            .enable_softmask(true);

        let names = db.chrom_names();
        debug!("{} sequences indexed in {}", names.len(), self.path.display());

        if !names.iter().any(|name| name == query) {
            return Err(GetseqError::NotFound {
                query: query.to_string(),
                source_name: self.path.display().to_string(),
            });
        }

        let seq = db.read_sequence(query, ..).map_err(|e| self.db_err(e))?;

        Ok(SequenceRecord::new(query, seq.into_bytes()))
    }
}
