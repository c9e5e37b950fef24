use super::eutils::{EUtils, Endpoint, SearchResult, first_id, parse_search};
use crate::{
    consts::MAX_IDENTIFIERS,
    error::{GetseqError, Result},
    fasta::FastaRecords,
    seq::SequenceRecord,
};

use log::{info, warn};

use std::fmt;

/// Entrez database a remote lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    Nucleotide,
    Protein,
}

impl Division {
    pub fn db(&self) -> &'static str {
        match self {
            Division::Nucleotide => "nucleotide",
            Division::Protein => "protein",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ncbi {}", self.db())
    }
}

/// How the query is turned into an identifier before fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemoteFlavor {
    /// Keyword search first, fetch the first hit
    #[default]
    Search,
    /// The query already is the identifier
    ById,
}

pub struct RemoteProvider {
    division: Division,
    flavor: RemoteFlavor,
    eutils: EUtils,
}

impl RemoteProvider {
    pub fn new(division: Division, flavor: RemoteFlavor, eutils: EUtils) -> Self {
        Self {
            division,
            flavor,
            eutils,
        }
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn flavor(&self) -> RemoteFlavor {
        self.flavor
    }

    fn not_found(&self, query: &str) -> GetseqError {
        GetseqError::NotFound {
            query: query.to_string(),
            source_name: self.division.to_string(),
        }
    }

    fn resolve_id(&self, query: &str) -> Result<String> {
        if self.flavor == RemoteFlavor::ById {
            return Ok(query.to_string());
        }

        let (_, body) = self
            .eutils
            .exec(Endpoint::Search, &[("db", self.division.db()), ("term", query)])?;
        let id = first_id(&body).ok_or_else(|| self.not_found(query))?;

        info!("'{}' resolved to {} id {}", query, self.division.db(), id);
        Ok(id)
    }

    fn efetch(&self, id: &str, rettype: &str) -> Result<String> {
        let (_, body) = self.eutils.exec(
            Endpoint::Fetch,
            &[
                ("db", self.division.db()),
                ("id", id),
                ("rettype", rettype),
                ("retmode", "text"),
            ],
        )?;
        Ok(body)
    }

    pub fn fetch_sequence(&self, query: &str) -> Result<SequenceRecord> {
        let id = self.resolve_id(query)?;
        let body = self.efetch(&id, "fasta")?;

        let mut records = FastaRecords::new(body.as_bytes());
        let record = match records.next() {
            Some(record) => record.map_err(|e| GetseqError::MalformedResponse {
                url: self.division.to_string(),
                msg: e.to_string(),
            })?,
            None => return Err(self.not_found(query)),
        };

        if records.next().is_some() {
            warn!(
                "efetch returned more than one record for {}; keeping {}",
                id,
                record.id()
            );
        }

        Ok(record)
    }

    pub fn fetch_annotation(&self, query: &str) -> Result<String> {
        let id = self.resolve_id(query)?;
        let body = self.efetch(&id, "gb")?;

        if body.trim().is_empty() {
            return Err(self.not_found(query));
        }

        Ok(body)
    }

    /// Lists every identifier the search matches, up to one esearch page.
    pub fn fetch_identifier_list(&self, query: &str) -> Result<Vec<String>> {
        let retmax = MAX_IDENTIFIERS.to_string();
        let (url, body) = self.eutils.exec(
            Endpoint::Search,
            &[
                ("db", self.division.db()),
                ("term", query),
                ("retmax", retmax.as_str()),
            ],
        )?;

        let SearchResult { count, ids } = parse_search(&body, &url)?;

        // TODO: page through with retstart once lists above the cap are needed
        if count > MAX_IDENTIFIERS {
            return Err(GetseqError::ResultTooLarge {
                count,
                max: MAX_IDENTIFIERS,
            });
        }

        info!("{} of {} identifiers returned for '{}'", ids.len(), count, query);
        Ok(ids)
    }
}
