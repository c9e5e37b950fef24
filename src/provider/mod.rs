//! Lookup providers: the interchangeable backends a query is sent to.
//!
//! Each variant offers a subset of [`Capability`]; asking one for something
//! it does not offer yields [`GetseqError::UnsupportedOperation`].

pub mod eutils;
pub mod flatfile;
pub mod indexed;
pub mod remote;

pub use flatfile::FlatFileProvider;
pub use indexed::IndexedProvider;
pub use remote::{Division, RemoteFlavor, RemoteProvider};

use crate::{
    error::{GetseqError, Result},
    seq::SequenceRecord,
};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Sequence,
    Annotation,
    IdentifierList,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Sequence => "sequence lookup",
            Capability::Annotation => "annotation (GenBank) output",
            Capability::IdentifierList => "identifier lists",
        };
        f.write_str(name)
    }
}

pub enum Provider {
    Remote(RemoteProvider),
    FlatFile(FlatFileProvider),
    Indexed(IndexedProvider),
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Remote(remote) => match remote.flavor() {
                RemoteFlavor::Search => "remote search",
                RemoteFlavor::ById => "remote fetch-by-id",
            },
            Provider::FlatFile(_) => "flat FASTA file",
            Provider::Indexed(_) => "2bit database",
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        match (self, capability) {
            (_, Capability::Sequence) => true,
            (Provider::Remote(_), Capability::Annotation) => true,
            (Provider::Remote(remote), Capability::IdentifierList) => {
                remote.flavor() == RemoteFlavor::Search
            }
            (Provider::FlatFile(_) | Provider::Indexed(_), _) => false,
        }
    }

    fn unsupported(&self, capability: Capability) -> GetseqError {
        GetseqError::UnsupportedOperation {
            provider: self.name(),
            capability,
        }
    }

    pub fn fetch_sequence(&self, query: &str) -> Result<SequenceRecord> {
        match self {
            Provider::Remote(remote) => remote.fetch_sequence(query),
            Provider::FlatFile(file) => file.fetch_sequence(query),
            Provider::Indexed(db) => db.fetch_sequence(query),
        }
    }

    pub fn fetch_annotation(&self, query: &str) -> Result<String> {
        match self {
            Provider::Remote(remote) => remote.fetch_annotation(query),
            _ => Err(self.unsupported(Capability::Annotation)),
        }
    }

    pub fn fetch_identifier_list(&self, query: &str) -> Result<Vec<String>> {
        match self {
            Provider::Remote(remote) if remote.flavor() == RemoteFlavor::Search => {
                remote.fetch_identifier_list(query)
            }
            _ => Err(self.unsupported(Capability::IdentifierList)),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Remote(remote) => f
                .debug_struct("Remote")
                .field("division", &remote.division())
                .field("flavor", &remote.flavor())
                .finish(),
            Provider::FlatFile(file) => f.debug_tuple("FlatFile").field(&file.path()).finish(),
            Provider::Indexed(db) => f.debug_tuple("Indexed").field(&db.path()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eutils::{EUtils, Transport};
    use reqwest::Url;

    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, url: &Url) -> Result<String> {
            panic!("no request expected, got {}", url)
        }
    }

    fn remote(flavor: RemoteFlavor) -> Provider {
        Provider::Remote(RemoteProvider::new(
            Division::Protein,
            flavor,
            EUtils::new("https://eutils.test", Box::new(Unreachable)),
        ))
    }

    #[test]
    fn capability_matrix() {
        let search = remote(RemoteFlavor::Search);
        let by_id = remote(RemoteFlavor::ById);
        let file = Provider::FlatFile(FlatFileProvider::new("db.fa"));
        let twobit = Provider::Indexed(IndexedProvider::new("db.2bit"));

        for provider in [&search, &by_id, &file, &twobit] {
            assert!(provider.supports(Capability::Sequence));
        }

        assert!(search.supports(Capability::Annotation));
        assert!(search.supports(Capability::IdentifierList));
        assert!(by_id.supports(Capability::Annotation));
        assert!(!by_id.supports(Capability::IdentifierList));
        assert!(!file.supports(Capability::Annotation));
        assert!(!file.supports(Capability::IdentifierList));
        assert!(!twobit.supports(Capability::Annotation));
        assert!(!twobit.supports(Capability::IdentifierList));
    }

    #[test]
    fn missing_capability_fails_before_any_io() {
        let file = Provider::FlatFile(FlatFileProvider::new("/nonexistent/db.fa"));
        assert!(matches!(
            file.fetch_identifier_list("x"),
            Err(GetseqError::UnsupportedOperation {
                capability: Capability::IdentifierList,
                ..
            })
        ));

        assert!(matches!(
            remote(RemoteFlavor::ById).fetch_identifier_list("x"),
            Err(GetseqError::UnsupportedOperation { .. })
        ));

        let twobit = Provider::Indexed(IndexedProvider::new("/nonexistent/db.2bit"));
        assert!(matches!(
            twobit.fetch_annotation("x"),
            Err(GetseqError::UnsupportedOperation {
                capability: Capability::Annotation,
                ..
            })
        ));
    }
}
