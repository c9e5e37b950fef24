use std::{io, path::PathBuf};
use thiserror::Error;

use crate::provider::Capability;

#[derive(Debug, Error)]
pub enum GetseqError {
    #[error("no record matching '{query}' in {source_name}")]
    NotFound { query: String, source_name: String },

    #[error("{provider} does not support {capability}")]
    UnsupportedOperation {
        provider: &'static str,
        capability: Capability,
    },

    #[error("search matched {count} records, more than the {max} that can be listed")]
    ResultTooLarge { count: usize, max: usize },

    #[error("invalid location '{location}': {msg}")]
    InvalidRange { location: String, msg: String },

    #[error("request to {url} failed: {msg}")]
    Transport { url: String, msg: String },

    #[error("unexpected response from {url}: {msg}")]
    MalformedResponse { url: String, msg: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot read 2bit database {}: {msg}", .path.display())]
    IndexedDb { path: PathBuf, msg: String },
}

pub type Result<T> = std::result::Result<T, GetseqError>;

impl GetseqError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GetseqError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_range(location: &str, msg: impl Into<String>) -> Self {
        GetseqError::InvalidRange {
            location: location.to_string(),
            msg: msg.into(),
        }
    }
}
