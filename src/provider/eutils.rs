//! Minimal NCBI E-utilities client: esearch and efetch over plain GET.

use crate::error::{GetseqError, Result};

use log::{debug, info};
use regex::Regex;
use reqwest::{Url, blocking::Client};

use std::sync::LazyLock;

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Id>(.+?)</Id>").expect("valid Id pattern"));
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Count>\s*(\d+)\s*</Count>").expect("valid Count pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Fetch,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => crate::consts::ESEARCH_ENDPOINT,
            Endpoint::Fetch => crate::consts::EFETCH_ENDPOINT,
        }
    }
}

/// Something that can perform a GET and hand back the body as text.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<String>;
}

/// Blocking HTTP transport backed by reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("getseq/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GetseqError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        let transport_err = |msg: String| GetseqError::Transport {
            url: url.to_string(),
            msg,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| transport_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_err(format!("HTTP {}", status)));
        }

        response.text().map_err(|e| transport_err(e.to_string()))
    }
}

/// An esearch page: the reported total and the identifiers actually returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub count: usize,
    pub ids: Vec<String>,
}

pub struct EUtils {
    base: String,
    transport: Box<dyn Transport>,
}

impl EUtils {
    pub fn new(base: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            base: base.into(),
            transport,
        }
    }

    /// Builds `{base}/{endpoint}?k=v&...`, form-encoding the values.
    pub fn url(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base.trim_end_matches('/'), endpoint.path());
        Url::parse_with_params(&raw, params)
            .map_err(|e| GetseqError::Config(format!("invalid E-utilities URL {}: {}", raw, e)))
    }

    pub fn exec(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<(Url, String)> {
        let url = self.url(endpoint, params)?;
        info!("GET {}", url);

        let body = self.transport.get(&url)?;
        debug!("{} returned {} bytes", endpoint.path(), body.len());

        Ok((url, body))
    }
}

/// First `<Id>` of an esearch document.
pub fn first_id(body: &str) -> Option<String> {
    ID_RE
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|id| !id.is_empty())
}

pub fn parse_search(body: &str, url: &Url) -> Result<SearchResult> {
    let count = COUNT_RE
        .captures(body)
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .ok_or_else(|| GetseqError::MalformedResponse {
            url: url.to_string(),
            msg: "no <Count> element in esearch result".to_string(),
        })?;

    let ids = ID_RE
        .captures_iter(body)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    Ok(SearchResult { count, ids })
}
