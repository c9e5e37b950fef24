//! Startup configuration: database aliases and the E-utilities location.
//!
//! ```toml
//! default_database = "ncbi:n"
//! eutils_url = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils"
//!
//! [databases]
//! DmelP = "/DB/KEGG/blastdb/d.melanogaster.pep"
//! ```

use crate::{
    consts::EUTILS_BASE_URL,
    error::{GetseqError, Result},
};

use log::info;
use serde::Deserialize;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Specifier used when `--database` is not given
    #[serde(default)]
    pub default_database: Option<String>,

    #[serde(default = "default_eutils_url")]
    pub eutils_url: String,

    /// Short names resolved to flat-file paths
    #[serde(default)]
    pub databases: HashMap<String, PathBuf>,
}

fn default_eutils_url() -> String {
    EUTILS_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_database: None,
            eutils_url: default_eutils_url(),
            databases: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GetseqError::io(path, e))?;
        let config = Self::from_toml(&text)
            .map_err(|e| GetseqError::Config(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded {} database alias(es) from {}",
            config.databases.len(),
            path.display()
        );

        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Looks `name` up in the alias table, falling back to `name` itself.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.databases
            .get(name)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.eutils_url, EUTILS_BASE_URL);
    }

    #[test]
    fn aliases_resolve_with_fallback() {
        let config = Config::from_toml(
            r#"
            default_database = "ncbi:p"

            [databases]
            DmelP = "/db/d.melanogaster.pep"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_database.as_deref(), Some("ncbi:p"));
        assert_eq!(
            config.resolve_path("DmelP"),
            PathBuf::from("/db/d.melanogaster.pep")
        );
        assert_eq!(
            config.resolve_path("local.fa"),
            PathBuf::from("local.fa")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("databse = 1").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Some(Path::new("/nonexistent/getseq.toml"))).unwrap_err();
        assert!(matches!(err, GetseqError::Io { .. }));
    }
}
