use crate::{
    cli::{Args, OutputFormat},
    config::Config,
    consts::{
        FASTA_LINE_WIDTH, INDEXED_DB_MARKER, NCBI_NUCLEOTIDE_PREFIX, NCBI_PROTEIN_PREFIX,
    },
    error::{GetseqError, Result},
    location::Location,
    provider::{
        Division, FlatFileProvider, IndexedProvider, Provider, RemoteFlavor, RemoteProvider,
        eutils::{EUtils, HttpTransport},
    },
    seq::SequenceRecord,
};

use log::info;

use std::path::PathBuf;

/// Where a database specifier points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Division),
    IndexedDb(PathBuf),
    FlatFile(PathBuf),
}

/// Maps a database specifier onto a source; first matching rule wins.
///
/// Prefix and substring tests are case-sensitive. Anything unrecognised is
/// treated as a FASTA file, looked up in the alias table first.
pub fn select_source(specifier: &str, config: &Config) -> Source {
    if specifier.starts_with(NCBI_NUCLEOTIDE_PREFIX) {
        Source::Remote(Division::Nucleotide)
    } else if specifier.starts_with(NCBI_PROTEIN_PREFIX) {
        Source::Remote(Division::Protein)
    } else if specifier.contains(INDEXED_DB_MARKER) {
        Source::IndexedDb(PathBuf::from(specifier))
    } else {
        Source::FlatFile(config.resolve_path(specifier))
    }
}

/// Sub-range, strand and case options for sequence output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub location: Option<Location>,
    pub reverse: bool,
    pub upcase: bool,
}

impl TransformOptions {
    pub fn from_args(args: &Args) -> Result<Self> {
        let location = args
            .location
            .as_deref()
            .map(str::parse::<Location>)
            .transpose()?;

        Ok(Self {
            location,
            reverse: args.reverse,
            upcase: args.upcase,
        })
    }

    /// Applies splice, reverse complement and upcase, in that order.
    pub fn apply(&self, record: SequenceRecord) -> Result<SequenceRecord> {
        let mut record = record;

        if let Some(location) = &self.location {
            let seq = location.splice(&record.seq)?;
            record = record.with_seq(seq);
        }

        if self.reverse {
            record = record.reverse_complement();
        }

        if self.upcase {
            record = record.upcase();
        }

        Ok(record)
    }
}

/// Builds the provider for `source`; remote sources talk HTTP via reqwest.
pub fn build_provider(source: Source, flavor: RemoteFlavor, config: &Config) -> Result<Provider> {
    let provider = match source {
        Source::Remote(division) => {
            let eutils = EUtils::new(config.eutils_url.clone(), Box::new(HttpTransport::new()?));
            Provider::Remote(RemoteProvider::new(division, flavor, eutils))
        }
        Source::IndexedDb(path) => Provider::Indexed(IndexedProvider::new(path)),
        Source::FlatFile(path) => Provider::FlatFile(FlatFileProvider::new(path)),
    };

    Ok(provider)
}

/// Runs one lookup against `provider` and renders the output text.
///
/// Annotation records and identifier lists are printed as retrieved; only
/// FASTA output goes through the transforms.
pub fn render(
    provider: &Provider,
    query: &str,
    format: OutputFormat,
    transforms: &TransformOptions,
) -> Result<String> {
    info!("Querying {} for '{}' as {:?}", provider.name(), query, format);

    match format {
        OutputFormat::IdList => {
            let ids = provider.fetch_identifier_list(query)?;
            Ok(ids.iter().map(|id| format!("{}\n", id)).collect())
        }
        OutputFormat::GenBank => {
            let mut text = provider.fetch_annotation(query)?;
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Ok(text)
        }
        OutputFormat::Fasta => {
            let record = provider.fetch_sequence(query)?;
            info!("Retrieved {} ({} residues)", record.id(), record.len());

            let record = transforms.apply(record)?;
            Ok(record.to_fasta(FASTA_LINE_WIDTH))
        }
    }
}

/// Resolves `args` against an already loaded configuration.
pub fn resolve(args: &Args, config: &Config) -> Result<String> {
    // parse the location up front so a typo fails before any lookup
    let transforms = TransformOptions::from_args(args)?;

    let specifier = args
        .database
        .as_deref()
        .or(config.default_database.as_deref())
        .ok_or_else(|| {
            GetseqError::Config(
                "no database given; pass --database or set default_database".to_string(),
            )
        })?;

    let source = select_source(specifier, config);
    info!("Database '{}' selects {:?}", specifier, source);

    let flavor = if args.by_id {
        RemoteFlavor::ById
    } else {
        RemoteFlavor::Search
    };
    let provider = build_provider(source, flavor, config)?;

    render(&provider, &args.query, args.format, &transforms)
}

/// Loads the configuration named by `args` and performs the lookup.
pub fn getseq(args: &Args) -> Result<String> {
    let config = Config::load(args.config.as_deref())?;
    resolve(args, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::eutils::Transport;
    use reqwest::Url;

    use std::collections::HashMap;

    fn config_with_alias() -> Config {
        Config {
            databases: HashMap::from([("DmelN".to_string(), PathBuf::from("/db/dmel.nuc"))]),
            ..Config::default()
        }
    }

    #[test]
    fn selection_follows_rule_order() {
        let config = config_with_alias();

        let cases = [
            ("ncbi:n", Source::Remote(Division::Nucleotide)),
            ("ncbi:nucleotide", Source::Remote(Division::Nucleotide)),
            ("ncbi:p", Source::Remote(Division::Protein)),
            ("ncbi:protein", Source::Remote(Division::Protein)),
            ("/db/hg38.2bit", Source::IndexedDb(PathBuf::from("/db/hg38.2bit"))),
            ("2bit/ncbi:n", Source::IndexedDb(PathBuf::from("2bit/ncbi:n"))),
            ("DmelN", Source::FlatFile(PathBuf::from("/db/dmel.nuc"))),
            ("genes.fa", Source::FlatFile(PathBuf::from("genes.fa"))),
            ("NCBI:n", Source::FlatFile(PathBuf::from("NCBI:n"))),
            ("x.2BIT", Source::FlatFile(PathBuf::from("x.2BIT"))),
        ];

        for (specifier, expected) in cases {
            assert_eq!(select_source(specifier, &config), expected, "{}", specifier);
            // same input, same answer
            assert_eq!(select_source(specifier, &config), expected, "{}", specifier);
        }
    }

    #[test]
    fn transforms_apply_in_fixed_order() {
        let transforms = TransformOptions {
            location: Some("3..6".parse().unwrap()),
            reverse: true,
            upcase: true,
        };

        let record = SequenceRecord::new("demo original definition", b"acgtACGT".to_vec());
        let out = transforms.apply(record).unwrap();

        assert_eq!(out.seq, b"TACG".to_vec());
        assert_eq!(out.definition, "demo original definition");
    }

    #[test]
    fn no_transforms_is_identity() {
        let record = SequenceRecord::new("id", b"acgtN".to_vec());
        let out = TransformOptions::default().apply(record.clone()).unwrap();
        assert_eq!(out, record);
    }

    #[test]
    fn bad_location_fails_before_lookup() {
        let mut args = Args::new("seq1");
        args.database = Some("/nonexistent/db.fa".to_string());
        args.location = Some("10..".to_string());

        assert!(matches!(
            resolve(&args, &Config::default()),
            Err(GetseqError::InvalidRange { .. })
        ));
    }

    #[test]
    fn missing_database_is_config_error() {
        assert!(matches!(
            resolve(&Args::new("seq1"), &Config::default()),
            Err(GetseqError::Config(_))
        ));
    }

    #[test]
    fn gilist_against_flat_file_is_unsupported() {
        let mut args = Args::new("seq1");
        args.database = Some("/nonexistent/db.fa".to_string());
        args.format = OutputFormat::IdList;

        assert!(matches!(
            resolve(&args, &Config::default()),
            Err(GetseqError::UnsupportedOperation { .. })
        ));
    }

    struct Canned(&'static str);

    impl Transport for Canned {
        fn get(&self, _url: &Url) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn remote(body: &'static str, flavor: RemoteFlavor) -> Provider {
        let eutils = EUtils::new("https://eutils.test", Box::new(Canned(body)));
        Provider::Remote(RemoteProvider::new(Division::Nucleotide, flavor, eutils))
    }

    #[test]
    fn annotation_bypasses_transforms() {
        let gb = "LOCUS       AB000001  8 bp    DNA\nORIGIN\n        1 acgtacgt\n//";
        let provider = remote(gb, RemoteFlavor::ById);
        let transforms = TransformOptions {
            location: Some("1..2".parse().unwrap()),
            reverse: true,
            upcase: true,
        };

        let out = render(&provider, "AB000001", OutputFormat::GenBank, &transforms).unwrap();
        assert_eq!(out, format!("{}\n", gb));
    }

    #[test]
    fn identifier_list_prints_one_per_line() {
        let provider = remote(
            "<eSearchResult><Count>2</Count><IdList><Id>7</Id><Id>5</Id></IdList></eSearchResult>",
            RemoteFlavor::Search,
        );

        let out = render(&provider, "q", OutputFormat::IdList, &TransformOptions::default()).unwrap();
        assert_eq!(out, "7\n5\n");
    }

    #[test]
    fn remote_fasta_is_transformed_and_wrapped() {
        let provider = remote(">AB1 demo\nacgtACGT\n", RemoteFlavor::ById);
        let transforms = TransformOptions {
            location: Some("3..6".parse().unwrap()),
            reverse: true,
            upcase: true,
        };

        let out = render(&provider, "AB1", OutputFormat::Fasta, &transforms).unwrap();
        assert_eq!(out, ">AB1 demo\nTACG\n");
    }
}
