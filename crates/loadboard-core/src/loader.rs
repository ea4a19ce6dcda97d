// crates/loadboard-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (files, optional gzip) and delegates to the
//! JSON ingestion boundary in [`Catalog::from_raw`].

use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use crate::raw::ListingsRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::sync::Arc;

#[cfg(feature = "json")]
use std::path::{Path, PathBuf};

/// The fixture shipped with the crate.
static EMBEDDED_LOADS: &str = include_str!("../data/loads.json");

// Single in-process cache so the fixture is only parsed once per process.
static DEFAULT_CATALOG: OnceCell<Arc<Catalog>> = OnceCell::new();

impl Catalog {
    pub fn default_dataset_filename() -> &'static str {
        "loads.json"
    }

    /// The embedded default catalog, parsed on first use and shared after.
    ///
    /// The result is meant to be handed to a
    /// [`SearchSession`](crate::SearchSession); nothing in the pipeline reads
    /// this cache on its own.
    pub fn load_default() -> Result<Arc<Catalog>> {
        DEFAULT_CATALOG
            .get_or_try_init(|| Catalog::from_json_str(EMBEDDED_LOADS).map(Arc::new))
            .cloned()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: ListingsRaw = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Read failures surface as [`CatalogError::Io`], malformed JSON as
    /// [`CatalogError::Json`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: ListingsRaw = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CatalogError::Io(e.into())
            } else {
                CatalogError::Json(e)
            }
        })?;
        Self::from_raw(raw)
    }

    #[cfg(feature = "json")]
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load a catalog from a JSON file (or `.json.gz` with the `compact`
    /// feature).
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        tracing::debug!(path = %path.display(), listings = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the file
/// name ends in `.gz` and the `compact` feature is on.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            CatalogError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => CatalogError::Io(e),
    })?;
    let reader = std::io::BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if gzipped {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(CatalogError::NotFound(format!(
                "{} is gzip-compressed; enable the `compact` feature to read it",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn default_catalog_is_cached() {
        let a = Catalog::load_default().unwrap();
        let b = Catalog::load_default().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Catalog::from_json_str("[{\"id\": 1, ").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn read_failure_is_an_io_error() {
        let err = Catalog::from_reader(BrokenPipe).unwrap_err();
        assert!(
            matches!(&err, CatalogError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe),
            "got {err:?}"
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = Catalog::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn shipped_file_matches_embedded_fixture() {
        let path = Catalog::default_data_dir().join(Catalog::default_dataset_filename());
        let from_disk = Catalog::load_from_path(path).unwrap();
        assert_eq!(from_disk.len(), Catalog::load_default().unwrap().len());
    }
}
