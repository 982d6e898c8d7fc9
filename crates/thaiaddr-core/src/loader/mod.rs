// crates/thaiaddr-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and turns
//! the camelCase reference-table JSON into a validated [`ReferenceTable`].
//!
//! Loading happens once, before any cascading is possible. A failure is final
//! for that attempt: nothing here retries.

mod builder;
mod common_io;

pub use builder::CACHE_SUFFIX;

use crate::error::Result;
use crate::model::ReferenceTable;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "json")]
use crate::model::{convert, raw::RecordsRaw};
#[cfg(feature = "json")]
use std::io::Read;

static SHARED_TABLE: OnceCell<Arc<ReferenceTable>> = OnceCell::new();

/// Environment variable consulted by [`ReferenceTable::default_data_path`].
pub const DATA_PATH_ENV: &str = "THAIADDR_DATA";

impl ReferenceTable {
    /// Default dataset location: `$THAIADDR_DATA`, else `data/geography.json`
    /// inside this crate.
    pub fn default_data_path() -> PathBuf {
        std::env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                    .join("data")
                    .join(Self::default_dataset_filename())
            })
    }

    pub fn default_dataset_filename() -> &'static str {
        "geography.json"
    }

    /// Parses the reference table from JSON text.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RecordsRaw = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parses the reference table from any JSON reader.
    #[cfg(feature = "json")]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RecordsRaw = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    #[cfg(feature = "json")]
    fn from_raw(raw: RecordsRaw) -> Result<Self> {
        let table = Self::new(convert::from_raw(raw)?)?;
        let stats = table.stats();
        tracing::info!(
            records = stats.records,
            provinces = stats.provinces,
            postal_codes = stats.postal_codes,
            "loaded reference table"
        );
        Ok(table)
    }

    /// **Smart Load:** binary images are read directly; JSON sources go
    /// through a fresh `<file>.table.bin` cache when one exists, otherwise
    /// they are parsed and the cache is (best-effort) rewritten.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == "bin") {
            return Self::load_binary(path);
        }
        Self::load_via_cache(path)
    }

    /// Loads once per process and hands out the same table afterwards.
    ///
    /// Only the first successful call's `path` is used; later calls return
    /// the cached table regardless of their argument.
    pub fn load_shared(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        SHARED_TABLE
            .get_or_try_init(|| Self::load_from_path(path).map(Arc::new))
            .cloned()
    }

    /// The table installed by [`ReferenceTable::load_shared`], if any.
    pub fn shared() -> Option<Arc<Self>> {
        SHARED_TABLE.get().cloned()
    }

    #[cfg(feature = "json")]
    fn parse_source(path: &Path) -> Result<Self> {
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn parse_source(path: &Path) -> Result<Self> {
        Err(crate::error::AddressError::InvalidData(format!(
            "cannot parse {}: the 'json' feature is disabled",
            path.display()
        )))
    }
}
