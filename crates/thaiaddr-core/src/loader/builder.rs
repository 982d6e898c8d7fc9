// crates/thaiaddr-core/src/loader/builder.rs
use super::common_io;
use crate::error::{AddressError, Result};
use crate::model::ReferenceTable;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Suffix appended to a JSON source's file name for its binary cache.
pub const CACHE_SUFFIX: &str = ".table.bin";

// Guards against decoding a corrupted or hostile file into a huge allocation.
const BINARY_LIMIT: u64 = 256 * 1024 * 1024;

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(BINARY_LIMIT)
        .allow_trailing_bytes()
}

impl ReferenceTable {
    /// Writes the table as a bincode image.
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        bincode_options().serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a bincode image written by [`ReferenceTable::save_binary`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AddressError::NotFound(format!("binary table not found at {}: {}", path.display(), e))
        })?;
        let table: ReferenceTable = bincode_options().deserialize_from(BufReader::new(file))?;
        if table.is_empty() {
            return Err(AddressError::Empty);
        }
        tracing::info!(records = table.len(), path = %path.display(), "loaded binary table");
        Ok(table)
    }

    pub(super) fn load_via_cache(source: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);

        if is_cache_fresh(source, &cache_path) {
            match Self::load_binary(&cache_path) {
                Ok(table) => return Ok(table),
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable table cache"),
            }
        }

        let table = Self::parse_source(source)?;

        if let Err(e) = table.save_binary(&cache_path) {
            tracing::debug!(error = %e, path = %cache_path.display(), "could not write table cache");
        }
        Ok(table)
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // Source gone but cache present: the cache is all we have.
        Err(_) => true,
    }
}
