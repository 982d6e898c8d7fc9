// crates/thaiaddr-core/src/loader/common_io.rs
use crate::error::{AddressError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a dataset file, buffered, unzipping `.gz` files on the fly.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AddressError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(flate2::read::GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(AddressError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `data/geography.json` -> `data/geography.json.table.bin`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}{suffix}"))
}
