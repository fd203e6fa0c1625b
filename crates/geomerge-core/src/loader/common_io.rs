// crates/geomerge-core/src/loader/common_io.rs
use crate::error::{MergeError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps `.gz` paths in a Gzip decoder when
/// the `compact` feature is enabled. Returns a generic reader so callers
/// don't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MergeError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}
