// crates/geomerge-core/src/writer.rs

//! # Serializer
//!
//! Compact JSON output, staged through a temporary sibling so the
//! destination only ever sees a complete document.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};
use crate::model::FeatureCollection;

impl FeatureCollection {
    /// Serializes compactly to `path`.
    ///
    /// Output has no inter-token whitespace and non-ASCII characters are
    /// emitted literally. Serialization happens into a `.tmp` sibling which
    /// is renamed into place on success; on failure the sibling is removed
    /// and the destination is left as it was.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = staging_path(path);

        if let Err(e) = write_compact(self, &tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(MergeError::Io(e));
        }

        Ok(())
    }
}

/// `out.geojson` -> `out.geojson.tmp`, next to the destination so the final
/// rename stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{filename}.tmp"))
}

fn write_compact(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(MergeError::Io)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, collection).map_err(MergeError::Json)?;
    writer.flush().map_err(MergeError::Io)?;
    Ok(())
}
