//! Loading record collections from input files.

use camino::Utf8Path;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Strategy for reading a flat record collection from a file.
///
/// The pipeline is generic over this trait so alternative input formats can
/// be plugged in without touching the join or export stages.
pub trait RecordLoader {
    /// Read the file at `path` and parse it into a sequence of records.
    fn load<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<Vec<T>>;
}

/// Reads a JSON array of flat objects from the filesystem.
///
/// The whole file is read into memory before parsing; there is no streaming.
pub struct JsonLoader;

impl RecordLoader for JsonLoader {
    fn load<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<Vec<T>> {
        let text = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            Error::FileAccess {
                path: path.to_owned(),
                source,
            }
        })?;
        serde_json::from_str(&text).map_err(|source| Error::MalformedInput {
            path: path.to_owned(),
            source,
        })
    }
}
