//! JSON exporter.

use std::io::Write;

use camino::Utf8Path;

use super::Exporter;
use crate::error::{Error, Result};
use crate::model::CombinedRoom;

/// Writes the combined rooms as a JSON array with 2-space indentation.
///
/// Key order within each object follows the field order of
/// [`CombinedRoom`] (`id`, `name`, `students`).
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, rooms: &[CombinedRoom], path: &Utf8Path) -> Result<()> {
        let file = std::fs::File::create(path.as_std_path()).map_err(|source| {
            Error::FileAccess {
                path: path.to_owned(),
                source,
            }
        })?;
        let mut writer = std::io::BufWriter::new(file);
        // Serializing an in-memory CombinedRoom slice only fails on I/O.
        serde_json::to_writer_pretty(&mut writer, rooms).map_err(|source| Error::FileAccess {
            path: path.to_owned(),
            source: source.into(),
        })?;
        writer.flush().map_err(|source| Error::FileAccess {
            path: path.to_owned(),
            source,
        })
    }
}
