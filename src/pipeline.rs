//! Orchestrates the load, combine, export pipeline.

use camino::Utf8Path;

use crate::combiner::combine;
use crate::error::Result;
use crate::export::OutputFormat;
use crate::loader::RecordLoader;
use crate::model::{Room, Student};

/// Wires a loader to the combiner and to the exporter selected by format.
///
/// Generic over [`RecordLoader`] so tests and future input formats can
/// substitute their own loader.
pub struct Pipeline<L: RecordLoader> {
    loader: L,
}

impl<L: RecordLoader> Pipeline<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load both input files, join them, and write the result to `output_path`.
    ///
    /// `format` is a validated [`OutputFormat`], so callers reject unsupported
    /// format tokens before any input file is read. If the export fails
    /// mid-write, the content of the output file is undefined.
    pub fn process(
        &self,
        rooms_path: &Utf8Path,
        students_path: &Utf8Path,
        output_path: &Utf8Path,
        format: OutputFormat,
    ) -> Result<()> {
        let rooms: Vec<Room> = self.loader.load(rooms_path)?;
        let students: Vec<Student> = self.loader.load(students_path)?;
        let combined = combine(&rooms, &students);
        format.exporter().export(&combined, output_path)
    }
}
