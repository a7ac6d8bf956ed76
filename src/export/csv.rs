use std::{
    fs::File,
    io::Write,
    path::PathBuf,
};

use super::{ExportError, ExportRow, SheetSpec, SpreadsheetSink};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes each export as a UTF-8 CSV file under a directory.
///
/// A byte-order mark leads the file so spreadsheet apps pick UTF-8 for the
/// Vietnamese headers. CSV has no worksheets, so `sheet_name` is not written.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Sink writing into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Destination path of an export.
    pub fn path_for(&self, spec: &SheetSpec) -> PathBuf {
        self.dir.join(&spec.file_name)
    }
}

impl SpreadsheetSink for CsvSink {
    fn is_available(&self) -> bool {
        self.dir.is_dir()
    }

    fn extension(&self) -> &str {
        "csv"
    }

    fn write_sheet(
        &mut self,
        spec: &SheetSpec,
        headers: &[&str],
        rows: &[ExportRow],
    ) -> Result<(), ExportError> {
        let mut file = File::create(self.path_for(spec))?;
        file.write_all(UTF8_BOM)?;

        let mut wtr = ::csv::Writer::from_writer(file);
        wtr.write_record(headers)?;
        for row in rows {
            wtr.write_record(row.cells())?;
        }
        wtr.flush()?;
        Ok(())
    }
}
