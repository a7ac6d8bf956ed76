//! Spreadsheet export of the trip collection.

/// CSV spreadsheet sink.
pub mod csv;

use chrono::NaiveDate;
use tracing::info;

use crate::{config::TripLogConfig, trip::TripRecord};

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Ngày đi",
    "Giờ đi",
    "Người đăng ký",
    "Loại xe",
    "Điểm đến",
    "Mục đích",
    "Trạng thái",
];

/// Notice shown when there is nothing to export.
pub const EMPTY_NOTICE: &str = "Không có dữ liệu để xuất!";
/// Notice shown when the spreadsheet writer is not ready.
pub const UNAVAILABLE_NOTICE: &str = "Thư viện Excel chưa tải xong. Vui lòng thử lại sau.";

/// Failure while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// File system error.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// CSV encoding error.
    #[error("csv: {0}")]
    Csv(#[from] ::csv::Error),
}

/// One exported row with display-ready cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// `Ngày đi`.
    pub date: String,
    /// `Giờ đi`.
    pub time: String,
    /// `Người đăng ký`.
    pub name: String,
    /// `Loại xe`, as its label.
    pub car_type: String,
    /// `Điểm đến`.
    pub destination: String,
    /// `Mục đích`.
    pub purpose: String,
    /// `Trạng thái`, localized.
    pub status: String,
}

impl ExportRow {
    /// Renders `trip` into display cells.
    pub fn from_trip(trip: &TripRecord) -> Self {
        Self {
            date: trip.date.clone(),
            time: trip.time.clone(),
            name: trip.name.clone(),
            car_type: trip.car_type.label().to_string(),
            destination: trip.destination.clone(),
            purpose: trip.purpose.clone(),
            status: trip.status.label().to_string(),
        }
    }

    /// Cells in [`EXPORT_HEADERS`] order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.date.as_str(),
            self.time.as_str(),
            self.name.as_str(),
            self.car_type.as_str(),
            self.destination.as_str(),
            self.purpose.as_str(),
            self.status.as_str(),
        ]
    }
}

/// Target file and worksheet for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpec {
    /// File name including extension.
    pub file_name: String,
    /// Worksheet title.
    pub sheet_name: String,
}

/// Writes a single worksheet somewhere the user can download it from.
pub trait SpreadsheetSink {
    /// False while the writer cannot accept work.
    fn is_available(&self) -> bool {
        true
    }

    /// File extension without the dot.
    fn extension(&self) -> &str;

    /// Writes `headers` then `rows` as one worksheet.
    fn write_sheet(
        &mut self,
        spec: &SheetSpec,
        headers: &[&str],
        rows: &[ExportRow],
    ) -> Result<(), ExportError>;
}

/// What an export attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A file was produced.
    Written {
        /// Name of the written file.
        file_name: String,
        /// Data rows written, excluding the header.
        rows: usize,
    },
    /// The collection was empty.
    NothingToExport,
    /// The sink could not accept work.
    SinkUnavailable,
}

impl ExportOutcome {
    /// User-facing notice for outcomes that wrote nothing.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ExportOutcome::Written { .. } => None,
            ExportOutcome::NothingToExport => Some(EMPTY_NOTICE),
            ExportOutcome::SinkUnavailable => Some(UNAVAILABLE_NOTICE),
        }
    }
}

/// `{prefix}_{YYYY-MM-DD}.{extension}`.
pub fn export_file_name(prefix: &str, today: NaiveDate, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", today.format("%Y-%m-%d"))
}

/// Exports `trips` in the given order through `sink`.
pub fn export_trips<'a, I, K>(
    trips: I,
    sink: &mut K,
    config: &TripLogConfig,
    today: NaiveDate,
) -> Result<ExportOutcome, ExportError>
where
    I: IntoIterator<Item = &'a TripRecord>,
    K: SpreadsheetSink + ?Sized,
{
    let rows: Vec<ExportRow> = trips.into_iter().map(ExportRow::from_trip).collect();
    if rows.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }
    if !sink.is_available() {
        return Ok(ExportOutcome::SinkUnavailable);
    }

    let spec = SheetSpec {
        file_name: export_file_name(&config.export_file_prefix, today, sink.extension()),
        sheet_name: config.export_sheet_name.clone(),
    };
    sink.write_sheet(&spec, &EXPORT_HEADERS, &rows)?;
    info!(file = %spec.file_name, rows = rows.len(), "trips exported");

    Ok(ExportOutcome::Written {
        file_name: spec.file_name,
        rows: rows.len(),
    })
}
