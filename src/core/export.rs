// UNRaf Academy - core/export.rs
//
// CSV, JSON, and plain-text export of filtered records.
// Core layer: writes to any Write trait object.

use crate::util::constants;
use crate::util::error::ExportError;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// Output format for a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One `Display` line per record.
    #[default]
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Look up a format by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<ExportFormat> {
        match name.to_lowercase().as_str() {
            "text" => Some(ExportFormat::Text),
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Export records in the requested format. Returns the number written.
///
/// `target` names the destination in error messages (a path or "stdout").
pub fn export<R, W>(
    records: &[&R],
    format: ExportFormat,
    writer: W,
    target: &str,
) -> Result<usize, ExportError>
where
    R: Serialize + Display,
    W: Write,
{
    if records.len() > constants::MAX_EXPORT_RECORDS {
        return Err(ExportError::TooManyRecords {
            count: records.len(),
            max: constants::MAX_EXPORT_RECORDS,
        });
    }

    let count = match format {
        ExportFormat::Text => export_text(records, writer, target)?,
        ExportFormat::Csv => export_csv(records, writer, target)?,
        ExportFormat::Json => export_json(records, writer, target)?,
    };
    tracing::debug!(count, format = format.name(), dest = target, "Export complete");
    Ok(count)
}

/// Export records to CSV. The header row comes from the record's field names.
pub fn export_csv<R: Serialize, W: Write>(
    records: &[&R],
    writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut count = 0;
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| ExportError::Csv {
                target: target.to_string(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        target: target.to_string(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON format (array of objects).
pub fn export_json<R: Serialize, W: Write>(
    records: &[&R],
    mut writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ExportError::Json {
        target: target.to_string(),
        source: e,
    })?;
    writeln!(writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ExportError::Io {
            target: target.to_string(),
            source: e,
        })?;
    Ok(records.len())
}

/// Export records as plain text, one line each.
pub fn export_text<R: Display, W: Write>(
    records: &[&R],
    mut writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    for record in records {
        writeln!(writer, "{record}").map_err(|e| ExportError::Io {
            target: target.to_string(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| ExportError::Io {
        target: target.to_string(),
        source: e,
    })?;
    Ok(records.len())
}
