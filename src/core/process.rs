use crate::domain::model::{ProcessedRecord, SourceRecord};
use crate::utils::error::Result;
use std::io::Write;

/// Prints the record's title and body to `out` and derives the processed record.
///
/// Lines are written as each field is read, so a missing `body` leaves the
/// header and title line already printed.
pub fn process_record<W: Write + ?Sized>(
    record: &SourceRecord,
    out: &mut W,
) -> Result<ProcessedRecord> {
    writeln!(out, "Processing data:")?;

    let title = record.require_str("title")?;
    writeln!(out, "  Title: {}", title)?;

    let body = record.require_str("body")?;
    writeln!(out, "  Body: {}", body)?;

    tracing::debug!("Processed record titled '{}'", title);
    Ok(ProcessedRecord::new(title))
}
