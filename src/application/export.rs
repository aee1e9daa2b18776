/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::CSV_HEADER;
use crate::error::AppError;
use crate::presentation::format::ExportFormat;
use crate::presentation::rating::Rating;
use std::io::Write;

/// Writes ratings to `sink` in the given format
pub fn write_ratings<W: Write>(
    sink: W,
    ratings: &[Rating],
    format: ExportFormat,
) -> Result<(), AppError> {
    match format {
        ExportFormat::Csv => write_csv(sink, ratings),
        ExportFormat::Json => write_json(sink, ratings),
    }
}

/// Writes a header row then one row per rating
///
/// Authors are joined with `", "`; quoting is left to the CSV writer.
pub fn write_csv<W: Write>(sink: W, ratings: &[Rating]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(CSV_HEADER)?;
    for rating in ratings {
        writer.write_record(rating.csv_row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes all ratings as one JSON array in a single write
pub fn write_json<W: Write>(mut sink: W, ratings: &[Rating]) -> Result<(), AppError> {
    let payload = serde_json::to_vec(ratings)?;
    sink.write_all(&payload)?;
    sink.flush()?;
    Ok(())
}
