//! CSV parser for booking tables.

use anyhow::Result;

use crate::booking::BookingRecord;

/// Decodes a headered CSV booking table from raw bytes.
///
/// Columns beyond those declared on [`BookingRecord`] are ignored.
///
/// # Errors
///
/// Returns an error if a row is missing a declared column or a numeric field
/// fails to parse.
pub fn parse_bookings(bytes: &[u8]) -> Result<Vec<BookingRecord>> {
    let mut rdr = csv::Reader::from_reader(bytes);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: BookingRecord = result?;
        records.push(record);
    }

    Ok(records)
}
