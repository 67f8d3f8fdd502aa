//! Bulk export: one JSON report per hotel plus a headline index.

use anyhow::Result;
use tracing::info;

use crate::booking::{BookingRecord, distinct_hotels};
use crate::output::write_json;
use crate::pipeline::aggregate::build_report;
use crate::pipeline::types::{HotelIndex, HotelIndexEntry};

/// Builds and writes one JSON report per distinct hotel in the table, then
/// writes `index.json` with the headline KPIs of each.
pub fn export_all(table: &[BookingRecord], out_dir: &str) -> Result<()> {
    let hotels = distinct_hotels(table);
    let mut index_entries = Vec::new();

    for hotel in hotels {
        let report = build_report(table, &hotel);

        let path = format!("{}/{}.json", out_dir, hotel_slug(&hotel));
        write_json(&path, &report)?;
        info!(
            hotel = %hotel,
            path = %path,
            total_bookings = report.kpis.total_bookings,
            "Report written"
        );

        index_entries.push(HotelIndexEntry {
            hotel,
            total_bookings: report.kpis.total_bookings,
            cancel_rate: report.kpis.cancel_rate,
        });
    }

    let index = HotelIndex {
        generated_at: chrono::Utc::now(),
        hotels: index_entries,
    };
    write_json(&format!("{}/index.json", out_dir), &index)?;

    Ok(())
}

/// Lowercased, file-name-safe form of a hotel name.
pub fn hotel_slug(hotel: &str) -> String {
    hotel
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
