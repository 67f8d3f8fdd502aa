//! Output contracts produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stats::Kpis;

/// Bookings counted per arrival month, in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub bookings: usize,
}

/// Bookings counted per reserved room type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomTypeCount {
    pub room_type: String,
    pub bookings: usize,
}

/// One scatter point: booking lead time against the achieved daily rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdrLeadPoint {
    pub lead_time: u32,
    pub adr: f64,
    pub room_type: String,
}

/// One distribution sample of the daily rate for a room type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdrSample {
    pub room_type: String,
    pub adr: f64,
}

/// Canceled bookings counted per deposit type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositCancelCount {
    pub deposit_type: String,
    pub cancellations: usize,
}

/// Canceled bookings counted per market segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentCancelCount {
    pub market_segment: String,
    pub cancellations: usize,
}

/// Complete dashboard payload for a single hotel selection.
///
/// The rendering layer consumes this opaquely; field names are the stable
/// column labels of each table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub schema_version: u8,
    pub hotel: String,
    pub kpis: Kpis,
    pub bookings_per_month: Vec<MonthlyCount>,
    pub bookings_by_room_type: Vec<RoomTypeCount>,
    pub adr_vs_lead_time: Vec<AdrLeadPoint>,
    pub adr_by_room_type: Vec<AdrSample>,
    pub cancellations_by_deposit: Vec<DepositCancelCount>,
    pub cancellations_by_segment: Vec<SegmentCancelCount>,
}

/// Summary entry for the hotel index listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelIndexEntry {
    pub hotel: String,
    pub total_bookings: usize,
    pub cancel_rate: f64,
}

/// Top-level index of all exported hotel reports, written as `index.json`.
#[derive(Debug, Clone, Serialize)]
pub struct HotelIndex {
    pub generated_at: DateTime<Utc>,
    pub hotels: Vec<HotelIndexEntry>,
}
