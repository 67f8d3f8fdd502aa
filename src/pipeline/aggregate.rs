//! Derived aggregate tables and the single pipeline entry point.

use std::collections::HashMap;

use crate::booking::{BookingRecord, filter_by_hotel};
use crate::pipeline::types::{
    AdrLeadPoint, AdrSample, DashboardReport, DepositCancelCount, MonthlyCount, RoomTypeCount,
    SegmentCancelCount,
};
use crate::pipeline::utility::month_index;
use crate::stats::Kpis;

/// Builds the complete dashboard payload for one hotel selection.
///
/// Pure with respect to its inputs: the same table and selection always
/// produce the same report. A selection matching no rows yields zeroed KPIs
/// and empty tables.
pub fn build_report(table: &[BookingRecord], hotel: &str) -> DashboardReport {
    let view = filter_by_hotel(table, hotel);

    DashboardReport {
        schema_version: 1,
        hotel: hotel.to_string(),
        kpis: Kpis::from_view(&view),
        bookings_per_month: bookings_per_month(&view),
        bookings_by_room_type: bookings_by_room_type(&view),
        adr_vs_lead_time: adr_vs_lead_time(&view),
        adr_by_room_type: adr_by_room_type(&view),
        cancellations_by_deposit: cancellations_by_deposit(&view),
        cancellations_by_segment: cancellations_by_segment(&view),
    }
}

/// Bookings per arrival month, in calendar order.
///
/// Months absent from the view are omitted rather than listed as zero, and
/// month names outside the calendar twelve are dropped.
pub fn bookings_per_month(view: &[&BookingRecord]) -> Vec<MonthlyCount> {
    let counts = count_by(view.iter().map(|r| r.arrival_date_month.as_str()));

    let mut months: Vec<(usize, MonthlyCount)> = counts
        .into_iter()
        .filter_map(|(month, bookings)| {
            month_index(&month).map(|index| (index, MonthlyCount { month, bookings }))
        })
        .collect();
    months.sort_by_key(|(index, _)| *index);

    months.into_iter().map(|(_, row)| row).collect()
}

/// Bookings per reserved room type, most frequent first.
pub fn bookings_by_room_type(view: &[&BookingRecord]) -> Vec<RoomTypeCount> {
    value_counts(count_by(view.iter().map(|r| r.reserved_room_type.as_str())))
        .into_iter()
        .map(|(room_type, bookings)| RoomTypeCount { room_type, bookings })
        .collect()
}

/// Per-record projection for the ADR vs lead time scatter chart.
pub fn adr_vs_lead_time(view: &[&BookingRecord]) -> Vec<AdrLeadPoint> {
    view.iter()
        .map(|r| AdrLeadPoint {
            lead_time: r.lead_time,
            adr: r.adr,
            room_type: r.reserved_room_type.clone(),
        })
        .collect()
}

/// Per-record projection for the ADR distribution chart. Quartiles are the
/// rendering layer's job.
pub fn adr_by_room_type(view: &[&BookingRecord]) -> Vec<AdrSample> {
    view.iter()
        .map(|r| AdrSample {
            room_type: r.reserved_room_type.clone(),
            adr: r.adr,
        })
        .collect()
}

/// Canceled bookings per deposit type, most frequent first.
pub fn cancellations_by_deposit(view: &[&BookingRecord]) -> Vec<DepositCancelCount> {
    let canceled = view.iter().filter(|r| r.canceled());

    value_counts(count_by(canceled.map(|r| r.deposit_type.as_str())))
        .into_iter()
        .map(|(deposit_type, cancellations)| DepositCancelCount {
            deposit_type,
            cancellations,
        })
        .collect()
}

/// Canceled bookings per market segment, most frequent first.
pub fn cancellations_by_segment(view: &[&BookingRecord]) -> Vec<SegmentCancelCount> {
    let canceled = view.iter().filter(|r| r.canceled());

    value_counts(count_by(canceled.map(|r| r.market_segment.as_str())))
        .into_iter()
        .map(|(market_segment, cancellations)| SegmentCancelCount {
            market_segment,
            cancellations,
        })
        .collect()
}

fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for key in keys {
        *counts.entry(key.to_string()).or_default() += 1;
    }

    counts
}

/// Orders grouped counts the way a value-counts listing does: most frequent
/// first, ties by name so hash order never leaks into the output.
fn value_counts(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut rows: Vec<(String, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
