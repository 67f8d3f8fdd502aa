//! Scalar KPI computation over a filtered booking view.

use serde::Serialize;

use crate::booking::BookingRecord;
use crate::pipeline::utility::{mean, round_to};

/// The three headline metrics shown at the top of the dashboard.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_bookings: usize,
    pub avg_lead_time: f64,
    pub cancel_rate: f64,
}

impl Kpis {
    /// Computes all three metrics in one pass over the view.
    ///
    /// An empty view yields all-zero metrics; no division is attempted.
    pub fn from_view(view: &[&BookingRecord]) -> Self {
        let total = view.len();

        let mut canceled = 0usize;
        let mut lead_times = Vec::with_capacity(total);

        for record in view {
            if record.canceled() {
                canceled += 1;
            }
            lead_times.push(f64::from(record.lead_time));
        }

        Kpis {
            total_bookings: total,
            avg_lead_time: round_to(mean(&lead_times), 1),
            cancel_rate: round_to(Self::pct(canceled, total), 2),
        }
    }

    /// Percentage of `part` in `total`. Returns 0.0 when `total` is zero.
    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(is_canceled: u8, lead_time: u32) -> BookingRecord {
        BookingRecord {
            hotel: "Resort Hotel".to_string(),
            is_canceled,
            lead_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(Kpis::pct(10, 0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(Kpis::pct(50, 100), 50.0);
        assert_eq!(Kpis::pct(1, 4), 25.0);
    }

    #[test]
    fn test_from_view_empty() {
        let kpis = Kpis::from_view(&[]);

        assert_eq!(kpis.total_bookings, 0);
        assert_eq!(kpis.avg_lead_time, 0.0);
        assert_eq!(kpis.cancel_rate, 0.0);
    }

    #[test]
    fn test_from_view_two_of_three_canceled() {
        let records = vec![booking(1, 85), booking(0, 30), booking(1, 120)];
        let view: Vec<&BookingRecord> = records.iter().collect();

        let kpis = Kpis::from_view(&view);

        assert_eq!(kpis.total_bookings, 3);
        assert_eq!(kpis.avg_lead_time, 78.3);
        assert_eq!(kpis.cancel_rate, 66.67);
    }

    #[test]
    fn test_from_view_nothing_canceled() {
        let records = vec![booking(0, 10), booking(0, 45)];
        let view: Vec<&BookingRecord> = records.iter().collect();

        let kpis = Kpis::from_view(&view);

        assert_eq!(kpis.total_bookings, 2);
        assert_eq!(kpis.avg_lead_time, 27.5);
        assert_eq!(kpis.cancel_rate, 0.0);
    }

    #[test]
    fn test_cancel_rate_stays_in_range() {
        let records = vec![booking(1, 0), booking(1, 0)];
        let view: Vec<&BookingRecord> = records.iter().collect();

        let kpis = Kpis::from_view(&view);

        assert_eq!(kpis.cancel_rate, 100.0);
    }
}
