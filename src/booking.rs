//! Booking record type and table-level helpers.

use serde::Deserialize;

/// A single booking row deserialized from the input CSV.
///
/// Only the columns the dashboard consumes are declared here; any other
/// columns present in the file are ignored by the reader.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct BookingRecord {
    pub hotel: String,
    pub is_canceled: u8,
    pub lead_time: u32,
    pub arrival_date_month: String,
    pub reserved_room_type: String,
    pub adr: f64,
    pub deposit_type: String,
    pub market_segment: String,
}

impl BookingRecord {
    /// Whether this booking was canceled (`is_canceled` is a 0/1 column).
    pub fn canceled(&self) -> bool {
        self.is_canceled != 0
    }
}

/// Returns the records matching `hotel`, preserving table order.
pub fn filter_by_hotel<'a>(records: &'a [BookingRecord], hotel: &str) -> Vec<&'a BookingRecord> {
    records.iter().filter(|r| r.hotel == hotel).collect()
}

/// Distinct hotel values in first-appearance order.
pub fn distinct_hotels(records: &[BookingRecord]) -> Vec<String> {
    let mut hotels: Vec<String> = Vec::new();

    for record in records {
        if !hotels.iter().any(|h| h == &record.hotel) {
            hotels.push(record.hotel.clone());
        }
    }

    hotels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(hotel: &str, is_canceled: u8) -> BookingRecord {
        BookingRecord {
            hotel: hotel.to_string(),
            is_canceled,
            ..Default::default()
        }
    }

    #[test]
    fn test_canceled_flag() {
        assert!(booking("Resort Hotel", 1).canceled());
        assert!(!booking("Resort Hotel", 0).canceled());
    }

    #[test]
    fn test_filter_by_hotel_preserves_order() {
        let records = vec![
            booking("Resort Hotel", 0),
            booking("City Hotel", 1),
            booking("Resort Hotel", 1),
        ];

        let view = filter_by_hotel(&records, "Resort Hotel");

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].is_canceled, 0);
        assert_eq!(view[1].is_canceled, 1);
    }

    #[test]
    fn test_filter_by_hotel_no_match() {
        let records = vec![booking("Resort Hotel", 0)];
        let view = filter_by_hotel(&records, "Airport Hotel");
        assert!(view.is_empty());
    }

    #[test]
    fn test_distinct_hotels_first_appearance_order() {
        let records = vec![
            booking("City Hotel", 0),
            booking("Resort Hotel", 0),
            booking("City Hotel", 1),
            booking("Resort Hotel", 1),
        ];

        assert_eq!(distinct_hotels(&records), vec!["City Hotel", "Resort Hotel"]);
    }

    #[test]
    fn test_distinct_hotels_empty_table() {
        assert!(distinct_hotels(&[]).is_empty());
    }
}
