use booking_dashboard::booking::distinct_hotels;
use booking_dashboard::parser::parse_bookings;
use booking_dashboard::pipeline::aggregate::build_report;

fn load_fixture() -> Vec<booking_dashboard::booking::BookingRecord> {
    let bytes = include_bytes!("fixtures/sample_bookings.csv");
    parse_bookings(bytes).expect("Failed to parse bookings fixture")
}

#[test]
fn test_full_pipeline_resort_hotel() {
    let table = load_fixture();

    let report = build_report(&table, "Resort Hotel");

    assert_eq!(report.kpis.total_bookings, 3);
    assert_eq!(report.kpis.avg_lead_time, 78.3);
    assert_eq!(report.kpis.cancel_rate, 66.67);

    // Months come back in calendar order, absent months omitted
    let months: Vec<(&str, usize)> = report
        .bookings_per_month
        .iter()
        .map(|m| (m.month.as_str(), m.bookings))
        .collect();
    assert_eq!(months, vec![("January", 1), ("March", 2)]);

    assert_eq!(report.adr_vs_lead_time.len(), 3);
    assert_eq!(report.adr_by_room_type.len(), 3);

    let cancellations: usize = report
        .cancellations_by_deposit
        .iter()
        .map(|d| d.cancellations)
        .sum();
    assert_eq!(cancellations, 2);
}

#[test]
fn test_full_pipeline_city_hotel() {
    let table = load_fixture();

    let report = build_report(&table, "City Hotel");

    assert_eq!(report.kpis.total_bookings, 2);
    assert_eq!(report.kpis.avg_lead_time, 27.5);
    assert_eq!(report.kpis.cancel_rate, 0.0);
    assert!(report.cancellations_by_deposit.is_empty());
    assert!(report.cancellations_by_segment.is_empty());
}

#[test]
fn test_fixture_hotels_in_first_appearance_order() {
    let table = load_fixture();
    assert_eq!(distinct_hotels(&table), vec!["Resort Hotel", "City Hotel"]);
}

#[test]
fn test_selection_absent_from_fixture_is_degenerate() {
    let table = load_fixture();

    let report = build_report(&table, "Airport Hotel");

    assert_eq!(report.kpis.total_bookings, 0);
    assert_eq!(report.kpis.cancel_rate, 0.0);
    assert!(report.bookings_per_month.is_empty());
}
