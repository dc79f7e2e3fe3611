//! Tests against a facility sheet shaped like the published export

use super::create_facility_sheet;
use crate::constants::columns;
use crate::csv_parser::parse_records;
use crate::models::Facility;

#[test]
fn test_sheet_record_count_and_columns() {
    let records = parse_records(&create_facility_sheet());

    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.len(), 14);
        assert!(record.contains_key(columns::APPEAL));
        assert!(record.contains_key("pic3"));
    }
}

#[test]
fn test_sheet_full_row() {
    let records = parse_records(&create_facility_sheet());
    let first = &records[0];

    assert_eq!(first.get(columns::NAME), Some("ひまわり教室"));
    assert_eq!(first.get(columns::ADDRESS), Some("東京都千代田区1-1, 2F"));
    assert_eq!(first.get(columns::SCHOOLS), Some("第一小学校・第二小学校"));
    assert_eq!(first.get(columns::APPEAL), Some("少人数で\"じっくり\"療育"));
    assert_eq!(first.get("pic3"), Some(""));

    let facility = Facility::new(first);
    assert!(facility.has_transport());
    assert!(!facility.has_meals());
    assert_eq!(facility.hours(), "10:00 - 18:00");
    assert_eq!(facility.schools(), vec!["第一小学校", "第二小学校"]);
}

#[test]
fn test_sheet_blank_cells_use_display_defaults() {
    let records = parse_records(&create_facility_sheet());
    let facility = Facility::new(&records[1]);

    assert_eq!(facility.hours(), "00:00 - 00:00");
    assert_eq!(facility.open_days_label(), "月〜金");
    assert!(facility.has_meals());
    assert!(facility.extra_photos().is_empty());
}

#[test]
fn test_sheet_short_row() {
    let records = parse_records(&create_facility_sheet());
    let short = &records[2];

    assert_eq!(short.get(columns::PHONE), Some("075-555-6666"));
    assert_eq!(short.get(columns::TRANSPORT), None);

    let facility = Facility::new(short);
    assert_eq!(facility.transport_label(), "要確認");
    assert_eq!(facility.phone_label(), "075-555-6666");
}
