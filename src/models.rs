//! Core data structures for the facility directory.
//!
//! A [`Record`] is one parsed CSV row keyed by header name. [`Facility`]
//! is a borrowed view over a record that knows the sheet's columns and the
//! defaults shown when a cell is blank.

use crate::constants::{MAPS_SEARCH_URL, columns, defaults};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One data row mapped by header name
///
/// Every record produced by a single parse carries the same key set. A
/// key whose cell was absent from a short row maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    /// Value of a field, `None` when the key is unknown or the cell was absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Value of a field, treating an empty string as absent
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl FromIterator<(String, Option<String>)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Read-only view of a record as an after-school care facility
#[derive(Debug, Clone, Copy)]
pub struct Facility<'a> {
    record: &'a Record,
}

impl<'a> Facility<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }

    pub fn name(&self) -> Option<&'a str> {
        self.record.get(columns::NAME)
    }

    pub fn address(&self) -> Option<&'a str> {
        self.record.get(columns::ADDRESS)
    }

    pub fn phone(&self) -> Option<&'a str> {
        self.record.get(columns::PHONE)
    }

    pub fn appeal(&self) -> Option<&'a str> {
        self.record.get_non_empty(columns::APPEAL)
    }

    pub fn closed_days(&self) -> Option<&'a str> {
        self.record.get_non_empty(columns::CLOSED_DAYS)
    }

    pub fn main_photo(&self) -> &'a str {
        self.record
            .get_non_empty(columns::PHOTO_MAIN)
            .unwrap_or(defaults::PLACEHOLDER_PHOTO)
    }

    pub fn extra_photos(&self) -> Vec<&'a str> {
        columns::PHOTO_EXTRA
            .iter()
            .filter_map(|column| self.record.get_non_empty(column))
            .collect()
    }

    pub fn has_transport(&self) -> bool {
        self.offers(columns::TRANSPORT)
    }

    pub fn has_meals(&self) -> bool {
        self.offers(columns::MEALS)
    }

    pub fn transport_label(&self) -> &'a str {
        self.label_or(columns::TRANSPORT, defaults::UNCONFIRMED)
    }

    pub fn meals_label(&self) -> &'a str {
        self.label_or(columns::MEALS, defaults::UNCONFIRMED)
    }

    /// Opening hours as `open - close`
    pub fn hours(&self) -> String {
        format!(
            "{} - {}",
            self.label_or(columns::HOURS_OPEN, defaults::TIME),
            self.label_or(columns::HOURS_CLOSED, defaults::TIME)
        )
    }

    pub fn open_days_label(&self) -> &'a str {
        self.label_or(columns::OPEN_DAYS, defaults::OPEN_DAYS)
    }

    pub fn phone_label(&self) -> &'a str {
        self.label_or(columns::PHONE, defaults::NOT_REGISTERED)
    }

    /// Destination schools, split on the separators used in the sheet
    pub fn schools(&self) -> Vec<&'a str> {
        self.record
            .get_non_empty(columns::SCHOOLS)
            .map(|raw| {
                raw.split(defaults::SCHOOL_SEPARATORS)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone().unwrap_or_default())
    }

    pub fn maps_url(&self) -> String {
        format!(
            "{}{}",
            MAPS_SEARCH_URL,
            urlencoding::encode(self.address().unwrap_or_default())
        )
    }

    /// Substring match on name or address
    ///
    /// A facility with neither field never matches, not even an empty term.
    pub fn matches(&self, term: &str) -> bool {
        self.name().is_some_and(|n| n.contains(term))
            || self.address().is_some_and(|a| a.contains(term))
    }

    fn offers(&self, column: &str) -> bool {
        self.record
            .get(column)
            .is_some_and(|v| v.contains(defaults::AVAILABLE_MARKER))
    }

    fn label_or(&self, column: &str, fallback: &'static str) -> &'a str {
        self.record.get_non_empty(column).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Option<&str>)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_record_missing_and_empty_values() {
        let r = record(&[("a", Some("1")), ("b", None), ("c", Some(""))]);

        assert_eq!(r.len(), 3);
        assert!(r.contains_key("b"));
        assert_eq!(r.get("a"), Some("1"));
        assert_eq!(r.get("b"), None);
        assert_eq!(r.get("c"), Some(""));
        assert_eq!(r.get_non_empty("c"), None);
        assert_eq!(r.get("unknown"), None);
    }

    #[test]
    fn test_record_insert_last_wins() {
        let mut r = Record::new();
        r.insert("name", Some("first".to_string()));
        r.insert("name", Some("second".to_string()));

        assert_eq!(r.len(), 1);
        assert_eq!(r.get("name"), Some("second"));
    }

    #[test]
    fn test_record_serializes_missing_as_null() {
        let r = record(&[("a", None)]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"a":null}"#);
    }

    #[test]
    fn test_facility_defaults_for_blank_record() {
        let r = record(&[(columns::NAME, Some("ひまわり")), (columns::MEALS, Some(""))]);
        let f = Facility::new(&r);

        assert_eq!(f.name(), Some("ひまわり"));
        assert_eq!(f.main_photo(), defaults::PLACEHOLDER_PHOTO);
        assert!(f.extra_photos().is_empty());
        assert_eq!(f.hours(), "00:00 - 00:00");
        assert_eq!(f.open_days_label(), "月〜金");
        assert_eq!(f.transport_label(), "要確認");
        assert_eq!(f.meals_label(), "要確認");
        assert_eq!(f.phone_label(), "登録なし");
        assert!(f.schools().is_empty());
        assert!(f.closed_days().is_none());
        assert!(f.appeal().is_none());
        assert!(!f.has_transport());
        assert!(!f.has_meals());
    }

    #[test]
    fn test_facility_populated_fields() {
        let r = record(&[
            (columns::NAME, Some("にじいろ")),
            (columns::HOURS_OPEN, Some("10:00")),
            (columns::HOURS_CLOSED, Some("18:30")),
            (columns::TRANSPORT, Some("有（片道のみ）")),
            (columns::MEALS, Some("無")),
            (columns::PHOTO_MAIN, Some("https://img.test/1.jpg")),
            ("pic2", Some("")),
            ("pic3", Some("https://img.test/3.jpg")),
            (columns::CLOSED_DAYS, Some("日曜・祝日")),
        ]);
        let f = Facility::new(&r);

        assert_eq!(f.hours(), "10:00 - 18:30");
        assert!(f.has_transport());
        assert!(!f.has_meals());
        assert_eq!(f.transport_label(), "有（片道のみ）");
        assert_eq!(f.main_photo(), "https://img.test/1.jpg");
        assert_eq!(f.extra_photos(), vec!["https://img.test/3.jpg"]);
        assert_eq!(f.closed_days(), Some("日曜・祝日"));
    }

    #[test]
    fn test_schools_split_on_all_separators() {
        let r = record(&[(columns::SCHOOLS, Some("第一小学校・第二小学校、 北中学校,,南中学校 "))]);
        let f = Facility::new(&r);

        assert_eq!(
            f.schools(),
            vec!["第一小学校", "第二小学校", "北中学校", "南中学校"]
        );
    }

    #[test]
    fn test_links() {
        let r = record(&[
            (columns::ADDRESS, Some("東京都 千代田区1-1")),
            (columns::PHONE, Some("03-0000-0000")),
        ]);
        let f = Facility::new(&r);

        assert_eq!(f.tel_link(), "tel:03-0000-0000");
        let url = f.maps_url();
        assert!(url.starts_with(MAPS_SEARCH_URL));
        assert!(url.contains("%20"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_matches_name_or_address() {
        let r = record(&[
            (columns::NAME, Some("すまいる教室")),
            (columns::ADDRESS, Some("大阪府堺市")),
        ]);
        let f = Facility::new(&r);

        assert!(f.matches("すまいる"));
        assert!(f.matches("堺市"));
        assert!(f.matches(""));
        assert!(!f.matches("京都"));
    }

    #[test]
    fn test_matches_requires_name_or_address() {
        let r = record(&[(columns::NAME, None), (columns::ADDRESS, None)]);
        assert!(!Facility::new(&r).matches(""));
    }
}
