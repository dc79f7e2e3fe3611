//! Terminal and JSON presentation of facilities
//!
//! List output is one card per facility with transport and meal badges.
//! The detail sheet shows labelled sections with display defaults.

use colored::*;
use serde::Serialize;

use crate::models::{Facility, Record};

/// One line per facility in `list` output
#[derive(Debug, Serialize)]
pub struct FacilitySummary<'a> {
    /// 1-based position in the full list
    pub index: usize,
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub transport: bool,
    pub meals: bool,
}

impl<'a> FacilitySummary<'a> {
    pub fn new(position: usize, facility: Facility<'a>) -> Self {
        Self {
            index: position + 1,
            name: facility.name(),
            address: facility.address(),
            transport: facility.has_transport(),
            meals: facility.has_meals(),
        }
    }
}

/// Everything `show` displays, plus the raw record
#[derive(Debug, Serialize)]
pub struct FacilityDetail<'a> {
    pub index: usize,
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub hours: String,
    pub open_days: &'a str,
    pub closed_days: Option<&'a str>,
    pub transport: &'a str,
    pub meals: &'a str,
    pub schools: Vec<&'a str>,
    pub appeal: Option<&'a str>,
    pub phone: &'a str,
    pub tel_link: String,
    pub maps_url: String,
    pub main_photo: &'a str,
    pub extra_photos: Vec<&'a str>,
    pub fields: &'a Record,
}

impl<'a> FacilityDetail<'a> {
    pub fn new(position: usize, facility: Facility<'a>) -> Self {
        Self {
            index: position + 1,
            name: facility.name(),
            address: facility.address(),
            hours: facility.hours(),
            open_days: facility.open_days_label(),
            closed_days: facility.closed_days(),
            transport: facility.transport_label(),
            meals: facility.meals_label(),
            schools: facility.schools(),
            appeal: facility.appeal(),
            phone: facility.phone_label(),
            tel_link: facility.tel_link(),
            maps_url: facility.maps_url(),
            main_photo: facility.main_photo(),
            extra_photos: facility.extra_photos(),
            fields: facility.record(),
        }
    }
}

/// A single list card: position, name, badges and address
pub fn format_card(position: usize, facility: Facility<'_>) -> String {
    let mut badges = Vec::new();
    if facility.has_transport() {
        badges.push(" 送迎あり ".on_blue().white().bold().to_string());
    }
    if facility.has_meals() {
        badges.push(" 食事あり ".on_yellow().black().bold().to_string());
    }

    let mut card = format!(
        "{:>4}. {}",
        (position + 1).to_string().bright_yellow().bold(),
        facility.name().unwrap_or_default().bright_white().bold()
    );
    if !badges.is_empty() {
        card.push(' ');
        card.push_str(&badges.join(" "));
    }
    card.push('\n');
    card.push_str(&format!(
        "      {}",
        facility.address().unwrap_or_default().bright_black()
    ));
    card
}

/// The whole list, with a header line and an empty-result message
pub fn format_list(hits: &[(usize, Facility<'_>)], total: usize, term: Option<&str>) -> String {
    let mut out = match term {
        Some(term) if !term.is_empty() => format!(
            "{} {} / {} (\"{}\")\n",
            "施設一覧".bright_green().bold(),
            hits.len(),
            total,
            term
        ),
        _ => format!("{} {}\n", "施設一覧".bright_green().bold(), total),
    };

    if hits.is_empty() {
        out.push_str(&format!("\n  {}\n", "該当する事業所はありません".bright_black()));
        return out;
    }

    for (position, facility) in hits {
        out.push('\n');
        out.push_str(&format_card(*position, *facility));
        out.push('\n');
    }
    out
}

fn section(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("\n{}\n  {}\n", label.bright_cyan().bold(), value));
}

/// The detail sheet for one facility
pub fn format_detail(position: usize, facility: Facility<'_>) -> String {
    let mut out = format!(
        "{} {}\n",
        format!("#{}", position + 1).bright_yellow(),
        facility.name().unwrap_or_default().bright_white().bold()
    );

    section(&mut out, "所在地", facility.address().unwrap_or_default());

    let mut days = facility.open_days_label().to_string();
    if let Some(closed) = facility.closed_days() {
        days.push_str(&format!("  [休] {}", closed));
    }
    section(&mut out, "営業時間", &facility.hours());
    section(&mut out, "営業日", &days);

    section(
        &mut out,
        "サービス",
        &format!(
            "送迎: {}\n  食事: {}",
            facility.transport_label(),
            facility.meals_label()
        ),
    );

    let schools = facility.schools();
    let schools = if schools.is_empty() {
        crate::constants::defaults::NOT_REGISTERED.to_string()
    } else {
        schools.join(" / ")
    };
    section(&mut out, "主な通学先", &schools);

    if let Some(appeal) = facility.appeal() {
        section(&mut out, "アピールポイント", appeal);
    }

    section(
        &mut out,
        "電話番号",
        &format!("{}  ({})", facility.phone_label(), facility.tel_link()),
    );
    section(&mut out, "地図", &facility.maps_url());

    let mut photos = vec![facility.main_photo()];
    photos.extend(facility.extra_photos());
    section(&mut out, "写真", &photos.join("\n  "));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::columns;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    fn sample() -> Record {
        record(&[
            (columns::NAME, "ひまわり教室"),
            (columns::ADDRESS, "東京都千代田区1-1"),
            (columns::TRANSPORT, "有"),
            (columns::MEALS, "無"),
            (columns::SCHOOLS, "第一小学校、第二小学校"),
            (columns::APPEAL, "少人数制です"),
            (columns::CLOSED_DAYS, "日曜"),
        ])
    }

    #[test]
    fn test_card_contains_name_address_and_badges() {
        let r = sample();
        let card = format_card(0, Facility::new(&r));

        assert!(card.contains("ひまわり教室"));
        assert!(card.contains("東京都千代田区1-1"));
        assert!(card.contains("送迎あり"));
        assert!(!card.contains("食事あり"));
    }

    #[test]
    fn test_empty_list_message() {
        let out = format_list(&[], 5, Some("福岡"));
        assert!(out.contains("該当する事業所はありません"));
        assert!(out.contains("0 / 5"));
    }

    #[test]
    fn test_detail_sections() {
        let r = sample();
        let detail = format_detail(2, Facility::new(&r));

        assert!(detail.contains("#3"));
        assert!(detail.contains("00:00 - 00:00"));
        assert!(detail.contains("[休] 日曜"));
        assert!(detail.contains("送迎: 有"));
        assert!(detail.contains("第一小学校 / 第二小学校"));
        assert!(detail.contains("少人数制です"));
        assert!(detail.contains("登録なし"));
        assert!(detail.contains("google.com/maps"));
    }

    #[test]
    fn test_summary_json() {
        let r = sample();
        let summary = FacilitySummary::new(0, Facility::new(&r));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["index"], 1);
        assert_eq!(json["name"], "ひまわり教室");
        assert_eq!(json["transport"], true);
        assert_eq!(json["meals"], false);
    }

    #[test]
    fn test_detail_json_includes_raw_fields() {
        let r = sample();
        let detail = FacilityDetail::new(0, Facility::new(&r));
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["open_days"], "月〜金");
        assert_eq!(json["schools"][1], "第二小学校");
        assert_eq!(json["fields"][columns::MEALS], "無");
        assert!(json["appeal"].is_string());
    }
}
