// src/incident.rs
//
// Incident records and the composite incident number.
//
// Incident number = digits of MM DD YY NN (NN = running count of incidents
// sharing that calendar date within one scrape run), read as an integer:
//   2018-02-07, 3rd incident → "02071803" → 2071803
//
// Known limitation: the scheme collides across centuries (2018 and 1918
// share "18") and NN depends on the order incidents appear on the source
// page. It is kept as-is because rows already in the store were numbered
// this way and dedup compares numbers exactly.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::config::consts::MONTHS;
use crate::store::DataSet;

/// Raw-zone column names, in storage order.
pub const HEADERS: [&str; 3] = ["Incident_Number", "Date", "Incident_Summary"];
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentRecord {
    pub incident_number: u64,
    pub date: NaiveDate,
    pub summary: String,
}

impl IncidentRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.incident_number.to_string(),
            self.date.format(DATE_FORMAT).to_string(),
            self.summary.clone(),
        ]
    }
}

pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Records → table in raw-zone shape (for export and display).
pub fn to_dataset(records: &[IncidentRecord]) -> DataSet {
    DataSet {
        headers: headers(),
        rows: records.iter().map(IncidentRecord::to_row).collect(),
    }
}

/// `MM DD YY NN` as an integer. A sequence above 99 widens the number
/// (`…100`) rather than wrapping.
pub fn incident_number(date: NaiveDate, seq: u32) -> u64 {
    let yy = date.year().rem_euclid(100) as u64;
    let prefix = date.month() as u64 * 10_000 + date.day() as u64 * 100 + yy;
    let width = if seq < 100 { 2 } else { seq.ilog10() + 1 };
    prefix * 10u64.pow(width) + seq as u64
}

/// Calendar month for a listing abbreviation: "Jan" → 1 … "Dec" → 12.
/// Case-insensitive; full names ("February") are accepted too.
pub fn month_number(month: &str) -> Option<u32> {
    let m = month.trim();
    if m.len() < 3 { return None; }
    MONTHS.iter()
        .position(|abbr| {
            m.get(..3).is_some_and(|head| head.eq_ignore_ascii_case(abbr))
                && (m.len() == 3 || full_month_name(abbr).eq_ignore_ascii_case(m))
        })
        .map(|i| i as u32 + 1)
}

fn full_month_name(abbr: &str) -> &'static str {
    match abbr {
        "Jan" => "January", "Feb" => "February", "Mar" => "March",
        "Apr" => "April",   "May" => "May",      "Jun" => "June",
        "Jul" => "July",    "Aug" => "August",   "Sep" => "September",
        "Oct" => "October", "Nov" => "November", _   => "December",
    }
}

/// Per-date running counter. Create one per scrape run; never share it
/// across runs, or numbering stops being reproducible.
#[derive(Debug, Default)]
pub struct DayCounter {
    by_date: HashMap<NaiveDate, u32>,
}

impl DayCounter {
    pub fn new() -> Self { Self::default() }

    /// Next sequence number for `date`, starting at 1.
    pub fn next(&mut self, date: NaiveDate) -> u32 {
        let n = self.by_date.entry(date).or_insert(0);
        *n += 1;
        *n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn number_for_third_incident_on_feb_7_2018() {
        assert_eq!(incident_number(d(2018, 2, 7), 3), 2_071_803);
    }

    #[test]
    fn number_keeps_leading_zero_digits_of_year() {
        // "12" "31" "05" "01"
        assert_eq!(incident_number(d(2005, 12, 31), 1), 12_310_501);
    }

    #[test]
    fn number_widens_past_99() {
        // "01" "15" "18" "100"
        assert_eq!(incident_number(d(2018, 1, 15), 100), 11_518_100);
    }

    #[test]
    fn numbers_collide_across_centuries() {
        assert_eq!(incident_number(d(1918, 3, 4), 1), incident_number(d(2018, 3, 4), 1));
    }

    #[test]
    fn month_numbers_from_calendar_not_list_position() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("feb"), Some(2));
        assert_eq!(month_number("September"), Some(9));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("Sept"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn counter_is_per_date() {
        let mut c = DayCounter::new();
        assert_eq!(c.next(d(2018, 2, 7)), 1);
        assert_eq!(c.next(d(2018, 2, 7)), 2);
        assert_eq!(c.next(d(2018, 2, 8)), 1);
        assert_eq!(c.next(d(2018, 2, 7)), 3);
    }

    #[test]
    fn row_shape_matches_headers() {
        let r = IncidentRecord { incident_number: 2_071_803, date: d(2018, 2, 7), summary: s!("x") };
        assert_eq!(r.to_row(), vec!["2071803", "2018-02-07", "x"]);
        assert_eq!(r.to_row().len(), HEADERS.len());
    }
}
