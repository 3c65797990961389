// src/dataset.rs
//
// The enriched "ALL Data" worksheet as the dashboard sees it. This schema is
// produced out of band (not by the scraper); columns are looked up by name
// and everything not listed here is carried along for display/export only.
//
// Parsing is lenient: a Date that does not parse leaves the row without a
// date or year, and empty/garbled numeric cells count as 0.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::store::DataSet;

pub const STATE_COL: &str = "state";
pub const DATE_COL: &str = "Date";
pub const FATALITIES_COL: &str = "total_fatalities";
pub const INJURIES_COL: &str = "total_injuries";
pub const ACTION_COLUMNS: [&str; 4] = [
    "action_armed_assault",
    "action_bombing",
    "action_infrastructure",
    "action_surrender",
];

/// Typed projection of one worksheet row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedIncident {
    pub state: String,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    /// Same order as `ACTION_COLUMNS`
    pub actions: [u64; 4],
    pub fatalities: u64,
    pub injuries: u64,
}

/// Worksheet rows plus their typed projection, index-aligned.
#[derive(Clone, Debug, Default)]
pub struct IncidentDataset {
    pub table: DataSet,
    pub records: Vec<EnrichedIncident>,
}

impl IncidentDataset {
    pub fn from_table(table: DataSet) -> Self {
        let state_c = table.column(STATE_COL);
        let date_c = table.column(DATE_COL);
        let fat_c = table.column(FATALITIES_COL);
        let inj_c = table.column(INJURIES_COL);
        let action_c: Vec<Option<usize>> = ACTION_COLUMNS.iter().map(|c| table.column(c)).collect();

        if state_c.is_none() { logw!("Dataset: no '{STATE_COL}' column"); }
        if date_c.is_none() { logw!("Dataset: no '{DATE_COL}' column"); }

        let text = |row: usize, col: Option<usize>| col.map(|c| table.cell(row, c)).unwrap_or("");

        let mut records = Vec::with_capacity(table.row_count());
        let mut bad_dates = 0usize;
        for i in 0..table.row_count() {
            let raw_date = text(i, date_c);
            let date = parse_date(raw_date);
            if date.is_none() && !raw_date.trim().is_empty() { bad_dates += 1; }

            let mut actions = [0u64; 4];
            for (slot, col) in actions.iter_mut().zip(&action_c) {
                *slot = parse_count(text(i, *col));
            }

            records.push(EnrichedIncident {
                state: text(i, state_c).trim().to_string(),
                date,
                year: date.map(|d| d.year()),
                actions,
                fatalities: parse_count(text(i, fat_c)),
                injuries: parse_count(text(i, inj_c)),
            });
        }
        if bad_dates > 0 {
            logw!("Dataset: {bad_dates} row(s) with an unparseable {DATE_COL}");
        }

        Self { table, records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct states in order of first appearance.
    pub fn states(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.state.as_str()))
            .map(|r| r.state.clone())
            .collect()
    }

    /// (min, max) year over rows with a date.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Dates as they show up in exported sheets: ISO, ISO with time, US slashes,
/// and "07-Feb-2018". Anything else is `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() { return None; }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y", "%d %b %Y", "%B %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Non-negative count; "3", "3.0" and " 3 " all read as 3. Everything else is 0.
pub fn parse_count(s: &str) -> u64 {
    let s = s.trim();
    if s.is_empty() { return 0; }
    if let Ok(n) = s.parse::<u64>() { return n; }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.round() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataSet {
        let headers = ["state", "Date", "action_bombing", "total_fatalities", "total_injuries", "notes"]
            .iter().map(|s| s!(*s)).collect();
        let rows = vec![
            vec![s!("Chhattisgarh"), s!("2018-02-07"), s!("1"), s!("2"), s!(""), s!("x")],
            vec![s!("Jharkhand"), s!("not a date"), s!("0"), s!("1.0"), s!("3"), s!("y")],
            vec![s!("Chhattisgarh"), s!("2017-12-31 00:00:00"), s!("yes"), s!("-1"), s!("1")],
        ];
        DataSet { headers, rows }
    }

    #[test]
    fn projection_is_lenient() {
        let ds = IncidentDataset::from_table(table());
        assert_eq!(ds.len(), 3);

        let r0 = &ds.records[0];
        assert_eq!(r0.year, Some(2018));
        assert_eq!(r0.actions, [0, 1, 0, 0]);
        assert_eq!((r0.fatalities, r0.injuries), (2, 0));

        let r1 = &ds.records[1];
        assert_eq!(r1.date, None);
        assert_eq!(r1.year, None);
        assert_eq!(r1.fatalities, 1);

        let r2 = &ds.records[2];
        assert_eq!(r2.date, NaiveDate::from_ymd_opt(2017, 12, 31));
        assert_eq!(r2.actions, [0, 0, 0, 0]);
        assert_eq!(r2.fatalities, 0);
    }

    #[test]
    fn states_and_year_bounds() {
        let ds = IncidentDataset::from_table(table());
        assert_eq!(ds.states(), vec!["Chhattisgarh", "Jharkhand"]);
        assert_eq!(ds.year_bounds(), Some((2017, 2018)));
        assert_eq!(IncidentDataset::default().year_bounds(), None);
    }

    #[test]
    fn date_formats() {
        let want = NaiveDate::from_ymd_opt(2018, 2, 7);
        assert_eq!(parse_date("2018-02-07"), want);
        assert_eq!(parse_date("02/07/2018"), want);
        assert_eq!(parse_date("07-Feb-2018"), want);
        assert_eq!(parse_date("2018-02-07T10:30:00"), want);
        assert_eq!(parse_date("sometime"), None);
    }
}
