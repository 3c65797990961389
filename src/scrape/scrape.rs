// src/scrape/scrape.rs
//
// One GET per (year, month) unit, sequential. A unit either contributes all
// of its aligned records or nothing: non-200, transport errors and
// date/summary count mismatches skip the whole unit and the run continues.

use std::{fmt, time::Duration};

use chrono::NaiveDate;

use crate::{
    config::options::ScrapeOptions,
    core::net::{Fetch, HttpClient},
    incident::{self, DayCounter, IncidentRecord},
    progress::Progress,
    specs::incidents::{self as listing, PageNodes},
    store::DataSet,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    UnknownMonth,
    Http(u16),
    Transport(String),
    Mismatch { dates: usize, incidents: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownMonth => write!(f, "unknown month"),
            SkipReason::Http(code) => write!(f, "HTTP {code}"),
            SkipReason::Transport(msg) => write!(f, "request failed: {msg}"),
            SkipReason::Mismatch { dates, incidents } => {
                write!(f, "mismatch in dates ({dates}) and incidents ({incidents})")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedUnit {
    pub year: i32,
    pub month: String,
    pub reason: SkipReason,
}

/// Result of one scrape run. Records keep source-page order.
#[derive(Clone, Debug, Default)]
pub struct ScrapeReport {
    pub records: Vec<IncidentRecord>,
    pub skipped: Vec<SkippedUnit>,
    /// Records dropped individually (bad date label)
    pub bad_dates: usize,
}

impl ScrapeReport {
    pub fn count(&self) -> usize { self.records.len() }

    pub fn to_dataset(&self) -> DataSet { incident::to_dataset(&self.records) }
}

pub fn build_url(base_url: &str, month: &str, year: i32) -> String {
    format!("{}-{}-{}", base_url.trim_end_matches('-'), month, year)
}

/// Scrape with the real HTTP client. Failures are per unit and land in
/// `ScrapeReport::skipped`.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> ScrapeReport {
    let client = HttpClient::new(Duration::from_secs(opts.timeout_secs));
    collect_incidents(opts, &client, progress)
}

/// Walk every unit in `opts.units()` order. Sequence numbers come from one
/// `DayCounter` scoped to this call.
pub fn collect_incidents(
    opts: &ScrapeOptions,
    fetch: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeReport {
    let units = opts.units();
    if let Some(p) = progress.as_deref_mut() { p.begin(units.len()); }

    let mut report = ScrapeReport::default();
    let mut counter = DayCounter::new();

    for (year, month) in units {
        let url = build_url(&opts.base_url, &month, year);
        if let Some(p) = progress.as_deref_mut() { p.log(&format!("Fetching {url}")); }
        let outcome = scrape_unit(&url, year, &month, fetch, &mut counter, &mut report);
        match outcome {
            Ok(n) => {
                logf!("Scrape: {month}-{year} → {n} incident(s)");
                if let Some(p) = progress.as_deref_mut() { p.unit_done(year, &month, n); }
            }
            Err(reason) => {
                logw!("Scrape: skipping {month}-{year}: {reason}");
                if let Some(p) = progress.as_deref_mut() {
                    p.unit_skipped(year, &month, &reason.to_string());
                }
                report.skipped.push(SkippedUnit { year, month, reason });
            }
        }
    }

    logf!(
        "Scrape: total incidents={} skipped_units={} bad_dates={}",
        report.count(), report.skipped.len(), report.bad_dates
    );
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    report
}

fn scrape_unit(
    url: &str,
    year: i32,
    month: &str,
    fetch: &dyn Fetch,
    counter: &mut DayCounter,
    report: &mut ScrapeReport,
) -> Result<usize, SkipReason> {
    let month_no = incident::month_number(month).ok_or(SkipReason::UnknownMonth)?;

    logd!("Scrape: GET {url}");
    let resp = fetch.get(url).map_err(|e| SkipReason::Transport(e.to_string()))?;
    if !resp.is_ok() {
        return Err(SkipReason::Http(resp.status));
    }

    let t = std::time::Instant::now();
    let nodes = listing::parse_doc(&resp.body);
    logd!("Scrape: parsed {month}-{year} in {:?}", t.elapsed());

    if !nodes.is_aligned() {
        return Err(SkipReason::Mismatch { dates: nodes.dates.len(), incidents: nodes.summaries.len() });
    }

    let (records, bad) = records_from_page(&nodes, year, month_no, counter);
    let n = records.len();
    report.records.extend(records);
    report.bad_dates += bad;
    Ok(n)
}

/// Number the aligned pairs of one page. Returns the records and how many
/// pairs were dropped for an unusable date label. Unaligned pages yield
/// nothing.
pub fn records_from_page(
    nodes: &PageNodes,
    year: i32,
    month_no: u32,
    counter: &mut DayCounter,
) -> (Vec<IncidentRecord>, usize) {
    let Some(pairs) = nodes.pairs() else { return (Vec::new(), 0) };

    let mut out = Vec::with_capacity(nodes.summaries.len());
    let mut bad = 0usize;
    for (label, summary) in pairs {
        let date = listing::day_of_month(label)
            .and_then(|day| NaiveDate::from_ymd_opt(year, month_no, day));
        let Some(date) = date else {
            logw!("Scrape: unusable date label '{label}' for {year}-{month_no:02}; record skipped");
            bad += 1;
            continue;
        };

        let seq = counter.next(date);
        out.push(IncidentRecord {
            incident_number: incident::incident_number(date, seq),
            date,
            summary: s!(summary),
        });
    }
    (out, bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(dates: &[&str], summaries: &[&str]) -> PageNodes {
        PageNodes {
            dates: dates.iter().map(|d| s!(*d)).collect(),
            summaries: summaries.iter().map(|d| s!(*d)).collect(),
        }
    }

    #[test]
    fn url_template() {
        assert_eq!(
            build_url("https://www.satp.org/terrorist-activity/india-maoistinsurgency", "Feb", 2018),
            "https://www.satp.org/terrorist-activity/india-maoistinsurgency-Feb-2018"
        );
    }

    #[test]
    fn same_date_incidents_count_up_in_page_order() {
        let mut c = DayCounter::new();
        let page = nodes(&["Feb-07", "Feb-07", "Feb-08", "Feb-07"], &["a", "b", "c", "d"]);
        let (recs, bad) = records_from_page(&page, 2018, 2, &mut c);
        assert_eq!(bad, 0);
        let nums: Vec<u64> = recs.iter().map(|r| r.incident_number).collect();
        assert_eq!(nums, vec![2_071_801, 2_071_802, 2_081_801, 2_071_803]);
        let texts: Vec<&str> = recs.iter().map(|r| r.summary.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn bad_date_skips_record_without_consuming_sequence() {
        let mut c = DayCounter::new();
        let page = nodes(&["Feb-07", "Feb-xx", "Feb-30", "Feb-07"], &["a", "b", "c", "d"]);
        let (recs, bad) = records_from_page(&page, 2018, 2, &mut c);
        assert_eq!(bad, 2);
        let nums: Vec<u64> = recs.iter().map(|r| r.incident_number).collect();
        assert_eq!(nums, vec![2_071_801, 2_071_802]);
    }

    #[test]
    fn unaligned_page_yields_nothing() {
        let mut c = DayCounter::new();
        let page = nodes(&["Feb-07"], &["a", "b"]);
        assert_eq!(records_from_page(&page, 2018, 2, &mut c), (Vec::new(), 0));
    }

    #[test]
    fn skip_reason_reads_like_a_warning() {
        let r = SkipReason::Mismatch { dates: 3, incidents: 4 };
        assert_eq!(r.to_string(), "mismatch in dates (3) and incidents (4)");
        assert_eq!(SkipReason::Http(404).to_string(), "HTTP 404");
    }
}
