// tests/scrape_pipeline.rs
use std::collections::HashMap;
use std::error::Error;

use incident_scrape::config::options::ScrapeOptions;
use incident_scrape::core::net::{Fetch, Response};
use incident_scrape::progress::Progress;
use incident_scrape::scrape::{build_url, collect_incidents, SkipReason};

const BASE: &str = "https://example.test/listing";

/// Canned pages by URL; anything else is a 404.
struct FakeSite {
    pages: HashMap<String, String>,
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<Response, Box<dyn Error>> {
        if url.contains("offline") {
            return Err("connection refused".into());
        }
        Ok(match self.pages.get(url) {
            Some(body) => Response { status: 200, body: body.clone() },
            None => Response { status: 404, body: String::new() },
        })
    }
}

fn page(items: &[(&str, &str)]) -> String {
    let mut out = String::from("<html><body><table>");
    for (date, text) in items {
        out.push_str(&format!(
            r#"<tr><td style="width: 15%;">{date}</td><td><div class="more">{text} Read less...</div></td></tr>"#
        ));
    }
    out.push_str("</table></body></html>");
    out
}

fn opts(years: &[i32], months: &[&str]) -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.into(),
        years: years.to_vec(),
        months: months.iter().map(|m| m.to_string()).collect(),
        ..ScrapeOptions::default()
    }
}

#[test]
fn good_units_are_kept_and_bad_ones_skipped() {
    let mut pages = HashMap::new();
    pages.insert(
        build_url(BASE, "Jan", 2018),
        page(&[("Jan-05", "Ambush near Bijapur."), ("Jan-05", "Cadre arrested.")]),
    );
    // three dates, two summaries → whole unit dropped
    pages.insert(
        build_url(BASE, "Feb", 2018),
        format!(
            "{}<td style=\"width: 15%;\">Feb-09</td>",
            page(&[("Feb-07", "IED found."), ("Feb-08", "Encounter.")])
        ),
    );
    // Mar-2018 missing → 404
    let site = FakeSite { pages };

    let report = collect_incidents(&opts(&[2018], &["Jan", "Feb", "Mar"]), &site, None);

    let nums: Vec<u64> = report.records.iter().map(|r| r.incident_number).collect();
    assert_eq!(nums, vec![1_051_801, 1_051_802]);
    assert_eq!(report.records[0].summary, "Ambush near Bijapur.");
    assert_eq!(report.records[0].date.to_string(), "2018-01-05");

    let reasons: Vec<&SkipReason> = report.skipped.iter().map(|s| &s.reason).collect();
    assert_eq!(
        reasons,
        vec![&SkipReason::Mismatch { dates: 3, incidents: 2 }, &SkipReason::Http(404)]
    );
    assert_eq!(report.skipped[1].month, "Mar");
}

#[test]
fn month_number_follows_the_calendar_not_the_selection() {
    let mut pages = HashMap::new();
    pages.insert(build_url(BASE, "Jun", 2019), page(&[("Jun-30", "Clash reported.")]));
    let site = FakeSite { pages };

    // Jun alone in the selection is still month 06
    let report = collect_incidents(&opts(&[2019], &["Jun"]), &site, None);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].incident_number, 6_301_901);
}

#[test]
fn transport_errors_and_unknown_months_do_not_abort() {
    let mut pages = HashMap::new();
    pages.insert(build_url(BASE, "Jan", 2017), page(&[("Jan-01", "Quiet start.")]));
    let site = FakeSite { pages };

    let mut o = opts(&[2017], &["Smarch", "Jan"]);
    let report = collect_incidents(&o, &site, None);
    assert_eq!(report.count(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::UnknownMonth);

    o.base_url = "https://offline.test/listing".into();
    o.months = vec!["Jan".into()];
    let report = collect_incidents(&o, &site, None);
    assert_eq!(report.count(), 0);
    assert!(matches!(report.skipped[0].reason, SkipReason::Transport(_)));
}

#[test]
fn empty_selection_fetches_nothing() {
    let site = FakeSite { pages: HashMap::new() };
    let report = collect_incidents(&opts(&[], &["Jan"]), &site, None);
    assert_eq!(report.count(), 0);
    assert!(report.skipped.is_empty());
}

#[derive(Default)]
struct Recorder {
    total: usize,
    events: Vec<String>,
    lines: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn unit_done(&mut self, year: i32, month: &str, records: usize) {
        self.events.push(format!("{month}-{year}:{records}"));
    }
    fn unit_skipped(&mut self, year: i32, month: &str, _reason: &str) {
        self.events.push(format!("{month}-{year}:skip"));
    }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_unit_in_order() {
    let mut pages = HashMap::new();
    pages.insert(build_url(BASE, "Jan", 2017), page(&[("Jan-01", "a"), ("Jan-02", "b")]));
    pages.insert(build_url(BASE, "Jan", 2018), page(&[("Jan-01", "c")]));
    let site = FakeSite { pages };

    let mut rec = Recorder::default();
    let report = collect_incidents(&opts(&[2017, 2018], &["Jan", "Feb"]), &site, Some(&mut rec));

    assert_eq!(report.count(), 3);
    assert_eq!(rec.total, 4);
    assert_eq!(rec.events, vec!["Jan-2017:2", "Feb-2017:skip", "Jan-2018:1", "Feb-2018:skip"]);
    assert!(rec.finished);
    assert_eq!(rec.lines.len(), 4);
    assert_eq!(rec.lines[1], format!("Fetching {}", build_url(BASE, "Feb", 2017)));

    // same day in different years → distinct numbers
    let nums: Vec<u64> = report.records.iter().map(|r| r.incident_number).collect();
    assert_eq!(nums, vec![1_011_701, 1_021_701, 1_011_801]);
}
