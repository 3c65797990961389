// tests/dashboard_aggregates.rs
use std::fs;
use std::path::PathBuf;

use incident_scrape::config::options::{ExportFormat, ExportOptions};
use incident_scrape::dashboard::{compute_aggregates, Filters, GeoReference};
use incident_scrape::dataset::IncidentDataset;
use incident_scrape::file;
use incident_scrape::store::{LocalWorkbook, Workbook};

fn tmp_root(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("incident_dash_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn headers() -> Vec<String> {
    [
        "Incident_Number", "Date", "state", "action_armed_assault", "action_bombing",
        "action_infrastructure", "action_surrender", "total_fatalities", "total_injuries",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

/// "ALL Data" written through the store, read back the way the dashboard does.
fn seeded(name: &str) -> IncidentDataset {
    let mut wb = LocalWorkbook::open(tmp_root(name), "SATP_Data");
    wb.create_worksheet("ALL Data", &headers()).unwrap();
    wb.append_rows("ALL Data", &[
        row(&["1051701", "2017-01-05", "Chhattisgarh", "1", "0", "0", "0", "3", "1"]),
        row(&["1051702", "2017-01-05", "Chhattisgarh", "0", "1", "0", "0", "", "2"]),
        row(&["2071801", "2018-02-07", "Jharkhand", "0", "0", "1", "0", "1", "0"]),
        row(&["3011901", "2019-03-01", "Odisha", "0", "0", "0", "1", "0", "0"]),
        row(&["9999999", "n/a", "Odisha", "1", "1", "1", "1", "9", "9"]),
    ]).unwrap();
    IncidentDataset::from_table(wb.read_all("ALL Data").unwrap())
}

#[test]
fn default_filters_span_all_states_and_years() {
    let ds = seeded("defaults");
    let f = Filters::all(&ds);
    assert_eq!(f.years, Some((2017, 2019)));
    assert_eq!(f.states.len(), 3);
    assert_eq!(ds.states(), vec!["Chhattisgarh", "Jharkhand", "Odisha"]);

    let agg = compute_aggregates(&ds, &f, None);
    // undated row falls out of any year range
    assert_eq!(agg.rows, 4);
    assert_eq!(agg.trend.len(), 3);
    assert_eq!(agg.trend[0].count, 2);
    let totals: Vec<u64> = agg.actions.iter().map(|a| a.total).collect();
    assert_eq!(totals, vec![1, 1, 1, 1]);
    assert_eq!(agg.casualties[0].fatalities, 3);
    assert_eq!(agg.casualties[0].injuries, 3);
    assert_eq!(agg.monthly[0].count, 2);
}

#[test]
fn narrowing_changes_every_view() {
    let ds = seeded("narrow");
    let mut f = Filters::all(&ds).with_years(2018, 2019);
    f.states.remove("Odisha");

    let agg = compute_aggregates(&ds, &f, None);
    assert_eq!(agg.rows, 1);
    assert_eq!(agg.heatmap.states, vec!["Jharkhand"]);
    assert_eq!(agg.heatmap.years, vec![2018]);
    assert_eq!(agg.heatmap.counts, vec![vec![1]]);
    assert_eq!(agg.monthly[1].count, 1);
    assert_eq!(f.filter_indices(&ds), vec![2]);
}

#[test]
fn geo_view_only_when_reference_loads() {
    let ds = seeded("geo");
    let f = Filters::all(&ds);

    let dir = tmp_root("geo_ref");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("india-states.json");
    fs::write(&path, r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"ST_NM":"Chhattisgarh"},"geometry":null},
        {"type":"Feature","properties":{"ST_NM":"Odisha"},"geometry":null}
    ]}"#).unwrap();

    let geo = GeoReference::load(&path, "ST_NM").unwrap();
    let agg = compute_aggregates(&ds, &f, Some(&geo));
    let geo_rows: Vec<(&str, u64)> = agg
        .geo
        .as_ref()
        .unwrap()
        .iter()
        .map(|s| (s.state.as_str(), s.count))
        .collect();
    assert_eq!(geo_rows, vec![("Chhattisgarh", 2), ("Odisha", 1)]);

    let missing = GeoReference::load(&dir.join("nope.json"), "ST_NM");
    assert!(missing.is_err());
    let agg = compute_aggregates(&ds, &f, missing.as_ref().ok());
    assert!(agg.geo.is_none());
    assert_eq!(agg.rows, 4);
}

#[test]
fn filtered_view_exports_selected_rows_only() {
    let ds = seeded("export");
    let mut f = Filters::all(&ds);
    f.states.retain(|s| s == "Chhattisgarh");
    let ix = f.filter_indices(&ds);

    let dir = tmp_root("export_out");
    let mut export = ExportOptions::default().with_stem("filtered_data");
    export.format = ExportFormat::Tsv;
    export.set_path(dir.join("filtered_data").to_str().unwrap());

    let path = file::write_export_single(&export, &ds.table.headers, &ds.table.rows, Some(ix.as_slice())).unwrap();
    assert!(path.to_string_lossy().ends_with("filtered_data.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Incident_Number\tDate\tstate"));
    assert!(lines[1].starts_with("1051701\t2017-01-05\tChhattisgarh"));
    assert!(lines[2].starts_with("1051702\t"));
}
