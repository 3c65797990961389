// src/sync.rs
//
// Merge a scraped batch into the raw-zone worksheet: create-only, keyed by
// Incident_Number. Read → set difference → append. Not transactional; a
// second writer between the read and the append can still duplicate rows.

use std::{collections::HashSet, error::Error};

use crate::{
    incident::{self, IncidentRecord},
    store::Workbook,
};

const KEY: &str = "Incident_Number";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Appended(usize),
    NoNewIncidents,
}

impl SyncOutcome {
    pub fn appended(&self) -> usize {
        match self {
            SyncOutcome::Appended(n) => *n,
            SyncOutcome::NoNewIncidents => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SyncOutcome::Appended(n) => format!("{n} new incident(s) added to the sheet"),
            SyncOutcome::NoNewIncidents => s!("No new incidents to add"),
        }
    }
}

/// Plaintext gate in front of the persist action. Not a security boundary.
/// With no secret configured the gate stays closed.
pub fn check_secret(expected: Option<&str>, given: &str) -> bool {
    match expected {
        Some(secret) => !secret.is_empty() && secret == given,
        None => false,
    }
}

/// Incident numbers already present. Cells that do not parse are ignored.
/// A worksheet with a header row must carry the key column, rows or not.
pub fn existing_ids(wb: &dyn Workbook, sheet: &str) -> Result<HashSet<u64>, Box<dyn Error>> {
    let ds = wb.read_all(sheet)?;
    if ds.headers.is_empty() && ds.rows.is_empty() {
        return Ok(HashSet::new());
    }
    let col = ds.column(KEY).ok_or_else(|| {
        format!("Worksheet '{sheet}' has {} row(s) but no {KEY} column", ds.row_count())
    })?;

    let mut ids = HashSet::with_capacity(ds.row_count());
    let mut unparsed = 0usize;
    for i in 0..ds.row_count() {
        match ds.cell(i, col).trim().parse::<u64>() {
            Ok(id) => { ids.insert(id); }
            Err(_) => unparsed += 1,
        }
    }
    if unparsed > 0 {
        logw!("Sync: {unparsed} row(s) in '{sheet}' have no usable {KEY}");
    }
    Ok(ids)
}

/// Records whose number is not in `existing`, in their given order.
pub fn new_records<'a>(
    records: &'a [IncidentRecord],
    existing: &HashSet<u64>,
) -> Vec<&'a IncidentRecord> {
    records.iter().filter(|r| !existing.contains(&r.incident_number)).collect()
}

/// Append the records not yet in `sheet`. Creates the worksheet (header row
/// only) when it is missing or completely empty.
pub fn sync_incidents(
    wb: &mut dyn Workbook,
    sheet: &str,
    records: &[IncidentRecord],
) -> Result<SyncOutcome, Box<dyn Error>> {
    let headers = incident::headers();

    if !wb.has_worksheet(sheet)? {
        logf!("Sync: worksheet '{sheet}' missing in '{}'; creating", wb.name());
        wb.create_worksheet(sheet, &headers)?;
    } else if wb.read_all(sheet)?.headers.is_empty() {
        wb.create_worksheet(sheet, &headers)?;
    }

    let existing = existing_ids(wb, sheet)?;
    let fresh = new_records(records, &existing);
    logf!(
        "Sync: batch={} existing={} new={}",
        records.len(), existing.len(), fresh.len()
    );

    if fresh.is_empty() {
        return Ok(SyncOutcome::NoNewIncidents);
    }

    let rows: Vec<Vec<String>> = fresh.iter().map(|r| r.to_row()).collect();
    wb.append_rows(sheet, &rows)?;
    Ok(SyncOutcome::Appended(rows.len()))
}
