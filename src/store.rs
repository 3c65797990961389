// src/store.rs
//
// Spreadsheet-shaped persistence: a workbook holds named worksheets, each a
// header row plus data rows of strings. Append-only from this crate's side.
//
// `LocalWorkbook` keeps one directory per spreadsheet and one CSV file per
// worksheet. A remote sheets service would implement `Workbook` the same way.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::core::sanitize::sanitize_filename;
use crate::csv::parse_rows;
use crate::file::{append_rows, write_rows_start};

const SEP: char = ',';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }

    /// Column index by header name (exact match first, then case-insensitive).
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
            .or_else(|| self.headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name)))
    }

    /// Cell text; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str).unwrap_or("")
    }
}

pub trait Workbook {
    /// Spreadsheet name, for logs and status lines.
    fn name(&self) -> &str;

    fn has_worksheet(&self, sheet: &str) -> Result<bool, Box<dyn Error>>;

    /// Create (or reset) `sheet` with just a header row.
    fn create_worksheet(&mut self, sheet: &str, headers: &[String]) -> Result<(), Box<dyn Error>>;

    /// Entire worksheet. Errors if it does not exist.
    fn read_all(&self, sheet: &str) -> Result<DataSet, Box<dyn Error>>;

    /// Append rows after the last existing row.
    fn append_rows(&mut self, sheet: &str, rows: &[Vec<String>]) -> Result<(), Box<dyn Error>>;
}

#[derive(Clone, Debug)]
pub struct LocalWorkbook {
    dir: PathBuf,
    name: String,
}

impl LocalWorkbook {
    /// `<root>/<spreadsheet>/`; nothing is created until the first write.
    pub fn open(root: impl AsRef<Path>, spreadsheet: &str) -> Self {
        let dir = root.as_ref().join(sanitize_filename(spreadsheet, "spreadsheet"));
        Self { dir, name: s!(spreadsheet) }
    }

    pub fn sheet_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(join!(&sanitize_filename(sheet, "sheet"), ".csv"))
    }
}

impl Workbook for LocalWorkbook {
    fn name(&self) -> &str { &self.name }

    fn has_worksheet(&self, sheet: &str) -> Result<bool, Box<dyn Error>> {
        Ok(self.sheet_path(sheet).is_file())
    }

    fn create_worksheet(&mut self, sheet: &str, headers: &[String]) -> Result<(), Box<dyn Error>> {
        let path = self.sheet_path(sheet);
        write_rows_start(&path, Some(headers), SEP)?;
        logf!("Store: created worksheet '{}' in '{}' → {}", sheet, self.name, path.display());
        Ok(())
    }

    fn read_all(&self, sheet: &str) -> Result<DataSet, Box<dyn Error>> {
        let path = self.sheet_path(sheet);
        if !path.is_file() {
            return Err(format!("Worksheet '{}' not found in '{}' ({})", sheet, self.name, path.display()).into());
        }
        let text = fs::read_to_string(&path)?;
        let mut rows = parse_rows(&text, SEP);
        let headers = if rows.is_empty() { Vec::new() } else { rows.remove(0) };
        logd!("Store: read '{}' rows={} headers={}", sheet, rows.len(), headers.len());
        Ok(DataSet { headers, rows })
    }

    fn append_rows(&mut self, sheet: &str, rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
        let path = self.sheet_path(sheet);
        if !path.is_file() {
            return Err(format!("Worksheet '{}' not found in '{}' ({})", sheet, self.name, path.display()).into());
        }
        append_rows(&path, rows, SEP)?;
        logd!("Store: appended {} row(s) to '{}'", rows.len(), sheet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_root(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("incident_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn create_append_read_roundtrip() {
        let mut wb = LocalWorkbook::open(tmp_root("roundtrip"), "SATP_Data");
        assert!(!wb.has_worksheet("raw").unwrap());

        wb.create_worksheet("raw", &[s!("Incident_Number"), s!("Date")]).unwrap();
        assert!(wb.has_worksheet("raw").unwrap());
        assert_eq!(wb.read_all("raw").unwrap().row_count(), 0);

        wb.append_rows("raw", &[vec![s!("1"), s!("2018-01-01")]]).unwrap();
        wb.append_rows("raw", &[vec![s!("2"), s!("2018-01-02")]]).unwrap();
        let ds = wb.read_all("raw").unwrap();
        assert_eq!(ds.headers, vec!["Incident_Number", "Date"]);
        assert_eq!(ds.rows, vec![vec!["1", "2018-01-01"], vec!["2", "2018-01-02"]]);
    }

    #[test]
    fn missing_sheet_is_an_error() {
        let mut wb = LocalWorkbook::open(tmp_root("missing"), "SATP_Data");
        assert!(wb.read_all("nope").is_err());
        assert!(wb.append_rows("nope", &[]).is_err());
    }

    #[test]
    fn column_lookup_tolerates_case() {
        let ds = DataSet { headers: vec![s!("State"), s!("Date")], rows: vec![vec![s!("Bihar")]] };
        assert_eq!(ds.column("Date"), Some(1));
        assert_eq!(ds.column("state"), Some(0));
        assert_eq!(ds.cell(0, 1), "");
    }
}
