// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
    pub dashboard: DashboardOptions,
    pub export: ExportOptions,
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// URL prefix; each request is `{base_url}-{month}-{year}`
    pub base_url: String,
    pub years: Vec<i32>,
    /// Month abbreviations as they appear in the listing URLs ("Jan", "Feb", …)
    pub months: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            years: DEFAULT_YEARS.to_vec(),
            months: DEFAULT_MONTHS.iter().map(|m| s!(*m)).collect(),
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl ScrapeOptions {
    /// Every (year, month) unit in request order: years outer, months inner.
    pub fn units(&self) -> Vec<(i32, String)> {
        let mut out = Vec::with_capacity(self.years.len() * self.months.len());
        for &year in &self.years {
            for month in &self.months {
                out.push((year, month.clone()));
            }
        }
        out
    }
}

/* ---------------- Store ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Directory holding one folder per spreadsheet
    pub root: PathBuf,
    pub spreadsheet: String,
    /// Worksheet the scraper appends to
    pub raw_sheet: String,
    /// Enriched worksheet the dashboard reads
    pub dashboard_sheet: String,
    /// Shared secret gating the persist action (cosmetic only)
    pub secret: Option<String>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORE_ROOT),
            spreadsheet: s!(SPREADSHEET),
            raw_sheet: s!(RAW_SHEET),
            dashboard_sheet: s!(DASHBOARD_SHEET),
            secret: None,
        }
    }
}

impl StoreOptions {
    /// Defaults, overridden by `INCIDENT_SCRAPE_STORE` / `INCIDENT_SCRAPE_SECRET`.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(root) = std::env::var(ENV_STORE_ROOT) {
            if !root.trim().is_empty() {
                opts.root = PathBuf::from(root.trim());
            }
        }
        opts.secret = std::env::var(ENV_SECRET)
            .ok()
            .filter(|s| !s.is_empty());
        opts
    }
}

/* ---------------- Dashboard ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub geojson_path: PathBuf,
    /// Feature property holding the region name
    pub geo_name_key: String,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            geojson_path: PathBuf::from(GEOJSON_PATH),
            geo_name_key: s!(GEO_NAME_KEY),
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own file name when they typed one.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.file_name {
            Some(name) => path.push(name),
            None => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(join!(stem.as_ref(), ".", self.format.ext()));
            }
        }
        path
    }

    /// Parse GUI/CLI text into dir + file. An explicit extension is kept;
    /// a bare stem follows the format.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        match (p.file_stem(), p.extension()) {
            (Some(stem), None) => {
                self.out_path.file_stem = stem.to_os_string();
                self.out_path.file_name = None;
            }
            (Some(stem), Some(_)) => {
                self.out_path.file_stem = stem.to_os_string();
                self.out_path.file_name = p.file_name().map(|n| n.to_os_string());
            }
            _ => {}
        }
    }

    /// Same directory/format, different default stem (e.g. filtered view).
    pub fn with_stem(&self, stem: &str) -> Self {
        let mut out = self.clone();
        out.out_path.file_stem = OsString::from(stem);
        out.out_path.file_name = None;
        out
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,        // without extension
    file_name: Option<OsString>, // user-typed name incl. extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            file_name: None,
        }
    }
}
