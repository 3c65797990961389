// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.satp.org/terrorist-activity/india-maoistinsurgency";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
pub const DEFAULT_YEARS: [i32; 2] = [2017, 2018];
pub const DEFAULT_MONTHS: [&str; 2] = ["Jan", "Feb"];
pub const FIRST_YEAR: i32 = 2000;

// Local cache + logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Spreadsheet store
pub const DEFAULT_STORE_ROOT: &str = "sheets";
pub const SPREADSHEET: &str = "SATP_Data";
pub const RAW_SHEET: &str = "raw_zone_incident_summaries";
pub const DASHBOARD_SHEET: &str = "ALL Data";
pub const ENV_STORE_ROOT: &str = "INCIDENT_SCRAPE_STORE";
pub const ENV_SECRET: &str = "INCIDENT_SCRAPE_SECRET";

// Dashboard
pub const GEOJSON_PATH: &str = "india-states.json";
pub const GEO_NAME_KEY: &str = "ST_NM";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "incidents";
pub const DEFAULT_FILTERED_FILE: &str = "filtered_data";
