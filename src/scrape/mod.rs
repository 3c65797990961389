// src/scrape/mod.rs
mod scrape;

pub use scrape::{
    build_url,
    collect_incidents,
    records_from_page,
    run,
    ScrapeReport,
    SkipReason,
    SkippedUnit,
};
