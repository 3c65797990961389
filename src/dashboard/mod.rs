// src/dashboard/mod.rs
//
// Filters + the six aggregate views over the enriched worksheet.
// Everything here is a pure function of (dataset, filters, geo reference);
// frontends own the UI state and call `compute_aggregates` on every change.

pub mod aggregates;
pub mod filters;
pub mod geo;

pub use aggregates::{
    compute_aggregates, monthly_counts, Aggregates, ActionTotal, CasualtyPoint, Heatmap, MonthCount, StateCount,
    TrendPoint,
};
pub use filters::Filters;
pub use geo::GeoReference;
