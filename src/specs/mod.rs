// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific parsing for the incident listing site. A spec knows *where
//! the ground truth lives in the HTML* and how to pull it out; it does not
//! fetch, number, cache or persist anything.
//!
//! ## Typical call chain
//! ```text
//! GUI / cli → scrape::collect_incidents → net::Fetch::get
//!                                       ↘ specs::incidents::parse_doc
//!                                       ↘ incident::{DayCounter, incident_number}
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag detection through `core::html`; no full-document regexes.
//! - Selectors tolerate attribute order, quoting and whitespace inside `style`.
//! - Specs are testable offline against captured HTML snippets.
pub mod incidents;
