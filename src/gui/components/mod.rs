// src/gui/components/mod.rs
pub mod dashboard_panel;
pub mod data_table;
pub mod export_bar;
pub mod filter_panel;
pub mod scrape_panel;
pub mod tabs;
