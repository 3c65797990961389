// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::StoreOptions,
        state::{AppState, Tab},
    },
    dashboard::{compute_aggregates, monthly_counts, Aggregates, Filters, GeoReference, MonthCount},
    dataset::{self, IncidentDataset, DATE_COL},
    scrape::ScrapeReport,
    store::{LocalWorkbook, Workbook},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Incident Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,

    // Scrape tab: last batch, not yet persisted
    pub batch: Option<ScrapeReport>,
    // raw zone by month; None until loaded
    pub raw_monthly: Option<Vec<MonthCount>>,

    // Dashboard tab
    pub dataset: Option<IncidentDataset>,
    pub dataset_error: Option<String>,
    pub geo: Result<GeoReference, String>,
    pub state_options: Vec<String>,
    pub year_bounds: Option<(i32, i32)>,
    pub filters: Filters,
    pub view_ix: Vec<usize>,
    pub aggregates: Aggregates,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.options.store = StoreOptions::from_env();
        if state.options.store.secret.is_none() {
            logw!("Init: no persist secret configured; the Persist button stays locked");
        }
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let dash = &state.options.dashboard;
        let geo = GeoReference::load(&dash.geojson_path, &dash.geo_name_key).map_err(|e| {
            loge!("Geo: {}", e);
            e.to_string()
        });

        let mut app = Self {
            state,
            status: Arc::new(Mutex::new(s!("Idle"))),
            batch: None,
            raw_monthly: None,
            dataset: None,
            dataset_error: None,
            geo,
            state_options: Vec::new(),
            year_bounds: None,
            filters: Filters::default(),
            view_ix: Vec::new(),
            aggregates: Aggregates::default(),
        };
        app.reload_dataset();
        app.reload_raw_monthly();

        logf!(
            "Init: store={} dataset_rows={} geo={}",
            app.state.options.store.root.display(),
            app.dataset.as_ref().map(|d| d.len()).unwrap_or(0),
            app.geo.is_ok()
        );
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn workbook(&self) -> LocalWorkbook {
        let store = &self.state.options.store;
        LocalWorkbook::open(&store.root, &store.spreadsheet)
    }

    /* ---------- dashboard data ---------- */

    /// (Re)load the enriched worksheet and reset filters to "everything".
    pub fn reload_dataset(&mut self) {
        let sheet = self.state.options.store.dashboard_sheet.clone();
        match self.workbook().read_all(&sheet) {
            Ok(table) => {
                let ds = IncidentDataset::from_table(table);
                logf!("Dashboard: loaded '{}' rows={}", sheet, ds.len());
                self.filters = Filters::all(&ds);
                self.state_options = ds.states();
                self.year_bounds = ds.year_bounds();
                self.dataset = Some(ds);
                self.dataset_error = None;
            }
            Err(e) => {
                loge!("Dashboard: {}", e);
                self.dataset = None;
                self.dataset_error = Some(e.to_string());
                self.filters = Filters::default();
                self.state_options.clear();
                self.year_bounds = None;
            }
        }
        self.recompute();
    }

    /// Filters changed → new view indices and aggregates.
    pub fn recompute(&mut self) {
        match &self.dataset {
            Some(ds) => {
                self.view_ix = self.filters.filter_indices(ds);
                self.aggregates = compute_aggregates(ds, &self.filters, self.geo.as_ref().ok());
                logd!("Dashboard: recompute rows={}", self.aggregates.rows);
            }
            None => {
                self.view_ix.clear();
                self.aggregates = Aggregates::default();
            }
        }
    }

    /// Monthly counts over the raw-zone worksheet.
    pub fn reload_raw_monthly(&mut self) {
        let sheet = self.state.options.store.raw_sheet.clone();
        self.raw_monthly = match self.workbook().read_all(&sheet) {
            Ok(table) => table.column(DATE_COL).map(|col| {
                monthly_counts((0..table.row_count()).filter_map(|i| dataset::parse_date(table.cell(i, col))))
            }),
            Err(e) => {
                logd!("Raw zone: {}", e);
                None
            }
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        match self.state.gui.current_tab {
            Tab::Scrape => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::scrape_panel::draw(ui, self);
                });
            }
            Tab::Dashboard => {
                egui::SidePanel::left("filters")
                    .resizable(false)
                    .show(ctx, |ui| {
                        components::filter_panel::draw(ui, self);
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::dashboard_panel::draw(ui, self);
                });
            }
        }
    }
}
