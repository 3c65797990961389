// src/gui/components/scrape_panel.rs
//
// Scrape tab: pick years/months, fetch a batch, export it or persist it to
// the raw-zone worksheet (behind the secret gate).

use chrono::Datelike;
use eframe::egui;

use crate::{
    config::consts::{FIRST_YEAR, MONTHS},
    gui::{actions, app::App},
};

use super::{data_table, export_bar};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    selection(ui, app);

    ui.separator();

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let scrape_btn = egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red);
        if ui.add(scrape_btn).clicked() {
            actions::scrape(app);
        }

        let opts = &app.state.options.scrape;
        ui.label(format!("{} year(s) × {} month(s)", opts.years.len(), opts.months.len()));
    });

    ui.separator();

    export_bar::draw(ui, app);
    ui.horizontal(|ui| {
        if ui.button("Export batch").clicked() {
            actions::export_batch(app);
        }

        ui.separator();

        ui.label("Secret:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.secret_input)
            .password(true)
            .desired_width(140.0));
        if ui.button("Persist to sheet").clicked() {
            actions::persist(app);
        }
    });

    ui.separator();

    match &app.batch {
        Some(report) => {
            ui.label(format!(
                "Total incidents scraped: {}  (skipped months: {}, bad dates: {})",
                report.count(),
                report.skipped.len(),
                report.bad_dates
            ));
            for s in &report.skipped {
                ui.colored_label(
                    egui::Color32::from_rgb(0xF0, 0xD2, 0x3C),
                    format!("{}-{}: {}", s.month, s.year, s.reason),
                );
            }
            let ds = report.to_dataset();
            data_table::draw(ui, "batch", &ds.headers, &ds.rows, None, 360.0);
        }
        None => {
            ui.label("No batch yet");
        }
    }

    ui.separator();

    egui::CollapsingHeader::new("Raw zone: events by month")
        .default_open(false)
        .show(ui, |ui| {
            if ui.button("Refresh").clicked() {
                app.reload_raw_monthly();
            }
            match &app.raw_monthly {
                Some(counts) => {
                    let max = counts.iter().map(|m| m.count).max().unwrap_or(0).max(1);
                    egui::Grid::new("raw_monthly").striped(true).show(ui, |ui| {
                        for m in counts {
                            ui.label(MONTHS[(m.month - 1) as usize]);
                            ui.add(egui::ProgressBar::new(m.count as f32 / max as f32)
                                .desired_width(240.0)
                                .text(m.count.to_string()));
                            ui.end_row();
                        }
                    });
                }
                None => {
                    ui.label("Raw zone worksheet not available");
                }
            }
        });
}

fn selection(ui: &mut egui::Ui, app: &mut App) {
    let opts = &mut app.state.options.scrape;

    ui.horizontal(|ui| {
        ui.label("Base URL:");
        ui.add(egui::TextEdit::singleline(&mut opts.base_url)
            .font(egui::TextStyle::Monospace)
            .desired_width(480.0));
    });

    let last_year = chrono::Local::now().year();
    ui.horizontal_wrapped(|ui| {
        ui.label("Years:");
        for year in FIRST_YEAR..=last_year {
            let mut on = opts.years.contains(&year);
            if ui.checkbox(&mut on, year.to_string()).changed() {
                if on {
                    opts.years.push(year);
                    opts.years.sort_unstable();
                } else {
                    opts.years.retain(|&y| y != year);
                }
                logd!("UI: years → {:?}", opts.years);
            }
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.label("Months:");
        for month in MONTHS {
            let mut on = opts.months.iter().any(|m| m == month);
            if ui.checkbox(&mut on, month).changed() {
                if on {
                    opts.months.push(s!(month));
                    // calendar order
                    opts.months.sort_by_key(|m| MONTHS.iter().position(|x| x == m).unwrap_or(MONTHS.len()));
                } else {
                    opts.months.retain(|m| m != month);
                }
                logd!("UI: months → {:?}", opts.months);
            }
        }
        if ui.small_button("All").clicked() {
            opts.months = MONTHS.iter().map(|m| s!(*m)).collect();
        }
        if ui.small_button("None").clicked() {
            opts.months.clear();
        }
    });
}
