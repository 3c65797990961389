// src/gui/components/dashboard_panel.rs
//
// Dashboard tab body: the six aggregate views, then the filtered rows.

use eframe::egui::{self, Color32, RichText};

use crate::{
    config::consts::MONTHS,
    dashboard::{Aggregates, Heatmap},
    gui::{actions, app::App},
};

use super::{data_table, export_bar};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.dataset_error {
        ui.colored_label(Color32::from_rgb(0xDC, 0x61, 0x49), format!("Dataset unavailable: {err}"));
        if ui.button("Reload").clicked() {
            app.reload_dataset();
        }
        return;
    }

    ui.horizontal(|ui| {
        ui.heading(format!("{} incident(s) selected", app.aggregates.rows));
        if ui.button("Reload").clicked() {
            app.reload_dataset();
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .show(ui, |ui| {
            let agg = &app.aggregates;

            egui::CollapsingHeader::new("Trend by date and state")
                .default_open(false)
                .show(ui, |ui| trend(ui, agg));

            egui::CollapsingHeader::new("Incidents by state (map)")
                .default_open(true)
                .show(ui, |ui| match (&agg.geo, &app.geo) {
                    (Some(rows), _) => {
                        let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
                        bars(ui, "geo", rows.iter().map(|r| (r.state.as_str(), r.count)), max);
                    }
                    (None, Err(e)) => {
                        ui.colored_label(Color32::from_rgb(0xDC, 0x61, 0x49), format!("Map omitted: {e}"));
                    }
                    (None, Ok(_)) => {
                        ui.label("No data");
                    }
                });

            egui::CollapsingHeader::new("Actions")
                .default_open(true)
                .show(ui, |ui| {
                    let max = agg.actions.iter().map(|a| a.total).max().unwrap_or(0);
                    bars(ui, "actions", agg.actions.iter().map(|a| (a.action, a.total)), max);
                });

            egui::CollapsingHeader::new("State × year heatmap")
                .default_open(true)
                .show(ui, |ui| heatmap(ui, &agg.heatmap));

            egui::CollapsingHeader::new("Casualties by date")
                .default_open(false)
                .show(ui, |ui| casualties(ui, agg));

            egui::CollapsingHeader::new("Incidents by month")
                .default_open(true)
                .show(ui, |ui| {
                    let max = agg.monthly.iter().map(|m| m.count).max().unwrap_or(0);
                    bars(
                        ui,
                        "monthly",
                        agg.monthly.iter().map(|m| (MONTHS[(m.month - 1) as usize], m.count)),
                        max,
                    );
                });

            ui.separator();
            ui.checkbox(&mut app.state.gui.show_filtered_rows, "Show filtered rows");
        });

    ui.separator();
    export_bar::draw(ui, app);
    if ui.button("Export filtered view").clicked() {
        actions::export_filtered(app);
    }

    if app.state.gui.show_filtered_rows {
        if let Some(ds) = &app.dataset {
            data_table::draw(ui, "filtered", &ds.table.headers, &ds.table.rows, Some(app.view_ix.as_slice()), 320.0);
        }
    }
}

fn bars<'a>(ui: &mut egui::Ui, id: &str, items: impl Iterator<Item = (&'a str, u64)>, max: u64) {
    let max = max.max(1) as f32;
    egui::Grid::new(id).striped(true).show(ui, |ui| {
        for (label, n) in items {
            ui.label(label);
            ui.add(egui::ProgressBar::new(n as f32 / max).desired_width(280.0).text(n.to_string()));
            ui.end_row();
        }
    });
}

fn trend(ui: &mut egui::Ui, agg: &Aggregates) {
    if agg.trend.is_empty() {
        ui.label("No dated rows");
        return;
    }
    egui::Grid::new("trend").striped(true).show(ui, |ui| {
        ui.strong("Date");
        ui.strong("State");
        ui.strong("Incidents");
        ui.end_row();
        for t in &agg.trend {
            ui.label(t.date.to_string());
            ui.label(&t.state);
            ui.label(t.count.to_string());
            ui.end_row();
        }
    });
}

fn casualties(ui: &mut egui::Ui, agg: &Aggregates) {
    if agg.casualties.is_empty() {
        ui.label("No dated rows");
        return;
    }
    egui::Grid::new("casualties").striped(true).show(ui, |ui| {
        ui.strong("Date");
        ui.strong("Fatalities");
        ui.strong("Injuries");
        ui.end_row();
        for c in &agg.casualties {
            ui.label(c.date.to_string());
            ui.label(c.fatalities.to_string());
            ui.label(c.injuries.to_string());
            ui.end_row();
        }
    });
}

fn heatmap(ui: &mut egui::Ui, hm: &Heatmap) {
    if hm.states.is_empty() {
        ui.label("No dated rows");
        return;
    }
    let max = hm.max().max(1) as f32;
    egui::Grid::new("heatmap").show(ui, |ui| {
        ui.label("");
        for y in &hm.years {
            ui.strong(y.to_string());
        }
        ui.end_row();
        for (state, row) in hm.states.iter().zip(&hm.counts) {
            ui.label(state);
            for &n in row {
                // white → red as the count approaches the max
                let t = n as f32 / max;
                let fade = (255.0 * (1.0 - t)) as u8;
                let bg = Color32::from_rgb(255, fade, fade);
                ui.label(RichText::new(format!(" {n:>4} ")).monospace().color(Color32::BLACK).background_color(bg));
            }
            ui.end_row();
        }
    });
}
