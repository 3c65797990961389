// src/gui/components/filter_panel.rs
//
// Left panel on the Dashboard tab: state multi-select and year range.
// Any change recomputes the filtered view and all aggregates.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    if app.dataset.is_none() {
        ui.label("No dataset loaded");
        if ui.button("Reload").clicked() {
            app.reload_dataset();
        }
        return;
    }

    let mut changed = false;

    // ---- years ----
    if let (Some((lo, hi)), Some((from, to))) = (app.year_bounds, app.filters.years) {
        let (mut from, mut to) = (from, to);
        ui.label("Years");
        ui.horizontal(|ui| {
            changed |= ui.add(egui::DragValue::new(&mut from).range(lo..=hi)).changed();
            ui.label("to");
            changed |= ui.add(egui::DragValue::new(&mut to).range(lo..=hi)).changed();
        });
        if changed {
            app.filters = std::mem::take(&mut app.filters).with_years(from, to);
        }
    } else {
        ui.label("Years: no dated rows");
    }

    ui.separator();

    // ---- states ----
    ui.label("States");
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.filters.states = app.state_options.iter().cloned().collect();
            changed = true;
        }
        if ui.button("None").clicked() {
            app.filters.states.clear();
            changed = true;
        }
    });

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("states_panel_scroll")
        .show(ui, |ui| {
            for name in &app.state_options {
                let mut on = app.filters.states.contains(name);
                let label = if name.is_empty() { "(blank)" } else { name.as_str() };
                if ui.checkbox(&mut on, label).changed() {
                    if on {
                        app.filters.states.insert(name.clone());
                    } else {
                        app.filters.states.remove(name);
                    }
                    changed = true;
                }
            }
        });

    if changed {
        logd!(
            "UI: filters → states={} years={:?}",
            app.filters.states.len(),
            app.filters.years
        );
        app.recompute();
    }
}
