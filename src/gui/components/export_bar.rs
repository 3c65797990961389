// src/gui/components/export_bar.rs
//
// Format / headers / output path controls shared by both tabs. The text
// field is mapped onto ExportOptions lazily (see actions::export).

use eframe::egui;
use crate::{config::options::ExportFormat, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let export = &mut app.state.options.export;
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        let prev_fmt = export.format;
        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !gui.out_path_dirty {
                gui.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut gui.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", gui.out_path_text);
        }
    });
}
