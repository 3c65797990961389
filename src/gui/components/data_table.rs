// src/gui/components/data_table.rs
//
// Read-only table over a header row + string rows. `row_ix` picks and orders
// the rows to show (a filtered view); `None` shows every row.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

/// Columns whose cells are right-aligned counts.
fn is_numeric(header: &str) -> bool {
    let h = header.to_ascii_lowercase();
    h.starts_with("action_") || h.starts_with("total_") || h == "incident_number"
}

fn width_for(header: &str) -> f32 {
    match header.to_ascii_lowercase().as_str() {
        "incident_summary" | "summary" => 600.0,
        "date" => 90.0,
        "incident_number" => 110.0,
        _ => 120.0,
    }
}

pub fn draw(
    ui: &mut egui::Ui,
    id: &str,
    headers: &[String],
    rows: &[Vec<String>],
    row_ix: Option<&[usize]>,
    max_height: f32,
) {
    let cols = headers.len().max(rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        ui.label("No rows");
        return;
    }
    let n = row_ix.map(|ix| ix.len()).unwrap_or(rows.len());
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| headers.get(ci).map(|h| is_numeric(h)).unwrap_or(false))
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt((id, "hscroll"))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt((id, "table", cols))
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_height);
            for ci in 0..cols {
                let w = headers.get(ci).map(|h| width_for(h)).unwrap_or(120.0);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(22.0, |mut header| {
                    for ci in 0..cols {
                        let label = headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, n, |mut row| {
                        let src = match row_ix {
                            Some(ix) => ix.get(row.index()).copied(),
                            None => Some(row.index()),
                        };
                        let data = src.and_then(|i| rows.get(i));
                        for ci in 0..cols {
                            let cell = data.and_then(|r| r.get(ci)).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                if numeric[ci] {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        ui.label(cell);
                                    });
                                } else {
                                    ui.label(cell).on_hover_text(cell);
                                }
                            });
                        }
                    });
                });
        });
}
