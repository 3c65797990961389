// src/gui/actions/export.rs
use crate::{config::consts::DEFAULT_FILTERED_FILE, file, gui::app::App};

use super::apply_out_path;

/// Current scrape batch → one file at the output path.
pub fn export_batch(app: &mut App) {
    apply_out_path(app);

    let Some(report) = &app.batch else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };
    if report.records.is_empty() {
        app.status("Nothing to export");
        return;
    }

    let ds = report.to_dataset();
    logf!("Export: Begin batch rows={}", ds.row_count());
    let msg = match file::write_export_single(&app.state.options.export, &ds.headers, &ds.rows, None) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} incident(s) → {}", ds.row_count(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

/// Filtered dashboard rows, all columns. Falls back to `filtered_data.<ext>`
/// next to the batch output when the user has not typed a path.
pub fn export_filtered(app: &mut App) {
    let typed = app.state.gui.out_path_dirty;
    apply_out_path(app);

    let Some(ds) = &app.dataset else {
        app.status("Nothing to export (no dataset)");
        return;
    };
    if app.view_ix.is_empty() {
        logd!("Export: filtered view is empty");
        app.status("Nothing to export");
        return;
    }

    let export = if typed {
        app.state.options.export.clone()
    } else {
        app.state.options.export.with_stem(DEFAULT_FILTERED_FILE)
    };

    logf!("Export: Begin filtered rows={} headers={}", app.view_ix.len(), ds.table.header_count());
    let msg = match file::write_export_single(&export, &ds.table.headers, &ds.table.rows, Some(app.view_ix.as_slice())) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} filtered row(s) → {}", app.view_ix.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
