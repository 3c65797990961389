// src/gui/actions/persist.rs
//
// Secret gate, then create-only append of the current batch into the raw
// worksheet.

use crate::{gui::app::App, sync};

pub fn persist(app: &mut App) {
    let given = std::mem::take(&mut app.state.gui.secret_input);
    if !sync::check_secret(app.state.options.store.secret.as_deref(), &given) {
        logw!("Persist: rejected (secret mismatch or none configured)");
        app.status("Incorrect secret");
        return;
    }

    let Some(report) = &app.batch else {
        app.status("Nothing to persist; scrape first");
        return;
    };

    let sheet = app.state.options.store.raw_sheet.clone();
    let mut wb = app.workbook();
    match sync::sync_incidents(&mut wb, &sheet, &report.records) {
        Ok(outcome) => {
            logf!("Persist: {} → '{}'", outcome.message(), sheet);
            app.status(outcome.message());
            app.reload_raw_monthly();
        }
        Err(e) => {
            loge!("Persist: Error: {}", e);
            app.status(format!("Persist error: {e}"));
        }
    }
}
