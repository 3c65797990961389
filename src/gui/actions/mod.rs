// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{scrape, persist, export_*}.

mod export;  // src/gui/actions/export.rs
mod persist; // src/gui/actions/persist.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use export::{export_batch, export_filtered};
pub use persist::persist;
pub use scrape::scrape;

use crate::gui::app::App;

/// Map the output text field onto ExportOptions, once per edit.
pub(super) fn apply_out_path(app: &mut App) {
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.state.gui.out_path_dirty = false;
    }
}
