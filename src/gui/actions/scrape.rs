// src/gui/actions/scrape.rs
use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

pub fn scrape(app: &mut App) {
    let opts = &app.state.options.scrape;
    if opts.years.is_empty() || opts.months.is_empty() {
        app.status("Select at least one year and one month");
        return;
    }

    logf!("Scrape: Begin years={:?} months={:?}", opts.years, opts.months);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    let report = scrape::run(opts, Some(&mut prog));
    logf!(
        "Scrape: OK incidents={} skipped_units={}",
        report.count(),
        report.skipped.len()
    );
    app.status(format!("Total incidents scraped: {}", report.count()));
    app.batch = Some(report);
}
