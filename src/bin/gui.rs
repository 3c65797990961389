// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use incident_scrape::{gui, log};

fn main() {
    log::init(false);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Incident Scraper")
            .with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
