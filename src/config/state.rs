// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Scrape,
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Scrape, Tab::Dashboard];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Scrape => "Scrape",
            Tab::Dashboard => "Dashboard",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub current_tab: Tab,

    /// Text typed into the persist gate; cleared after each attempt
    pub secret_input: String,

    /// Output field UX (mapped to ExportOptions on export)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Dashboard -> show the filtered rows table
    pub show_filtered_rows: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Scrape,
            secret_input: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            show_filtered_rows: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
