use std::path::PathBuf;

use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CineDashApp {
    pub state: AppState,
}

impl CineDashApp {
    /// Create the app, loading `initial_file` when one was given on the
    /// command line (the original dashboard loads its CSV at startup).
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::default();

        if let Some(path) = initial_file {
            match loader::load_file(&path) {
                Ok(dataset) => {
                    log::info!("Loaded {} movies from {}", dataset.len(), path.display());
                    state.set_dataset(dataset);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }

        Self { state }
    }
}

impl Default for CineDashApp {
    fn default() -> Self {
        Self::new(None)
    }
}

impl eframe::App for CineDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the three charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &self.state);
        });
    }
}
