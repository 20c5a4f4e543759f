mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::CineDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path on the command line.
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CineDash – Movie Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(CineDashApp::new(initial_file)))),
    )
}
