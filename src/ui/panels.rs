use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, FilterField};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            filter_section(ui, state, FilterField::Year);
            filter_section(ui, state, FilterField::Language);

            ui.separator();
            ui.strong("Search Movie Name");
            let mut search = state.criteria.search.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search).hint_text("Enter movie name"),
            );
            if response.changed() {
                state.set_search(search);
            }
        });
}

/// A collapsible checkbox list for one categorical filter field.
///
/// An empty selection means "no restriction", so the Clear button is the
/// way back to showing everything.
fn filter_section(ui: &mut Ui, state: &mut AppState, field: FilterField) {
    let options = state.options(field);

    let n_selected = state.selection(field).len();
    let header_text = if n_selected == 0 {
        format!("{}  (all)", field.label())
    } else {
        format!("{}  ({n_selected}/{})", field.label(), options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(field.label())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(field);
                }
                if ui.small_button("Clear").clicked() {
                    state.clear_selection(field);
                }
            });

            for value in &options {
                let mut checked = state.selection(field).contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    state.toggle_value(field, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let text = if state.criteria.is_unrestricted() {
                format!("{} movies loaded", ds.len())
            } else {
                format!(
                    "{} movies loaded, {} matching",
                    ds.len(),
                    state.visible_indices.len()
                )
            };
            ui.label(text);
        }

        ui.separator();

        if ui.selectable_label(state.charts.line, "Line").clicked() {
            state.charts.line = !state.charts.line;
        }
        if ui.selectable_label(state.charts.bar, "Bar").clicked() {
            state.charts.bar = !state.charts.bar;
        }
        if ui.selectable_label(state.charts.pie, "Pie").clicked() {
            state.charts.pie = !state.charts.pie;
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} movies ({} years, {} languages, {} genres)",
                    dataset.len(),
                    dataset.years.len(),
                    dataset.languages.len(),
                    dataset.genres.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
