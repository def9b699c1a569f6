use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel. Edits here stay local to the controls until the
/// user hits Apply; Cancel (or closing the panel) discards them.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate the controls inside the loop.
    let (year_lo, year_hi) = dataset.year_range;
    let titles = dataset.titles.clone();
    let directors = dataset.directors.clone();
    let countries = dataset.countries.clone();

    let mut apply = false;
    let mut cancel = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Release year");
            let controls = &mut state.controls;
            let min_changed = ui
                .add(egui::Slider::new(&mut controls.min_year, year_lo..=year_hi).text("from"))
                .changed();
            let max_changed = ui
                .add(egui::Slider::new(&mut controls.max_year, year_lo..=year_hi).text("to"))
                .changed();
            // Clamp the slider being dragged, like the commit step will.
            if min_changed && controls.min_year > controls.max_year {
                controls.min_year = controls.max_year;
            }
            if max_changed && controls.max_year < controls.min_year {
                controls.max_year = controls.min_year;
            }
            ui.separator();

            // ---- Box office range ----
            ui.strong("Box office");
            ui.horizontal(|ui: &mut Ui| {
                ui.label("min");
                ui.add(
                    egui::TextEdit::singleline(&mut controls.min_box_office)
                        .hint_text("no minimum")
                        .desired_width(90.0),
                );
            });
            ui.horizontal(|ui: &mut Ui| {
                ui.label("max");
                ui.add(
                    egui::TextEdit::singleline(&mut controls.max_box_office)
                        .hint_text("no maximum")
                        .desired_width(90.0),
                );
            });
            ui.separator();

            // ---- Multi-select filters ----
            multi_select(ui, "Titles", &titles, &mut controls.titles);
            multi_select(ui, "Directors", &directors, &mut controls.directors);
            multi_select(ui, "Countries", &countries, &mut controls.countries);

            ui.separator();
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply").clicked() {
                    apply = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if apply {
        state.apply_filters();
        state.filter_panel_open = false;
    } else if cancel {
        state.discard_edits();
        state.filter_panel_open = false;
    }
}

/// Collapsible checkbox list over a column's unique values. An empty
/// selection means "no restriction", so the header advertises the count.
fn multi_select(
    ui: &mut Ui,
    label: &str,
    all_values: &BTreeSet<String>,
    selected: &mut BTreeSet<String>,
) {
    let header_text = format!("{label}  ({}/{})", selected.len(), all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                }
            });

            for value in all_values {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    if checked {
                        selected.insert(value.clone());
                    } else {
                        selected.remove(value);
                    }
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

        if ui
            .selectable_label(state.filter_panel_open, "Filters")
            .clicked()
        {
            state.filter_panel_open = !state.filter_panel_open;
            if !state.filter_panel_open {
                // Closing without Apply discards in-progress edits.
                state.discard_edits();
            }
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} movies loaded, {} visible",
                ds.len(),
                state.derived_view().len()
            ));
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
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} movies spanning {:?}",
                    dataset.len(),
                    dataset.year_range
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
