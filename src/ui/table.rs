use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{BoxOffice, SortKey};
use crate::data::sort::SortDirection;
use crate::state::AppState;

const RESET_COLOR: Color32 = Color32::from_rgb(0x97, 0x47, 0xff);

// ---------------------------------------------------------------------------
// Movie table (central panel)
// ---------------------------------------------------------------------------

/// Render the movie table with clickable, sortable column headers and a
/// trailing reset-sorting column.
pub fn movie_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view movies  (File → Open…)");
        });
        return;
    };

    let view = state.derived_view();
    let history = &state.sort_history;

    // Header clicks are collected here and applied after the table borrow
    // ends.
    let mut clicked: Option<SortKey> = None;
    let mut reset_clicked = false;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .resizable(true)
        .columns(Column::auto().at_least(60.0), SortKey::ALL.len())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for key in SortKey::ALL {
                header.col(|ui| {
                    let arrow = match history.direction_of(key) {
                        Some(SortDirection::Asc) => "  ▲",
                        Some(SortDirection::Desc) => "  ▼",
                        None => "",
                    };
                    let text = RichText::new(format!("{}{arrow}", key.label())).strong();
                    let response = ui
                        .add(egui::Label::new(text).sense(egui::Sense::click()))
                        .on_hover_text("Click to sort; click again to reverse");
                    if response.clicked() {
                        clicked = Some(key);
                    }
                });
            }
            header.col(|ui| {
                let text = RichText::new("↺").strong().color(RESET_COLOR);
                if ui
                    .add(egui::Label::new(text).sense(egui::Sense::click()))
                    .on_hover_text("Reset sorting")
                    .clicked()
                {
                    reset_clicked = true;
                }
            });
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let movie = &dataset.movies[view[row.index()]];
                row.col(|ui| {
                    ui.label(movie.id.to_string());
                });
                row.col(|ui| {
                    ui.label(&movie.title);
                });
                row.col(|ui| {
                    ui.label(movie.release_year.to_string());
                });
                row.col(|ui| {
                    ui.label(&movie.director);
                });
                row.col(|ui| {
                    ui.label(format_box_office(&movie.box_office));
                });
                row.col(|ui| {
                    ui.label(&movie.country);
                });
                row.col(|_ui| {});
            });
        });

    if let Some(key) = clicked {
        state.sort_by(key);
    } else if reset_clicked {
        state.reset_sort();
    }
}

/// `$` plus thousands-separated gross; non-numeric values display as-is.
fn format_box_office(gross: &BoxOffice) -> String {
    match gross.as_f64() {
        Some(v) => format!("${}", group_thousands(v)),
        None => gross.to_string(),
    }
}

fn group_thousands(v: f64) -> String {
    let negative = v.is_sign_negative();
    let whole = v.abs().trunc() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let fract = v.abs().fract();
    if fract > 0.0 {
        grouped.push_str(&format!("{fract:.2}")[1..]);
    }
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}
