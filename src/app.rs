use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ReelViewApp {
    pub state: AppState,
}

impl eframe::App for ReelViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters (toggled from the top bar) ----
        egui::SidePanel::left("filter_panel")
            .default_width(250.0)
            .resizable(true)
            .show_animated(ctx, self.state.filter_panel_open, |ui| {
                panels::filter_panel(ui, &mut self.state);
            });

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::movie_table(ui, &mut self.state);
        });
    }
}
