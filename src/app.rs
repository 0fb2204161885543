use std::time::Duration;

use eframe::egui;

use crate::state::{AppState, Page};
use crate::ui::{cards, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CodexApp {
    pub state: AppState,
}

impl Default for CodexApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for CodexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_fetch();
        if self.state.loading {
            // Keep polling while the fetch is in flight.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ---- Top panel: page switcher and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters (characters page only) ----
        if self.state.page == Page::Characters && self.state.dataset.is_some() {
            egui::SidePanel::left("filter_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.loading {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.vertical_centered(|ui: &mut egui::Ui| {
                        ui.spinner();
                        ui.heading("Loading characters…");
                    });
                });
                return;
            }
            if let Some(msg) = &self.state.error {
                let msg = msg.clone();
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading(
                        egui::RichText::new(format!("Error: {msg}")).color(egui::Color32::RED),
                    );
                });
                return;
            }
            match self.state.page {
                Page::Overview => plot::overview(ui, &self.state),
                Page::Characters => cards::card_grid(ui, &mut self.state),
            }
        });
    }
}
