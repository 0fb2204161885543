use eframe::egui::{self, Color32, RichText, ScrollArea, Sense, Ui, Vec2};

use crate::color;
use crate::data::model::{CharacterRecord, PLACEHOLDER};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Character card grid (central panel, characters page)
// ---------------------------------------------------------------------------

const CARD_SIZE: Vec2 = Vec2::new(300.0, 224.0);
const CARD_GAP: f32 = 12.0;

/// Render the grid of character cards for the visible subset. Clicking a
/// card flips it between the profile and magical-info sides.
pub fn card_grid(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No characters match the current filters.");
        });
        return;
    }

    let columns = ((ui.available_width() + CARD_GAP) / (CARD_SIZE.x + CARD_GAP))
        .floor()
        .max(1.0) as usize;

    let mut clicked: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("character_cards")
                .spacing([CARD_GAP, CARD_GAP])
                .show(ui, |ui: &mut Ui| {
                    for (slot, &idx) in state.visible_indices.iter().enumerate() {
                        let record = &dataset.records[idx];
                        let flipped = state.flipped.contains(&record.id);
                        if character_card(ui, record, flipped).clicked() {
                            clicked = Some(record.id.clone());
                        }
                        if (slot + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if let Some(id) = clicked {
        state.toggle_flip(&id);
    }
}

/// One card: house-colored frame, name band, then either the profile table
/// and portrait or the magical-info side.
fn character_card(ui: &mut Ui, record: &CharacterRecord, flipped: bool) -> egui::Response {
    let fill = color::house_color(record.house.as_deref());
    let band = color::house_deep_color(record.house.as_deref());

    let response = ui
        .allocate_ui(CARD_SIZE, |ui: &mut Ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(6)
                .inner_margin(10)
                .show(ui, |ui: &mut Ui| {
                    ui.set_min_size(ui.available_size());
                    name_band(ui, &record.name, band);
                    ui.add_space(6.0);
                    if flipped {
                        back_side(ui, record);
                    } else {
                        front_side(ui, record);
                    }
                });
        })
        .response;

    response.interact(Sense::click())
}

fn name_band(ui: &mut Ui, name: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(4)
        .inner_margin(4)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(name).color(Color32::WHITE).strong());
            });
        });
}

fn front_side(ui: &mut Ui, record: &CharacterRecord) {
    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.set_width(CARD_SIZE.x * 0.55);
            egui::Grid::new(("card_fields", &record.id))
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    field_row(ui, "Species", record.species.as_deref().unwrap_or(PLACEHOLDER));
                    field_row(ui, "Gender", record.gender.as_deref().unwrap_or(PLACEHOLDER));
                    field_row(ui, "House", record.house.as_deref().unwrap_or(PLACEHOLDER));
                    field_row(ui, "Birth", &record.birth_label());
                    field_row(ui, "Role", record.role_label());
                });
        });
        portrait(ui, record);
    });
}

fn field_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).color(Color32::WHITE).strong());
    ui.label(RichText::new(value).color(Color32::WHITE));
    ui.end_row();
}

fn portrait(ui: &mut Ui, record: &CharacterRecord) {
    match &record.image {
        Some(url) => {
            ui.add(
                egui::Image::from_uri(url)
                    .max_size(Vec2::new(96.0, 128.0))
                    .corner_radius(4),
            );
        }
        None => {
            ui.label(RichText::new("🧙").size(28.0).color(Color32::WHITE));
        }
    }
}

fn back_side(ui: &mut Ui, record: &CharacterRecord) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(12.0);
        ui.label(
            RichText::new("Magical Info")
                .color(Color32::WHITE)
                .strong()
                .size(16.0),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("Wand: {}", record.wand_label())).color(Color32::WHITE),
        );
        ui.separator();
        ui.label(
            RichText::new(format!("Patronus: {}", record.patronus_label()))
                .color(Color32::WHITE),
        );
    });
}
