use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::RoleFilter;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel shown on the characters page.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No characters loaded.");
        return;
    };

    // Clone the choice lists so we can mutate the criteria below.
    let species = dataset.species.clone();
    let genders = dataset.genders.clone();
    let houses = dataset.houses.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Name");
            ui.add(
                egui::TextEdit::singleline(&mut state.criteria.name)
                    .hint_text("Search by name"),
            );
            ui.separator();

            choice_combo(ui, "species_filter", "Species", &species, &mut state.criteria.species);
            choice_combo(ui, "gender_filter", "Gender", &genders, &mut state.criteria.gender);
            choice_combo(ui, "house_filter", "House", &houses, &mut state.criteria.house);
            ui.separator();

            ui.strong("Role");
            egui::ComboBox::from_id_salt("role_filter")
                .selected_text(state.criteria.role.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for role in RoleFilter::ALL {
                        if ui
                            .selectable_label(state.criteria.role == role, role.label())
                            .clicked()
                        {
                            state.criteria.role = role;
                        }
                    }
                });
            ui.separator();

            ui.strong("Age");
            age_bound(ui, "Min", &mut state.criteria.min_age);
            age_bound(ui, "Max", &mut state.criteria.max_age);
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

/// Combo box over a categorical field: "Any" plus the dataset's unique
/// values.
fn choice_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    options: &[String],
    selection: &mut Option<String>,
) {
    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selection.as_deref().unwrap_or("Any").to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(selection.is_none(), "Any").clicked() {
                *selection = None;
            }
            for option in options {
                if ui
                    .selectable_label(selection.as_deref() == Some(option.as_str()), option)
                    .clicked()
                {
                    *selection = Some(option.clone());
                }
            }
        });
}

/// Checkbox-gated inclusive age bound.
fn age_bound(ui: &mut Ui, label: &str, bound: &mut Option<i64>) {
    ui.horizontal(|ui: &mut Ui| {
        let mut enabled = bound.is_some();
        if ui.checkbox(&mut enabled, label).changed() {
            *bound = if enabled { Some(0) } else { None };
        }
        if let Some(value) = bound {
            ui.add(egui::DragValue::new(value).range(0..=1000));
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top strip: page switcher, record counts, fetch status.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Hogwarts Codex");
        ui.separator();

        if ui
            .selectable_label(state.page == Page::Overview, "Overview")
            .clicked()
        {
            state.page = Page::Overview;
        }
        if ui
            .selectable_label(state.page == Page::Characters, "Characters")
            .clicked()
        {
            state.page = Page::Characters;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} characters loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if state.loading {
            ui.spinner();
            ui.label("Loading characters…");
        }

        if let Some(msg) = &state.error {
            ui.label(RichText::new(format!("Error: {msg}")).color(Color32::RED));
        }
    });
}
