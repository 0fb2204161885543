use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color;
use crate::data::charts::{self, ChartData};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Overview page: hero text + distribution charts
// ---------------------------------------------------------------------------

const CHART_HEIGHT: f32 = 250.0;

/// Render the overview page. The chart data is derived from the full record
/// set on every render.
pub fn overview(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let data = charts::aggregate(&dataset.records);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            hero(ui);
            ui.add_space(24.0);
            ui.columns(3, |columns: &mut [Ui]| {
                gender_chart(&mut columns[0], &data);
                age_chart(&mut columns[1], &data);
                house_chart(&mut columns[2], &data);
            });
        });
}

fn hero(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(24.0);
        ui.heading("Explore the World of Harry Potter");
        ui.label(
            "Discover detailed profiles of your favorite characters from the \
             magical world created by J.K. Rowling.",
        );
    });
}

fn gender_chart(ui: &mut Ui, data: &ChartData) {
    categorical_bars(
        ui,
        "gender_distribution",
        "Gender Distribution",
        &data.by_gender,
        color::gender_bucket_color,
    );
}

fn house_chart(ui: &mut Ui, data: &ChartData) {
    categorical_bars(
        ui,
        "house_distribution",
        "House Distribution",
        &data.by_house,
        color::house_bucket_color,
    );
}

fn age_chart(ui: &mut Ui, data: &ChartData) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong("Age Distribution");
    });

    let bars: Vec<Bar> = data
        .by_age
        .iter()
        .map(|&(age, count)| {
            Bar::new(age as f64, count as f64)
                .name(format!("age {age}"))
                .fill(color::AGE_BARS)
        })
        .collect();

    Plot::new("age_distribution")
        .height(CHART_HEIGHT)
        .x_axis_label("Age")
        .y_axis_label("Number")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Bar chart over labelled buckets, one bar per bucket at integer x
/// positions with the bucket name on the axis.
fn categorical_bars(
    ui: &mut Ui,
    id: &str,
    title: &str,
    buckets: &[(String, usize)],
    color_for: fn(&str) -> Color32,
) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(title);
    });

    let bars: Vec<Bar> = buckets
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .name(label)
                .fill(color_for(label))
        })
        .collect();

    let labels: Vec<String> = buckets.iter().map(|(label, _)| label.clone()).collect();

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .y_axis_label("Number")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
