use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::filter;
use crate::data::ranking::top_rated;
use crate::data::summary::Summary;
use crate::state::AppState;
use crate::ui::{plot, report};

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(16.0);
    ui.heading(title);
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Run the filter and every renderer against the current state. Nothing is
/// kept between frames; each call starts again from the loaded table.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(error) = &state.load_error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!("Could not load books.\n\n{error}"))
                    .color(Color32::RED)
                    .size(16.0),
            );
        });
        return;
    }

    let (Some(table), Some(filters)) = (&state.table, &state.filters) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a book catalogue to begin  (File → Open…)");
        });
        return;
    };

    let config = &state.config;
    let view = filter::apply(table, filters);
    let summary = Summary::of(&view);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new("📚 Books Data Analysis Dashboard").size(26.0));

            section(ui, "📊 Overview");
            report::overview(ui, &summary);

            section(ui, "📈 Number of Books by Category");
            plot::category_chart(ui, &view, config.chart_height);

            section(ui, "💵 Price Distribution");
            plot::price_chart(
                ui,
                &view,
                config.histogram_bins,
                config.kde_points,
                config.chart_height,
            );

            section(ui, "⭐ Rating Distribution");
            plot::rating_chart(ui, &view, config.chart_height);

            section(ui, "🏆 Top Rated Books");
            report::top_rated(ui, &top_rated(&view, config.top_n));

            section(ui, "📄 View Raw Data");
            report::raw_table(ui, &view);
        });
}
