use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filter Books");
    ui.separator();

    // Clone the Arc so we can mutate state inside the loops.
    let Some(table) = state.table.clone() else {
        ui.label("No books loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Category multi-select ----
            let n_selected = state
                .filters
                .as_ref()
                .map_or(0, |f| f.categories.len());
            let header_text = format!(
                "Select Categories  ({n_selected}/{})",
                table.categories.len()
            );

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("categories")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_none();
                        }
                    });

                    for category in &table.categories {
                        let mut checked = state
                            .filters
                            .as_ref()
                            .is_some_and(|f| f.categories.contains(category));
                        if ui.checkbox(&mut checked, category.as_str()).changed() {
                            state.toggle_category(category);
                        }
                    }
                });
            ui.separator();

            let Some(filters) = state.filters.as_mut() else {
                return;
            };

            // ---- Price range ----
            ui.strong("Select Price Range");
            let price_range = table.price_bounds.lo..=table.price_bounds.hi;
            let mut lo = filters.price.lo;
            let mut hi = filters.price.hi;
            if ui
                .add(
                    Slider::new(&mut lo, price_range.clone())
                        .step_by(1.0)
                        .fixed_decimals(0)
                        .prefix("$")
                        .text("from"),
                )
                .changed()
            {
                filters.price.set_lo(lo);
            }
            if ui
                .add(
                    Slider::new(&mut hi, price_range)
                        .step_by(1.0)
                        .fixed_decimals(0)
                        .prefix("$")
                        .text("to"),
                )
                .changed()
            {
                filters.price.set_hi(hi);
            }
            ui.separator();

            // ---- Star rating range ----
            ui.strong("Select Star Rating");
            let star_range = table.star_bounds.lo..=table.star_bounds.hi;
            let mut lo = filters.stars.lo;
            let mut hi = filters.stars.hi;
            if ui
                .add(Slider::new(&mut lo, star_range.clone()).suffix(" ⭐").text("from"))
                .changed()
            {
                filters.stars.set_lo(lo);
            }
            if ui
                .add(Slider::new(&mut hi, star_range).suffix(" ⭐").text("to"))
                .changed()
            {
                filters.stars.set_hi(hi);
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
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

        ui.label(state.data_path.display().to_string());
        if let Some(table) = &state.table {
            ui.label(format!(
                "{} books in {} categories",
                table.len(),
                table.categories.len()
            ));
        }

        if state.load_error.is_some() {
            ui.label(RichText::new("load failed").color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open book catalogue")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
