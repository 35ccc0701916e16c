use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::Book;
use crate::data::summary::Summary;

const TABLE_HEADERS: [&str; 7] = ["", "title", "category", "price", "stars", "availability", "url"];

// ---------------------------------------------------------------------------
// Overview metrics
// ---------------------------------------------------------------------------

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).size(28.0).strong());
}

/// Three metric columns: count, mean price, mean rating.
pub fn overview(ui: &mut Ui, summary: &Summary) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Books", summary.count.to_string());
        metric(&mut cols[1], "Avg. Price", summary.price_label());
        metric(&mut cols[2], "Avg. Rating", summary.rating_label());
    });
}

// ---------------------------------------------------------------------------
// Top rated list
// ---------------------------------------------------------------------------

fn detail_line(book: &Book) -> String {
    format!(
        "• ⭐ {} stars | 💲 {:.2} | 📦 {} in stock",
        book.stars, book.price, book.availability
    )
}

pub fn top_rated(ui: &mut Ui, books: &[&Book]) {
    if books.is_empty() {
        ui.label(RichText::new("No books match the current filters.").italics());
        return;
    }

    for book in books {
        ui.label(RichText::new(format!("📘 {}", book.title)).strong());
        ui.label(detail_line(book));
        ui.hyperlink_to("🔗 View on Website", &book.url);
        ui.separator();
    }
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// The filtered rows behind a collapsed "Show Data Table" header. Rows are
/// numbered from zero in view order.
pub fn raw_table(ui: &mut Ui, view: &FilteredView<'_>) {
    egui::CollapsingHeader::new("Show Data Table")
        .id_salt("raw_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if view.is_empty() {
                ui.label(RichText::new("No rows match the current filters.").italics());
                return;
            }
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(400.0)
                .column(Column::auto().at_least(32.0))
                .column(Column::initial(260.0).clip(true))
                .column(Column::initial(140.0).clip(true))
                .column(Column::auto().at_least(56.0))
                .column(Column::auto().at_least(40.0))
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder().clip(true))
                .header(20.0, |mut header| {
                    for name in TABLE_HEADERS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, view.len(), |mut row| {
                        let index = row.index();
                        let Some(book) = view.get(index) else {
                            return;
                        };
                        row.col(|ui| {
                            ui.label(RichText::new(index.to_string()).weak());
                        });
                        row.col(|ui| {
                            ui.label(book.title.as_str());
                        });
                        row.col(|ui| {
                            ui.label(book.category.as_str());
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", book.price));
                        });
                        row.col(|ui| {
                            ui.label(book.stars.to_string());
                        });
                        row.col(|ui| {
                            ui.label(book.availability.as_str());
                        });
                        row.col(|ui| {
                            ui.hyperlink(&book.url);
                        });
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::book;

    #[test]
    fn test_detail_line_keeps_cents() {
        let mut whole = book("A", "fiction", 10.0, 5);
        whole.availability = "007".to_string();
        assert_eq!(detail_line(&whole), "• ⭐ 5 stars | 💲 10.00 | 📦 007 in stock");
        assert!(detail_line(&book("B", "fiction", 12.5, 3)).contains("💲 12.50 "));
    }
}
