use std::f32::consts::FRAC_PI_4;

use eframe::egui::{self, epaint::TextShape, FontId, Sense, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints};

use crate::color::{viridis_palette, SALMON, SKY_BLUE};
use crate::data::distribution::{category_counts, kde_curve, star_counts, Histogram};
use crate::data::filter::FilteredView;

/// Height reserved under the category chart for its rotated labels.
const LABEL_STRIP_HEIGHT: f32 = 90.0;

/// A static plot: the dashboard scrolls, so the charts must not capture
/// drag or scroll input.
fn static_plot(id: &str, height: f32) -> Plot<'_> {
    Plot::new(id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
}

// ---------------------------------------------------------------------------
// Books by category
// ---------------------------------------------------------------------------

/// Bar chart of books per category with the category names painted at 45°
/// underneath, so long names do not overlap.
pub fn category_chart(ui: &mut Ui, view: &FilteredView<'_>, height: f32) {
    let counts = category_counts(view);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (category, n))| Bar::new(i as f64, *n as f64).name(category).width(0.6))
        .collect();

    let response = static_plot("category_counts", height)
        .y_axis_label("Number of Books")
        .x_axis_formatter(|_, _| String::new())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(SKY_BLUE));
        });

    if counts.is_empty() {
        return;
    }

    let (strip, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), LABEL_STRIP_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(strip);
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(12.0);

    for (i, (category, _)) in counts.iter().enumerate() {
        let x = response
            .transform
            .position_from_point(&PlotPoint::new(i as f64, 0.0))
            .x;
        let galley = painter.layout_no_wrap(category.clone(), font.clone(), text_color);
        let anchor = egui::pos2(x, strip.top() + 4.0);
        painter.add(TextShape::new(anchor, galley, text_color).with_angle(FRAC_PI_4));
    }
}

// ---------------------------------------------------------------------------
// Price distribution
// ---------------------------------------------------------------------------

/// Histogram of prices with a kernel density curve scaled to counts.
pub fn price_chart(ui: &mut Ui, view: &FilteredView<'_>, bins: usize, kde_points: usize, height: f32) {
    let prices: Vec<f64> = view.iter().map(|b| b.price).collect();
    let histogram = Histogram::new(&prices, bins);

    static_plot("price_distribution", height)
        .x_axis_label("Price")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            let Some(histogram) = &histogram else {
                return;
            };
            let width = histogram.bin_width();

            let bars: Vec<Bar> = histogram
                .bars()
                .map(|(centre, count)| Bar::new(centre, count as f64).width(width))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(SALMON).name("Count"));

            // Density integrates to one; scale it to the height of the bars.
            let scale = histogram.total() as f64 * width;
            let (lo, hi) = histogram.span();
            let curve: PlotPoints = kde_curve(&prices, lo, hi, kde_points)
                .into_iter()
                .map(|[x, density]| [x, density * scale])
                .collect();
            plot_ui.line(Line::new(curve).color(SALMON).width(2.0).name("Density"));
        });
}

// ---------------------------------------------------------------------------
// Rating distribution
// ---------------------------------------------------------------------------

/// Count of books per star rating, one viridis shade per rating present.
pub fn rating_chart(ui: &mut Ui, view: &FilteredView<'_>, height: f32) {
    let counts = star_counts(view);
    let colors = viridis_palette(counts.len());

    let bars: Vec<Bar> = counts
        .iter()
        .zip(colors)
        .map(|(&(stars, n), color)| {
            Bar::new(f64::from(stars), n as f64)
                .name(format!("{stars} stars"))
                .width(0.8)
                .fill(color)
                .stroke(egui::Stroke::new(1.0, color))
        })
        .collect();

    static_plot("rating_distribution", height)
        .x_axis_label("Stars")
        .y_axis_label("Count")
        .x_axis_formatter(|mark, _| {
            if mark.value.fract() == 0.0 {
                format!("{}", mark.value)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
