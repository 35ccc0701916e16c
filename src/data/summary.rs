use super::filter::FilteredView;

/// Aggregates shown in the overview row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `NaN` when the view is empty.
    pub mean_price: f64,
    /// `NaN` when the view is empty.
    pub mean_stars: f64,
}

impl Summary {
    pub fn of(view: &FilteredView<'_>) -> Self {
        let count = view.len();
        let (price_sum, stars_sum) = view
            .iter()
            .fold((0.0, 0.0), |(p, s), b| (p + b.price, s + f64::from(b.stars)));

        // 0.0 / 0.0 is NaN, which is what an empty view should report.
        let n = count as f64;
        Summary {
            count,
            mean_price: price_sum / n,
            mean_stars: stars_sum / n,
        }
    }

    pub fn price_label(&self) -> String {
        format!("${:.2}", self.mean_price)
    }

    pub fn rating_label(&self) -> String {
        format!("{:.2} ⭐", self.mean_stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, init_filter_state};
    use crate::data::fixtures::three_books;

    #[test]
    fn test_summary_of_fiction() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.categories.remove("drama");

        let summary = Summary::of(&apply(&table, &filters));
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean_price, 15.0);
        assert_eq!(summary.mean_stars, 4.0);
        assert_eq!(summary.price_label(), "$15.00");
        assert_eq!(summary.rating_label(), "4.00 ⭐");
    }

    #[test]
    fn test_summary_of_empty_view() {
        let table = three_books();
        let mut filters = init_filter_state(&table);
        filters.categories.clear();

        let summary = Summary::of(&apply(&table, &filters));
        assert_eq!(summary.count, 0);
        assert!(summary.mean_price.is_nan());
        assert!(summary.mean_stars.is_nan());
        assert_eq!(summary.price_label(), "$NaN");
    }

    #[test]
    fn test_rounding() {
        let table = three_books();
        let filters = init_filter_state(&table);
        let summary = Summary::of(&apply(&table, &filters));
        assert_eq!(summary.price_label(), "$15.00");
        assert_eq!(summary.rating_label(), "4.33 ⭐");
    }
}
