//! Frequency tables and density estimates backing the three charts.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;

use super::filter::FilteredView;

/// Books per category, most frequent first (ties by name).
pub fn category_counts(view: &FilteredView<'_>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in view.iter() {
        *counts.entry(book.category.as_str()).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(cat, n)| (cat.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Books per star rating, only ratings present in the view, ascending.
pub fn star_counts(view: &FilteredView<'_>) -> Vec<(u8, usize)> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for book in view.iter() {
        *counts.entry(book.stars).or_default() += 1;
    }
    counts.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram. `edges` has one more entry than `counts`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`. Every
    /// bin is half-open except the last, which also holds `max`. A range of
    /// zero width is widened to `[v - 0.5, v + 0.5]`.
    ///
    /// Returns `None` for empty input or zero bins.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Histogram { edges, counts })
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// First and last edge.
    pub fn span(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.counts.len()])
    }

    /// Centre of each bin, paired with its count.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| ((edge[0] + edge[1]) / 2.0, count))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Gaussian kernel density of `values`, evaluated at `points` evenly spaced
/// positions across `[lo, hi]`. Bandwidth follows Scott's rule,
/// `σ · n^(-1/5)` with σ the sample standard deviation.
///
/// Empty when fewer than two values are given or they have no spread.
pub fn kde_curve(values: &[f64], lo: f64, hi: f64, points: usize) -> Vec<[f64; 2]> {
    let n = values.len();
    if n < 2 || points < 2 {
        return Vec::new();
    }

    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let bandwidth = variance.sqrt() * nf.powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return Vec::new();
    }

    let norm = 1.0 / (nf * bandwidth * (2.0 * PI).sqrt());
    let step = (hi - lo) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            [x, density * norm]
        })
        .collect()
}
