use std::path::PathBuf;

/// Highest star rating a record may carry.
pub const MAX_STARS: u8 = 5;

/// Tunables for the dashboard. There is no config file; `Default` is the
/// configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// File loaded on startup, relative to the working directory.
    pub data_path: PathBuf,
    /// Number of entries in the top-rated list.
    pub top_n: usize,
    /// Bin count of the price histogram.
    pub histogram_bins: usize,
    /// Number of points the density curve is evaluated at.
    pub kde_points: usize,
    /// Height of each chart in logical pixels.
    pub chart_height: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Books.json"),
            top_n: 10,
            histogram_bins: 20,
            kde_points: 200,
            chart_height: 280.0,
            window_size: [1280.0, 860.0],
            min_window_size: [720.0, 480.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("Books.json"));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.histogram_bins, 20);
    }
}
