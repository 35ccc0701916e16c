use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

/// Category bar fill.
pub const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);

/// Price histogram fill and density line.
pub const SALMON: Color32 = Color32::from_rgb(250, 128, 114);

/// Anchor points of the viridis colour map, dark purple to yellow.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];

fn to_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0).into_linear()
}

/// Sample the viridis map at `t` in `[0, 1]`, mixing neighbouring anchors in
/// linear RGB.
pub fn viridis_at(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let mixed = to_linear(VIRIDIS[i]).mix(to_linear(VIRIDIS[i + 1]), scaled - i as f32);

    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// `n` colours from the viridis map, evenly spaced and skipping both
/// extremes so the darkest and lightest shades stay readable.
pub fn viridis_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| viridis_at((i + 1) as f32 / (n + 1) as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis_at(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis_at(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(viridis_at(0.5), Color32::from_rgb(0x21, 0x91, 0x8c));
    }

    #[test]
    fn test_palette_sizes() {
        assert!(viridis_palette(0).is_empty());
        let colors = viridis_palette(5);
        assert_eq!(colors.len(), 5);
        // Distinct shades, darkest first.
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert!(colors[0].g() < colors[4].g());
    }
}
