//! Color utilities: hex parsing, season bands and the diverging colormap

use bikedash_common::Season;
use plotters::style::RGBColor;

/// Parse a color string (hex format) to RGBColor; black if parsing fails
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Background band color for a season
pub fn season_band(season: Season) -> RGBColor {
    parse_color(season.band_color())
}

// Diverging colormap endpoints (cool blue -> neutral -> warm red)
const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (242.0, 242.0, 242.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

fn lerp(a: (f64, f64, f64), b: (f64, f64, f64), t: f64) -> RGBColor {
    let mix = |x: f64, y: f64| (x + (y - x) * t).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Diverging color for t in [0, 1], centered at 0.5.
///
/// Values below the center map onto the cool half, values above onto the
/// warm half; out-of-range inputs are clamped.
pub fn diverging(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(COOL, NEUTRAL, t * 2.0)
    } else {
        lerp(NEUTRAL, WARM, (t - 0.5) * 2.0)
    }
}

/// Diverging color for a correlation coefficient in [-1, 1], centered at 0
pub fn diverging_signed(value: f64) -> RGBColor {
    diverging((value.clamp(-1.0, 1.0) + 1.0) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(parse_color("#00FF00"), RGBColor(0, 255, 0));
        assert_eq!(parse_color("#0000FF"), RGBColor(0, 0, 255));

        // Invalid colors default to black
        assert_eq!(parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_season_band_colors() {
        assert_eq!(season_band(Season::Spring), RGBColor(0xA0, 0xE7, 0xE5));
        assert_eq!(season_band(Season::Fall), RGBColor(0xFF, 0xAE, 0xBC));
    }

    #[test]
    fn test_diverging_endpoints_and_center() {
        assert_eq!(diverging(0.0), RGBColor(59, 76, 192));
        assert_eq!(diverging(1.0), RGBColor(180, 4, 38));
        assert_eq!(diverging(0.5), RGBColor(242, 242, 242));

        // Clamped outside [0, 1]
        assert_eq!(diverging(-3.0), diverging(0.0));
        assert_eq!(diverging(5.0), diverging(1.0));
    }

    #[test]
    fn test_diverging_signed_centered_at_zero() {
        assert_eq!(diverging_signed(0.0), diverging(0.5));
        assert_eq!(diverging_signed(-1.0), diverging(0.0));
        assert_eq!(diverging_signed(1.0), diverging(1.0));
    }
}
