use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The entry shown for a palette that has never been edited: black at
/// full saturation.
pub const DEFAULT_COLOR: HslColor = HslColor {
    h: 0.0,
    s: 100.0,
    l: 0.0,
};

/// Picker sliders snap hue to this many degrees.
pub const HUE_SNAP_DEG: f64 = 12.0;
/// Picker sliders snap saturation/lightness to this many percent.
pub const PERCENT_SNAP: f64 = 10.0;

/// An HSL color as edited in the composer.
///
/// `h` is in degrees and deliberately unclamped (conversion wraps it),
/// `s` and `l` are percentages 0..=100. Value type: every edit builds a
/// new color, nothing mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Hex string for the payload, e.g. `#ff7f00`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        // Channels are truncated, not rounded.
        rgb_to_hex(r as u8, g as u8, b as u8)
    }
}

/// Convert HSL (degrees, percent, percent) to float RGB channels in
/// `[0, 255]`. Callers truncate when packing.
///
/// Total over the whole numeric domain: out-of-range saturation or
/// lightness yields mathematically defined garbage, never an error.
/// Hue uses a flooring modulus, so negative hues behave like their
/// positive equivalents (`-120` == `240`).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let k = |n: f64| (n + h / 30.0).rem_euclid(12.0);
    let f = |n: f64| l - a * (k(n) - 3.0).min(9.0 - k(n)).min(1.0).max(-1.0);
    (255.0 * f(0.0), 255.0 * f(8.0), 255.0 * f(4.0))
}

/// Pack channels into a lowercase `#rrggbb` string, leading zeros kept.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    let n = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    format!("#{n:06x}")
}

/// Recover the channels from a `#rrggbb` (or bare `rrggbb`) string.
pub fn hex_to_rgb(hex: &str) -> anyhow::Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        anyhow::bail!("expected 6 hex digits, got '{hex}'");
    }
    let n = u32::from_str_radix(digits, 16)
        .with_context(|| format!("parse hex color '{hex}'"))?;
    Ok((
        ((n >> 16) & 0xFF) as u8,
        ((n >> 8) & 0xFF) as u8,
        (n & 0xFF) as u8,
    ))
}

/// New color with the hue rotated by `deg`, wrapped into `[0, 360)`.
/// Saturation and lightness are untouched.
pub fn rotate_hue(color: HslColor, deg: f64) -> HslColor {
    HslColor {
        h: (color.h + deg).rem_euclid(360.0),
        ..color
    }
}

/// Snap a slider value to the nearest multiple of `step`.
pub fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_u8(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
        let (r, g, b) = hsl_to_rgb(h, s, l);
        (r.round() as u8, g.round() as u8, b.round() as u8)
    }

    #[test]
    fn pure_hues_hit_primaries_and_secondaries() {
        assert_eq!(rgb_u8(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(rgb_u8(60.0, 100.0, 50.0), (255, 255, 0));
        assert_eq!(rgb_u8(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(rgb_u8(180.0, 100.0, 50.0), (0, 255, 255));
        assert_eq!(rgb_u8(240.0, 100.0, 50.0), (0, 0, 255));
        assert_eq!(rgb_u8(300.0, 100.0, 50.0), (255, 0, 255));
    }

    #[test]
    fn zero_saturation_is_achromatic() {
        for h in [0.0, 47.0, 213.0, 359.0, 720.0] {
            for l in [0.0, 25.0, 50.0, 100.0] {
                let (r, g, b) = hsl_to_rgb(h, 0.0, l);
                assert!((r - g).abs() < 1e-9, "r!=g at h={h} l={l}");
                assert!((g - b).abs() < 1e-9, "g!=b at h={h} l={l}");
                assert!((r - 255.0 * l / 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn negative_hue_wraps_like_positive() {
        assert_eq!(rgb_u8(-120.0, 100.0, 50.0), rgb_u8(240.0, 100.0, 50.0));
        assert_eq!(rgb_u8(-90.0, 80.0, 40.0), rgb_u8(270.0, 80.0, 40.0));
        assert_eq!(rgb_u8(-720.0, 100.0, 50.0), (255, 0, 0));
    }

    #[test]
    fn hue_past_360_wraps() {
        assert_eq!(rgb_u8(480.0, 100.0, 50.0), rgb_u8(120.0, 100.0, 50.0));
    }

    #[test]
    fn hex_round_trip() -> anyhow::Result<()> {
        for (r, g, b) in [
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (1, 2, 3),
            (0, 16, 255),
            (128, 0, 12),
            (254, 1, 127),
        ] {
            let hex = rgb_to_hex(r, g, b);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert_eq!(hex, hex.to_lowercase());
            assert_eq!(hex_to_rgb(&hex)?, (r, g, b));
        }
        Ok(())
    }

    #[test]
    fn hex_keeps_leading_zeros() {
        assert_eq!(rgb_to_hex(0, 0, 1), "#000001");
        assert_eq!(rgb_to_hex(0, 255, 0), "#00ff00");
    }

    #[test]
    fn bad_hex_is_an_error() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#1234567").is_err());
        assert!(hex_to_rgb("#gggggg").is_err());
    }

    #[test]
    fn to_hex_truncates_channels() {
        // s=100 l=50 h=30 gives g = 255*0.5 = 127.5; truncation keeps 127.
        assert_eq!(HslColor::new(30.0, 100.0, 50.0).to_hex(), "#ff7f00");
        assert_eq!(HslColor::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
        assert_eq!(DEFAULT_COLOR.to_hex(), "#000000");
    }

    #[test]
    fn rotate_hue_wraps_into_circle() {
        let c = rotate_hue(HslColor::new(350.0, 100.0, 50.0), 30.0);
        assert!((c.h - 20.0).abs() < 1e-9);
        assert_eq!(c.s, 100.0);
        assert_eq!(c.l, 50.0);

        let back = rotate_hue(HslColor::new(10.0, 40.0, 60.0), -30.0);
        assert!((back.h - 340.0).abs() < 1e-9);
    }

    #[test]
    fn snapping_matches_picker_steps() {
        assert_eq!(snap(127.0, HUE_SNAP_DEG), 132.0);
        assert_eq!(snap(125.0, HUE_SNAP_DEG), 120.0);
        assert_eq!(snap(44.0, PERCENT_SNAP), 40.0);
        assert_eq!(snap(45.0, PERCENT_SNAP), 50.0);
    }
}
