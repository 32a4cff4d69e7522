use crate::color::HslColor;
use crate::palette::{HUE_STEP_DEG, MAX_COLORS};

fn hue(h: f64) -> HslColor {
    HslColor::new(h, 100.0, 50.0)
}

/// Full wheel at 30-degree steps: red, orange, yellow, chartreuse,
/// green, spring green, cyan, azure, blue, violet, magenta, rose.
pub fn rainbow() -> Vec<HslColor> {
    (0..MAX_COLORS)
        .map(|i| hue(i as f64 * HUE_STEP_DEG))
        .collect()
}

/// Red / white / green.
pub fn xmas() -> Vec<HslColor> {
    vec![hue(0.0), HslColor::new(0.0, 0.0, 100.0), hue(120.0)]
}

/// Red / blue / orange / green / yellow.
pub fn xmas_alt() -> Vec<HslColor> {
    vec![hue(0.0), hue(240.0), hue(30.0), hue(120.0), hue(60.0)]
}

pub fn names() -> &'static [&'static str] {
    &["rainbow", "xmas", "xmas_alt"]
}

pub fn by_name(name: &str) -> Option<Vec<HslColor>> {
    match name {
        "rainbow" => Some(rainbow()),
        "xmas" => Some(xmas()),
        "xmas_alt" => Some(xmas_alt()),
        _ => None,
    }
}
