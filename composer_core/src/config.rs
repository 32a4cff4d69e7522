use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::palette::PaletteView;
use crate::speed::{Direction, speed_to_period};

/// The payload a controller would consume: hex colors in palette order,
/// animation period, playback direction.
///
/// Always derived on demand from the editing state, never stored, so it
/// can't go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub colors: Vec<String>,
    pub period_ms: u32,
    pub direction: i32,
}

impl Config {
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize config to json")
    }
}

/// Pure projection of the editing state into a [`Config`].
pub fn derive_config(palette: &PaletteView, speed: u32, direction: Direction) -> Config {
    Config {
        colors: palette.colors.iter().map(|c| c.to_hex()).collect(),
        period_ms: speed_to_period(speed),
        direction: direction.sign(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HslColor;

    fn view(hues: &[f64]) -> PaletteView {
        PaletteView {
            colors: hues
                .iter()
                .map(|&h| HslColor::new(h, 100.0, 50.0))
                .collect(),
            selected: 0,
        }
    }

    #[test]
    fn config_projects_palette_in_order() {
        let cfg = derive_config(&view(&[0.0, 120.0, 240.0]), 100, Direction::Forward);
        assert_eq!(cfg.colors, vec!["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(cfg.period_ms, 100);
        assert_eq!(cfg.direction, 1);
    }

    #[test]
    fn config_json_shape() -> anyhow::Result<()> {
        let cfg = derive_config(&view(&[240.0]), 50, Direction::Reverse);
        let value: serde_json::Value = serde_json::from_str(&cfg.to_json_pretty()?)?;
        assert_eq!(
            value,
            serde_json::json!({
                "colors": ["#0000ff"],
                "period_ms": 600,
                "direction": -1,
            })
        );
        Ok(())
    }

    #[test]
    fn config_round_trips_through_serde() -> anyhow::Result<()> {
        let cfg = derive_config(&view(&[0.0, 60.0]), 30, Direction::Forward);
        let json = serde_json::to_string(&cfg)?;
        let back: Config = serde_json::from_str(&json)?;
        assert_eq!(back, cfg);
        Ok(())
    }
}
