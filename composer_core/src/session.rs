use crate::config::{Config, derive_config};
use crate::palette::{PaletteEditor, PaletteView};
use crate::presets;
use crate::speed::{Direction, MAX_SPEED, period_to_speed};

/// Default speed for a fresh session (period 100 ms).
pub const DEFAULT_SPEED: u32 = 100;

/// One editing session: palette editor plus speed and direction.
///
/// Everything is in-memory and single-threaded; the session is created
/// on start and discarded on exit, nothing persists.
#[derive(Debug, Clone)]
pub struct Session {
    pub editor: PaletteEditor,
    speed: u32,
    pub direction: Direction,
}

impl Session {
    pub fn new() -> Self {
        Self {
            editor: PaletteEditor::new(),
            speed: DEFAULT_SPEED,
            direction: Direction::Forward,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the speed, clamped into 0..=100.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.min(MAX_SPEED);
    }

    /// Set the speed from a period in milliseconds.
    pub fn set_period_ms(&mut self, ms: u32) {
        self.set_speed(period_to_speed(ms));
    }

    /// Replace the palette with a named preset. Returns `None` when the
    /// name is unknown, leaving the session untouched.
    pub fn load_preset(&mut self, name: &str) -> Option<PaletteView> {
        presets::by_name(name).map(|colors| self.editor.reset_with(&colors))
    }

    /// Derive the payload from the current state.
    pub fn config(&self) -> Config {
        derive_config(&self.editor.view(), self.speed, self.direction)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
