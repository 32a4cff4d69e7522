pub mod color;
pub mod config;
pub mod editcmd;
pub mod palette;
pub mod presets;
pub mod speed;

mod session;

pub use color::{HslColor, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rotate_hue};
pub use config::{Config, derive_config};
pub use palette::{MAX_COLORS, PaletteEditor, PaletteView, Selection};
pub use session::{DEFAULT_SPEED, Session};
pub use speed::{Direction, MAX_SPEED, period_to_speed, speed_to_period};

pub fn version() -> &'static str {
    "0.1.0"
}
