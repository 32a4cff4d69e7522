use serde::{Deserialize, Serialize};

/// Speed slider range is 0..=100; 0 means "stopped".
pub const MAX_SPEED: u32 = 100;

/// Playback direction of the palette sequence on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Payload encoding: `+1` forward, `-1` reverse.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub fn from_sign(n: i32) -> Self {
        if n < 0 {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Map a speed (0..=100) to the animation period in milliseconds.
///
/// Speed 0 means stopped (period 0); otherwise the period steps down by
/// 100 ms per 10 speed, from 1000 ms at speed 1..=10 to 100 ms at 100.
/// The ceiling makes this and [`period_to_speed`] only approximate
/// inverses off the 100 ms grid; that asymmetry is intentional.
pub fn speed_to_period(speed: u32) -> u32 {
    if speed == 0 {
        0
    } else {
        1100u32.saturating_sub(speed.div_ceil(10) * 100)
    }
}

/// Inverse-ish of [`speed_to_period`], same ceiling rounding.
pub fn period_to_speed(ms: u32) -> u32 {
    if ms == 0 {
        0
    } else {
        1100u32.saturating_sub(ms).div_ceil(100) * 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_endpoints() {
        assert_eq!(speed_to_period(0), 0);
        assert_eq!(speed_to_period(100), 100);
        assert_eq!(speed_to_period(10), 1000);
        assert_eq!(speed_to_period(1), 1000);
    }

    #[test]
    fn period_endpoints() {
        assert_eq!(period_to_speed(0), 0);
        assert_eq!(period_to_speed(100), 100);
        assert_eq!(period_to_speed(1000), 10);
    }

    #[test]
    fn round_trip_on_the_grid() {
        for speed in (10..=100).step_by(10) {
            assert_eq!(period_to_speed(speed_to_period(speed)), speed);
        }
    }

    #[test]
    fn round_trip_off_the_grid_is_approximate() {
        // Ceiling rounding on both sides: speed 45 maps to 600 ms, which
        // maps back to 50, not 45. Documented behavior, not a bug.
        assert_eq!(speed_to_period(45), 600);
        assert_eq!(period_to_speed(600), 50);
        assert_ne!(period_to_speed(speed_to_period(45)), 45);
    }

    #[test]
    fn oversized_period_maps_to_stopped() {
        assert_eq!(period_to_speed(1100), 0);
        assert_eq!(period_to_speed(5000), 0);
    }

    #[test]
    fn direction_encoding() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Reverse.sign(), -1);
        assert_eq!(Direction::from_sign(-1), Direction::Reverse);
        assert_eq!(Direction::from_sign(1), Direction::Forward);
        assert_eq!(Direction::Forward.reversed(), Direction::Reverse);
    }
}
