//! Drive tuning constants.

use serde::{Deserialize, Serialize};

/// Configuration for vehicle drive physics.
///
/// Speeds are in world units/second, accelerations in units/second².
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Maximum forward (and reverse) speed.
    pub max_speed: f32,

    /// Base yaw rate when steering (radians/second). Scaled up 1.5× while
    /// throttle or reverse is held, down to 0.5× while coasting.
    pub turn_speed: f32,

    /// Throttle acceleration (units/second²).
    pub acceleration: f32,

    /// Passive deceleration toward zero when coasting (units/second²).
    pub friction: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            max_speed: 30.0,
            turn_speed: 1.0,
            acceleration: 30.0,
            friction: 5.0,
        }
    }
}

impl DriveConfig {
    /// Yaw rate multiplier for the current throttle state.
    pub fn turn_multiplier(&self, throttling: bool) -> f32 {
        if throttling {
            1.5
        } else {
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DriveConfig::default();
        assert_eq!(config.max_speed, 30.0);
        assert_eq!(config.turn_speed, 1.0);
        assert_eq!(config.acceleration, 30.0);
        assert_eq!(config.friction, 5.0);
    }

    #[test]
    fn test_turn_multiplier() {
        let config = DriveConfig::default();
        assert_eq!(config.turn_multiplier(true), 1.5);
        assert_eq!(config.turn_multiplier(false), 0.5);
    }
}
