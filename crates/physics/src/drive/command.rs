//! Resolved drive intent for a single frame.

use serde::{Deserialize, Serialize};

/// Throttle intent after key-precedence resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Throttle {
    /// Accelerate toward +max_speed.
    Forward,
    /// Accelerate toward -max_speed.
    Reverse,
    /// No throttle input; speed decays toward zero.
    #[default]
    Coast,
}

/// Steering intent after key-precedence resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    /// Yaw counter-clockwise (+Y).
    Left,
    /// Yaw clockwise (-Y).
    Right,
    /// No steering input; yaw rate is zero.
    #[default]
    Straight,
}

/// Drive intent for one frame.
///
/// Produced from raw key state by the input layer, which resolves
/// simultaneous opposite keys (forward wins over back, left over right)
/// before the controller ever sees them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveCommand {
    /// Forward/reverse intent.
    pub throttle: Throttle,

    /// Left/right intent.
    pub steer: Steer,
}

impl DriveCommand {
    /// True while throttle or reverse is held.
    #[inline]
    pub fn throttling(&self) -> bool {
        self.throttle != Throttle::Coast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let cmd = DriveCommand::default();
        assert_eq!(cmd.throttle, Throttle::Coast);
        assert_eq!(cmd.steer, Steer::Straight);
        assert!(!cmd.throttling());
    }

    #[test]
    fn test_throttling() {
        let mut cmd = DriveCommand::default();
        cmd.throttle = Throttle::Forward;
        assert!(cmd.throttling());
        cmd.throttle = Throttle::Reverse;
        assert!(cmd.throttling());
    }
}
