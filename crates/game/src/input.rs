//! Drive input handling.
//!
//! Converts raw key state from the host input layer into a resolved
//! [`DriveCommand`] for the physics controller.

use driftway_physics::{DriveCommand, Steer, Throttle};
use serde::{Deserialize, Serialize};

/// Raw key state for a single frame.
///
/// Keys are trusted as produced by the host; no validation is performed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DriveInput {
    /// Accelerate key held (W).
    pub forward: bool,

    /// Brake/reverse key held (S).
    pub back: bool,

    /// Turn-left key held (A).
    pub left: bool,

    /// Turn-right key held (D).
    pub right: bool,
}

impl DriveInput {
    /// Resolve key state into a drive command.
    ///
    /// Simultaneous opposite keys are resolved here, once, so downstream
    /// code never sees ambiguous input: forward wins over back, left wins
    /// over right. This precedence is deliberate policy carried over from
    /// the demo's tuning, not an accident of defaults.
    pub fn to_command(&self) -> DriveCommand {
        let throttle = if self.forward {
            Throttle::Forward
        } else if self.back {
            Throttle::Reverse
        } else {
            Throttle::Coast
        };

        let steer = if self.left {
            Steer::Left
        } else if self.right {
            Steer::Right
        } else {
            Steer::Straight
        };

        DriveCommand { throttle, steer }
    }

    /// Check if any key is held.
    pub fn any_held(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_input() {
        let cmd = DriveInput::default().to_command();
        assert_eq!(cmd.throttle, Throttle::Coast);
        assert_eq!(cmd.steer, Steer::Straight);
        assert!(!DriveInput::default().any_held());
    }

    #[test]
    fn test_single_keys() {
        let input = DriveInput {
            forward: true,
            ..Default::default()
        };
        assert_eq!(input.to_command().throttle, Throttle::Forward);

        let input = DriveInput {
            back: true,
            ..Default::default()
        };
        assert_eq!(input.to_command().throttle, Throttle::Reverse);

        let input = DriveInput {
            right: true,
            ..Default::default()
        };
        assert_eq!(input.to_command().steer, Steer::Right);
    }

    #[test]
    fn test_forward_wins_over_back() {
        let input = DriveInput {
            forward: true,
            back: true,
            ..Default::default()
        };
        assert_eq!(input.to_command().throttle, Throttle::Forward);
    }

    #[test]
    fn test_left_wins_over_right() {
        let input = DriveInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.to_command().steer, Steer::Left);
    }
}
