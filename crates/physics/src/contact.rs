//! Body classification and the contact-pair callback contract.

use serde::{Deserialize, Serialize};

/// Classification of a rigid body for collision handling.
///
/// Every body inserted into the [`PhysicsWorld`](crate::PhysicsWorld)
/// carries exactly one tag, so contact sinks can match exhaustively instead
/// of string-comparing an open-ended label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyTag {
    /// The arena floor.
    Ground,
    /// A boundary wall.
    Wall,
    /// An inclined ramp.
    Ramp,
    /// A raised platform.
    Platform,
    /// The player-controlled vehicle.
    Vehicle,
}

/// Receives tagged contact pairs drained after each physics step.
///
/// This is the extension point for gameplay response to collisions. The
/// stepper guarantees each pair is delivered exactly once per event, with no
/// ordering between simultaneous pairs. Pairs are only delivered when both
/// bodies are known to the world's tag table.
pub trait ContactSink {
    /// Called once per drained contact event.
    ///
    /// `started` is true when the pair came into contact this step, false
    /// when it separated.
    fn contact(&mut self, a: BodyTag, b: BodyTag, started: bool);
}

/// A sink that ignores every contact pair.
///
/// The demo uses this as its default: contact pairs are still logged at
/// debug level by the stepper, but no gameplay response exists yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContactSink;

impl ContactSink for NullContactSink {
    fn contact(&mut self, _a: BodyTag, _b: BodyTag, _started: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_pairs() {
        let mut sink = NullContactSink;
        sink.contact(BodyTag::Wall, BodyTag::Vehicle, true);
        sink.contact(BodyTag::Ground, BodyTag::Vehicle, false);
    }

    #[test]
    fn test_tags_are_distinct() {
        assert_ne!(BodyTag::Wall, BodyTag::Vehicle);
        assert_ne!(BodyTag::Ground, BodyTag::Ramp);
    }
}
