//! Vehicle drive control.
//!
//! Split the same way as the rest of the crate: plain-data configuration and
//! commands, plus a stateless controller that turns them into body
//! velocities.

mod command;
mod config;
mod controller;

pub use command::{DriveCommand, Steer, Throttle};
pub use config::DriveConfig;
pub use controller::{forward_axis, signed_forward_speed, BodyVelocity, VehicleController};
