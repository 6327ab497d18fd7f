//! Driftway Physics
//!
//! The physics layer for the Driftway arena-driving demo. Everything here is
//! a thin orchestration over the rapier3d engine:
//!
//! - **World**: owns rapier's sets and pipeline, steps one fixed timestep at
//!   a time, and drains tagged collision pairs to a [`ContactSink`]
//! - **Drive**: pure controller math turning key intent into new body
//!   velocities (bounded acceleration, coast friction, direct yaw rate)
//!
//! Collision detection, constraint solving and integration are rapier's job;
//! this crate only assembles scene data and forwards per-frame control.

pub mod contact;
pub mod convert;
pub mod drive;
pub mod world;

// Re-export commonly used types
pub use contact::{BodyTag, ContactSink, NullContactSink};
pub use drive::{
    forward_axis, signed_forward_speed, BodyVelocity, DriveCommand, DriveConfig, Steer, Throttle,
    VehicleController,
};
pub use world::PhysicsWorld;
