//! Driftway Game
//!
//! Scene assembly and per-frame orchestration for the arena driving demo:
//!
//! - Arena construction (ground, boundary walls, ramps) with render-facing
//!   geometry snapshots
//! - The player vehicle body
//! - Input conversion and the [`Simulation`] update loop
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Simulation tick                       │
//! │  ┌────────────┐   ┌────────────┐   ┌────────────────────┐  │
//! │  │ DriveInput │──►│ controller │──►│ physics step +     │  │
//! │  │ (keys)     │   │ velocities │   │ contact drain +    │  │
//! │  └────────────┘   └────────────┘   │ frame readback     │  │
//! │                                    └────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod arena;
pub mod input;
pub mod simulation;
pub mod vehicle;

// Re-export main types
pub use arena::{Arena, GeometryRecord};
pub use input::DriveInput;
pub use simulation::{FrameOutput, Simulation, SimulationConfig};
pub use vehicle::Vehicle;

// Re-export physics types for convenience
pub use driftway_physics::{
    BodyTag, ContactSink, DriveCommand, DriveConfig, NullContactSink, PhysicsWorld,
    VehicleController,
};
