//! Per-frame simulation orchestration.
//!
//! [`Simulation`] is the context object the host loop owns: build it once,
//! call [`Simulation::initialize`] to construct the scene, then call
//! [`Simulation::update`] every tick with the frame's input. There is no
//! global state; independent simulations coexist freely (the tests rely on
//! this).

use driftway_physics::{
    ContactSink, DriveConfig, PhysicsWorld, VehicleController,
};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::arena::{Arena, GeometryRecord};
use crate::input::DriveInput;
use crate::vehicle::Vehicle;

/// Simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Vehicle drive tuning.
    pub drive: DriveConfig,
}

/// Everything the host needs after one tick: the vehicle's pose and
/// velocity, the HUD speed, and read-only geometry snapshots for rendering.
///
/// Produced fresh each call; the slices borrow the simulation's arena.
#[derive(Debug, Clone)]
pub struct FrameOutput<'a> {
    /// Vehicle position.
    pub position: Vec3,

    /// Vehicle orientation.
    pub rotation: Quat,

    /// Vehicle linear velocity.
    pub velocity: Vec3,

    /// Planar (x, z) speed magnitude for display; vertical motion excluded.
    pub display_speed: f32,

    /// Wall snapshots.
    pub walls: &'a [GeometryRecord],

    /// Ramp snapshots.
    pub ramps: &'a [GeometryRecord],

    /// Platform snapshots.
    pub platforms: &'a [GeometryRecord],
}

impl FrameOutput<'_> {
    /// The safe default frame returned before the scene exists, so callers
    /// never need to special-case pre-initialization ticks.
    fn uninitialized() -> FrameOutput<'static> {
        FrameOutput {
            position: Vehicle::SPAWN_POSITION,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            display_speed: 0.0,
            walls: &[],
            ramps: &[],
            platforms: &[],
        }
    }
}

/// The driving-demo simulation context.
pub struct Simulation {
    /// Ticks advanced since the last (re)initialization.
    pub frame: u64,

    /// Configuration the simulation was built with.
    pub config: SimulationConfig,

    world: PhysicsWorld,
    arena: Option<Arena>,
    vehicle: Option<Vehicle>,
    controller: VehicleController,
}

impl Simulation {
    /// Create an empty simulation; no scene exists until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(config: SimulationConfig) -> Self {
        let controller = VehicleController::new(config.drive.clone());

        Self {
            frame: 0,
            config,
            world: PhysicsWorld::new(),
            arena: None,
            vehicle: None,
            controller,
        }
    }

    /// Create a simulation with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(SimulationConfig::default())
    }

    /// Build (or rebuild) the scene.
    ///
    /// Idempotent by replacement: any previous world, geometry and vehicle
    /// are discarded and the scene is rebuilt from its fixed constants, so
    /// repeated calls always converge on the same contents.
    pub fn initialize(&mut self) {
        self.world = PhysicsWorld::new();
        self.arena = Some(Arena::build(&mut self.world));
        self.vehicle = Some(Vehicle::spawn(&mut self.world));
        self.frame = 0;

        log::debug!("scene initialized");
    }

    /// True once [`initialize`](Self::initialize) has built the scene.
    pub fn is_initialized(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Advance the simulation by one tick.
    ///
    /// Applies drive control using `delta_time` for the controller's own
    /// velocity integration, steps the physics world by its fixed internal
    /// timestep, drains contact pairs into `sink`, and reads back the frame
    /// result. Before initialization this degrades to a fixed default frame
    /// rather than failing.
    pub fn update(
        &mut self,
        delta_time: f32,
        input: &DriveInput,
        sink: &mut dyn ContactSink,
    ) -> FrameOutput<'_> {
        let Some(vehicle) = self.vehicle else {
            return FrameOutput::uninitialized();
        };

        if let (Some(rotation), Some(velocity)) =
            (vehicle.rotation(&self.world), vehicle.velocity(&self.world))
        {
            let command = input.to_command();
            let response = self
                .controller
                .steer(rotation, velocity, &command, delta_time);
            self.world.set_body_velocity(vehicle.body, &response);
        }

        self.world.step();
        self.world.drain_contacts(sink);
        self.frame += 1;

        let position = vehicle
            .position(&self.world)
            .unwrap_or(Vehicle::SPAWN_POSITION);
        let rotation = vehicle.rotation(&self.world).unwrap_or(Quat::IDENTITY);
        let velocity = vehicle.velocity(&self.world).unwrap_or(Vec3::ZERO);

        let (walls, ramps, platforms) = match &self.arena {
            Some(arena) => (arena.walls(), arena.ramps(), arena.platforms()),
            None => Default::default(),
        };

        FrameOutput {
            position,
            rotation,
            velocity,
            display_speed: planar_speed(velocity),
            walls,
            ramps,
            platforms,
        }
    }

    /// Read-only access to the physics world, for debug collaborators.
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Mutable access to the physics world.
    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    /// The arena geometry, once built.
    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }
}

/// Speed over the ground plane: `sqrt(vx² + vz²)`.
fn planar_speed(velocity: Vec3) -> f32 {
    Vec3::new(velocity.x, 0.0, velocity.z).length()
}
