//! Arena construction.
//!
//! Builds the static collision scene (ground, boundary walls, ramps) from
//! fixed constants and keeps a render-facing snapshot of every piece so the
//! visual meshes can be built to match the physics colliders exactly.

use driftway_physics::convert::{na_isometry, na_vector};
use driftway_physics::{BodyTag, PhysicsWorld};
use glam::{Quat, Vec3};
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};

/// Half-extent of the square arena footprint; walls sit on this boundary.
const ARENA_EXTENT: f32 = 100.0;

/// Ground slab half-extents.
const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(100.0, 0.1, 100.0);

/// Ground surface friction.
const GROUND_FRICTION: f32 = 0.5;

/// Boundary wall half-height above the ground.
const WALL_HALF_HEIGHT: f32 = 2.5;

/// Boundary wall half-thickness.
const WALL_HALF_THICKNESS: f32 = 0.5;

/// Bounciness of boundary walls and platforms.
const WALL_RESTITUTION: f32 = 0.3;

/// Ramp slope: rises `RAMP_RISE` over a run of `RAMP_RUN`.
const RAMP_RISE: f32 = 4.0;
const RAMP_RUN: f32 = 30.0;

/// Ramp slab dimensions (full extents).
const RAMP_WIDTH: f32 = 7.0;
const RAMP_LENGTH: f32 = 44.5;
const RAMP_THICKNESS: f32 = 0.1;

/// Ramps are slick so the vehicle carries speed up them.
const RAMP_FRICTION: f32 = 0.01;

/// Slight bounce on ramp landings.
const RAMP_RESTITUTION: f32 = 0.1;

/// Interaction groups shared by all event-reporting arena geometry.
fn arena_groups() -> InteractionGroups {
    InteractionGroups::new(Group::GROUP_1, Group::GROUP_1)
}

/// Render-facing snapshot of one static collider.
///
/// Captured once at creation and never mutated. `size` holds full extents
/// (double the collider's half-extents) because that is what mesh builders
/// consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    /// Center position in world space.
    pub position: Vec3,

    /// Full extents along each axis.
    pub size: Vec3,

    /// Orientation; identity for axis-aligned pieces.
    pub rotation: Quat,
}

impl GeometryRecord {
    fn new(position: Vec3, half_extents: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            size: half_extents * 2.0,
            rotation,
        }
    }

    fn axis_aligned(position: Vec3, half_extents: Vec3) -> Self {
        Self::new(position, half_extents, Quat::IDENTITY)
    }
}

/// The static arena: collision geometry plus its render snapshots.
#[derive(Debug, Default)]
pub struct Arena {
    walls: Vec<GeometryRecord>,
    ramps: Vec<GeometryRecord>,
    platforms: Vec<GeometryRecord>,
}

impl Arena {
    /// Build the demo arena into `world`.
    ///
    /// Creates the ground slab, four boundary walls forming a square, and
    /// the two ramps approaching the inner platform site. Every call starts
    /// from empty record lists; rebuilding a scene means building a fresh
    /// world and a fresh arena.
    pub fn build(world: &mut PhysicsWorld) -> Self {
        let mut arena = Self::default();

        // Ground slab with moderate friction, no bounce.
        world.insert_tagged(
            BodyTag::Ground,
            RigidBodyBuilder::fixed().build(),
            ColliderBuilder::cuboid(
                GROUND_HALF_EXTENTS.x,
                GROUND_HALF_EXTENTS.y,
                GROUND_HALF_EXTENTS.z,
            )
            .friction(GROUND_FRICTION)
            .build(),
        );

        // Boundary walls.
        let long = Vec3::new(ARENA_EXTENT, WALL_HALF_HEIGHT, WALL_HALF_THICKNESS);
        let wide = Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_HEIGHT, ARENA_EXTENT);
        arena.add_wall(
            world,
            Vec3::new(0.0, WALL_HALF_HEIGHT, ARENA_EXTENT),
            long,
            WALL_RESTITUTION,
        );
        arena.add_wall(
            world,
            Vec3::new(0.0, WALL_HALF_HEIGHT, -ARENA_EXTENT),
            long,
            WALL_RESTITUTION,
        );
        arena.add_wall(
            world,
            Vec3::new(ARENA_EXTENT, WALL_HALF_HEIGHT, 0.0),
            wide,
            WALL_RESTITUTION,
        );
        arena.add_wall(
            world,
            Vec3::new(-ARENA_EXTENT, WALL_HALF_HEIGHT, 0.0),
            wide,
            WALL_RESTITUTION,
        );

        // Ramps up to the inner platform site, south and west approaches.
        let angle = (RAMP_RISE / RAMP_RUN).asin();
        arena.add_ramp(
            world,
            Vec3::new(-31.5, 0.0, 35.5),
            Vec3::new(RAMP_WIDTH / 2.0, RAMP_THICKNESS / 2.0, RAMP_LENGTH / 2.0),
            Quat::from_rotation_x(-angle),
            RAMP_RESTITUTION,
        );
        arena.add_ramp(
            world,
            Vec3::new(-35.5, 0.0, 31.5),
            Vec3::new(RAMP_LENGTH / 2.0, RAMP_THICKNESS / 2.0, RAMP_WIDTH / 2.0),
            Quat::from_rotation_z(-angle),
            RAMP_RESTITUTION,
        );

        log::debug!(
            "arena built: {} walls, {} ramps",
            arena.walls.len(),
            arena.ramps.len()
        );
        arena
    }

    /// Add a boundary wall: fixed box with collision events enabled.
    pub fn add_wall(
        &mut self,
        world: &mut PhysicsWorld,
        position: Vec3,
        half_extents: Vec3,
        restitution: f32,
    ) -> RigidBodyHandle {
        let handle = world.insert_tagged(
            BodyTag::Wall,
            RigidBodyBuilder::fixed()
                .translation(na_vector(position))
                .build(),
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
                .restitution(restitution)
                .collision_groups(arena_groups())
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build(),
        );
        self.walls
            .push(GeometryRecord::axis_aligned(position, half_extents));
        handle
    }

    /// Add a low-friction ramp at the given pose.
    pub fn add_ramp(
        &mut self,
        world: &mut PhysicsWorld,
        position: Vec3,
        half_extents: Vec3,
        rotation: Quat,
        restitution: f32,
    ) -> RigidBodyHandle {
        let handle = world.insert_tagged(
            BodyTag::Ramp,
            RigidBodyBuilder::fixed()
                .position(na_isometry(position, rotation))
                .build(),
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
                .friction(RAMP_FRICTION)
                .restitution(restitution)
                .build(),
        );
        self.ramps
            .push(GeometryRecord::new(position, half_extents, rotation));
        handle
    }

    /// Add a raised platform: fixed box with ground-like friction and
    /// collision events enabled.
    ///
    /// Not used by the default arena; scene variants place these.
    pub fn add_platform(
        &mut self,
        world: &mut PhysicsWorld,
        position: Vec3,
        half_extents: Vec3,
        restitution: f32,
    ) -> RigidBodyHandle {
        let handle = world.insert_tagged(
            BodyTag::Platform,
            RigidBodyBuilder::fixed()
                .translation(na_vector(position))
                .build(),
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
                .friction(GROUND_FRICTION)
                .restitution(restitution)
                .collision_groups(arena_groups())
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build(),
        );
        self.platforms
            .push(GeometryRecord::axis_aligned(position, half_extents));
        handle
    }

    /// Wall snapshots for rendering.
    pub fn walls(&self) -> &[GeometryRecord] {
        &self.walls
    }

    /// Ramp snapshots for rendering.
    pub fn ramps(&self) -> &[GeometryRecord] {
        &self.ramps
    }

    /// Platform snapshots for rendering.
    pub fn platforms(&self) -> &[GeometryRecord] {
        &self.platforms
    }
}
