//! The player-controlled vehicle body.

use driftway_physics::convert::na_vector;
use driftway_physics::{BodyTag, PhysicsWorld};
use glam::{Quat, Vec3};
use rapier3d::prelude::*;

/// The single dynamic body the player drives.
///
/// Only the vehicle's velocities are written by game code; its pose is owned
/// by the physics step.
#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    /// Handle of the vehicle's rigid body.
    pub body: RigidBodyHandle,
}

impl Vehicle {
    /// Where the vehicle appears when the scene is built, resting on the
    /// ground at the east side of the arena.
    pub const SPAWN_POSITION: Vec3 = Vec3::new(30.0, 0.25, 0.0);

    /// Mass added on top of the collider's own (kg).
    const ADDITIONAL_MASS: f32 = 1.0;

    /// No linear damping: coast deceleration is the drive controller's job.
    const LINEAR_DAMPING: f32 = 0.0;

    /// Small angular damping so residual spin settles between steering
    /// inputs.
    const ANGULAR_DAMPING: f32 = 0.1;

    /// Chassis box half-extents.
    const HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.25, 1.0);

    /// Chassis surface friction.
    const FRICTION: f32 = 0.5;

    /// Chassis bounciness.
    const RESTITUTION: f32 = 0.3;

    /// Spawn the vehicle into the world.
    pub fn spawn(world: &mut PhysicsWorld) -> Self {
        let body = world.insert_tagged(
            BodyTag::Vehicle,
            RigidBodyBuilder::dynamic()
                .translation(na_vector(Self::SPAWN_POSITION))
                .additional_mass(Self::ADDITIONAL_MASS)
                .linear_damping(Self::LINEAR_DAMPING)
                .angular_damping(Self::ANGULAR_DAMPING)
                .build(),
            ColliderBuilder::cuboid(
                Self::HALF_EXTENTS.x,
                Self::HALF_EXTENTS.y,
                Self::HALF_EXTENTS.z,
            )
            .friction(Self::FRICTION)
            .restitution(Self::RESTITUTION)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build(),
        );

        Self { body }
    }

    /// Current position, if the body still exists.
    pub fn position(&self, world: &PhysicsWorld) -> Option<Vec3> {
        world.body_translation(self.body)
    }

    /// Current orientation, if the body still exists.
    pub fn rotation(&self, world: &PhysicsWorld) -> Option<Quat> {
        world.body_rotation(self.body)
    }

    /// Current linear velocity, if the body still exists.
    pub fn velocity(&self, world: &PhysicsWorld) -> Option<Vec3> {
        world.body_linvel(self.body)
    }
}
