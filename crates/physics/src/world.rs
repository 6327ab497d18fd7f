//! Rapier world wrapper.
//!
//! Owns every piece of rapier state needed to step the simulation, plus the
//! body-tag table used to classify contact pairs. Scene code builds ordinary
//! rapier descriptors and inserts them through [`PhysicsWorld::insert_tagged`];
//! everything else in the pipeline stays private to this module.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use rapier3d::crossbeam::channel::{unbounded, Receiver};
use rapier3d::prelude::*;

use crate::contact::{BodyTag, ContactSink};
use crate::convert::{glam_rotation, glam_vector, na_vector};
use crate::drive::BodyVelocity;

/// The physics world: rapier's sets and pipeline stages behind one handle.
///
/// Exactly one dynamic controllable body is expected per world in the demo,
/// but nothing here enforces that; the wrapper is scene-agnostic.
pub struct PhysicsWorld {
    /// World gravity (m/s²).
    pub gravity: Vector<Real>,

    /// All rigid bodies.
    pub bodies: RigidBodySet,

    /// All colliders.
    pub colliders: ColliderSet,

    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,

    events: ChannelEventCollector,
    collision_events: Receiver<CollisionEvent>,
    contact_forces: Receiver<ContactForceEvent>,

    tags: HashMap<RigidBodyHandle, BodyTag>,
}

impl PhysicsWorld {
    /// Create an empty world with standard gravity.
    pub fn new() -> Self {
        let (collision_send, collision_events) = unbounded();
        let (force_send, contact_forces) = unbounded();

        Self {
            gravity: vector![0.0, -9.81, 0.0],
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            events: ChannelEventCollector::new(collision_send, force_send),
            collision_events,
            contact_forces,
            tags: HashMap::new(),
        }
    }

    /// The engine's fixed step size in seconds.
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Insert a body with its collider and classification tag.
    pub fn insert_tagged(
        &mut self,
        tag: BodyTag,
        body: RigidBody,
        collider: Collider,
    ) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.tags.insert(handle, tag);
        handle
    }

    /// Look up a body's tag.
    pub fn tag(&self, handle: RigidBodyHandle) -> Option<BodyTag> {
        self.tags.get(&handle).copied()
    }

    /// Number of bodies in the world.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// A body's position, if it exists.
    pub fn body_translation(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| glam_vector(b.translation()))
    }

    /// A body's orientation, if it exists.
    pub fn body_rotation(&self, handle: RigidBodyHandle) -> Option<Quat> {
        self.bodies.get(handle).map(|b| glam_rotation(b.rotation()))
    }

    /// A body's linear velocity, if it exists.
    pub fn body_linvel(&self, handle: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(handle).map(|b| glam_vector(b.linvel()))
    }

    /// Overwrite a body's linear and angular velocity, waking it.
    pub fn set_body_velocity(&mut self, handle: RigidBodyHandle, velocity: &BodyVelocity) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_linvel(na_vector(velocity.linear), true);
            body.set_angvel(na_vector(velocity.angular), true);
        }
    }

    /// Advance the simulation by exactly one engine step.
    ///
    /// The step size is rapier's own fixed timestep; callers integrating
    /// against wall-clock delta time do so in their controller math, not
    /// here.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &self.events,
        );
    }

    /// Drain every collision event generated by the last step.
    ///
    /// Each pair whose two colliders resolve to tagged bodies is logged and
    /// forwarded to the sink exactly once; pairs involving untracked bodies
    /// are dropped. No ordering is guaranteed between simultaneous pairs.
    pub fn drain_contacts(&mut self, sink: &mut dyn ContactSink) {
        while let Ok(event) = self.collision_events.try_recv() {
            let (first, second, started) = match event {
                CollisionEvent::Started(a, b, _) => (a, b, true),
                CollisionEvent::Stopped(a, b, _) => (a, b, false),
            };

            if let (Some(a), Some(b)) = (self.collider_tag(first), self.collider_tag(second)) {
                log::debug!(
                    "contact {:?} <-> {:?} ({})",
                    a,
                    b,
                    if started { "started" } else { "stopped" }
                );
                sink.contact(a, b, started);
            }
        }

        // Contact force reports are unused; keep the channel from backing up.
        while self.contact_forces.try_recv().is_ok() {}
    }

    fn collider_tag(&self, handle: ColliderHandle) -> Option<BodyTag> {
        self.colliders
            .get(handle)
            .and_then(|c| c.parent())
            .and_then(|body| self.tags.get(&body).copied())
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
