mod spawn;

use rapier2d::prelude::*;

use crate::constants::*;
use crate::conversions::{Converter, MeterCoords};
use crate::registry::BodyChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Up,
    Left,
    Right,
}

impl Push {
    /// N*s handed to every dynamic object
    pub fn impulse(self) -> Vector<Real> {
        match self {
            // the force acts for exactly one step
            Push::Up => vector![0.0, PUSH_UP_FORCE * TIME_STEP],
            Push::Left => vector![-PUSH_SIDE_IMPULSE, 0.0],
            Push::Right => vector![PUSH_SIDE_IMPULSE, 0.0],
        }
    }
}

/// Rigid body simulation plus everything rapier needs to step it.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    sub_steps: usize,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// `time_step` seconds per [`PhysicsWorld::step`], split into `sub_steps`
    pub fn new(gravity: Vector<Real>, time_step: Real, sub_steps: usize) -> Self {
        let sub_steps = sub_steps.max(1);
        let params = IntegrationParameters {
            dt: time_step / sub_steps as Real,
            ..Default::default()
        };

        Self {
            gravity,
            params,
            sub_steps,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn step(&mut self) {
        for _ in 0..self.sub_steps {
            self.pipeline.step(
                &self.gravity,
                &self.params,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                None,
                &(),
                &(),
            );
        }
    }

    fn insert(&mut self, (body, collider): (RigidBody, Collider)) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    pub fn spawn_ground_block(&mut self, at: MeterCoords, converter: &Converter) -> RigidBodyHandle {
        let handle = self.insert(spawn::ground_block(at, converter));
        debug!("ground block at {:?}", at);
        handle
    }

    pub fn spawn_box(&mut self, at: MeterCoords) -> RigidBodyHandle {
        let handle = self.insert(spawn::dynamic_box(at));
        debug!("box at {:?}", at);
        handle
    }

    /// `None` for a handle this world never handed out
    pub fn position(&self, handle: RigidBodyHandle) -> Option<MeterCoords> {
        self.bodies
            .get(handle)
            .map(|body| MeterCoords::from(body.translation()))
    }

    /// linear velocity in m/s, `None` for a handle this world never handed out
    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Vector<Real>> {
        self.bodies.get(handle).map(|body| *body.linvel())
    }

    pub fn apply_impulse(&mut self, handle: RigidBodyHandle, impulse: Vector<Real>) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse(impulse, true);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(vector![GRAVITY[0], GRAVITY[1]], TIME_STEP, SUB_STEPS)
    }
}

/// Bodies of the running program, grouped by how they are drawn.
#[derive(Debug, Clone)]
pub struct Scene {
    pub ground: BodyChain<RigidBodyHandle>,
    pub objects: BodyChain<RigidBodyHandle>,
}

impl Scene {
    /// a three tile floor five meters below the origin, one box five meters above it
    pub fn build(world: &mut PhysicsWorld, converter: &Converter) -> Self {
        let mut ground =
            BodyChain::new(world.spawn_ground_block(MeterCoords::new(0.0, -5.0), converter));
        ground.push(world.spawn_ground_block(MeterCoords::new(-1.0, -5.0), converter));
        ground.push(world.spawn_ground_block(MeterCoords::new(1.0, -5.0), converter));

        let objects = BodyChain::new(world.spawn_box(MeterCoords::new(0.0, 5.0)));

        info!(
            "scene built: {} ground blocks, {} objects",
            ground.len(),
            objects.len()
        );

        Self { ground, objects }
    }

    pub fn push_objects(&self, world: &mut PhysicsWorld, push: Push) {
        let impulse = push.impulse();
        for &handle in &self.objects {
            world.apply_impulse(handle, impulse);
        }
        debug!("push {:?} -> {:?}", push, impulse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> Converter {
        Converter::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT, CONV_FACTOR)
    }

    #[test]
    fn scene_keeps_spawn_order() {
        let mut world = PhysicsWorld::default();
        let scene = Scene::build(&mut world, &converter());

        let xs: Vec<_> = scene
            .ground
            .iter()
            .map(|&h| world.position(h).unwrap().x)
            .collect();
        assert_eq!(xs, vec![0.0, -1.0, 1.0]);
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn box_falls_and_rests_on_ground() {
        let mut world = PhysicsWorld::default();
        let scene = Scene::build(&mut world, &converter());
        let crate_handle = *scene.objects.iter().next().unwrap();

        world.step();
        assert!(world.position(crate_handle).unwrap().y < 5.0);

        for _ in 0..600 {
            world.step();
        }

        // ground tops out at -4.5, the box is 1m tall
        let rest = world.position(crate_handle).unwrap();
        assert!(rest.y > -4.2 && rest.y < -3.8, "box at {:?}", rest);

        for &h in &scene.ground {
            assert_eq!(world.position(h).unwrap().y, -5.0);
        }
    }

    #[test]
    fn push_up_launches_objects() {
        let mut world = PhysicsWorld::default();
        let scene = Scene::build(&mut world, &converter());
        let crate_handle = *scene.objects.iter().next().unwrap();

        scene.push_objects(&mut world, Push::Up);
        world.step();

        let vel = world.velocity(crate_handle).unwrap();
        assert!(vel.y > 7.0, "velocity {:?}", vel);
        assert!(world.position(crate_handle).unwrap().y > 5.0);
    }

    #[test]
    fn side_pushes_are_opposite() {
        assert_eq!(Push::Left.impulse(), -Push::Right.impulse());
        assert_eq!(Push::Left.impulse().y, 0.0);
    }

    #[test]
    fn unknown_handle_has_no_position() {
        let world = PhysicsWorld::default();
        assert_eq!(world.position(RigidBodyHandle::invalid()), None);
        assert_eq!(world.velocity(RigidBodyHandle::invalid()), None);
    }
}
