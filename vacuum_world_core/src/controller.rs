//! Drives the world with an agent, one step at a fixed period.
//!
//! The controller owns the world, the agent, and the dirt-injection RNG.
//! It does not own a timer: the frontend decides when [`STEP_TIME`] has
//! elapsed and calls [`AgentController::tick`], which keeps the core free
//! of any clock or event-loop dependency.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    agent::Agent,
    scene::Scene,
    world::{Action, Percept, World, WorldError},
};

/// Period between animation steps.
pub const STEP_TIME: Duration = Duration::from_millis(2500);

/// What happened in one step: the percept read before acting, and the
/// action the agent chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub percept: Percept,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Constructed but not yet stepped.
    Idle,
    /// At least one step has run.
    Running,
}

/// Steps an agent through the world and remembers the last step for
/// rendering.
pub struct AgentController<A: Agent> {
    world: World,
    agent: A,
    rng: StdRng,
    phase: Phase,
    last_step: Option<Step>,
}

impl<A: Agent> AgentController<A> {
    /// Creates an idle controller with OS-seeded dirt injection.
    pub fn new(world: World, agent: A) -> Self {
        Self::with_rng(world, agent, StdRng::from_os_rng())
    }

    /// Creates an idle controller whose dirt injection replays identically
    /// for the same seed.
    pub fn seeded(world: World, agent: A, seed: u64) -> Self {
        Self::with_rng(world, agent, StdRng::seed_from_u64(seed))
    }

    fn with_rng(world: World, agent: A, rng: StdRng) -> Self {
        AgentController {
            world,
            agent,
            rng,
            phase: Phase::Idle,
            last_step: None,
        }
    }

    /// Leaves idle and runs the first step immediately. Subsequent steps
    /// are scheduled by the caller on the [`STEP_TIME`] period.
    pub fn start(&mut self) -> Result<Step, WorldError> {
        self.step()
    }

    /// Runs one step. Starts the controller if it was still idle.
    pub fn tick(&mut self) -> Result<Step, WorldError> {
        self.step()
    }

    fn step(&mut self) -> Result<Step, WorldError> {
        self.phase = Phase::Running;

        let percept = self.world.percept();
        let action = self.agent.select_action(&percept);
        // Movement keeps the demo interesting: one uniformly random floor
        // gets dirtied, whether or not it already was.
        if action.is_movement() {
            let target = self.rng.random_range(0..self.world.num_floors());
            self.world.mark_dirty_floor(target)?;
        }
        self.world.simulate(action);

        let step = Step { percept, action };
        self.last_step = Some(step);
        Ok(step)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// The most recent step, or `None` while idle.
    pub fn last_step(&self) -> Option<Step> {
        self.last_step
    }

    /// Render instructions for the current frame.
    pub fn scene(&self) -> Scene {
        Scene::snapshot(
            &self.world,
            self.last_step.map(|s| s.percept),
            self.last_step.map(|s| s.action),
        )
    }
}
