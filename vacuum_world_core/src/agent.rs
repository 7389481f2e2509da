use crate::{
    FloorId,
    world::{Action, Percept},
};

/// Patrol action for each location when the floor there is clean.
const PATROL_ROUTE: [Action; 4] = [Action::Right, Action::Up, Action::Down, Action::Left];

/// Trait defining the behavior of an agent.
/// Agents decide which action to take based on the current percept.
///
/// `&mut self` allows implementations to maintain internal state for
/// decision making; a reflex agent ignores it.
pub trait Agent {
    fn select_action(&mut self, percept: &Percept) -> Action;
}

/// The reflex vacuum agent: its rules are defined in code, evaluated in
/// fixed priority order. Dirty floors are sucked; clean floors trigger the
/// patrol movement for that location. Stateless, so every decision depends
/// only on the percept it was handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexVacuumAgent;

impl ReflexVacuumAgent {
    pub fn new() -> Self {
        ReflexVacuumAgent
    }
}

impl Agent for ReflexVacuumAgent {
    fn select_action(&mut self, percept: &Percept) -> Action {
        reflex_vacuum_action(percept.location, percept.dirty)
    }
}

/// The decision table itself, usable without constructing an agent.
///
/// Locations beyond the patrol route have no rule and yield [`Action::Wait`].
pub fn reflex_vacuum_action(location: FloorId, dirty: bool) -> Action {
    if dirty {
        Action::Suck
    } else {
        PATROL_ROUTE.get(location).copied().unwrap_or(Action::Wait)
    }
}
