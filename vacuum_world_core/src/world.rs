use serde::{Deserialize, Serialize};

use crate::FloorId;

/// Number of floors in the standard demo world.
pub const NUM_FLOORS: usize = 4;

/// Floor the robot starts on.
pub const START_LOCATION: FloorId = 1;

/// Target location for each movement action in the fixed 4-node topology.
///
/// This layout is specific to the demo's two-column arrangement of four
/// floors, not a general grid: `Up` and `Down` jump between the corners of
/// the diagram rather than along an axis.
const MOVE_TARGETS: [(Action, FloorId); 4] = [
    (Action::Up, 0),
    (Action::Right, 2),
    (Action::Down, 3),
    (Action::Left, 1),
];

/// Represents errors that can occur when mutating the world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Floor index {index} is out of bounds for a world of {num_floors} floors")]
    FloorOutOfBounds { index: FloorId, num_floors: usize },
}

/// Represents actions the agent can decide to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Suck,
    Up,
    Down,
    Left,
    Right,
    Wait,
}

impl Action {
    /// Whether this action moves the robot to another floor.
    pub fn is_movement(self) -> bool {
        matches!(self, Action::Up | Action::Down | Action::Left | Action::Right)
    }
}

/// The observation the agent receives before acting: where it is and
/// whether that floor is dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percept {
    pub location: FloorId,
    pub dirty: bool,
}

/// A single discrete location in the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub dirty: bool,
}

/// The vacuum-cleaner world: a fixed set of floors and the robot's
/// current location.
///
/// In this small problem the world includes both the environment and the
/// robot; larger problems would keep them separate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    location: FloorId,
    floors: Vec<Floor>,
}

impl World {
    /// Creates a world with `num_floors` clean floors and the robot on
    /// [`START_LOCATION`].
    ///
    /// # Panics
    ///
    /// Panics if `num_floors` is too small to contain the start location.
    pub fn new(num_floors: usize) -> Self {
        assert!(
            num_floors > START_LOCATION,
            "World needs at least {} floors to place the robot",
            START_LOCATION + 1
        );
        World {
            location: START_LOCATION,
            floors: vec![Floor::default(); num_floors],
        }
    }

    /// Returns the robot's current location.
    ///
    /// Always a valid index into [`floors`](Self::floors).
    pub fn location(&self) -> FloorId {
        self.location
    }

    /// Returns the number of floors in the world.
    pub fn num_floors(&self) -> usize {
        self.floors.len()
    }

    /// Returns all floors in index order.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Gets the floor at the given index, or `None` if out of bounds.
    pub fn floor(&self, index: FloorId) -> Option<&Floor> {
        self.floors.get(index)
    }

    /// Returns the observation for the robot's current location.
    pub fn percept(&self) -> Percept {
        Percept {
            location: self.location,
            dirty: self.floors[self.location].dirty,
        }
    }

    /// Marks the floor at `index` dirty. Marking an already-dirty floor is
    /// a no-op.
    pub fn mark_dirty_floor(&mut self, index: FloorId) -> Result<(), WorldError> {
        let num_floors = self.floors.len();
        let floor = self
            .floors
            .get_mut(index)
            .ok_or(WorldError::FloorOutOfBounds { index, num_floors })?;
        floor.dirty = true;
        Ok(())
    }

    /// Applies one action to the world and returns it unchanged, for
    /// caller convenience.
    ///
    /// `Suck` cleans the current floor; movement actions jump to the
    /// target listed in the topology table; anything else leaves the world
    /// untouched.
    pub fn simulate(&mut self, action: Action) -> Action {
        match action {
            Action::Suck => {
                self.floors[self.location].dirty = false;
            }
            _ => {
                // Targets outside a smaller world are ignored so `location`
                // stays a valid index.
                if let Some((_, target)) = MOVE_TARGETS.iter().find(|(a, _)| *a == action) {
                    if *target < self.floors.len() {
                        self.location = *target;
                    }
                }
            }
        }
        action
    }
}
