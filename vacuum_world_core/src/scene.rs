//! Backend-agnostic render instructions derived from a [`World`] snapshot.
//!
//! The scene is never the source of truth: every frame is rebuilt from the
//! world, so a frontend can draw it with whatever primitives it has.
//! Coordinates are abstract y-down units, with the four floors laid out in
//! two columns and the robot hovering above its current column.

use crate::{
    FloorId,
    world::{Action, Percept, World},
};

/// Side length of one diagram cell, in scene units.
pub const CELL_SIZE: f64 = 100.0;

/// Total extent of the diagram, in scene units.
pub const SCENE_WIDTH: f64 = 750.0;
pub const SCENE_HEIGHT: f64 = 600.0;

/// One floor, positioned and flagged for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorCell {
    pub index: FloorId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dirty: bool,
}

/// The robot, drawn as a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotSprite {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub floors: Vec<FloorCell>,
    pub robot: RobotSprite,
    pub percept_label: &'static str,
    pub action_label: &'static str,
}

impl Scene {
    /// Builds a full frame from the world plus the labels of the most
    /// recent step, if any.
    ///
    /// The pieces are separate functions so a frontend may re-render them
    /// at different beats (perceive, pause, act); this bundles them for
    /// frontends that redraw everything each tick.
    pub fn snapshot(world: &World, percept: Option<Percept>, action: Option<Action>) -> Scene {
        Scene {
            floors: floor_cells(world),
            robot: robot_sprite(world),
            percept_label: percept_label(percept),
            action_label: action_label(action),
        }
    }
}

/// Scene x-coordinate of the given column of floors.
fn column_x(world: &World, column: usize) -> f64 {
    150.0 + column as f64 * 600.0 / (world.num_floors() as f64 / 2.0)
}

/// Lays out one rectangle per floor, two floors to a column.
pub fn floor_cells(world: &World) -> Vec<FloorCell> {
    world
        .floors()
        .iter()
        .enumerate()
        .map(|(index, floor)| FloorCell {
            index,
            x: column_x(world, index / 2),
            y: if index % 2 == 0 { 225.0 } else { 450.0 },
            width: CELL_SIZE,
            height: CELL_SIZE / 4.0,
            dirty: floor.dirty,
        })
        .collect()
}

/// Positions the robot circle over the column of its current location.
pub fn robot_sprite(world: &World) -> RobotSprite {
    let location = world.location();
    let x = column_x(world, location / 2);
    let y = if location % 2 == 0 { 100.0 } else { 325.0 };
    RobotSprite {
        cx: x + CELL_SIZE / 2.0,
        cy: y + CELL_SIZE / 2.0,
        radius: CELL_SIZE / 2.0,
    }
}

/// Label for the observation shown to the reader. Empty before the first
/// tick, when the robot has not yet perceived anything.
pub fn percept_label(percept: Option<Percept>) -> &'static str {
    match percept {
        None => "",
        Some(Percept { dirty: true, .. }) => "It's dirty",
        Some(Percept { dirty: false, .. }) => "It's clean",
    }
}

/// Label for the most recent action.
pub fn action_label(action: Option<Action>) -> &'static str {
    match action {
        None | Some(Action::Wait) => "Waiting",
        Some(Action::Suck) => "Vacuuming",
        Some(Action::Up) => "Going up",
        Some(Action::Down) => "Going down",
        Some(Action::Left) => "Going left",
        Some(Action::Right) => "Going right",
    }
}
