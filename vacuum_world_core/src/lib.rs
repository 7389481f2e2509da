pub mod agent;
pub mod controller;
pub mod scene;
pub mod world;

/// Index of a floor within the world.
pub type FloorId = usize;
