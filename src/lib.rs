pub mod api;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod heuristic;
pub mod obstacles;
pub mod pathfinder;
pub mod policy;
pub mod simulate;
pub mod visualizer;

pub use grid::{Cell, Direction, Grid};
pub use policy::{decide, decide_detailed, Decision, Tier};
