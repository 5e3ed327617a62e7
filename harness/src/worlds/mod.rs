//! Concrete worlds for tests and benchmarks.

pub mod graph_world;
pub mod grid_maze;
