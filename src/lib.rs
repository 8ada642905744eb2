// Simulation core
pub mod config;
pub mod grid;
pub mod rules;
pub mod controller;
pub mod ticker;

// Platform shell
pub mod error;
pub mod input;
pub mod overlay;
pub mod render;
pub mod state;
