//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Time enters only as an explicit `Duration`, so every rule can be driven from tests.

pub mod action;
pub mod color;
pub mod config;
pub mod engine;
pub mod phase;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use color::{Rgb, interpolate};
pub use config::{Board, GameConfig};
pub use engine::{GameEngine, StepInfo};
pub use phase::{ColorPhase, PhaseColors};
pub use state::{Food, GameState, Position, Snake};
