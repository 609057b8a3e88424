//! Snake Cheat-Bot - a terminal Snake game with a food-chasing autopilot
//!
//! This library provides:
//! - Core game logic (game module)
//! - Terminal rendering of the pixel-space screen (render module)
//! - Keyboard and mouse handling (input module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
