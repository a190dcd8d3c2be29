//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`] values according to the
//! active screen, and tracks held directions for arcade games in terminals
//! without key-release events.

pub mod handler;
pub mod map;

pub use snake_evolution_types as types;

pub use handler::HeldDirections;
pub use map::{direction_for_key, map_key, should_quit, KeyContext};
