//! Snake Evolution (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and type crates under one name so
//! the binary, integration tests and benches share a single import path.

pub mod config;

pub use snake_evolution_core as core;
pub use snake_evolution_input as input;
pub use snake_evolution_term as term;
pub use snake_evolution_types as types;

pub use config::GameConfig;
