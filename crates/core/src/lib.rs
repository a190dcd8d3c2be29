//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! Diagnostics go through `tracing`; nothing is printed.
//!
//! # Module Structure
//!
//! - [`board`]: 40x30 snake board with throttled movement and collision detection
//! - [`question`]: multiple-choice question bank (math tiers plus fixed subject tables)
//! - [`scoring`]: score, streak, level and move-delay progression
//! - [`challenge`]: typed-answer education sub-games
//! - [`minigames`]: arcade mini-game registry
//! - [`session`]: the mode state machine tying everything together
//! - [`snapshot`]: renderer-facing copy of session state
//! - [`rng`]: deterministic LCG shared by every random decision
//!
//! # Example
//!
//! ```
//! use snake_evolution_core::{Flow, Session};
//! use snake_evolution_types::{Intent, ModeTag};
//!
//! let mut session = Session::new(12345);
//! assert_eq!(session.mode_tag(), ModeTag::Menu);
//!
//! // Start a round and let the snake take one step.
//! assert_eq!(session.step(0, &[Intent::Start]), Flow::Continue);
//! session.step(200, &[]);
//! assert_eq!(session.board().head().x, 21);
//!
//! assert_eq!(session.step(0, &[Intent::Quit]), Flow::Quit);
//! ```
//!
//! # Timing
//!
//! The driver calls [`Session::step`](session::Session::step) once per frame
//! with the elapsed milliseconds. The snake advances whenever the session's
//! move delay (200ms at level 1, 10ms faster per level, floor 100ms) has
//! passed since its last step.

pub mod board;
pub mod challenge;
pub mod minigames;
pub mod question;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use snake_evolution_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Collision, TickResult};
pub use challenge::{Challenge, EducationGame, Expected, Feedback};
pub use minigames::{ArcadeGame, Controls, MiniGame};
pub use question::{Answer, Question};
pub use rng::SimpleRng;
pub use scoring::{next_move_delay, points_for_correct, streak_bonus, AnswerOutcome, Progression};
pub use session::{Flow, Mode, Rules, Session};
pub use snapshot::SessionSnapshot;
