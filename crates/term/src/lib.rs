//! Terminal renderer for Snake Evolution.
//!
//! A small game-oriented rendering layer: views draw a
//! [`SessionSnapshot`](crate::core::SessionSnapshot) into a framebuffer, and
//! the renderer flushes framebuffer diffs to a crossterm backend. No widget
//! toolkit is involved, so cell aspect ratio (2 columns per board cell) stays
//! under our control.

pub mod fb;
pub mod i18n;
pub mod renderer;
pub mod view;

pub use snake_evolution_core as core;
pub use snake_evolution_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use i18n::Translations;
pub use renderer::{encode_frame, TerminalRenderer};
pub use view::{SessionView, Viewport};
