//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (velocities are units per tick)
//! - No peripherals, clocks or sleeps
//! - Callers own the state and pass it in by reference

pub mod mode;
pub mod state;
pub mod tick;

pub use mode::{GameMode, ModePreset, ModeSelector};
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickEvents, tick};
