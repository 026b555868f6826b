//! Game state and core simulation types
//!
//! Everything a session mutates lives here. Coordinates are normalized to the
//! square play field: x grows to the right, y grows downward toward the paddle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mode::GameMode;

/// The ball. Position is not clamped and may overshoot the field by up to one tick of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in field units per tick
    pub vel: Vec2,
}

impl Ball {
    /// Ball centered on the field with the given velocity
    pub fn centered(vel: Vec2) -> Self {
        Self {
            pos: Vec2::splat(0.5),
            vel,
        }
    }

    /// |vx| + |vy|, the quantity the beep rate follows
    pub fn total_speed(&self) -> f32 {
        self.vel.x.abs() + self.vel.y.abs()
    }
}

/// The player's paddle along the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position (0-1)
    pub pos: f32,
    /// Hit tolerance around the center, fixed for the session
    pub size: f32,
}

impl Paddle {
    pub fn new(size: f32) -> Self {
        Self { pos: 0.5, size }
    }

    /// Apply a raw potentiometer reading, clamping it to the field
    pub fn set_from_reading(&mut self, reading: f32) {
        if reading.is_nan() {
            log::warn!("Paddle reading is NaN, centering paddle");
            self.pos = 0.5;
            return;
        }
        if !(0.0..=1.0).contains(&reading) {
            log::warn!("Paddle reading {reading} out of range, clamping");
        }
        self.pos = reading.clamp(0.0, 1.0);
    }

    /// Whether a ball at horizontal position `x` is within reach
    pub fn covers(&self, x: f32) -> bool {
        (x - self.pos).abs() < self.size
    }
}

/// Complete state of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    /// Paddle hits this session
    pub score: u32,
    /// True while the session is in progress
    pub active: bool,
    /// Mode in effect when the session was reset
    pub mode: GameMode,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    /// Power-on state: Medium layout, no session running yet
    fn default() -> Self {
        let mut state = Self::new(GameMode::default());
        state.active = false;
        state
    }
}

impl GameState {
    /// Fresh, active session laid out from the mode's preset
    pub fn new(mode: GameMode) -> Self {
        let preset = mode.preset();
        Self {
            ball: Ball::centered(Vec2::new(preset.initial_speed_x, preset.initial_speed_y)),
            paddle: Paddle::new(preset.paddle_size),
            score: 0,
            active: true,
            mode,
            time_ticks: 0,
        }
    }

    /// Overwrite this state with a fresh session for `mode`
    pub fn reset(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }
}
