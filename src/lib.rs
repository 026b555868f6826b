//! Blind Pong - Pong you can play by ear
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, modes, game state)
//! - `audio`: Stereo beep feedback derived from ball velocity
//! - `session`: Idle / Playing / GameOver state machine
//! - `renderer`: Draw commands for the LCD collaborator
//! - `platform`: Peripheral abstraction (buttons, pot, LCD, speakers, clock)
//! - `settings`: Runtime configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{AudioFeedback, SpeakerDuty};
pub use session::{SessionController, SessionPhase};
pub use settings::Settings;
pub use sim::{GameMode, GameState};

/// Game configuration constants
pub mod consts {
    /// Ball enters the paddle band at this height (normalized, y grows downward)
    pub const PADDLE_ZONE_Y: f32 = 0.9;
    /// Ball is lost once it reaches this height
    pub const FLOOR_Y: f32 = 1.0;
    /// Speed boost when ball hits paddle (multiplicative, both axes)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Maximum per-axis ball speed (units/tick). Reached after ~38 hits on Impossible.
    pub const MAX_AXIS_SPEED: f32 = 0.25;

    /// Beeps per unit of total speed
    pub const BEEP_RATE: f32 = 50.0;
    /// Floor for |vx| + |vy| before dividing (caps the beep interval at 20s)
    pub const MIN_TOTAL_SPEED: f32 = 0.001;
    /// Duty cycle written to the active speaker while the beep is on
    pub const BEEP_DUTY: f32 = 0.5;
    /// Default carrier tone
    pub const TONE_FREQ_HZ: f32 = 2000.0;

    /// LCD geometry (square panel)
    pub const SCREEN_WIDTH: i32 = 128;
    pub const PADDLE_ROW: i32 = 120;
    pub const BALL_PIXEL_RADIUS: i32 = 2;

    /// Loop cadences (milliseconds)
    pub const TICK_MS: u64 = 20;
    pub const IDLE_POLL_MS: u64 = 50;
    pub const START_DEBOUNCE_MS: u64 = 200;
    pub const MODE_LABEL_MS: u64 = 1000;
    pub const GAME_OVER_HOLD_MS: u64 = 1500;
}
