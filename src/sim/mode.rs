//! Difficulty modes and the mode-cycling selector

use serde::{Deserialize, Serialize};

use crate::platform::EdgeDetector;

/// Difficulty mode, cycled with the mode button while idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameMode {
    Easy,
    #[default]
    Medium,
    Hard,
    Impossible,
}

/// Per-mode constants applied when a session is reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModePreset {
    /// Paddle reach (half-width hit tolerance, normalized)
    pub paddle_size: f32,
    pub initial_speed_x: f32,
    pub initial_speed_y: f32,
}

impl ModePreset {
    const fn new(paddle_size: f32, initial_speed_x: f32, initial_speed_y: f32) -> Self {
        Self {
            paddle_size,
            initial_speed_x,
            initial_speed_y,
        }
    }
}

/// Preset table, indexed by `GameMode as usize`
const MODE_TABLE: [ModePreset; 4] = [
    ModePreset::new(0.3, 0.02, 0.02),
    ModePreset::new(0.2, 0.02, 0.02),
    ModePreset::new(0.1, 0.03, 0.03),
    ModePreset::new(0.05, 0.04, 0.04),
];

impl GameMode {
    /// All modes in cycle order
    pub const ALL: [GameMode; 4] = [
        GameMode::Easy,
        GameMode::Medium,
        GameMode::Hard,
        GameMode::Impossible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Easy => "EASY",
            GameMode::Medium => "MEDIUM",
            GameMode::Hard => "HARD",
            GameMode::Impossible => "IMPOSSIBLE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(GameMode::Easy),
            "medium" | "med" => Some(GameMode::Medium),
            "hard" => Some(GameMode::Hard),
            "impossible" => Some(GameMode::Impossible),
            _ => None,
        }
    }

    pub fn preset(&self) -> ModePreset {
        MODE_TABLE[*self as usize]
    }

    /// Next mode in the cycle (wraps Impossible -> Easy)
    pub fn next(&self) -> Self {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }
}

/// Tracks the selected mode across sessions and advances it on button presses
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    current: GameMode,
    button: EdgeDetector,
}

impl ModeSelector {
    pub fn new(initial: GameMode) -> Self {
        Self {
            current: initial,
            button: EdgeDetector::default(),
        }
    }

    pub fn current(&self) -> GameMode {
        self.current
    }

    /// Feed the raw button level. Returns the new mode on a rising edge.
    pub fn poll(&mut self, level: bool) -> Option<GameMode> {
        if self.button.rising(level) {
            Some(self.cycle())
        } else {
            None
        }
    }

    /// Advance unconditionally
    pub fn cycle(&mut self) -> GameMode {
        self.current = self.current.next();
        log::info!("Mode changed to {}", self.current.as_str());
        self.current
    }
}
