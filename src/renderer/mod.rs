//! LCD rendering module
//!
//! The core never talks to the panel directly. It describes each screen as a
//! `Screen`, and the display collaborator turns that into draw commands (or
//! just text lines, for a headless board).

pub mod shapes;

use serde::{Deserialize, Serialize};

use crate::sim::{GameMode, GameState};
pub use shapes::{ball_pixel, paddle_span};

/// Colors for game elements (RGB565)
pub mod colors {
    pub const WHITE: u16 = 0xFFFF;
    pub const BACKGROUND: u16 = 0x0000;
    pub const PADDLE: u16 = WHITE;
    pub const BALL: u16 = WHITE;
    pub const TEXT: u16 = WHITE;
}

/// Primitive drawing operations understood by the LCD driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear,
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u16,
    },
    FilledCircle {
        x: i32,
        y: i32,
        radius: i32,
        color: u16,
    },
    /// Text at a character cell
    Text { col: u8, row: u8, text: String },
}

/// Per-tick view of a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    /// First and last pixel of the paddle line
    pub paddle_span: (i32, i32),
    /// Ball center in pixels (may lie off-panel while overshooting)
    pub ball: (i32, i32),
    pub score: u32,
    pub mode: GameMode,
}

impl PlayView {
    pub fn from_state(state: &GameState, width: i32) -> Self {
        Self {
            paddle_span: paddle_span(&state.paddle, width),
            ball: ball_pixel(&state.ball, width),
            score: state.score,
            mode: state.mode,
        }
    }
}

/// Everything the display can be asked to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Screen {
    /// Power-on instructions
    Splash,
    /// Shown briefly after the mode button is pressed
    ModeLabel(GameMode),
    Playfield(PlayView),
    /// End-of-session summary
    GameOver { score: u32, elapsed_secs: f32 },
    RestartPrompt,
}

impl Screen {
    /// Text content as (col, row, text), in drawing order
    pub fn text(&self) -> Vec<(u8, u8, String)> {
        match self {
            Screen::Splash => vec![
                (1, 1, "Blind Pong".to_string()),
                (1, 3, "Press LEFT button".to_string()),
                (1, 4, "to cycle mode".to_string()),
                (1, 6, "Press RIGHT button".to_string()),
                (1, 7, "to start".to_string()),
            ],
            Screen::ModeLabel(mode) => vec![(1, 1, mode_label(*mode))],
            Screen::Playfield(view) => vec![
                (0, 0, score_text(view.score)),
                (0, 1, view.mode.as_str().to_string()),
            ],
            Screen::GameOver {
                score,
                elapsed_secs,
            } => vec![
                (1, 1, "Game Over!".to_string()),
                (1, 3, score_text(*score)),
                (1, 5, time_text(*elapsed_secs)),
            ],
            Screen::RestartPrompt => vec![(1, 2, "Press to restart".to_string())],
        }
    }

    /// Full command list for a `width`-pixel panel. Every screen starts with a clear.
    pub fn commands(&self, width: i32) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear];
        if let Screen::Playfield(view) = self {
            commands.extend(shapes::playfield(view, width));
        }
        commands.extend(
            self.text()
                .into_iter()
                .map(|(col, row, text)| DrawCommand::Text { col, row, text }),
        );
        commands
    }
}

pub fn mode_label(mode: GameMode) -> String {
    format!("Mode: {}", mode.as_str())
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// "Time: {secs}.{tenths}s", truncating rather than rounding
pub fn time_text(elapsed_secs: f32) -> String {
    let elapsed = elapsed_secs.max(0.0);
    let secs = elapsed.floor() as u64;
    let tenths = (elapsed * 10.0).floor() as u64 % 10;
    format!("Time: {secs}.{tenths}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        let screen = Screen::GameOver {
            score: 7,
            elapsed_secs: 12.37,
        };
        let lines: Vec<String> = screen.text().into_iter().map(|(_, _, t)| t).collect();
        assert_eq!(lines, vec!["Game Over!", "Score: 7", "Time: 12.3s"]);
    }

    #[test]
    fn test_time_text_truncates() {
        assert_eq!(time_text(0.0), "Time: 0.0s");
        assert_eq!(time_text(3.99), "Time: 3.9s");
        assert_eq!(time_text(61.05), "Time: 61.0s");
        assert_eq!(time_text(-1.0), "Time: 0.0s");
    }

    #[test]
    fn test_mode_label() {
        assert_eq!(mode_label(GameMode::Impossible), "Mode: IMPOSSIBLE");
        let screen = Screen::ModeLabel(GameMode::Easy);
        assert_eq!(
            screen.commands(128),
            vec![
                DrawCommand::Clear,
                DrawCommand::Text {
                    col: 1,
                    row: 1,
                    text: "Mode: EASY".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_playfield_commands() {
        let state = GameState::new(GameMode::Medium);
        let screen = Screen::Playfield(PlayView::from_state(&state, 128));
        let commands = screen.commands(128);

        assert_eq!(commands[0], DrawCommand::Clear);
        assert!(commands.contains(&DrawCommand::FilledCircle {
            x: 64,
            y: 64,
            radius: 2,
            color: colors::BALL
        }));
        assert!(commands.contains(&DrawCommand::Text {
            col: 0,
            row: 0,
            text: "Score: 0".to_string()
        }));
    }
}
