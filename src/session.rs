//! Session state machine
//!
//! Idle (mode select, wait for start) -> Playing -> GameOver -> Idle.
//!
//! The controller owns the only `GameState` and hands it by reference to the
//! simulation and audio code each tick. All waiting goes through the board's
//! clock, so the whole loop runs unchanged against a simulated board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::{AudioFeedback, SpeakerDuty, tone_period};
use crate::platform::{Board, EdgeDetector};
use crate::renderer::{PlayView, Screen};
use crate::settings::Settings;
use crate::sim::{GameMode, GameState, ModeSelector, tick};

/// Current phase of the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Mode select and waiting for the start button
    Idle,
    /// Ball in play
    Playing,
    /// Summary on screen
    GameOver,
}

/// Result of one finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub score: u32,
    pub elapsed_secs: f32,
    /// Playing ticks simulated
    pub ticks: u64,
}

/// Top-level controller driving a board
pub struct SessionController<B: Board> {
    board: B,
    settings: Settings,
    phase: SessionPhase,
    state: GameState,
    modes: ModeSelector,
    start_button: EdgeDetector,
    audio: AudioFeedback,
    /// Clock reading when the current session began
    session_start: Duration,
    last_summary: Option<SessionSummary>,
}

impl<B: Board> SessionController<B> {
    /// Configure the speakers, show the splash screen and enter Idle
    pub fn power_on(mut board: B, settings: Settings) -> Self {
        board.set_period(tone_period(settings.tone_freq_hz));
        board.write(SpeakerDuty::SILENT);
        board.draw(&Screen::Splash);
        log::info!(
            "Powered on: mode {}, tone {} Hz",
            settings.initial_mode.as_str(),
            settings.tone_freq_hz
        );

        Self {
            board,
            modes: ModeSelector::new(settings.initial_mode),
            state: GameState {
                mode: settings.initial_mode,
                ..GameState::default()
            },
            settings,
            phase: SessionPhase::Idle,
            start_button: EdgeDetector::default(),
            audio: AudioFeedback::new(),
            session_start: Duration::ZERO,
            last_summary: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mode that the next session will use
    pub fn mode(&self) -> GameMode {
        self.modes.current()
    }

    pub fn last_summary(&self) -> Option<&SessionSummary> {
        self.last_summary.as_ref()
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }

    /// Run one iteration of the current phase, including its sleep
    pub fn step(&mut self) -> SessionPhase {
        self.phase = match self.phase {
            SessionPhase::Idle => self.step_idle(),
            SessionPhase::Playing => self.step_playing(),
            SessionPhase::GameOver => self.step_game_over(),
        };
        self.phase
    }

    /// Step until `count` sessions have finished. Blocks for as long as the
    /// board takes to press start.
    pub fn run_sessions(&mut self, count: u32) -> Vec<SessionSummary> {
        let mut summaries = Vec::with_capacity(count as usize);
        while summaries.len() < count as usize {
            let was = self.phase;
            self.step();
            if was == SessionPhase::GameOver {
                if let Some(summary) = &self.last_summary {
                    summaries.push(summary.clone());
                }
            }
        }
        summaries
    }

    fn step_idle(&mut self) -> SessionPhase {
        if self.start_button.rising(self.board.start_pressed()) {
            self.board.sleep(self.settings.start_debounce());
            self.begin_session();
            return SessionPhase::Playing;
        }

        if let Some(mode) = self.modes.poll(self.board.mode_pressed()) {
            self.board.draw(&Screen::ModeLabel(mode));
            self.board.sleep(self.settings.mode_label());
            return SessionPhase::Idle;
        }

        self.board.sleep(self.settings.idle_poll());
        SessionPhase::Idle
    }

    fn begin_session(&mut self) {
        let mode = self.modes.current();
        self.state.reset(mode);
        self.board.write(SpeakerDuty::SILENT);

        let now = self.board.now();
        self.session_start = now;
        self.audio.reset(now);
        log::info!("Session started in {} mode", mode.as_str());
    }

    /// Input, physics, audio, render - always in that order
    fn step_playing(&mut self) -> SessionPhase {
        let reading = self.board.read_paddle();
        self.state.paddle.set_from_reading(reading);

        let events = tick(&mut self.state);

        let duty = self.audio.update(self.state.ball.vel, self.board.now());
        self.board.write(duty);

        let view = PlayView::from_state(&self.state, self.settings.screen_width);
        self.board.draw(&Screen::Playfield(view));

        self.board.sleep(self.settings.tick());

        if events.missed {
            log::info!("Ball missed with score {}", self.state.score);
        }
        if self.state.active {
            SessionPhase::Playing
        } else {
            SessionPhase::GameOver
        }
    }

    fn step_game_over(&mut self) -> SessionPhase {
        self.board.write(SpeakerDuty::SILENT);

        let elapsed_secs = self
            .board
            .now()
            .saturating_sub(self.session_start)
            .as_secs_f32();
        let summary = SessionSummary {
            mode: self.state.mode,
            score: self.state.score,
            elapsed_secs,
            ticks: self.state.time_ticks,
        };
        log::info!(
            "Game over: score {} in {:.1}s ({})",
            summary.score,
            summary.elapsed_secs,
            summary.mode.as_str()
        );

        self.board.draw(&Screen::GameOver {
            score: summary.score,
            elapsed_secs,
        });
        self.last_summary = Some(summary);
        self.board.sleep(self.settings.game_over_hold());

        self.board.draw(&Screen::RestartPrompt);
        SessionPhase::Idle
    }
}
