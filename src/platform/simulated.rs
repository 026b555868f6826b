//! Host-side board
//!
//! Virtual clock, an operator that presses the buttons when a screen asks for
//! it, and a paddle autopilot that watches the rendered frames. Jitter and
//! misses come from a seeded RNG so runs are reproducible.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Buttons, Clock, Display, PaddleInput, Speakers};
use crate::audio::SpeakerDuty;
use crate::renderer::{DrawCommand, Screen};

/// Autopilot aim error, as a fraction of the field
const AIM_JITTER: f32 = 0.01;

/// A simulated board with a scripted operator
#[derive(Debug)]
pub struct SimulatedBoard {
    width: i32,
    now: Duration,
    /// Also block the host thread on sleeps
    realtime: bool,
    rng: Pcg32,

    /// Chance that the autopilot gives up on an approach
    miss_rate: f32,
    /// Mode presses to make before each start
    mode_presses: u32,
    pending_mode_presses: u32,
    start_level: bool,
    mode_level: bool,

    last_screen: Option<Screen>,
    /// Last two ball pixel positions (newest first)
    ball_track: [Option<(i32, i32)>; 2],
    /// Autopilot is deliberately missing the current approach
    missing: bool,

    tone_period: Option<f32>,
    duty: SpeakerDuty,
    /// Number of off -> on beep transitions heard
    beeps: u32,
    frames: u64,
}

impl SimulatedBoard {
    pub fn new(seed: u64, width: i32) -> Self {
        Self {
            width,
            now: Duration::ZERO,
            realtime: false,
            rng: Pcg32::seed_from_u64(seed),
            miss_rate: 0.0,
            mode_presses: 0,
            pending_mode_presses: 0,
            start_level: false,
            mode_level: false,
            last_screen: None,
            ball_track: [None; 2],
            missing: false,
            tone_period: None,
            duty: SpeakerDuty::SILENT,
            beeps: 0,
            frames: 0,
        }
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn with_miss_rate(mut self, miss_rate: f32) -> Self {
        self.miss_rate = miss_rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mode_presses(mut self, presses: u32) -> Self {
        self.mode_presses = presses;
        self.pending_mode_presses = presses;
        self
    }

    pub fn tone_period(&self) -> Option<f32> {
        self.tone_period
    }

    pub fn duty(&self) -> SpeakerDuty {
        self.duty
    }

    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The operator only touches the buttons while a menu screen is up
    fn waiting_for_operator(&self) -> bool {
        matches!(
            self.last_screen,
            Some(Screen::Splash | Screen::RestartPrompt | Screen::ModeLabel(_))
        )
    }

    /// Decide whether to return the ball on the approach that just began
    fn start_approach(&mut self) {
        self.missing = self.rng.random::<f32>() < self.miss_rate;
    }
}

impl PaddleInput for SimulatedBoard {
    fn read_paddle(&mut self) -> f32 {
        let width = self.width as f32;
        let Some((x, _)) = self.ball_track[0] else {
            return 0.5;
        };
        let prev_x = self.ball_track[1].map_or(x, |(prev_x, _)| prev_x);

        // Lead the ball by one tick to make up for the frame of lag
        let predicted = (2 * x - prev_x) as f32 / width;
        let jitter = self.rng.random_range(-AIM_JITTER..=AIM_JITTER);
        if self.missing {
            // Park on the opposite half of the field
            if predicted < 0.5 { 1.0 } else { 0.0 }
        } else {
            (predicted + jitter).clamp(0.0, 1.0)
        }
    }
}

impl Buttons for SimulatedBoard {
    fn start_pressed(&mut self) -> bool {
        if self.pending_mode_presses > 0 || !self.waiting_for_operator() {
            self.start_level = false;
            return false;
        }
        self.start_level = !self.start_level;
        self.start_level
    }

    fn mode_pressed(&mut self) -> bool {
        if self.pending_mode_presses == 0 || !self.waiting_for_operator() {
            self.mode_level = false;
            return false;
        }
        self.mode_level = !self.mode_level;
        if self.mode_level {
            self.pending_mode_presses -= 1;
        }
        self.mode_level
    }
}

impl SimulatedBoard {
    /// Feed the autopilot the ball position from a rendered frame
    fn track_ball(&mut self, ball: (i32, i32)) {
        // New approach: first frame, or the ball turned from rising to falling
        let descending_again = match self.ball_track[0] {
            Some((_, y)) => ball.1 > y && self.ball_track[1].is_some_and(|(_, prev_y)| y < prev_y),
            None => true,
        };
        if descending_again {
            self.start_approach();
        }
        self.ball_track = [Some(ball), self.ball_track[0]];
    }
}

impl Display for SimulatedBoard {
    fn draw(&mut self, screen: &Screen) {
        let playing = matches!(screen, Screen::Playfield(_));
        if playing {
            self.frames += 1;
        }
        for command in screen.commands(self.width) {
            match command {
                DrawCommand::FilledCircle { x, y, .. } => self.track_ball((x, y)),
                DrawCommand::Text { text, .. } if !playing => log::info!("[lcd] {text}"),
                command => log::trace!("frame {}: {:?}", self.frames, command),
            }
        }
        if matches!(screen, Screen::RestartPrompt) {
            self.pending_mode_presses = self.mode_presses;
            self.ball_track = [None; 2];
        }
        self.last_screen = Some(screen.clone());
    }
}

impl Speakers for SimulatedBoard {
    fn set_period(&mut self, period_secs: f32) {
        log::info!("Speaker carrier period set to {:.6}s", period_secs);
        self.tone_period = Some(period_secs);
    }

    fn write(&mut self, duty: SpeakerDuty) {
        if self.duty.is_silent() && !duty.is_silent() {
            self.beeps += 1;
        }
        self.duty = duty;
    }
}

impl Clock for SimulatedBoard {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        if self.realtime {
            std::thread::sleep(duration);
        }
    }
}
