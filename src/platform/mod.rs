//! Platform abstraction layer
//!
//! Handles the peripherals around the core:
//! - Potentiometer (paddle)
//! - Start / mode buttons (raw levels)
//! - LCD
//! - Two PWM speakers
//! - Time and sleeping
//!
//! Real firmware implements these over its HAL. `SimulatedBoard` implements
//! them on the host for the simulator binary and tests.

pub mod simulated;

use std::time::Duration;

use crate::audio::SpeakerDuty;
use crate::renderer::Screen;

pub use simulated::SimulatedBoard;

/// Analog paddle input
pub trait PaddleInput {
    /// Raw reading, nominally 0.0-1.0. Out-of-range values are clamped by the caller.
    fn read_paddle(&mut self) -> f32;
}

/// Digital button levels. Edges are detected by the caller.
pub trait Buttons {
    fn start_pressed(&mut self) -> bool;
    fn mode_pressed(&mut self) -> bool;
}

pub trait Display {
    fn draw(&mut self, screen: &Screen);
}

/// Stereo PWM output
pub trait Speakers {
    /// Carrier period, configured once at power-on
    fn set_period(&mut self, period_secs: f32);
    fn write(&mut self, duty: SpeakerDuty);
}

pub trait Clock {
    /// Monotonic time since power-on
    fn now(&self) -> Duration;
    /// Block for `duration`. Input is not polled while sleeping.
    fn sleep(&mut self, duration: Duration);
}

/// Everything the session controller needs from the hardware
pub trait Board: PaddleInput + Buttons + Display + Speakers + Clock {}

impl<T: PaddleInput + Buttons + Display + Speakers + Clock> Board for T {}

/// Turns a polled level into press events
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    /// True on a low -> high transition
    pub fn rising(&mut self, level: bool) -> bool {
        let edge = level && !self.last;
        self.last = level;
        edge
    }
}
