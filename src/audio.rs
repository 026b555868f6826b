//! Stereo beep feedback
//!
//! The ball is heard, not seen: a fixed carrier tone is pulsed on one speaker
//! at a time. The side follows the horizontal direction of travel and the
//! pulse rate follows the ball's speed.

use std::time::Duration;

use glam::Vec2;

use crate::consts::{BEEP_DUTY, BEEP_RATE, MIN_TOTAL_SPEED};

/// Duty cycle for each speaker. At most one side is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeakerDuty {
    pub left: f32,
    pub right: f32,
}

impl SpeakerDuty {
    pub const SILENT: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    pub fn is_silent(&self) -> bool {
        self.left == 0.0 && self.right == 0.0
    }
}

/// Result of one feedback evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub left_active: bool,
    pub right_active: bool,
    /// Beep state after this evaluation
    pub beep_on: bool,
    /// Whether the beep state flipped (the elapsed reference restarts)
    pub toggled: bool,
}

impl Pulse {
    pub fn duty(&self) -> SpeakerDuty {
        SpeakerDuty {
            left: if self.left_active { BEEP_DUTY } else { 0.0 },
            right: if self.right_active { BEEP_DUTY } else { 0.0 },
        }
    }
}

/// Seconds between beep toggles for a ball moving at `vel`
///
/// |vx| + |vy| is floored at `MIN_TOTAL_SPEED`, so a stalled ball gives a long
/// but finite interval instead of a division by zero.
pub fn beep_interval(vel: Vec2) -> f32 {
    let total_speed = (vel.x.abs() + vel.y.abs()).max(MIN_TOTAL_SPEED);
    1.0 / (total_speed * BEEP_RATE)
}

/// Pure feedback step: decide the beep state and which speaker carries it
pub fn pulse(vel: Vec2, elapsed_secs: f32, beep_on: bool) -> Pulse {
    let toggled = elapsed_secs >= beep_interval(vel);
    let beep_on = beep_on ^ toggled;
    let left_side = vel.x < 0.0;
    Pulse {
        left_active: beep_on && left_side,
        right_active: beep_on && !left_side,
        beep_on,
        toggled,
    }
}

/// Carrier period in seconds for a tone frequency
pub fn tone_period(freq_hz: f32) -> f32 {
    1.0 / freq_hz
}

/// Beep generator state carried across ticks
#[derive(Debug, Clone, Default)]
pub struct AudioFeedback {
    beep_on: bool,
    /// Clock reading at the last toggle
    last_toggle: Duration,
}

impl AudioFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the pulse train (session start)
    pub fn reset(&mut self, now: Duration) {
        self.beep_on = false;
        self.last_toggle = now;
    }

    pub fn beep_on(&self) -> bool {
        self.beep_on
    }

    /// Evaluate feedback for the current ball velocity at clock time `now`
    pub fn update(&mut self, vel: Vec2, now: Duration) -> SpeakerDuty {
        let elapsed = now.saturating_sub(self.last_toggle).as_secs_f32();
        let pulse = pulse(vel, elapsed, self.beep_on);
        if pulse.toggled {
            self.last_toggle = now;
        }
        self.beep_on = pulse.beep_on;
        pulse.duty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_beep_interval_follows_speed() {
        // 0.04 total speed -> 0.5s
        assert!((beep_interval(Vec2::new(0.02, -0.02)) - 0.5).abs() < 1e-5);
        // Faster ball beeps faster
        assert!(beep_interval(Vec2::new(0.04, 0.04)) < beep_interval(Vec2::new(0.02, 0.02)));
    }

    #[test]
    fn test_beep_interval_at_speed_floor_is_finite() {
        let stalled = beep_interval(Vec2::ZERO);
        assert!(stalled.is_finite());
        assert!((stalled - 1.0 / (MIN_TOTAL_SPEED * BEEP_RATE)).abs() < 1e-3);

        let nan = beep_interval(Vec2::new(f32::NAN, 0.0));
        assert!(nan.is_finite());
        assert!(nan <= stalled);
    }

    #[test]
    fn test_pulse_side_follows_direction() {
        let left = pulse(Vec2::new(-0.02, 0.02), 1.0, false);
        assert!(left.toggled && left.beep_on);
        assert!(left.left_active && !left.right_active);
        assert_eq!(left.duty(), SpeakerDuty { left: 0.5, right: 0.0 });

        let right = pulse(Vec2::new(0.02, -0.02), 1.0, false);
        assert!(!right.left_active && right.right_active);
        assert_eq!(right.duty(), SpeakerDuty { left: 0.0, right: 0.5 });
    }

    #[test]
    fn test_pulse_holds_until_interval_elapses() {
        let held = pulse(Vec2::new(0.02, 0.02), 0.1, true);
        assert!(!held.toggled);
        assert!(held.beep_on && held.right_active);

        let off = pulse(Vec2::new(0.02, 0.02), 0.5, true);
        assert!(off.toggled);
        assert!(!off.beep_on);
        assert!(off.duty().is_silent());
    }

    #[test]
    fn test_feedback_toggles_on_interval() {
        let mut audio = AudioFeedback::new();
        audio.reset(Duration::from_secs(10));
        let vel = Vec2::new(-0.02, 0.02); // 0.5s interval

        let duty = audio.update(vel, Duration::from_millis(10_200));
        assert!(duty.is_silent());

        let duty = audio.update(vel, Duration::from_millis(10_500));
        assert_eq!(duty, SpeakerDuty { left: 0.5, right: 0.0 });

        // Reference restarted at 10.5s
        let duty = audio.update(vel, Duration::from_millis(10_900));
        assert_eq!(duty.left, 0.5);
        let duty = audio.update(vel, Duration::from_millis(11_000));
        assert!(duty.is_silent());
        assert!(!audio.beep_on());
    }

    #[test]
    fn test_tone_period() {
        assert!((tone_period(2000.0) - 0.0005).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_never_both_speakers(
            vx in -0.3f32..0.3,
            vy in -0.3f32..0.3,
            elapsed in 0.0f32..30.0,
            beep_on in any::<bool>(),
        ) {
            let duty = pulse(Vec2::new(vx, vy), elapsed, beep_on).duty();
            prop_assert!(!(duty.left > 0.0 && duty.right > 0.0));
            if duty.left > 0.0 {
                prop_assert!(vx < 0.0);
            }
            if duty.right > 0.0 {
                prop_assert!(vx >= 0.0);
            }
        }
    }
}
