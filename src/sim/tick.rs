//! Fixed step simulation tick
//!
//! Advances the ball one tick. Velocities are in field units per tick, so the
//! result depends only on the state passed in, never on wall-clock time.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Ball reflected off the left or right wall
    pub wall_bounce: bool,
    /// Ball reflected off the top wall
    pub ceiling_bounce: bool,
    /// Ball returned by the paddle (scored)
    pub paddle_hit: bool,
    /// Ball passed the paddle; the session is over
    pub missed: bool,
}

/// Advance the game state by one tick
///
/// The paddle position must already hold this tick's input sample. A finished
/// session (`active == false`) is left untouched.
pub fn tick(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();
    if !state.active {
        return events;
    }

    state.time_ticks += 1;

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if ball.pos.x <= 0.0 || ball.pos.x >= 1.0 {
        ball.vel.x = -ball.vel.x;
        events.wall_bounce = true;
    }

    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
        events.ceiling_bounce = true;
    }

    // Paddle before miss: a ball that is both past the floor and over the
    // paddle in the same tick is saved.
    if ball.pos.y >= PADDLE_ZONE_Y && state.paddle.covers(ball.pos.x) {
        ball.vel.y = -ball.vel.y;
        ball.vel = (ball.vel * PADDLE_BOOST)
            .clamp(Vec2::splat(-MAX_AXIS_SPEED), Vec2::splat(MAX_AXIS_SPEED));
        state.score += 1;
        events.paddle_hit = true;
    }

    if ball.pos.y >= FLOOR_Y && !events.paddle_hit {
        state.active = false;
        events.missed = true;
    }

    if events != TickEvents::default() {
        log::debug!(
            "tick {}: {:?} ball=({:.3}, {:.3}) vel=({:.4}, {:.4}) score={}",
            state.time_ticks,
            events,
            state.ball.pos.x,
            state.ball.pos.y,
            state.ball.vel.x,
            state.ball.vel.y,
            state.score
        );
    }

    events
}
