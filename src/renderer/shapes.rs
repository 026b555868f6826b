//! Pixel geometry for the playfield

use super::{DrawCommand, PlayView, colors};
use crate::consts::{BALL_PIXEL_RADIUS, PADDLE_ROW};
use crate::sim::{Ball, Paddle};

/// Paddle line endpoints, each end clipped to the panel
pub fn paddle_span(paddle: &Paddle, width: i32) -> (i32, i32) {
    let center = (paddle.pos * width as f32) as i32;
    let half = (paddle.size * width as f32 / 2.0) as i32;
    let last = width - 1;
    ((center - half).clamp(0, last), (center + half).clamp(0, last))
}

/// Ball center in pixels. Not clipped: an overshooting ball is drawn off-panel.
pub fn ball_pixel(ball: &Ball, width: i32) -> (i32, i32) {
    let scale = width as f32;
    ((ball.pos.x * scale) as i32, (ball.pos.y * scale) as i32)
}

/// Paddle line and ball for one frame
pub fn playfield(view: &PlayView, width: i32) -> Vec<DrawCommand> {
    // Paddle row is laid out for the 128px panel
    let row = PADDLE_ROW * width / 128;
    vec![
        DrawCommand::Line {
            x0: view.paddle_span.0,
            y0: row,
            x1: view.paddle_span.1,
            y1: row,
            color: colors::PADDLE,
        },
        DrawCommand::FilledCircle {
            x: view.ball.0,
            y: view.ball.1,
            radius: BALL_PIXEL_RADIUS,
            color: colors::BALL,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_paddle_span_centered() {
        let paddle = Paddle { pos: 0.5, size: 0.2 };
        // 64 -/+ 12
        assert_eq!(paddle_span(&paddle, 128), (52, 76));
    }

    #[test]
    fn test_paddle_span_clipped_at_edges() {
        let left = Paddle { pos: 0.0, size: 0.3 };
        assert_eq!(paddle_span(&left, 128), (0, 19));

        let right = Paddle { pos: 1.0, size: 0.3 };
        assert_eq!(paddle_span(&right, 128), (109, 127));
    }

    #[test]
    fn test_ball_pixel_not_clipped() {
        let ball = Ball {
            pos: Vec2::new(0.25, 1.02),
            vel: Vec2::ZERO,
        };
        assert_eq!(ball_pixel(&ball, 128), (32, 130));
    }

    #[test]
    fn test_playfield_paddle_row() {
        let view = PlayView {
            paddle_span: (10, 20),
            ball: (5, 6),
            score: 0,
            mode: crate::sim::GameMode::Easy,
        };
        let commands = playfield(&view, 128);
        assert_eq!(
            commands[0],
            DrawCommand::Line {
                x0: 10,
                y0: 120,
                x1: 20,
                y1: 120,
                color: colors::PADDLE
            }
        );
    }
}
