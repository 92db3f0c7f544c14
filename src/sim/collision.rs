//! Collision checks for the rectangular court
//!
//! Only axis-aligned checks: the ball against the top/bottom walls and the
//! ball's leading edge against each paddle's vertical plane. Bounces invert
//! a velocity component and never move the ball.

use glam::Vec2;

use super::state::Side;
use crate::tuning::Tuning;

/// Outcome of a horizontal exit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Ball left past the player's edge (x < 0)
    Left,
    /// Ball left past the opponent's edge (x > court width)
    Right,
}

impl Exit {
    /// The side awarded the point
    pub fn scorer(self) -> Side {
        match self {
            Exit::Left => Side::Opponent,
            Exit::Right => Side::Player,
        }
    }
}

/// True when the ball touches or passes the top or bottom wall.
/// Equality counts so a ball landing exactly on the boundary bounces.
#[inline]
pub fn hits_wall(ball_y: f32, tuning: &Tuning) -> bool {
    ball_y <= 0.0 || ball_y >= tuning.court_height
}

/// Invert vertical velocity on a wall hit. Returns true if it bounced.
pub fn bounce_off_walls(ball_pos: Vec2, ball_vel: &mut Vec2, tuning: &Tuning) -> bool {
    if hits_wall(ball_pos.y, tuning) {
        ball_vel.y = -ball_vel.y;
        true
    } else {
        false
    }
}

/// Ball y strictly inside the paddle's vertical span
#[inline]
pub fn within_paddle_span(ball_y: f32, paddle_y: f32, tuning: &Tuning) -> bool {
    ball_y > paddle_y && ball_y < paddle_y + tuning.paddle_height
}

/// Ball's leading edge past a paddle plane, with y inside that paddle
pub fn overlaps_paddle(ball_pos: Vec2, paddle_y: f32, side: Side, tuning: &Tuning) -> bool {
    let crossed = match side {
        Side::Player => ball_pos.x - tuning.ball_radius < tuning.left_paddle_plane(),
        Side::Opponent => ball_pos.x + tuning.ball_radius > tuning.right_paddle_plane(),
    };
    crossed && within_paddle_span(ball_pos.y, paddle_y, tuning)
}

/// Invert horizontal velocity if the ball overlaps `side`'s paddle.
/// Returns true on a hit. Direction of travel is not checked.
pub fn bounce_off_paddle(
    ball_pos: Vec2,
    ball_vel: &mut Vec2,
    paddle_y: f32,
    side: Side,
    tuning: &Tuning,
) -> bool {
    if overlaps_paddle(ball_pos, paddle_y, side, tuning) {
        ball_vel.x = -ball_vel.x;
        true
    } else {
        false
    }
}

/// Which horizontal bound the ball has left, if any
pub fn exit(ball_x: f32, tuning: &Tuning) -> Option<Exit> {
    if ball_x < 0.0 {
        Some(Exit::Left)
    } else if ball_x > tuning.court_width {
        Some(Exit::Right)
    } else {
        None
    }
}
