//! Opponent paddle tracking
//!
//! The opponent follows the ball's y with a proportional controller: each
//! step it closes a fraction of the distance between the ball and its own
//! center. The capped variant limits the per-step speed and ignores small
//! offsets so the opponent is beatable.

use serde::{Deserialize, Serialize};

use crate::consts::{OPPONENT_DEAD_ZONE, OPPONENT_GAIN, OPPONENT_MAX_SPEED};
use crate::tuning::Tuning;

/// Tracking law for the opponent paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum TrackingPolicy {
    /// Move `gain * distance` every step
    Proportional { gain: f32 },
    /// Move `min(max_speed, gain * distance)`, nothing inside the dead zone
    Capped {
        gain: f32,
        max_speed: f32,
        dead_zone: f32,
    },
}

impl Default for TrackingPolicy {
    fn default() -> Self {
        TrackingPolicy::Capped {
            gain: OPPONENT_GAIN,
            max_speed: OPPONENT_MAX_SPEED,
            dead_zone: OPPONENT_DEAD_ZONE,
        }
    }
}

impl TrackingPolicy {
    pub fn gain(&self) -> f32 {
        match *self {
            TrackingPolicy::Proportional { gain } | TrackingPolicy::Capped { gain, .. } => gain,
        }
    }

    /// Signed displacement for a given ball-minus-center distance
    pub fn displacement(&self, diff: f32) -> f32 {
        match *self {
            TrackingPolicy::Proportional { gain } => diff * gain,
            TrackingPolicy::Capped {
                gain,
                max_speed,
                dead_zone,
            } => {
                if diff.abs() > dead_zone {
                    diff.signum() * max_speed.min(diff.abs() * gain)
                } else {
                    0.0
                }
            }
        }
    }
}

/// New opponent paddle offset after one step of tracking `ball_y`
pub fn track(paddle_y: f32, ball_y: f32, tuning: &Tuning) -> f32 {
    let center = paddle_y + tuning.paddle_height / 2.0;
    let moved = paddle_y + tuning.opponent.displacement(ball_y - center);
    tuning.clamp_paddle_y(moved)
}
