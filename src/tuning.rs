//! Data-driven game constants
//!
//! Everything the simulation treats as fixed: court size, paddle and ball
//! geometry, speeds, the winning score and the opponent tracking law.
//! A `Tuning` is chosen once when the game loop is built and never changes
//! while it runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::TrackingPolicy;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit in court height {court}")]
    PaddleTooTall { paddle: f32, court: f32 },
    #[error("two paddles of width {paddle} do not fit in court width {court}")]
    PaddleTooWide { paddle: f32, court: f32 },
    #[error("winning score must be at least 1")]
    ZeroWinningScore,
    #[error("opponent gain must be in (0, 1], got {0}")]
    GainOutOfRange(f32),
}

/// Fixed simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub winning_score: u32,
    /// How the opponent paddle follows the ball
    pub opponent: TrackingPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            winning_score: WINNING_SCORE,
            opponent: TrackingPolicy::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document over the defaults and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the constants describe a playable court
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            // `!(value > 0.0)` also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if self.paddle_height >= self.court_height {
            return Err(TuningError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        if self.paddle_width * 2.0 >= self.court_width {
            return Err(TuningError::PaddleTooWide {
                paddle: self.paddle_width,
                court: self.court_width,
            });
        }
        if self.winning_score == 0 {
            return Err(TuningError::ZeroWinningScore);
        }

        let gain = self.opponent.gain();
        if !(gain > 0.0 && gain <= 1.0) {
            return Err(TuningError::GainOutOfRange(gain));
        }
        if let TrackingPolicy::Capped {
            max_speed, dead_zone, ..
        } = self.opponent
        {
            if !(max_speed > 0.0) {
                return Err(TuningError::NonPositive {
                    field: "opponent.max_speed",
                    value: max_speed,
                });
            }
            if dead_zone < 0.0 {
                return Err(TuningError::NonPositive {
                    field: "opponent.dead_zone",
                    value: dead_zone,
                });
            }
        }

        Ok(())
    }

    /// Largest legal paddle offset
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.court_height - self.paddle_height
    }

    /// Clamp a paddle offset into `[0, court_height - paddle_height]`
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle offset that centers a paddle vertically
    #[inline]
    pub fn centered_paddle_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// x of the player paddle's leading edge
    #[inline]
    pub fn left_paddle_plane(&self) -> f32 {
        self.paddle_width
    }

    /// x of the opponent paddle's leading edge
    #[inline]
    pub fn right_paddle_plane(&self) -> f32 {
        self.court_width - self.paddle_width
    }
}
