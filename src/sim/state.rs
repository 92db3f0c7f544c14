//! Game state and core simulation types
//!
//! One owned `GameState` record holds everything a step mutates. It is
//! rebuilt wholesale on start/restart, never partially reused.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Lifecycle phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, or after an explicit stop
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Frozen mid-match, resumable
    Paused,
    /// A side reached the winning score; only restart leaves this phase
    Finished,
}

/// One of the two paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the keyboard/touch/buttons
    Player,
    /// Right paddle, driven by the tracking law
    Opponent,
}

/// Resolved signed direction for the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    Up,
    #[default]
    Neutral,
    Down,
}

impl MoveIntent {
    /// Signed direction in {-1, 0, 1} (screen y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            MoveIntent::Up => -1.0,
            MoveIntent::Neutral => 0.0,
            MoveIntent::Down => 1.0,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == MoveIntent::Neutral
    }
}

/// Complete mutable game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle top offset, in `[0, court_height - paddle_height]`
    pub player_paddle_y: f32,
    /// Opponent paddle top offset, in `[0, court_height - paddle_height]`
    pub opponent_paddle_y: f32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Direction held by continuous controls (on-screen buttons). Owned by
    /// input: it follows the controls in every phase, steps only read it.
    pub pending_move_intent: MoveIntent,
    /// Set once the phase becomes `Finished`
    pub winner: Option<Side>,
}

impl GameState {
    /// Centered, motionless state shown before the first start
    pub fn idle(tuning: &Tuning) -> Self {
        let paddle_y = tuning.centered_paddle_y();
        Self {
            phase: GamePhase::Idle,
            player_paddle_y: paddle_y,
            opponent_paddle_y: paddle_y,
            ball_pos: court_center(tuning),
            ball_vel: Vec2::ZERO,
            player_score: 0,
            opponent_score: 0,
            pending_move_intent: MoveIntent::Neutral,
            winner: None,
        }
    }

    /// Fresh running match: centered paddles and ball, random diagonal serve
    pub fn new_match<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut state = Self::idle(tuning);
        state.phase = GamePhase::Running;
        state.ball_vel = Vec2::new(
            tuning.ball_speed * random_sign(rng),
            tuning.ball_speed * random_sign(rng),
        );
        state
    }

    /// Re-serve from the center after a point.
    ///
    /// The horizontal direction flips relative to the pre-reset velocity,
    /// whichever side scored. Vertical direction is re-rolled.
    pub fn reset_ball<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.ball_pos = court_center(tuning);
        self.ball_vel.x = -self.ball_vel.x;
        self.ball_vel.y = tuning.ball_speed * random_sign(rng);
    }

    /// True while a match is in progress (paused or not)
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_paddle_y,
            Side::Opponent => self.opponent_paddle_y,
        }
    }
}

fn court_center(tuning: &Tuning) -> Vec2 {
    Vec2::new(tuning.court_width / 2.0, tuning.court_height / 2.0)
}

fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
