//! Court Tennis - a two-paddle ball game against a reactive opponent
//!
//! Core modules:
//! - `sim`: Simulation (movement, collisions, scoring, game state)
//! - `game_loop`: Lifecycle state machine and frame scheduling
//! - `renderer`: Drawing seam and the Canvas 2D backend
//! - `platform`: Browser/native platform helpers (viewport fitting)
//! - `tuning`: The fixed court/paddle/ball constants
//! - `settings`: Display preferences

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game_loop::{FrameScheduler, GameLoop, Hud};
pub use settings::{Palette, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical court size. The canvas backing store always matches this,
    /// CSS scaling happens on top.
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle movement per frame
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed; each component is +/- this
    pub const BALL_SPEED: f32 = 5.0;

    /// First side to reach this wins
    pub const WINNING_SCORE: u32 = 5;

    /// Opponent tracking defaults
    pub const OPPONENT_GAIN: f32 = 0.1;
    pub const OPPONENT_MAX_SPEED: f32 = 4.0; // max opponent paddle speed per frame
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;
}
