//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One owned `GameState`, advanced once per frame by `step`
//! - Input arrives as a `TickInput` snapshot taken at the start of a step
//! - Randomness only through the `Rng` passed in

pub mod collision;
pub mod input;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{Exit, bounce_off_paddle, bounce_off_walls};
pub use input::{InputState, Key, TickInput, resolve_intent};
pub use opponent::{TrackingPolicy, track};
pub use state::{GamePhase, GameState, MoveIntent, Side};
pub use tick::{GameEvent, step};
