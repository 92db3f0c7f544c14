//! Platform abstraction layer
//!
//! Browser/native helpers that sit between the host and the simulation:
//! - Viewport fitting (CSS display size for the fixed-size court)
//! - Client → court coordinate mapping for pointer/touch input

pub mod viewport;

pub use viewport::{DisplaySize, fit_to_window};
