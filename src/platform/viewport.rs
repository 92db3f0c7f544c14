//! Viewport fitting
//!
//! The court keeps its logical size no matter how big the window is; only
//! the CSS display size changes. Pointer coordinates arrive in CSS pixels
//! and are scaled back into court space here.

/// Horizontal space left around the canvas (px)
pub const HORIZONTAL_MARGIN: f32 = 20.0;
/// Vertical space left for the buttons under the canvas (px)
pub const VERTICAL_MARGIN: f32 = 120.0;

/// On-screen (CSS) size of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    /// Map a y offset from the canvas top (CSS px) into court space, clamped
    pub fn client_to_court_y(&self, client_y: f32, court_height: f32) -> f32 {
        if self.height <= 0.0 {
            return court_height / 2.0;
        }
        (client_y * court_height / self.height).clamp(0.0, court_height)
    }
}

/// Largest display size with the court's aspect ratio that fits the window
/// minus the margins
pub fn fit_to_window(
    window_width: f32,
    window_height: f32,
    court_width: f32,
    court_height: f32,
) -> DisplaySize {
    let aspect = court_width / court_height;
    let max_width = (window_width - HORIZONTAL_MARGIN).max(0.0);
    let max_height = (window_height - VERTICAL_MARGIN).max(0.0);

    let mut width = max_width;
    let mut height = width / aspect;
    if height > max_height {
        height = max_height;
        width = height * aspect;
    }

    DisplaySize { width, height }
}
