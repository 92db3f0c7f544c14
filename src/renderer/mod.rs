//! Rendering module
//!
//! The simulation never touches a drawing surface. `draw_frame` turns the
//! game state into a handful of fill calls on a `Renderer`; the browser
//! backend lives in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{GameState, Side};
use crate::tuning::Tuning;

/// Score label font size (px)
pub const SCORE_FONT_PX: f32 = 24.0;
/// Pause indicator font size (px)
pub const PAUSE_FONT_PX: f32 = 36.0;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#2e8b57`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Stateless drawing primitives, in court coordinates
pub trait Renderer {
    /// Clear the surface and fill it with `color`
    fn fill_background(&mut self, width: f32, height: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw `text` with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: Color);
}

/// Draw one frame: court, paddles, ball, scores and the pause indicator
pub fn draw_frame(
    state: &GameState,
    tuning: &Tuning,
    settings: &Settings,
    renderer: &mut dyn Renderer,
) {
    let palette = &settings.palette;

    renderer.fill_background(tuning.court_width, tuning.court_height, palette.court);

    // Paddles
    renderer.fill_rect(
        0.0,
        state.player_paddle_y,
        tuning.paddle_width,
        tuning.paddle_height,
        palette.paddle,
    );
    renderer.fill_rect(
        tuning.court_width - tuning.paddle_width,
        state.opponent_paddle_y,
        tuning.paddle_width,
        tuning.paddle_height,
        palette.paddle,
    );

    // Ball
    renderer.fill_circle(state.ball_pos, tuning.ball_radius, palette.ball);

    // Scores
    renderer.fill_text(
        &format!("{}: {}", settings.player_label, state.score(Side::Player)),
        100.0,
        30.0,
        SCORE_FONT_PX,
        palette.text,
    );
    renderer.fill_text(
        &format!("{}: {}", settings.opponent_label, state.score(Side::Opponent)),
        tuning.court_width - 150.0,
        30.0,
        SCORE_FONT_PX,
        palette.text,
    );

    if state.is_paused() && settings.show_pause_indicator {
        renderer.fill_text(
            &settings.pause_label,
            tuning.court_width / 2.0 - 60.0,
            tuning.court_height / 2.0,
            PAUSE_FONT_PX,
            palette.text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Debug, PartialEq)]
    enum Call {
        Background(f32, f32),
        Rect(f32, f32, f32, f32),
        Circle(Vec2, f32),
        Text(String, f32, f32),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn fill_background(&mut self, width: f32, height: f32, _color: Color) {
            self.calls.push(Call::Background(width, height));
        }
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _color: Color) {
            self.calls.push(Call::Rect(x, y, w, h));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn fill_text(&mut self, text: &str, x: f32, y: f32, _size_px: f32, _color: Color) {
            self.calls.push(Call::Text(text.to_string(), x, y));
        }
    }

    #[test]
    fn test_draw_frame_layout() {
        let tuning = Tuning::default();
        let settings = Settings::default();
        let mut state = GameState::idle(&tuning);
        state.phase = GamePhase::Running;
        state.player_score = 2;
        state.opponent_score = 4;

        let mut r = RecordingRenderer::default();
        draw_frame(&state, &tuning, &settings, &mut r);

        assert_eq!(
            r.calls,
            vec![
                Call::Background(800.0, 500.0),
                Call::Rect(0.0, 200.0, 10.0, 100.0),
                Call::Rect(790.0, 200.0, 10.0, 100.0),
                Call::Circle(Vec2::new(400.0, 250.0), 10.0),
                Call::Text(format!("{}: 2", settings.player_label), 100.0, 30.0),
                Call::Text(format!("{}: 4", settings.opponent_label), 650.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_pause_indicator() {
        let tuning = Tuning::default();
        let mut settings = Settings::default();
        let mut state = GameState::idle(&tuning);
        state.phase = GamePhase::Paused;

        let mut r = RecordingRenderer::default();
        draw_frame(&state, &tuning, &settings, &mut r);
        assert_eq!(
            r.calls.last(),
            Some(&Call::Text("Paused".to_string(), 340.0, 250.0))
        );

        settings.show_pause_indicator = false;
        let mut r = RecordingRenderer::default();
        draw_frame(&state, &tuning, &settings, &mut r);
        assert_eq!(r.calls.len(), 6);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(0x2e, 0x8b, 0x57).to_css(), "#2e8b57");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
    }
}
