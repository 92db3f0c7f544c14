//! Canvas 2D backend
//!
//! The canvas backing store is sized to the court, so court coordinates are
//! canvas pixels. CSS scaling for the window is applied separately.

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Renderer};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    font_family: String,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, font_family: impl Into<String>) -> Self {
        Self {
            ctx,
            font_family: font_family.into(),
        }
    }
}

impl Renderer for CanvasRenderer {
    fn fill_background(&mut self, width: f32, height: f32, color: Color) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .set_font(&format!("{}px {}", size_px, self.font_family));
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
