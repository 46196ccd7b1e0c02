//! Seams toward the out-of-scope collaborators: the rendering backend and
//! the host window's pointer state.

use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use crate::style::Font;

pub trait Renderer {
    /// Width/height of `text` rendered with `font` at `size`.
    fn measure_text(&mut self, font: Font, text: &str, size: f32) -> Vec2;

    fn draw_rect(&mut self, bounds: Rect, color: Color);
    fn draw_rect_rounded(&mut self, bounds: Rect, radius: f32, color: Color);
    fn draw_rect_outline(&mut self, bounds: Rect, thickness: f32, color: Color);
    fn draw_rect_rounded_outline(&mut self, bounds: Rect, radius: f32, thickness: f32, color: Color);
    fn draw_text(&mut self, font: Font, text: &str, position: Vec2, size: f32, color: Color);
}

pub trait PointerHost {
    fn pointer_position(&self) -> Vec2;

    /// Primary button went down this frame (edge).
    fn primary_pressed(&self) -> bool;

    /// Primary button is currently down (level).
    fn primary_down(&self) -> bool;
}
