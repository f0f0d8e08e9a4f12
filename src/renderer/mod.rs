//! 2D rendering module
//!
//! Immediate-mode drawing: every frame repaints the whole board through a
//! `Surface`. Backends:
//! - `CanvasSurface`: browser `CanvasRenderingContext2d` (wasm32 only)
//! - `CommandRecorder`: records draw calls (headless runs, tests)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;
pub mod layout;
pub mod recorder;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::{draw_board, draw_coins, draw_dice, draw_slide};
pub use layout::BoardLayout;
pub use recorder::{CommandRecorder, DrawCommand};

use glam::Vec2;

use crate::sim::player::Rgba;

/// Immediate-mode 2D raster target
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn stroke_rect(&mut self, origin: Vec2, size: Vec2, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// CSS `rgba()` string for a color
pub fn css(color: Rgba) -> String {
    let [r, g, b, a] = color;
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({},{},{},{})", byte(r), byte(g), byte(b), a.clamp(0.0, 1.0))
}

/// Colors for board furniture
pub mod colors {
    use crate::sim::player::Rgba;

    pub const BACKGROUND: Rgba = [0.12, 0.12, 0.15, 1.0];
    pub const GRID_LINE: Rgba = [0.2, 0.2, 0.2, 1.0];
    pub const NEST_RING: Rgba = [0.35, 0.35, 0.35, 1.0];
    pub const STAR: Rgba = [0.55, 0.55, 0.6, 1.0];
    pub const COIN_OUTLINE: Rgba = [0.1, 0.1, 0.1, 1.0];
    pub const DICE_FACE: Rgba = [0.98, 0.98, 0.95, 1.0];
    pub const DICE_PIP: Rgba = [0.1, 0.1, 0.12, 1.0];
    pub const GUIDE_LINE: Rgba = [0.2, 0.2, 0.2, 0.6];
}
