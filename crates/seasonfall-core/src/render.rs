//! Drawing contract between the simulation and a graphics backend.

use crate::assets::TextureHandle;
use crate::season::{Rgb, Sprite};

/// A single point in normalized device coordinates (y up, visible range -1..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVertex {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub size: f32,
}

/// What to fill the frame with before particles are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Full-screen textured quad.
    Textured(TextureHandle),
    /// Flat clear colour.
    Clear(Rgb),
}

/// Graphics backend capability used once per tick.
///
/// Implementations must only be driven from the thread that owns the frame.
pub trait Renderer {
    /// Fill the whole frame.
    fn draw_background(&mut self, background: Background);

    /// Draw a batch of points with a shared sprite.
    fn draw_points(&mut self, points: &[PointVertex], sprite: Sprite);
}
