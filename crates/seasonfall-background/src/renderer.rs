//! Terminal implementation of the simulation's [`Renderer`].

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use seasonfall_core::{Background, PointVertex, Renderer, Rgb, Sprite};

use crate::chars::{HALF_BLOCK, glyph};
use crate::color::{rgb_to_color, texel_to_color};
use crate::texture::{Texture, TextureStore};

/// Full-screen textured quad, two texels per cell.
#[derive(Debug, Clone, Copy)]
pub struct TexturedQuad<'a> {
    texture: &'a Texture,
}

impl<'a> TexturedQuad<'a> {
    pub fn new(texture: &'a Texture) -> Self {
        Self { texture }
    }
}

impl Widget for TexturedQuad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height as f32 * 2.0;
        let cols = area.width as f32;
        for y in 0..area.height {
            let v_top = (y as f32 * 2.0 + 0.5) / rows;
            let v_bottom = (y as f32 * 2.0 + 1.5) / rows;
            for x in 0..area.width {
                let u = (x as f32 + 0.5) / cols;
                let top = self.texture.sample(u, v_top);
                let bottom = self.texture.sample(u, v_bottom);
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(texel_to_color(top))
                        .set_bg(texel_to_color(bottom));
                }
            }
        }
    }
}

/// Flat clear colour.
#[derive(Debug, Clone, Copy)]
pub struct ClearFill {
    color: Color,
}

impl ClearFill {
    pub fn new(rgb: Rgb) -> Self {
        Self {
            color: rgb_to_color(rgb),
        }
    }
}

impl Widget for ClearFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(self.color));
    }
}

/// Map normalized device coordinates (y up) to a cell inside `area`.
pub fn point_to_cell(x: f32, y: f32, area: Rect) -> Option<(u16, u16)> {
    let col = ((x + 1.0) / 2.0 * area.width as f32).floor();
    let row = ((1.0 - y) / 2.0 * area.height as f32).floor();
    if col < 0.0 || row < 0.0 || col >= area.width as f32 || row >= area.height as f32 {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

/// Draws into a ratatui buffer for one frame.
#[derive(Debug)]
pub struct FrameRenderer<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    textures: &'a TextureStore,
}

impl<'a> FrameRenderer<'a> {
    /// Draw over the whole frame.
    pub fn new(frame: &'a mut Frame<'_>, textures: &'a TextureStore) -> Self {
        let area = frame.area();
        Self::with_buffer(area, frame.buffer_mut(), textures)
    }

    /// Draw into `area` of an arbitrary buffer.
    pub fn with_buffer(area: Rect, buf: &'a mut Buffer, textures: &'a TextureStore) -> Self {
        Self {
            area,
            buf,
            textures,
        }
    }
}

impl Renderer for FrameRenderer<'_> {
    fn draw_background(&mut self, background: Background) {
        match background {
            Background::Textured(handle) => match self.textures.get(handle) {
                Some(texture) => TexturedQuad::new(texture).render(self.area, self.buf),
                None => ClearFill::new([0.0; 3]).render(self.area, self.buf),
            },
            Background::Clear(rgb) => ClearFill::new(rgb).render(self.area, self.buf),
        }
    }

    fn draw_points(&mut self, points: &[PointVertex], sprite: Sprite) {
        for point in points {
            let Some(pos) = point_to_cell(point.x, point.y, self.area) else {
                continue;
            };
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_char(glyph(sprite, point.size))
                    .set_fg(rgb_to_color(point.color));
            }
        }
    }
}
