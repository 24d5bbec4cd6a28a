//! Terminal rendering for seasonfall.
//!
//! Rasterises background textures into half-block cells and draws
//! particles as glyphs, implementing the core [`Renderer`] and
//! [`TextureSink`] contracts on top of ratatui.
//!
//! [`Renderer`]: seasonfall_core::Renderer
//! [`TextureSink`]: seasonfall_core::TextureSink

mod chars;
mod color;
mod loader;
mod renderer;
mod texture;

pub use color::rgb_to_color;
pub use loader::ImageFileLoader;
pub use renderer::{ClearFill, FrameRenderer, TexturedQuad, point_to_cell};
pub use texture::{Texture, TextureStore};
