//! Core types for the seasonfall demo.
//!
//! Holds the season table, the particle field and the simulation state
//! that ties them together. Drawing and image loading are reached only
//! through the [`Renderer`], [`ImageLoader`] and [`TextureSink`] traits,
//! so nothing here depends on a terminal or graphics API.

mod assets;
mod particle;
mod random;
mod render;
mod season;
mod simulation;

pub use assets::{
    AssetError, BackgroundTable, DecodedImage, ImageLoader, PixelFormat, TextureHandle,
    TextureSink, load_texture,
};
pub use particle::{
    KILL_LINE, Particle, ParticleField, SPAWN_CEILING, SPAWN_FLOOR, wrap_horizontal,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use render::{Background, PointVertex, Renderer};
pub use season::{
    ColorRule, Drift, ParticleProfile, Rgb, Season, SeasonMap, Sprite, within,
};
pub use simulation::{PrecipitationMode, SeasonVisuals, SimulationSettings, SimulationState};
