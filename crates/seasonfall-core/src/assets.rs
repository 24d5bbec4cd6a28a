//! Background image contracts and the per-season texture table.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::render::Background;
use crate::season::{Season, SeasonMap};

/// Opaque handle to a texture owned by a [`TextureSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Pixel layout, selected from the decoder's channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Grey,
    GreyAlpha,
    Rgb,
    Rgba,
}

impl PixelFormat {
    /// Format for a channel count, if supported.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            1 => Some(PixelFormat::Grey),
            2 => Some(PixelFormat::GreyAlpha),
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }

    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Grey => 1,
            PixelFormat::GreyAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Decoded 8-bit image, rows top to bottom, channels interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>,
}

/// Failure to turn an image file into a texture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("file not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("unsupported channel count {channels} in {}", path.display())]
    Unsupported { path: PathBuf, channels: u8 },
}

/// Reads and decodes image files.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage, AssetError>;
}

/// Accepts decoded images and hands back texture handles.
pub trait TextureSink {
    fn upload(&mut self, image: &DecodedImage, format: PixelFormat) -> TextureHandle;
}

/// Load a single image and upload it.
pub fn load_texture<L, S>(
    loader: &L,
    sink: &mut S,
    path: &Path,
) -> Result<TextureHandle, AssetError>
where
    L: ImageLoader + ?Sized,
    S: TextureSink + ?Sized,
{
    let image = loader.load(path)?;
    let format = PixelFormat::from_channels(image.channels).ok_or_else(|| {
        AssetError::Unsupported {
            path: path.to_path_buf(),
            channels: image.channels,
        }
    })?;
    let expected = image.width as usize * image.height as usize * format.channels();
    if image.pixels.len() < expected {
        return Err(AssetError::Decode {
            path: path.to_path_buf(),
            reason: format!(
                "expected {expected} bytes for {}x{}, got {}",
                image.width,
                image.height,
                image.pixels.len()
            ),
        });
    }
    Ok(sink.upload(&image, format))
}

/// Per-season background textures, fixed after start-up.
#[derive(Debug, Default)]
pub struct BackgroundTable {
    textures: SeasonMap<Option<TextureHandle>>,
    failures: SeasonMap<Option<AssetError>>,
}

impl BackgroundTable {
    /// Table with no textures; every season falls back to its clear colour.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every configured path. Failures are logged and recorded, never fatal.
    pub fn load<L, S>(paths: &SeasonMap<Option<PathBuf>>, loader: &L, sink: &mut S) -> Self
    where
        L: ImageLoader + ?Sized,
        S: TextureSink + ?Sized,
    {
        let mut table = Self::default();
        for (season, path) in paths {
            let Some(path) = path else {
                continue;
            };
            match load_texture(loader, sink, path) {
                Ok(handle) => {
                    info!(%season, path = %path.display(), "loaded texture");
                    table.textures[season] = Some(handle);
                }
                Err(err) => {
                    warn!(%season, error = %err, "failed to load texture");
                    table.failures[season] = Some(err);
                }
            }
        }
        table
    }

    /// Texture for a season, if it loaded.
    pub fn texture(&self, season: Season) -> Option<TextureHandle> {
        self.textures[season]
    }

    /// Why a season's texture is missing, if loading was attempted and failed.
    pub fn failure(&self, season: Season) -> Option<&AssetError> {
        self.failures[season].as_ref()
    }

    /// Background to draw for a season.
    pub fn background(&self, season: Season) -> Background {
        match self.textures[season] {
            Some(handle) => Background::Textured(handle),
            None => Background::Clear(season.clear_color()),
        }
    }
}
