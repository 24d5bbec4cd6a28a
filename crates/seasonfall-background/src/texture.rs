//! Textures held in memory for the terminal renderer.

use seasonfall_core::{DecodedImage, PixelFormat, TextureHandle, TextureSink};

/// RGB texels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<[u8; 3]>,
}

impl Texture {
    /// Convert a decoded image. Alpha is composited over black.
    pub fn from_image(image: &DecodedImage, format: PixelFormat) -> Self {
        let count = image.width as usize * image.height as usize;
        let texels = image
            .pixels
            .chunks_exact(format.channels())
            .take(count)
            .map(|px| match format {
                PixelFormat::Grey => [px[0]; 3],
                PixelFormat::GreyAlpha => [premultiply(px[0], px[1]); 3],
                PixelFormat::Rgb => [px[0], px[1], px[2]],
                PixelFormat::Rgba => [
                    premultiply(px[0], px[3]),
                    premultiply(px[1], px[3]),
                    premultiply(px[2], px[3]),
                ],
            })
            .collect();
        Self {
            width: image.width,
            height: image.height,
            texels,
        }
    }

    /// Nearest-neighbour sample; `u` and `v` run 0.0-1.0 left-to-right, top-to-bottom.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 3] {
        if self.texels.is_empty() || self.width == 0 {
            return [0; 3];
        }
        let x = ((u.clamp(0.0, 1.0) * self.width as f32) as u32).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as u32)
            .min(self.height.saturating_sub(1));
        let idx = y as usize * self.width as usize + x as usize;
        self.texels.get(idx).copied().unwrap_or([0; 3])
    }
}

fn premultiply(value: u8, alpha: u8) -> u8 {
    ((value as u16 * alpha as u16 + 127) / 255) as u8
}

/// Owns every uploaded texture for the life of the process.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a texture.
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureSink for TextureStore {
    fn upload(&mut self, image: &DecodedImage, format: PixelFormat) -> TextureHandle {
        self.textures.push(Texture::from_image(image, format));
        TextureHandle((self.textures.len() - 1) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> DecodedImage {
        DecodedImage {
            width,
            height,
            channels,
            pixels,
        }
    }

    #[test]
    fn test_formats_expand_to_rgb() {
        let grey = Texture::from_image(&image(1, 1, 1, vec![200]), PixelFormat::Grey);
        assert_eq!(grey.sample(0.0, 0.0), [200, 200, 200]);

        let grey_alpha =
            Texture::from_image(&image(1, 1, 2, vec![200, 0]), PixelFormat::GreyAlpha);
        assert_eq!(grey_alpha.sample(0.0, 0.0), [0, 0, 0]);

        let rgb = Texture::from_image(&image(1, 1, 3, vec![1, 2, 3]), PixelFormat::Rgb);
        assert_eq!(rgb.sample(0.5, 0.5), [1, 2, 3]);

        let rgba =
            Texture::from_image(&image(1, 1, 4, vec![255, 100, 0, 255]), PixelFormat::Rgba);
        assert_eq!(rgba.sample(1.0, 1.0), [255, 100, 0]);
    }

    #[test]
    fn test_sample_picks_nearest_texel() {
        // 2x2: red, green / blue, white
        let pixels = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let texture = Texture::from_image(&image(2, 2, 3, pixels), PixelFormat::Rgb);

        assert_eq!(texture.sample(0.1, 0.1), [255, 0, 0]);
        assert_eq!(texture.sample(0.9, 0.1), [0, 255, 0]);
        assert_eq!(texture.sample(0.1, 0.9), [0, 0, 255]);
        assert_eq!(texture.sample(1.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn test_store_hands_out_sequential_handles() {
        let mut store = TextureStore::new();
        let a = store.upload(&image(1, 1, 1, vec![0]), PixelFormat::Grey);
        let b = store.upload(&image(1, 1, 1, vec![9]), PixelFormat::Grey);

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).map(|t| t.sample(0.0, 0.0)), Some([9, 9, 9]));
        assert!(store.get(TextureHandle(7)).is_none());
    }
}
