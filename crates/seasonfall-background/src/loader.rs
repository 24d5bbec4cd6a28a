//! Image file decoding.

use std::io;
use std::path::Path;

use image::ImageError;
use seasonfall_core::{AssetError, DecodedImage, ImageLoader};

/// Decodes PNG and JPEG files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileLoader;

impl ImageLoader for ImageFileLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage, AssetError> {
        let image = image::open(path).map_err(|err| match err {
            ImageError::IoError(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                AssetError::Missing {
                    path: path.to_path_buf(),
                }
            }
            other => AssetError::Decode {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })?;

        // Keep the source layout where it is 8-bit friendly; wider formats become RGBA.
        let decoded = match image.color().channel_count() {
            1 => {
                let buf = image.to_luma8();
                (buf.width(), buf.height(), 1, buf.into_raw())
            }
            2 => {
                let buf = image.to_luma_alpha8();
                (buf.width(), buf.height(), 2, buf.into_raw())
            }
            3 => {
                let buf = image.to_rgb8();
                (buf.width(), buf.height(), 3, buf.into_raw())
            }
            _ => {
                let buf = image.to_rgba8();
                (buf.width(), buf.height(), 4, buf.into_raw())
            }
        };
        let (width, height, channels, pixels) = decoded;
        Ok(DecodedImage {
            width,
            height,
            channels,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Per-test directory, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("seasonfall-loader-{test}-{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn path(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_scratch_dir_is_removed() {
        let scratch = ScratchDir::new("cleanup");
        let dir = scratch.0.clone();
        fs::write(scratch.path("left.png"), b"x").unwrap();

        drop(scratch);

        assert!(!dir.exists());
    }

    #[test]
    fn test_missing_file() {
        let err = ImageFileLoader
            .load(Path::new("/no/such/dir/summer_sky.jpg"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
    }

    #[test]
    fn test_garbage_file_is_a_decode_error() {
        let scratch = ScratchDir::new("garbage");
        let path = scratch.path("garbage.png");
        fs::write(&path, b"not an image").unwrap();

        let err = ImageFileLoader.load(&path).unwrap_err();

        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_decodes_rgb_png() {
        let scratch = ScratchDir::new("rgb");
        let path = scratch.path("sky.png");
        let mut sky = image::RgbImage::new(3, 2);
        sky.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        sky.save(&path).unwrap();

        let decoded = ImageFileLoader.load(&path).unwrap();

        assert_eq!((decoded.width, decoded.height, decoded.channels), (3, 2, 3));
        assert_eq!(decoded.pixels.len(), 18);
        assert_eq!(&decoded.pixels[15..18], &[10, 20, 30]);
    }

    #[test]
    fn test_decodes_grey_png() {
        let scratch = ScratchDir::new("grey");
        let path = scratch.path("fog.png");
        image::GrayImage::from_pixel(2, 2, image::Luma([77])).save(&path).unwrap();

        let decoded = ImageFileLoader.load(&path).unwrap();

        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.pixels, vec![77; 4]);
    }
}
