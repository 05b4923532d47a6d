// Asset file lookup and image decoding

use super::AssetError;
use std::path::{Path, PathBuf};

/// Decoded RGBA8 image ready for upload
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Finds asset files relative to a base directory and decodes them
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read(&path)?)
    }

    /// Load and decode an image into RGBA8 pixels
    pub fn load_image(&self, name: &str) -> Result<ImageData, AssetError> {
        let bytes = self.load_bytes(name)?;
        decode_image(name, &bytes)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Decode an in-memory PNG/JPEG
pub fn decode_image(name: &str, bytes: &[u8]) -> Result<ImageData, AssetError> {
    let image = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let rgba = image.to_rgba8();

    Ok(ImageData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("ladybug-assets-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("ladybug.png");
        assert_eq!(path, PathBuf::from("/game/assets/ladybug.png"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.load_image("ladybug.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_decode_png() {
        let data = decode_image("red.png", &png_bytes(4, 2)).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.rgba.len(), 4 * 2 * 4);
        assert_eq!(&data.rgba[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_image("junk.png", b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(err.to_string().contains("junk.png"));
    }

    #[test]
    fn test_load_image_from_disk() {
        let dir = scratch_dir("load");
        std::fs::write(dir.join("rock.png"), png_bytes(32, 32)).unwrap();
        std::fs::write(dir.join("notes.txt"), b"hello").unwrap();

        let loader = AssetLoader::new(&dir);
        let data = loader.load_image("rock.png").unwrap();
        assert_eq!((data.width, data.height), (32, 32));

        let err = loader.load_image("notes.txt").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
