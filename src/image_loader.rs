use crate::error::{AppError, Result};
use crate::state::image_view::Rotation;
use image::DynamicImage;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image file. Blocking; run it off the UI thread.
pub fn load_image_blocking(path: &Path) -> Result<DynamicImage> {
    let image = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;
    Ok(image)
}

/// Applies the view rotation to decoded pixels.
pub fn rotated(image: &DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::Deg0 => image.clone(),
        Rotation::Deg90 => image.rotate90(),
        Rotation::Deg180 => image.rotate180(),
        Rotation::Deg270 => image.rotate270(),
    }
}

/// Converts decoded pixels into a Slint image.
pub fn create_slint_image(image: &DynamicImage) -> Image {
    let rgba = image.to_rgba8();
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(rgba.as_raw(), rgba.width(), rgba.height());
    Image::from_rgba8(buffer)
}

/// Writes the image, picking the format from the extension of `path`.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    // JPEG has no alpha channel
    let is_jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false);

    let result = if is_jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8()).save(path)
    } else {
        image.save(path)
    };
    result.map_err(|e| AppError::ImageSave(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rotation_swaps_dimensions() {
        let image = DynamicImage::new_rgb8(4, 2);
        let turned = rotated(&image, Rotation::Deg90);
        assert_eq!((turned.width(), turned.height()), (2, 4));
        let flipped = rotated(&image, Rotation::Deg180);
        assert_eq!((flipped.width(), flipped.height()), (4, 2));
    }

    #[test]
    fn saved_image_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = DynamicImage::new_rgba8(3, 5);

        save_image(&image, &path).unwrap();
        let loaded = load_image_blocking(&path).unwrap();

        assert_eq!((loaded.width(), loaded.height()), (3, 5));
    }

    #[test]
    fn jpeg_save_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_image(&DynamicImage::new_rgba8(8, 8), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn garbage_file_fails_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            load_image_blocking(&path),
            Err(AppError::ImageLoad(_))
        ));
    }
}
