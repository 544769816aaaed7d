use std::path::Path;

use image::{ImageError, ImageFormat, RgbImage};

/// Encodes `image` as PNG, creating or truncating the file.
pub fn write_png(image: &RgbImage, filepath: impl AsRef<Path>) -> Result<(), ImageError> {
    image.save_with_format(filepath, ImageFormat::Png)
}
