use std::path::Path;

use image::{ImageError, RgbImage};

pub trait ImageFilePresenterPort: Send + Sync {
    fn present(&self, image: &RgbImage, filepath: &Path) -> Result<(), ImageError>;
}
