use std::path::Path;

use image::{ImageError, RgbImage};

use crate::controllers::viewer::ports::image_file_presenter::ImageFilePresenterPort;
use crate::storage::write_png::write_png;

pub struct PngFilePresenter {}

impl ImageFilePresenterPort for PngFilePresenter {
    fn present(&self, image: &RgbImage, filepath: &Path) -> Result<(), ImageError> {
        write_png(image, filepath)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
