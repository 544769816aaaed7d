use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use image::RgbImage;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of buffer bounds {width}x{height}", pixel.x, pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("row {row} outside of buffer height {height}")]
    RowOutsideBounds { row: u32, height: u32 },
    #[error("row of {row_len} pixels does not match buffer width {width}")]
    RowLengthMismatch { row_len: usize, width: u32 },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates an all-black buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height;

        if !inside {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn get_pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Overwrites one full row.
    pub fn write_row(&mut self, row: u32, colours: &[Colour]) -> Result<(), PixelBufferError> {
        if row >= self.height {
            return Err(PixelBufferError::RowOutsideBounds {
                row,
                height: self.height,
            });
        }

        if colours.len() != self.width as usize {
            return Err(PixelBufferError::RowLengthMismatch {
                row_len: colours.len(),
                width: self.width,
            });
        }

        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let start = row as usize * row_bytes;
        let target = &mut self.buffer[start..start + row_bytes];

        for (chunk, colour) in target.chunks_exact_mut(BYTES_PER_PIXEL).zip(colours) {
            chunk[0] = colour.r;
            chunk[1] = colour.g;
            chunk[2] = colour.b;
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Copies the current contents into an exportable image.
    #[must_use]
    pub fn snapshot(&self) -> RgbImage {
        // lengths always agree, see `buffer_size`
        RgbImage::from_raw(self.width, self.height, self.buffer.clone())
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }
}
