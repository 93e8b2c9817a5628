use image::{GrayImage, ImageBuffer};

use super::error::RenderError;
use super::palette::{COLOUR_COUNT, INDEX_MASK};

/// Largest per-axis size a GIF logical screen can describe.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Frame size that is known to be encodable. Pixel buffers, cameras and GIF
/// writers can only be built from one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    width: u16,
    height: u16,
}

impl FrameDimensions {
    pub fn new(width: u32, height: u32) -> Result<FrameDimensions, RenderError> {
        let in_range = |n: u32| (1..=MAX_DIMENSION).contains(&n);
        if !in_range(width) || !in_range(height) {
            return Err(RenderError::Dimensions {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }

        Ok(FrameDimensions {
            width: width as u16,
            height: height as u16,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub(crate) fn width_u16(&self) -> u16 {
        self.width
    }

    pub(crate) fn height_u16(&self) -> u16 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// The value written into the grid for a palette index, masked into range.
#[inline]
pub(crate) fn stored_index(index: u8) -> u8 {
    debug_assert!(
        (index as usize) < COLOUR_COUNT,
        "palette index {index} out of range"
    );
    index & INDEX_MASK
}

/// Row-major grid of palette indices, zeroed on creation.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    dimensions: FrameDimensions,
    image: GrayImage,
}

impl PixelBuffer {
    pub fn new(dimensions: FrameDimensions) -> Result<PixelBuffer, RenderError> {
        let bytes = dimensions.pixel_count();

        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|source| RenderError::Allocation { bytes, source })?;
        data.resize(bytes, 0);

        let image = ImageBuffer::from_raw(dimensions.width(), dimensions.height(), data).ok_or(
            RenderError::Dimensions {
                width: dimensions.width(),
                height: dimensions.height(),
                max: MAX_DIMENSION,
            },
        )?;

        Ok(PixelBuffer { dimensions, image })
    }

    pub fn dimensions(&self) -> FrameDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    pub fn set(&mut self, x: u32, y: u32, index: u8) {
        self.image.get_pixel_mut(x, y).0[0] = stored_index(index);
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    /// All indices in row-major order.
    pub fn indices(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Mutable rows, top to bottom, each `width` indices long.
    pub(crate) fn rows_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }
}
