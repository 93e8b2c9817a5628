use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::RenderError;
use super::palette::{palette_bytes, Palette};
use super::pixel_buffer::{FrameDimensions, PixelBuffer};

/// Single frame GIF output with a fixed global colour table.
///
/// The logical screen is written as soon as the writer is created, so the
/// frame size has to be known up front.
pub struct GifWriter<W: Write> {
    encoder: gif::Encoder<W>,
    dimensions: FrameDimensions,
}

impl GifWriter<BufWriter<File>> {
    pub fn create(
        path: impl AsRef<Path>,
        dimensions: FrameDimensions,
        palette: &Palette,
    ) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| RenderError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "writing {} ({}x{})",
            path.display(),
            dimensions.width(),
            dimensions.height()
        );

        GifWriter::new(BufWriter::new(file), dimensions, palette)
    }
}

impl<W: Write> GifWriter<W> {
    pub fn new(
        writer: W,
        dimensions: FrameDimensions,
        palette: &Palette,
    ) -> Result<Self, RenderError> {
        let encoder = gif::Encoder::new(
            writer,
            dimensions.width_u16(),
            dimensions.height_u16(),
            &palette_bytes(palette),
        )?;

        Ok(GifWriter {
            encoder,
            dimensions,
        })
    }

    pub fn dimensions(&self) -> FrameDimensions {
        self.dimensions
    }

    /// Writes `pixels` as a full-screen frame using the global colour table.
    pub fn add_frame(&mut self, pixels: &PixelBuffer) -> Result<(), RenderError> {
        if pixels.dimensions() != self.dimensions {
            return Err(RenderError::FrameMismatch {
                expected_width: self.dimensions.width(),
                expected_height: self.dimensions.height(),
                actual_width: pixels.width(),
                actual_height: pixels.height(),
            });
        }

        let frame = gif::Frame {
            width: self.dimensions.width_u16(),
            height: self.dimensions.height_u16(),
            buffer: Cow::Borrowed(pixels.indices()),
            ..gif::Frame::default()
        };
        self.encoder.write_frame(&frame)?;

        Ok(())
    }

    /// Writes the trailer and hands back the flushed writer.
    pub fn finish(self) -> Result<W, RenderError> {
        let mut writer = self.encoder.into_inner()?;
        writer.flush()?;
        Ok(writer)
    }
}
