use super::camera::Camera;
use super::error::RenderError;
use super::pixel_buffer::{stored_index, PixelBuffer};
use super::scene::RenderScene;
use super::shader;

use rayon::prelude::*;

#[derive(Debug)]
pub struct Renderer {
    pub camera: Camera,
    pub scene: RenderScene,
}

impl Renderer {
    pub fn new(camera: Camera, scene: RenderScene) -> Renderer {
        Renderer { camera, scene }
    }

    /// Fills `pixels` one row per task on `thread_pool`.
    pub fn render(
        &self,
        pixels: &mut PixelBuffer,
        thread_pool: &rayon::ThreadPool,
    ) -> Result<(), RenderError> {
        self.check_dimensions(pixels)?;

        let width = pixels.width() as usize;
        thread_pool.install(|| {
            pixels
                .rows_mut()
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, index) in row.iter_mut().enumerate() {
                        *index = stored_index(self.per_pixel(x as u32, y as u32));
                    }
                });
        });

        Ok(())
    }

    // single threaded version of the rendering, same output as `render`
    pub fn render_serial(&self, pixels: &mut PixelBuffer) -> Result<(), RenderError> {
        self.check_dimensions(pixels)?;

        for y in 0..pixels.height() {
            for x in 0..pixels.width() {
                let index = self.per_pixel(x, y);
                pixels.set(x, y, index);
            }
        }

        Ok(())
    }

    /// Palette index for the pixel at (x, y).
    pub fn per_pixel(&self, x: u32, y: u32) -> u8 {
        let mut ray = self.camera.ray_for_pixel(x, y);
        self.scene.trace(&mut ray);
        shader::shade(x, y, &mut ray)
    }

    fn check_dimensions(&self, pixels: &PixelBuffer) -> Result<(), RenderError> {
        let expected = self.camera.dimensions;
        if pixels.dimensions() != expected {
            return Err(RenderError::FrameMismatch {
                expected_width: expected.width(),
                expected_height: expected.height(),
                actual_width: pixels.width(),
                actual_height: pixels.height(),
            });
        }
        Ok(())
    }
}
