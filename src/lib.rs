//! Renders mirrored spheres over a checkered floor into a four colour GIF.

pub mod camera;
pub mod config;
mod define_scene;
pub mod error;
pub mod gif_output;
pub mod palette;
pub mod pixel_buffer;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod sphere;
pub mod vector;

use std::time::Instant;

pub use camera::{Camera, Ray};
pub use config::RenderConfig;
pub use define_scene::define_render_scene;
pub use error::RenderError;
pub use gif_output::GifWriter;
pub use palette::{Palette, COLOUR_COUNT, PALETTE};
pub use pixel_buffer::{FrameDimensions, PixelBuffer};
pub use renderer::Renderer;
pub use scene::RenderScene;
pub use sphere::Sphere;

/// Renders the fixed scene and writes it to `config.output_path`.
pub fn run(config: &RenderConfig) -> Result<(), RenderError> {
    let dimensions = FrameDimensions::new(config.width, config.height)?;

    let mut pixels = PixelBuffer::new(dimensions)?;
    let mut gif = GifWriter::create(&config.output_path, dimensions, &PALETTE)?;

    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let scene = define_render_scene().with_max_bounces(config.max_bounces);
    log::debug!(
        "{} spheres, camera at {}, at most {} bounces",
        scene.spheres.len(),
        config.camera_origin,
        scene.max_bounces
    );

    let renderer = Renderer::new(Camera::new(config.camera_origin, dimensions), scene);

    log::info!(
        "rendering {}x{} on {} threads",
        dimensions.width(),
        dimensions.height(),
        thread_pool.current_num_threads()
    );
    let start = Instant::now();
    renderer.render(&mut pixels, &thread_pool)?;
    log::info!("rendered in {:.2?}", start.elapsed());

    gif.add_frame(&pixels)?;
    gif.finish()?;
    log::info!("wrote {}", config.output_path.display());

    Ok(())
}
