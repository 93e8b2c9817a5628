use std::path::PathBuf;

use glam::dvec3;

use super::scene::DEFAULT_MAX_BOUNCES;
use super::vector::Vector;

/// Compiled-in render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    pub camera_origin: Vector,
    /// Worker threads for the row loop; 0 lets rayon pick.
    pub threads: usize,
    pub max_bounces: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1600,
            height: 900,
            output_path: PathBuf::from("out.gif"),
            camera_origin: dvec3(0.0, -0.1, 3.0),
            threads: 0,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }
}
