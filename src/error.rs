use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("frame size {width}x{height} is outside the encodable range 1..={max} per axis")]
    Dimensions { width: u32, height: u32, max: u32 },

    #[error("could not allocate a {bytes} byte pixel buffer")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("frame is {actual_width}x{actual_height} but {expected_width}x{expected_height} was expected")]
    FrameMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("could not create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("GIF encoding failed")]
    Encoding(#[from] gif::EncodingError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not start the render thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
