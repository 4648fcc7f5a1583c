//! Error type for scene and camera construction and for dispatch.
//!
//! Numeric edge cases during tracing are not errors: a degenerate ray simply
//! misses. Only caller-input violations that would make a whole render
//! meaningless are reported here.

use thiserror::Error;

/// Errors reported by the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Pixel resolution below 2 along an axis (the step is `extent / (res - 1)`).
    #[error("resolution must be at least 2x2 pixels, got {width}x{height}")]
    InvalidResolution {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// Per-pixel byte stride cannot hold an RGB triple.
    #[error("channel stride must be at least 3 bytes, got {0}")]
    InvalidStride(usize),

    /// Zero workers requested.
    #[error("parallel degree must be at least 1")]
    InvalidParallelDegree,

    /// Output buffer does not match `res_width * res_height * stride`.
    #[error("output buffer holds {actual} bytes but the camera needs {expected}")]
    BufferSize {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// View direction and up reference do not span a viewport plane.
    #[error("degenerate camera: {0}")]
    DegenerateCamera(String),

    /// Primitive parameters that cannot describe a surface.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// No preset with that name.
    #[error("unknown scene preset '{0}'")]
    UnknownScene(String),

    /// Worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RenderError>;
