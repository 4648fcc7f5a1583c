//! Camera for ray generation and scene rendering.
//!
//! The camera places a grid of pixel positions on a viewport plane and casts
//! one primary ray per pixel, from a single eye point through the pixel. The
//! grid is split into contiguous row-major ranges that are rendered in
//! parallel, each worker writing to its own slice of the output buffer.

use std::ops::Range;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Deserialize;

use crate::error::{RenderError, Result};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::cast_ray;
use crate::vector::Vector;

/// Viewport geometry and output layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraConfig {
    /// View direction; the viewport's horizontal axis is `direction × up`.
    pub direction: Vector,
    /// Up reference; must not be parallel to `direction`.
    pub up: Vector,
    /// Center of the viewport in world coordinates.
    pub center: Vector,
    /// Physical viewport width between the outermost pixel columns.
    pub width: f64,
    /// Physical viewport height between the outermost pixel rows.
    pub height: f64,
    /// Horizontal resolution in pixels
    pub res_width: usize,
    /// Vertical resolution in pixels
    pub res_height: usize,
    /// Signed offset of the eye from the viewport center, in multiples of
    /// `direction` as given (not normalized). Negative values put the eye
    /// behind the viewport.
    pub spectator_distance: f64,
    /// Bytes per pixel in the output buffer; RGB occupies the first three.
    pub channel_stride: usize,
}

impl CameraConfig {
    /// Camera at the origin looking along +Y with +Z up and a 50 unit high
    /// viewport whose width follows the pixel aspect ratio.
    pub fn looking_along_y(res_width: usize, res_height: usize) -> Self {
        let height = 50.0;
        Self {
            direction: Vector::Y,
            up: Vector::Z,
            center: Vector::ZERO,
            width: height * res_width as f64 / res_height.max(1) as f64,
            height,
            res_width,
            res_height,
            spectator_distance: -10_000.0,
            channel_stride: 3,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::looking_along_y(800, 600)
    }
}

/// Camera with its precomputed pixel grid.
///
/// The grid is computed once in [`Camera::new`] and never modified, so a
/// camera can be shared by reference between render workers.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    /// Eye point all primary rays diverge from
    eye: Vector,
    /// World position of every pixel, row-major
    pixels: Vec<Vector>,
}

impl Camera {
    /// Validate `config` and compute the pixel grid.
    ///
    /// Fails if either resolution is below 2, the stride is below 3, or
    /// `direction` and `up` do not span a plane.
    pub fn new(config: CameraConfig) -> Result<Self> {
        if config.res_width < 2 || config.res_height < 2 {
            return Err(RenderError::InvalidResolution {
                width: config.res_width,
                height: config.res_height,
            });
        }
        if config.channel_stride < 3 {
            return Err(RenderError::InvalidStride(config.channel_stride));
        }

        let direction = config.direction.normalize();
        let up = config.up.normalize();
        let right = config.direction.cross(config.up).normalize();
        if !direction.is_finite() || !up.is_finite() {
            return Err(RenderError::DegenerateCamera(
                "view direction and up reference must be non-zero".into(),
            ));
        }
        if !right.is_finite() {
            return Err(RenderError::DegenerateCamera(
                "up reference is parallel to the view direction".into(),
            ));
        }

        let step_u = right * (config.width / (config.res_width - 1) as f64);
        let step_v = up * (config.height / (config.res_height - 1) as f64);

        // Even resolutions have no middle pixel: shift by half the extent,
        // then back by half a step so the grid straddles the center.
        let start = config.center + step_v * (config.res_height as f64 / 2.0)
            - step_u * (config.res_width as f64 / 2.0);
        let start = start - step_v * 0.5 + step_u * 0.5;

        let res_width = config.res_width;
        let pixels = (0..res_width * config.res_height)
            .map(|i| {
                let column = (i % res_width) as f64;
                let row = (i / res_width) as f64;
                start + step_u * column - step_v * row
            })
            .collect();

        // The eye offset follows the configured direction, not its unit vector.
        let eye = config.center + config.direction * config.spectator_distance;

        Ok(Self {
            config,
            eye,
            pixels,
        })
    }

    /// Configuration the camera was built from.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Eye point.
    pub fn eye(&self) -> Vector {
        self.eye
    }

    /// World positions of all pixels, row-major.
    pub fn pixels(&self) -> &[Vector] {
        &self.pixels
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Size of the output buffer in bytes.
    pub fn buffer_len(&self) -> usize {
        self.pixels.len() * self.config.channel_stride
    }

    /// Primary ray for the pixel at row-major `index`, starting on the
    /// viewport and pointing away from the eye.
    pub fn primary_ray(&self, index: usize) -> Ray {
        let pixel = self.pixels[index];
        Ray::new(pixel, pixel - self.eye)
    }

    /// Render `scene` into a newly allocated buffer using `parallel_degree`
    /// workers.
    pub fn render(&self, scene: &Scene, parallel_degree: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.buffer_len()];
        self.render_into(scene, &mut buffer, parallel_degree)?;
        Ok(buffer)
    }

    /// Render `scene` into `buffer`.
    ///
    /// The pixels are split by [`partition`] into `parallel_degree` ranges and
    /// each range is rendered by its own task. The pool has at most
    /// [`rayon::current_num_threads`] threads, so a large degree adds tasks
    /// rather than OS threads. Every task writes only
    /// to the disjoint byte slice of its range. Returns once all tasks have
    /// finished. Bytes between the RGB triple and the stride are left as they
    /// were.
    pub fn render_into(&self, scene: &Scene, buffer: &mut [u8], parallel_degree: usize) -> Result<()> {
        if parallel_degree == 0 {
            return Err(RenderError::InvalidParallelDegree);
        }
        if buffer.len() != self.buffer_len() {
            return Err(RenderError::BufferSize {
                expected: self.buffer_len(),
                actual: buffer.len(),
            });
        }

        let ranges = partition(self.pixel_count(), parallel_degree);
        debug!("Pixel ranges: {:?}", ranges);

        // Ranges stay one task each; only the number of OS threads is capped.
        let threads = parallel_degree.min(rayon::current_num_threads());
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

        info!(
            "Rendering {}x{} pixels as {} ranges on {} threads...",
            self.config.res_width, self.config.res_height, parallel_degree, threads
        );
        let generation_start = Instant::now();
        let pb = ProgressBar::new(self.pixel_count() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }

        let stride = self.config.channel_stride;
        pool.scope(|s| {
            let mut rest: &mut [u8] = buffer;
            for range in ranges {
                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * stride);
                rest = tail;
                let pb = &pb;
                s.spawn(move |_| self.render_range(scene, range, chunk, pb));
            }
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());
        Ok(())
    }

    /// Shade the pixels in `range` into `chunk`, which starts at the first
    /// byte of `range.start`.
    fn render_range(&self, scene: &Scene, range: Range<usize>, chunk: &mut [u8], pb: &ProgressBar) {
        let stride = self.config.channel_stride;
        for (index, pixel) in range.zip(chunk.chunks_exact_mut(stride)) {
            let color = cast_ray(&self.primary_ray(index), scene, 0, None);
            color.write_to(pixel);
            pb.inc(1);
        }
    }
}

/// Split `0..total` into `degree` contiguous ranges with boundaries at
/// `i * total / degree`.
///
/// Ranges never overlap and cover every index exactly once; when `total` is
/// smaller than `degree` some ranges are empty.
pub fn partition(total: usize, degree: usize) -> Vec<Range<usize>> {
    (0..degree)
        .map(|i| i * total / degree..(i + 1) * total / degree)
        .collect()
}
