//! # modest-raster
//!
//! Resolution-adaptive display of very large 2-D raster images.
//!
//! Interactive viewers redraw constantly, and redrawing a 100-megapixel
//! array at full resolution into a 500x500 viewport wastes nearly all of
//! that work. Before each redraw this crate resamples the source array —
//! by strided slicing, no filtering — down to approximately the viewport
//! resolution, and caches the result so that small pans and zoom-outs skip
//! the recompute entirely. The appearance barely changes; the per-frame
//! cost drops by the square of the stride.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`transform`] - mapping between data space and array-index space
//! - [`resample`] - the viewport slice planner and the reuse cache
//! - [`raster`] - full-resolution storage and the masked displayed array
//! - [`artist`] - the [`RasterImage`] adapter orchestrating a render cycle
//! - [`host`] - the [`HostRenderer`] seam, a minimal [`Axes`] harness, and
//!   the [`imshow`] convenience entry point
//! - [`config`] - the display-option surface forwarded to the host
//! - [`error`] - per-layer error types
//!
//! Per redraw: `Axes::draw` → `RasterImage::render` → transform → planner →
//! cache decision → (extract + mask | reuse) → `HostRenderer::draw_image`.
//!
//! ## Example
//!
//! ```
//! use modest_raster::{imshow, Axes, ImageOptions, RecordingRenderer};
//! use ndarray::Array2;
//!
//! // A 2000x2000 synthetic image.
//! let data = Array2::from_shape_fn((2000, 2000), |(y, x)| {
//!     (x as f64 / 10.0).sin() * (y as f64 / 30.0).cos()
//! })
//! .into_dyn();
//!
//! let mut axes = Axes::new(500, 500);
//! imshow(&mut axes, data, ImageOptions::default()).unwrap();
//!
//! // Zoom to the first 1000 rows/columns and draw: roughly one sample
//! // per two source pixels survives.
//! axes.set_xlim(0.0, 1000.0);
//! axes.set_ylim(0.0, 1000.0);
//! let mut renderer = RecordingRenderer::new();
//! let stats = axes.draw(&mut renderer).unwrap();
//! assert_eq!(stats[0].sx, 2);
//!
//! // Same viewport again: served from cache, no extraction.
//! let stats = axes.draw(&mut renderer).unwrap();
//! assert!(stats[0].cache_hit);
//! ```

pub mod artist;
pub mod config;
pub mod error;
pub mod host;
pub mod raster;
pub mod resample;
pub mod transform;
pub mod viewport;

// Re-export commonly used types
pub use artist::{RasterImage, RenderStats};
pub use config::{ImageOptions, Interpolation, NormBounds};
pub use error::{DataError, HostError, RenderError};
pub use host::{imshow, Aspect, Axes, DrawRecord, HostRenderer, RecordingRenderer};
pub use raster::{DisplayedArray, Raster};
pub use resample::{plan, ResampleCache, SliceSpec, MIN_AXIS_SAMPLES, SLICE_MARGIN};
pub use transform::{BboxTransform, Extent, Origin};
pub use viewport::{PixelExtent, ViewWindow, ViewportState};
