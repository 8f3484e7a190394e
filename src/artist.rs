//! The renderable image adapter.
//!
//! [`RasterImage`] owns the full-resolution array and orchestrates the
//! per-redraw pipeline: derive the data-to-index transform, plan the
//! viewport slice, consult the resample cache, and hand the (possibly
//! reused) displayed sub-array to the host renderer.
//!
//! # State and atomicity
//!
//! The adapter keeps four pieces of state: the source raster, the memoized
//! transform, the cache of the last extracted slice, and the currently
//! displayed sub-array with its data-space extent. `set_data` and
//! `set_extent` invalidate the transform memo and the cache. A render
//! commits its state only after the host renderer accepts the frame, so a
//! failed render leaves everything as it was and the next frame retries
//! from a consistent baseline.

use ndarray::ArrayD;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ImageOptions;
use crate::error::{DataError, RenderError};
use crate::host::HostRenderer;
use crate::raster::{DisplayedArray, Raster};
use crate::resample::{plan, ResampleCache, SliceSpec};
use crate::transform::{BboxTransform, Extent};
use crate::viewport::ViewportState;

// =============================================================================
// RenderStats
// =============================================================================

/// What one render cycle did, reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Whether the cached sub-array was reused (no extraction).
    pub cache_hit: bool,

    /// Rows in the displayed sub-array.
    pub rows: usize,

    /// Columns in the displayed sub-array.
    pub cols: usize,

    /// Column stride of the displayed sub-array.
    pub sx: usize,

    /// Row stride of the displayed sub-array.
    pub sy: usize,
}

// =============================================================================
// RasterImage
// =============================================================================

/// Resolution-adaptive image adapter.
///
/// Holds the full-resolution source and presents a down-sampled view of it
/// matched to the viewport on every [`render`](RasterImage::render) call.
/// The host framework holds this adapter by the capability surface it
/// needs (`set_data`, `set_extent`, `full_array`, `render`) rather than by
/// inheritance from a widget class.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// The full-resolution source. Replaced wholesale, never mutated.
    full_res: Option<Raster>,

    /// Display options forwarded to the host.
    options: ImageOptions,

    /// Memoized data-to-index transform. `None` = dirty.
    transform: Option<BboxTransform>,

    /// Last extracted slice, for reuse decisions.
    cache: ResampleCache,

    /// The sub-array currently shown.
    displayed: Option<DisplayedArray>,

    /// Where the displayed sub-array sits in data space.
    displayed_extent: Option<Extent>,
}

impl RasterImage {
    /// Create an adapter with no data yet.
    pub fn new(options: ImageOptions) -> Self {
        Self {
            full_res: None,
            options,
            transform: None,
            cache: ResampleCache::new(),
            displayed: None,
            displayed_extent: None,
        }
    }

    /// Create an adapter and install `data` in one step.
    pub fn with_data(data: ArrayD<f64>, options: ImageOptions) -> Result<Self, DataError> {
        let mut image = Self::new(options);
        image.set_data(data)?;
        Ok(image)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replace the full-resolution array.
    ///
    /// Validates the data-model contract before committing: on error the
    /// previously installed array, cache, and transform are untouched.
    pub fn set_data(&mut self, data: ArrayD<f64>) -> Result<(), DataError> {
        let raster = Raster::new(data)?;
        self.install(raster);
        Ok(())
    }

    /// Replace the full-resolution array with 8-bit data, widening to `f64`.
    pub fn set_data_u8(&mut self, data: ArrayD<u8>) -> Result<(), DataError> {
        let raster = Raster::from_u8(data)?;
        self.install(raster);
        Ok(())
    }

    fn install(&mut self, raster: Raster) {
        debug!(shape = ?raster.shape(), channels = ?raster.channels(), "installing new source array");
        self.full_res = Some(raster);
        self.transform = None;
        self.cache.clear();
        self.displayed = None;
        self.displayed_extent = None;
    }

    /// Set the logical placement of the image in data space.
    ///
    /// Invalidates the transform memo and the resample cache; the next
    /// render recomputes both.
    pub fn set_extent(&mut self, extent: Extent) {
        self.options.extent = Some(extent);
        self.transform = None;
        self.cache.clear();
        self.displayed = None;
        self.displayed_extent = None;
    }

    /// Set the overall opacity.
    pub fn set_alpha(&mut self, alpha: Option<f64>) {
        self.options.alpha = alpha;
    }

    /// Set the normalization bounds.
    pub fn set_clim(&mut self, vmin: f64, vmax: f64) {
        self.options.norm = crate::config::NormBounds::new(vmin, vmax);
    }

    /// Attach a URL.
    pub fn set_url(&mut self, url: Option<String>) {
        self.options.url = url;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The full-resolution array last passed to `set_data`.
    ///
    /// Always the complete source, never the displayed sub-sample — however
    /// many zoomed or panned renders happened in between.
    pub fn full_array(&self) -> Option<&ArrayD<f64>> {
        self.full_res.as_ref().map(Raster::data)
    }

    /// The logical extent of the whole image: the explicit option if set,
    /// otherwise the pixel-centered default for the array shape.
    pub fn extent(&self) -> Option<Extent> {
        let raster = self.full_res.as_ref()?;
        Some(
            self.options
                .extent
                .unwrap_or_else(|| Extent::for_shape(raster.shape())),
        )
    }

    /// The currently displayed sub-array, if a render has happened.
    pub fn displayed(&self) -> Option<&DisplayedArray> {
        self.displayed.as_ref()
    }

    /// Data-space extent of the displayed sub-array.
    pub fn displayed_extent(&self) -> Option<Extent> {
        self.displayed_extent
    }

    /// The cached slice record, if any.
    pub fn cache_state(&self) -> Option<&SliceSpec> {
        self.cache.state()
    }

    /// Display options.
    pub fn options(&self) -> &ImageOptions {
        &self.options
    }

    /// Mutable display options. Changing the extent through here bypasses
    /// invalidation; use [`set_extent`](RasterImage::set_extent) for that.
    pub fn options_mut(&mut self) -> &mut ImageOptions {
        &mut self.options
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one redraw cycle for the given viewport.
    ///
    /// Plans the slice, reuses the cached sub-array when it still covers
    /// the viewport at sufficient resolution, extracts and masks a fresh
    /// one otherwise, and delegates pixel drawing to `renderer`. Internal
    /// state is committed only after the renderer accepts the frame.
    ///
    /// # Errors
    ///
    /// [`RenderError::NoData`] before any `set_data`; any error from the
    /// host renderer is propagated and leaves prior state intact.
    pub fn render(
        &mut self,
        viewport: &ViewportState,
        renderer: &mut dyn HostRenderer,
    ) -> Result<RenderStats, RenderError> {
        let raster = self.full_res.as_ref().ok_or(RenderError::NoData)?;
        let shape = raster.shape();

        let transform = match self.transform {
            Some(t) => t,
            None => {
                trace!("transform memo dirty, recomputing");
                let extent = self
                    .options
                    .extent
                    .unwrap_or_else(|| Extent::for_shape(shape));
                BboxTransform::compute(shape, &extent, self.options.origin)
            }
        };

        let spec = plan(viewport, &transform, shape);

        if !self.cache.should_recompute(&spec) {
            // Reuse path: the cached sub-array still covers this viewport.
            if let (Some(displayed), Some(extent)) = (&self.displayed, self.displayed_extent) {
                renderer.draw_image(displayed, &extent, &self.options)?;
                self.transform = Some(transform);
                let cached = self.cache.state().copied().unwrap_or(spec);
                return Ok(RenderStats {
                    cache_hit: true,
                    rows: displayed.rows(),
                    cols: displayed.cols(),
                    sx: cached.sx,
                    sy: cached.sy,
                });
            }
            // Cache says hit but no displayed array survives; fall through
            // and recompute.
        }

        let raw = raster.extract(&spec);
        let displayed = DisplayedArray::from_raw(raw);

        // Snap the stop bounds to the samples actually selected so the
        // reported extent covers exactly the pixels shown, and the cache
        // records the full realized coverage.
        let realized = SliceSpec {
            x1: spec.realized_x1(),
            y1: spec.realized_y1(),
            ..spec
        };
        let extent = transform.index_bounds_to_extent(
            realized.x0 as f64,
            realized.x1 as f64,
            realized.y0 as f64,
            realized.y1 as f64,
        );

        renderer.draw_image(&displayed, &extent, &self.options)?;

        // Commit: nothing above mutated self, so a renderer failure left
        // the previous frame's state fully intact.
        debug!(
            rows = displayed.rows(),
            cols = displayed.cols(),
            sx = spec.sx,
            sy = spec.sy,
            "extracted fresh sub-array"
        );
        let stats = RenderStats {
            cache_hit: false,
            rows: displayed.rows(),
            cols: displayed.cols(),
            sx: spec.sx,
            sy: spec.sy,
        };
        self.transform = Some(transform);
        self.cache.store(realized);
        self.displayed = Some(displayed);
        self.displayed_extent = Some(extent);
        Ok(stats)
    }
}

// =============================================================================
// Tests
// =============================================================================
