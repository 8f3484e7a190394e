//! Boundary with the host rendering framework.
//!
//! The core never draws pixels itself. It hands the displayed sub-array,
//! its data-space extent, and the display options to a [`HostRenderer`],
//! the single seam a host framework implements to receive frames.
//!
//! This module also carries a minimal host harness:
//!
//! - [`Axes`]: a plot surface with data limits, a pixel-sized render
//!   target, and a list of attached images — enough host to drive the
//!   adapter in tests, demos, and embedding code.
//! - [`imshow`]: the convenience entry point that builds a [`RasterImage`]
//!   from an array, autoscales its normalization, attaches it to the axes,
//!   and returns it for further configuration.
//! - [`RecordingRenderer`]: a renderer double that records every draw call,
//!   for tests and dry runs.

use ndarray::ArrayD;
use tracing::debug;

use crate::artist::{RasterImage, RenderStats};
use crate::config::ImageOptions;
use crate::error::{HostError, RenderError};
use crate::raster::DisplayedArray;
use crate::transform::{Extent, Origin};
use crate::viewport::{PixelExtent, ViewWindow, ViewportState};

// =============================================================================
// HostRenderer
// =============================================================================

/// The capability a host framework implements to receive frames.
///
/// Called once per image per redraw with the masked sub-array, the
/// data-space extent it covers, and the display options to apply. The host
/// owns color mapping, interpolation, compositing, and actual pixel output.
pub trait HostRenderer {
    /// Draw one image frame.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the adapter's state commit for this frame;
    /// the adapter retries from its previous state on the next redraw.
    fn draw_image(
        &mut self,
        image: &DisplayedArray,
        extent: &Extent,
        options: &ImageOptions,
    ) -> Result<(), RenderError>;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    /// The frame that was handed over.
    pub image: DisplayedArray,

    /// Data-space extent the frame covers.
    pub extent: Extent,

    /// Opacity in effect for this frame.
    pub alpha: Option<f64>,
}

/// Renderer double that records every draw call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// All draw calls received, in order.
    pub draws: Vec<DrawRecord>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent draw call, if any.
    pub fn last(&self) -> Option<&DrawRecord> {
        self.draws.last()
    }
}

impl HostRenderer for RecordingRenderer {
    fn draw_image(
        &mut self,
        image: &DisplayedArray,
        extent: &Extent,
        options: &ImageOptions,
    ) -> Result<(), RenderError> {
        self.draws.push(DrawRecord {
            image: image.clone(),
            extent: *extent,
            alpha: options.alpha,
        });
        Ok(())
    }
}

// =============================================================================
// Axes
// =============================================================================

/// How the axes scale data units to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    /// Fill the render target; x and y may scale differently.
    #[default]
    Auto,
    /// One data unit is the same number of pixels on both axes.
    Equal,
}

/// Minimal host plot surface.
///
/// Tracks the current data limits (pan/zoom state), the render-target
/// pixel size, and the images attached to it. `draw` walks the images and
/// runs each one's render cycle against the current viewport.
#[derive(Debug, Clone)]
pub struct Axes {
    images: Vec<RasterImage>,
    xlim: (f64, f64),
    ylim: (f64, f64),
    limits_set: bool,
    pixels: PixelExtent,
    aspect: Aspect,
}

impl Axes {
    /// Create axes with a render target of the given pixel size.
    ///
    /// Data limits start at the unit square until set explicitly or fitted
    /// by [`imshow`].
    pub fn new(pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            images: Vec::new(),
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            limits_set: false,
            pixels: PixelExtent::new(pixel_width, pixel_height),
            aspect: Aspect::default(),
        }
    }

    /// Set the visible x interval.
    pub fn set_xlim(&mut self, lo: f64, hi: f64) {
        self.xlim = (lo, hi);
        self.limits_set = true;
    }

    /// Set the visible y interval.
    pub fn set_ylim(&mut self, lo: f64, hi: f64) {
        self.ylim = (lo, hi);
        self.limits_set = true;
    }

    /// Current visible x interval.
    pub fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    /// Current visible y interval.
    pub fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    /// Set the aspect policy.
    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    /// Current aspect policy.
    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Resize the render target.
    pub fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.pixels = PixelExtent::new(width, height);
    }

    /// The viewport state a redraw would use right now.
    pub fn viewport(&self) -> ViewportState {
        ViewportState::new(ViewWindow::new(self.xlim, self.ylim), self.pixels)
    }

    /// The current view box as a data-space extent.
    pub fn view_extent(&self) -> Extent {
        Extent::new(self.xlim.0, self.xlim.1, self.ylim.0, self.ylim.1).normalized()
    }

    /// Attach an image; returns its index.
    pub fn add_image(&mut self, image: RasterImage) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Attached images.
    pub fn images(&self) -> &[RasterImage] {
        &self.images
    }

    /// Mutable access to an attached image.
    pub fn image_mut(&mut self, index: usize) -> Option<&mut RasterImage> {
        self.images.get_mut(index)
    }

    /// Redraw every attached image against the current viewport.
    ///
    /// # Errors
    ///
    /// Stops at the first failing image, leaving that image's state intact
    /// per the adapter's atomicity contract.
    pub fn draw(&mut self, renderer: &mut dyn HostRenderer) -> Result<Vec<RenderStats>, RenderError> {
        let viewport = self.viewport();
        let mut stats = Vec::with_capacity(self.images.len());
        for image in &mut self.images {
            stats.push(image.render(&viewport, renderer)?);
        }
        Ok(stats)
    }
}

// =============================================================================
// imshow
// =============================================================================

/// Build a resolution-adaptive image from an array and attach it to axes.
///
/// Mirrors a host framework's `imshow` convenience call:
///
/// 1. validates the options and the array,
/// 2. autoscales missing normalization bounds to the finite data range,
/// 3. defaults the clip box to the axes view box,
/// 4. fits the axes data limits to the image extent when the caller has
///    not set limits yet (inverting y for `Origin::Upper` so the first row
///    shows at the top),
/// 5. attaches the image and returns it for further configuration.
///
/// # Errors
///
/// [`HostError::InvalidOptions`] for out-of-range option values and
/// [`HostError::Data`] when the array violates the data-model contract.
pub fn imshow<'a>(
    axes: &'a mut Axes,
    data: ArrayD<f64>,
    mut options: ImageOptions,
) -> Result<&'a mut RasterImage, HostError> {
    options
        .validate()
        .map_err(|message| HostError::InvalidOptions { message })?;

    if !options.norm.is_complete() {
        let (lo, hi) = finite_range(&data);
        options.norm.vmin = options.norm.vmin.or(Some(lo));
        options.norm.vmax = options.norm.vmax.or(Some(hi));
        debug!(vmin = ?options.norm.vmin, vmax = ?options.norm.vmax, "autoscaled norm");
    }

    axes.set_aspect(Aspect::Equal);

    let origin = options.origin;
    let mut image = RasterImage::with_data(data, options)?;
    let extent = image
        .extent()
        .unwrap_or_else(|| Extent::new(0.0, 1.0, 0.0, 1.0));

    if !axes.limits_set {
        axes.set_xlim(extent.x0, extent.x1);
        match origin {
            Origin::Upper => axes.set_ylim(extent.y1, extent.y0),
            Origin::Lower => axes.set_ylim(extent.y0, extent.y1),
        }
    }

    if image.options().clip.is_none() {
        image.options_mut().clip = Some(axes.view_extent());
    }

    let index = axes.add_image(image);
    Ok(&mut axes.images[index])
}

/// Finite min/max of an array, falling back to `(0, 1)` when no finite
/// values exist.
fn finite_range(data: &ArrayD<f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in data.iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        (0.0, 1.0)
    } else {
        (lo, hi)
    }
}

// =============================================================================
// Tests
// =============================================================================
