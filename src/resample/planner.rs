//! Viewport slice planning.
//!
//! Given the visible data-space window, the render-target pixel size, and
//! the full-resolution array shape, the planner computes an integer slice
//! (start/stop/stride per axis) selecting a down-sampled view of the source
//! that closely matches the screen resolution.
//!
//! # Algorithm
//!
//! 1. Map the view window through the data-to-index transform, taking
//!    min/max per axis so inverted limits still yield `lo <= hi`.
//! 2. Pad the index-space window outward by [`SLICE_MARGIN`] units and clip
//!    to `[0, len]`, flooring the start and ceiling the stop. The margin
//!    means a slight pan stays inside the previously cached bounds and
//!    needs no recompute.
//! 3. Stride per axis is the ceiling of index units per device pixel,
//!    floored at 1 and capped so at least [`MIN_AXIS_SAMPLES`] samples
//!    survive across the axis. A zero-size pixel extent degrades to
//!    stride 1 rather than dividing by zero.

use serde::Serialize;
use tracing::trace;

use crate::transform::BboxTransform;
use crate::viewport::ViewportState;

/// Outward padding of the index-space window, in index units.
pub const SLICE_MARGIN: f64 = 5.0;

/// Minimum number of samples kept across an axis when fully zoomed out.
pub const MIN_AXIS_SAMPLES: usize = 5;

// =============================================================================
// SliceSpec
// =============================================================================

/// Start/stop/stride per axis into the full-resolution array.
///
/// Invariants: `x0 <= x1 <= width`, `y0 <= y1 <= height`, strides `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliceSpec {
    /// First column (inclusive).
    pub x0: usize,
    /// Last column (exclusive).
    pub x1: usize,
    /// Column stride.
    pub sx: usize,
    /// First row (inclusive).
    pub y0: usize,
    /// Last row (exclusive).
    pub y1: usize,
    /// Row stride.
    pub sy: usize,
}

impl SliceSpec {
    /// Number of rows the strided slice selects.
    pub fn rows(&self) -> usize {
        (self.y1 - self.y0).div_ceil(self.sy)
    }

    /// Number of columns the strided slice selects.
    pub fn cols(&self) -> usize {
        (self.x1 - self.x0).div_ceil(self.sx)
    }

    /// Column stop snapped to the last column actually selected, exclusive.
    ///
    /// `x0 + cols * sx` — the realized coverage, used when reporting the
    /// displayed extent.
    pub fn realized_x1(&self) -> usize {
        self.x0 + self.cols() * self.sx
    }

    /// Row stop snapped to the last row actually selected, exclusive.
    pub fn realized_y1(&self) -> usize {
        self.y0 + self.rows() * self.sy
    }
}

// =============================================================================
// Planner
// =============================================================================

/// Plan the slice for one redraw.
///
/// `full_shape` is `(height, width)` of the source array. The result always
/// satisfies the [`SliceSpec`] invariants, whatever the viewport: inverted
/// windows are reordered, out-of-range windows are clipped, and degenerate
/// pixel extents fall back to stride 1.
pub fn plan(
    viewport: &ViewportState,
    transform: &BboxTransform,
    full_shape: (usize, usize),
) -> SliceSpec {
    let (height, width) = full_shape;

    // Map the window corners into index space, reordering per axis.
    let (ax, ay) = transform.apply(viewport.window.x.0, viewport.window.y.0);
    let (bx, by) = transform.apply(viewport.window.x.1, viewport.window.y.1);
    let (xlo, xhi) = (ax.min(bx), ax.max(bx));
    let (ylo, yhi) = (ay.min(by), ay.max(by));

    let (x0, x1) = axis_bounds(xlo, xhi, width);
    let (y0, y1) = axis_bounds(ylo, yhi, height);

    let sx = axis_stride(xhi - xlo, viewport.pixels.width, x1 - x0);
    let sy = axis_stride(yhi - ylo, viewport.pixels.height, y1 - y0);

    let spec = SliceSpec {
        x0,
        x1,
        sx,
        y0,
        y1,
        sy,
    };
    trace!(?spec, ?full_shape, "planned viewport slice");
    spec
}

/// Pad an index-space interval by the slice margin, clip to `[0, len]`, and
/// snap to integers (floor the start, ceil the stop).
fn axis_bounds(lo: f64, hi: f64, len: usize) -> (usize, usize) {
    let len = len as f64;
    let start = (lo - SLICE_MARGIN).clamp(0.0, len).floor() as usize;
    let stop = (hi + SLICE_MARGIN).clamp(0.0, len).ceil() as usize;
    (start, stop)
}

/// Stride for one axis: ceiling of index units per device pixel, floored at
/// 1 and capped so at least [`MIN_AXIS_SAMPLES`] samples span the axis.
fn axis_stride(index_span: f64, pixels: u32, axis_span: usize) -> usize {
    if pixels == 0 || !index_span.is_finite() || index_span <= 0.0 {
        return 1;
    }
    let ratio = (index_span / f64::from(pixels)).ceil() as usize;
    let cap = axis_span / MIN_AXIS_SAMPLES;
    ratio.min(cap).max(1)
}

// =============================================================================
// Tests
// =============================================================================
