//! Coordinate mapping between data space and array-index space.
//!
//! An image is placed in the data coordinate system by its [`Extent`], the
//! rectangle `(x0, x1, y0, y1)` its pixels cover. The [`BboxTransform`] is
//! the affine map from that rectangle onto the full-resolution index
//! rectangle `[0, W] x [0, H]`, honoring the [`Origin`] convention:
//!
//! - `Origin::Lower`: the extent's bottom edge (`y0`) corresponds to row 0.
//! - `Origin::Upper`: the extent's top edge (`y1`) corresponds to row 0, so
//!   the index y axis is inverted relative to `Lower` and row 0 appears at
//!   the top of the display.
//!
//! The transform is pure: given the same shape, extent, and origin it always
//! produces the same mapping. The adapter memoizes it in an
//! `Option<BboxTransform>` and clears the memo whenever the extent or the
//! source array changes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Origin
// =============================================================================

/// Which array row corresponds to the top of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Row 0 at the top (image convention). The default.
    #[default]
    Upper,
    /// Row 0 at the bottom (plot convention).
    Lower,
}

// =============================================================================
// Extent
// =============================================================================

/// Data-space bounding rectangle where an image is placed for display.
///
/// Stored as `(x0, x1, y0, y1)` with `x0 <= x1` and `y0 <= y1` after
/// [`Extent::normalized`]; `y0` is the bottom edge, `y1` the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Extent {
    /// Create an extent from its four edges.
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// The default extent for a `(height, width)` array: pixel centers sit
    /// on integer coordinates, so the rectangle runs from `-0.5` to
    /// `len - 0.5` on each axis.
    pub fn for_shape(shape: (usize, usize)) -> Self {
        let (height, width) = shape;
        Self {
            x0: -0.5,
            x1: width as f64 - 0.5,
            y0: -0.5,
            y1: height as f64 - 0.5,
        }
    }

    /// Width of the extent in data units.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the extent in data units.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Return the extent with edges ordered so `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(&self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            x1: self.x0.max(self.x1),
            y0: self.y0.min(self.y1),
            y1: self.y0.max(self.y1),
        }
    }
}

// =============================================================================
// BboxTransform
// =============================================================================

/// Separable affine transform between data space and index space.
///
/// Maps `(x, y)` in data coordinates to `(col, row)` in fractional array
/// indices: `col = sx * x + tx`, `row = sy * y + ty`. There is no rotation or
/// shear; each axis is an independent scale-and-offset, which is all an
/// axis-aligned image placement needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BboxTransform {
    sx: f64,
    tx: f64,
    sy: f64,
    ty: f64,
}

impl BboxTransform {
    /// Build the transform for a full-resolution array of `shape`
    /// (`(height, width)`) placed at `extent` with the given `origin`.
    ///
    /// A degenerate extent (zero width or height) falls back to unit scale
    /// on that axis so the transform stays invertible; downstream clipping
    /// handles the empty view.
    pub fn compute(shape: (usize, usize), extent: &Extent, origin: Origin) -> Self {
        let (height, width) = shape;
        let extent = extent.normalized();

        let (sx, tx) = axis_map(extent.x0, extent.x1, 0.0, width as f64);
        let (sy, ty) = match origin {
            Origin::Lower => axis_map(extent.y0, extent.y1, 0.0, height as f64),
            Origin::Upper => axis_map(extent.y0, extent.y1, height as f64, 0.0),
        };

        Self { sx, tx, sy, ty }
    }

    /// Map a data-space point to fractional `(col, row)` indices.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.sx * x + self.tx, self.sy * y + self.ty)
    }

    /// The inverse transform, mapping `(col, row)` indices back to data space.
    pub fn invert(&self) -> Self {
        // Scales are never zero: compute() guards degenerate extents.
        Self {
            sx: 1.0 / self.sx,
            tx: -self.tx / self.sx,
            sy: 1.0 / self.sy,
            ty: -self.ty / self.sy,
        }
    }

    /// Map an index-space rectangle back to a normalized data-space extent.
    ///
    /// Used after slicing to report where the realized sub-array sits in
    /// data coordinates.
    pub fn index_bounds_to_extent(&self, x0: f64, x1: f64, y0: f64, y1: f64) -> Extent {
        let inv = self.invert();
        let (ax, ay) = (inv.sx * x0 + inv.tx, inv.sy * y0 + inv.ty);
        let (bx, by) = (inv.sx * x1 + inv.tx, inv.sy * y1 + inv.ty);
        Extent::new(ax, bx, ay, by).normalized()
    }
}

/// Scale-and-offset mapping `src0 -> dst0` and `src1 -> dst1`.
///
/// A zero-width source interval maps with unit scale anchored at `dst0`.
fn axis_map(src0: f64, src1: f64, dst0: f64, dst1: f64) -> (f64, f64) {
    let span = src1 - src0;
    if span == 0.0 {
        (1.0, dst0 - src0)
    } else {
        let scale = (dst1 - dst0) / span;
        (scale, dst0 - scale * src0)
    }
}

// =============================================================================
// Tests
// =============================================================================
