//! Full-resolution raster storage and the displayed sub-array.
//!
//! A [`Raster`] owns the complete, unsampled source image as an
//! `ndarray::ArrayD<f64>`. It is replaced wholesale by the adapter's
//! `set_data` and never mutated in place. The array must be 2-D (`H x W`,
//! grayscale) or 3-D (`H x W x C` with `C` in `{3, 4}`, RGB/RGBA).
//!
//! A [`DisplayedArray`] is the strided sub-sample currently handed to the
//! host renderer. Non-finite values (NaN, infinity) are masked out at
//! construction so the host never sees them; masking the same source twice
//! produces identical results.

use ndarray::{ArrayD, Slice};

use crate::error::DataError;
use crate::resample::SliceSpec;

// =============================================================================
// Raster
// =============================================================================

/// The full-resolution source image.
///
/// Values are stored as `f64`; 8-bit input is widened on construction via
/// [`Raster::from_u8`]. The wrapped array always satisfies the rank and
/// channel invariants, so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: ArrayD<f64>,
}

impl Raster {
    /// Wrap a floating-point array, validating the data-model contract.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidRank`] unless the rank is 2 or 3,
    /// [`DataError::InvalidChannels`] for a rank-3 array whose last dimension
    /// is not 3 or 4, and [`DataError::EmptyAxis`] if any spatial axis has
    /// length zero.
    pub fn new(data: ArrayD<f64>) -> Result<Self, DataError> {
        validate_shape(data.shape())?;
        Ok(Self { data })
    }

    /// Wrap an 8-bit array, widening values to `f64`.
    pub fn from_u8(data: ArrayD<u8>) -> Result<Self, DataError> {
        Self::new(data.mapv(f64::from))
    }

    /// Number of rows (image height).
    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of columns (image width).
    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    /// Number of color channels, or `None` for a grayscale (rank-2) array.
    pub fn channels(&self) -> Option<usize> {
        self.data.shape().get(2).copied()
    }

    /// Spatial shape as `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// The full-resolution array.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Extract the strided sub-array selected by `spec`.
    ///
    /// Rows and columns are sliced as `y0..y1` step `sy` and `x0..x1` step
    /// `sx`; the channel axis, if present, is taken whole. The result is an
    /// owned copy so the displayed array survives a later `set_data`.
    pub fn extract(&self, spec: &SliceSpec) -> ArrayD<f64> {
        self.data
            .slice_each_axis(|ax| match ax.axis.index() {
                0 => Slice::new(spec.y0 as isize, Some(spec.y1 as isize), spec.sy as isize),
                1 => Slice::new(spec.x0 as isize, Some(spec.x1 as isize), spec.sx as isize),
                _ => Slice::new(0, None, 1),
            })
            .to_owned()
    }
}

fn validate_shape(shape: &[usize]) -> Result<(), DataError> {
    match shape.len() {
        2 | 3 => {}
        rank => return Err(DataError::InvalidRank { rank }),
    }
    if let Some(&channels) = shape.get(2) {
        if channels != 3 && channels != 4 {
            return Err(DataError::InvalidChannels { channels });
        }
    }
    for (axis, &len) in shape.iter().take(2).enumerate() {
        if len == 0 {
            return Err(DataError::EmptyAxis { axis });
        }
    }
    Ok(())
}

// =============================================================================
// DisplayedArray
// =============================================================================

/// The sub-sampled array currently shown, with non-finite values masked.
///
/// `data` holds the strided copy with NaN/Inf replaced by `0.0`; `mask` is
/// `true` wherever the source value was non-finite. The host renderer is
/// expected to skip masked samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedArray {
    data: ArrayD<f64>,
    mask: ArrayD<bool>,
}

impl DisplayedArray {
    /// Build a displayed array from a raw strided extract.
    pub fn from_raw(raw: ArrayD<f64>) -> Self {
        let mask = raw.mapv(|v| !v.is_finite());
        let data = raw.mapv(|v| if v.is_finite() { v } else { 0.0 });
        Self { data, mask }
    }

    /// The masked sample values.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// The invalid-sample mask (`true` = masked).
    pub fn mask(&self) -> &ArrayD<bool> {
        &self.mask
    }

    /// Number of rows in the displayed array.
    pub fn rows(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of columns in the displayed array.
    pub fn cols(&self) -> usize {
        self.data.shape()[1]
    }

    /// Whether any sample was masked out.
    pub fn has_masked(&self) -> bool {
        self.mask.iter().any(|&m| m)
    }
}

// =============================================================================
// Tests
// =============================================================================
