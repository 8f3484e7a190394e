//! Display options for a raster image.
//!
//! [`ImageOptions`] enumerates the standard image-artist options the host
//! framework understands (colormap, normalization, interpolation, origin,
//! extent, alpha, ...) plus an explicit `extra` pass-through map for
//! host-specific options this crate does not interpret. The adapter never
//! acts on most of these; it forwards them to the [`crate::host::HostRenderer`]
//! with every frame.
//!
//! Options follow the builder pattern:
//!
//! ```
//! use modest_raster::config::{ImageOptions, Interpolation};
//!
//! let options = ImageOptions::default()
//!     .with_cmap("viridis")
//!     .with_interpolation(Interpolation::Nearest)
//!     .with_alpha(0.8);
//! assert!(options.validate().is_ok());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transform::{Extent, Origin};

/// Default filter radius for filters that have a radius parameter.
pub const DEFAULT_FILTER_RADIUS: f64 = 4.0;

// =============================================================================
// Normalization
// =============================================================================

/// Value normalization bounds for mapping sample values to colors.
///
/// Either bound may be `None`, in which case the host (or
/// [`crate::host::imshow`], which autoscales to the finite data range)
/// supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormBounds {
    /// Value mapped to the bottom of the colormap.
    pub vmin: Option<f64>,

    /// Value mapped to the top of the colormap.
    pub vmax: Option<f64>,
}

impl NormBounds {
    /// Create bounds with both ends fixed.
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self {
            vmin: Some(vmin),
            vmax: Some(vmax),
        }
    }

    /// Whether both bounds are set.
    pub fn is_complete(&self) -> bool {
        self.vmin.is_some() && self.vmax.is_some()
    }
}

// =============================================================================
// Interpolation
// =============================================================================

/// Interpolation hint forwarded to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Nearest-neighbor sampling. The default: the strided slice already
    /// approximates the screen resolution, so smoothing buys little.
    #[default]
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// No interpolation at all (host draws raw pixels).
    None,
}

// =============================================================================
// ImageOptions
// =============================================================================

/// The recognized display-option surface of a raster image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Colormap name (interpreted by the host).
    pub cmap: Option<String>,

    /// Normalization bounds.
    pub norm: NormBounds,

    /// Interpolation hint.
    pub interpolation: Interpolation,

    /// Which array row is displayed at the top.
    pub origin: Origin,

    /// Logical placement of the image in data space.
    ///
    /// `None` means the pixel-centered default for the array shape
    /// (see [`Extent::for_shape`]).
    pub extent: Option<Extent>,

    /// Overall opacity in `[0, 1]`. `None` means fully opaque.
    pub alpha: Option<f64>,

    /// Whether the host should normalize filter weights.
    pub filternorm: bool,

    /// Filter radius for radius-based interpolation filters.
    pub filterrad: f64,

    /// Whether the host should resample when scaling.
    pub resample: bool,

    /// Hyperlink attached to the image.
    pub url: Option<String>,

    /// Clipping rectangle in data space. [`crate::host::imshow`] defaults
    /// this to the axes view box when unset.
    pub clip: Option<Extent>,

    /// Unrecognized options forwarded to the host unchanged.
    pub extra: BTreeMap<String, String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            cmap: None,
            norm: NormBounds::default(),
            interpolation: Interpolation::default(),
            origin: Origin::default(),
            extent: None,
            alpha: None,
            filternorm: true,
            filterrad: DEFAULT_FILTER_RADIUS,
            resample: false,
            url: None,
            clip: None,
            extra: BTreeMap::new(),
        }
    }
}

impl ImageOptions {
    /// Set the colormap name.
    pub fn with_cmap(mut self, cmap: impl Into<String>) -> Self {
        self.cmap = Some(cmap.into());
        self
    }

    /// Set both normalization bounds.
    pub fn with_clim(mut self, vmin: f64, vmax: f64) -> Self {
        self.norm = NormBounds::new(vmin, vmax);
        self
    }

    /// Set the interpolation hint.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Set the origin convention.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Set an explicit extent.
    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Set the opacity.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Attach a URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Forward an unrecognized option to the host unchanged.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Validate option values, returning a message describing the first
    /// problem found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(alpha) = self.alpha {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(format!("alpha must be within [0, 1], got {alpha}"));
            }
        }
        if self.filterrad <= 0.0 {
            return Err(format!("filterrad must be positive, got {}", self.filterrad));
        }
        if let (Some(vmin), Some(vmax)) = (self.norm.vmin, self.norm.vmax) {
            if vmin > vmax {
                return Err(format!("vmin ({vmin}) must not exceed vmax ({vmax})"));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
