//! Error types for modest-raster.
//!
//! Each layer has its own error enum:
//! - [`DataError`] for violations of the source-array contract (rank, channels)
//! - [`RenderError`] for failures during a render cycle
//!
//! All errors are synchronous and surface at the call site. A failed render
//! never corrupts cached state: the adapter commits its state only after the
//! host renderer has accepted the frame, so the next attempt retries from a
//! consistent baseline.

use thiserror::Error;

/// Errors raised when a source array fails the data-model contract.
///
/// The full-resolution array must be 2-D (`H x W`) or 3-D (`H x W x C` with
/// `C` in `{3, 4}`). Validation happens before the array is committed, so a
/// rejected `set_data` leaves the previously installed array untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Array rank is not 2 or 3.
    #[error("invalid array rank: expected 2 (HxW) or 3 (HxWxC), got {rank}")]
    InvalidRank { rank: usize },

    /// Rank-3 array whose last dimension is not 3 (RGB) or 4 (RGBA).
    #[error("invalid channel count: expected 3 (RGB) or 4 (RGBA), got {channels}")]
    InvalidChannels { channels: usize },

    /// Array has a zero-length axis.
    #[error("empty array: axis {axis} has length 0")]
    EmptyAxis { axis: usize },
}

/// Errors raised during a render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// `render` was called before any array was installed with `set_data`.
    #[error("no data: render called before set_data")]
    NoData,

    /// The source array contract was violated.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// The host renderer rejected the frame.
    #[error("host renderer error: {message}")]
    Host { message: String },
}

/// Errors raised at the host boundary (`imshow`, axes attachment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The source array contract was violated.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// A display option value is out of range.
    #[error("invalid display options: {message}")]
    InvalidOptions { message: String },

    /// A render cycle failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
