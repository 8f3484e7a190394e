//! Viewport-driven resampling.
//!
//! This module carries the non-trivial engineering of the crate: deciding
//! which strided sub-array of the full-resolution source to extract for the
//! current viewport, and whether the previously extracted one still serves.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             RasterImage::render         │
//! └────────────────────┬────────────────────┘
//!                      │ viewport + transform
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │              planner::plan              │
//! │   view window ──► (x0,x1,sx,y0,y1,sy)   │
//! └────────────────────┬────────────────────┘
//!                      │ SliceSpec
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │             ResampleCache               │
//! │   contained + fine enough? reuse        │
//! │   otherwise: extract, store             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`plan`]: maps the view window into index space and produces a
//!   [`SliceSpec`] with padded, clipped bounds and per-axis strides
//! - [`SliceSpec`]: start/stop/stride per axis, stride always `>= 1`
//! - [`ResampleCache`]: containment + resolution reuse policy

mod cache;
mod planner;

pub use cache::ResampleCache;
pub use planner::{plan, SliceSpec, MIN_AXIS_SAMPLES, SLICE_MARGIN};
