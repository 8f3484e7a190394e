//! Viewport state handed to the adapter on each redraw.
//!
//! The host supplies the currently visible data-space window (one interval
//! per axis, post pan/zoom) and the physical pixel size of the render
//! target. Both may be degenerate — inverted limits, zero pixels — and the
//! slice planner recovers from either by clamping.

use serde::{Deserialize, Serialize};

/// The currently visible data-space rectangle.
///
/// Intervals are stored as given by the host; an inverted interval (e.g.
/// reversed x limits) is legal and handled by the planner via min/max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    /// Visible x interval `(lo, hi)` in data units.
    pub x: (f64, f64),

    /// Visible y interval `(lo, hi)` in data units.
    pub y: (f64, f64),
}

impl ViewWindow {
    /// Create a view window from per-axis intervals.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Absolute x span in data units.
    pub fn dx(&self) -> f64 {
        (self.x.1 - self.x.0).abs()
    }

    /// Absolute y span in data units.
    pub fn dy(&self) -> f64 {
        (self.y.1 - self.y.0).abs()
    }
}

/// Physical size of the render target in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelExtent {
    pub width: u32,
    pub height: u32,
}

impl PixelExtent {
    /// Create a pixel extent.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Everything the adapter needs to know about the viewport for one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Visible data-space window.
    pub window: ViewWindow,

    /// Render-target size in device pixels.
    pub pixels: PixelExtent,
}

impl ViewportState {
    /// Create a viewport state.
    pub fn new(window: ViewWindow, pixels: PixelExtent) -> Self {
        Self { window, pixels }
    }
}
