//! Shared helpers for integration tests.

use ndarray::{Array2, ArrayD};

use modest_raster::{
    Axes, DisplayedArray, Extent, HostRenderer, ImageOptions, PixelExtent, RenderError,
    ViewWindow, ViewportState,
};

/// The sin/cos interference pattern used throughout the tests.
pub fn wave(rows: usize, cols: usize) -> ArrayD<f64> {
    Array2::from_shape_fn((rows, cols), |(y, x)| {
        (x as f64 / 10.0).sin() * (y as f64 / 30.0).cos()
    })
    .into_dyn()
}

/// Axes with a square viewport and an attached wave image of `size`.
pub fn wave_axes(size: usize, viewport: u32) -> Axes {
    let mut axes = Axes::new(viewport, viewport);
    modest_raster::imshow(&mut axes, wave(size, size), ImageOptions::default())
        .expect("wave image is valid");
    axes
}

/// A viewport over square windows, for driving adapters directly.
pub fn square_viewport(lo: f64, hi: f64, pixels: u32) -> ViewportState {
    ViewportState::new(
        ViewWindow::new((lo, hi), (lo, hi)),
        PixelExtent::new(pixels, pixels),
    )
}

/// Renderer that fails every draw, for atomicity tests.
pub struct FailingRenderer;

impl HostRenderer for FailingRenderer {
    fn draw_image(
        &mut self,
        _image: &DisplayedArray,
        _extent: &Extent,
        _options: &ImageOptions,
    ) -> Result<(), RenderError> {
        Err(RenderError::Host {
            message: "renderer unavailable".to_string(),
        })
    }
}
