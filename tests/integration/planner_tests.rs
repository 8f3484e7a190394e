//! Slice-planning integration tests.
//!
//! Tests verify:
//! - The headline scenario: 2000x2000 image, 500x500 viewport, half-window
//!   view plans a stride-2 slice within bounds
//! - Bounds stay clipped to the array shape for any requested window
//! - Stride behaves monotonically across a zoom sequence

use modest_raster::{plan, BboxTransform, Extent, Origin, SliceSpec};

use super::test_utils::square_viewport;

fn transform(size: usize) -> BboxTransform {
    let shape = (size, size);
    BboxTransform::compute(shape, &Extent::for_shape(shape), Origin::Lower)
}

fn assert_within_shape(spec: &SliceSpec, size: usize) {
    assert!(spec.x0 <= spec.x1 && spec.x1 <= size);
    assert!(spec.y0 <= spec.y1 && spec.y1 <= size);
    assert!(spec.sx >= 1 && spec.sy >= 1);
}

#[test]
fn test_half_window_scenario() {
    // 1000 data units across 500 pixels: 2 units per pixel on each axis.
    let t = transform(2000);
    let spec = plan(&square_viewport(0.0, 1000.0, 500), &t, (2000, 2000));

    assert_eq!(spec.sx, 2);
    assert_eq!(spec.sy, 2);
    assert_within_shape(&spec, 2000);
    // Padding widens past the window but clipping keeps it in range.
    assert!(spec.x1 >= 1000 && spec.x1 <= 1011);
}

#[test]
fn test_oversized_windows_always_clip() {
    let t = transform(300);
    for (lo, hi) in [
        (-1e6, 1e6),
        (-10.0, 310.0),
        (250.0, 5000.0),
        (-5000.0, -4000.0),
    ] {
        let spec = plan(&square_viewport(lo, hi, 200), &t, (300, 300));
        assert_within_shape(&spec, 300);
    }
}

#[test]
fn test_zoom_sequence_stride_monotone() {
    let t = transform(8000);
    let mut spans: Vec<f64> = vec![8000.0, 4000.0, 2000.0, 500.0, 100.0, 20.0];
    let mut previous = usize::MAX;

    // Zooming in: stride never increases.
    for &span in &spans {
        let spec = plan(&square_viewport(0.0, span, 400), &t, (8000, 8000));
        assert!(spec.sx <= previous);
        previous = spec.sx;
    }
    assert_eq!(previous, 1);

    // Zooming back out: stride never decreases.
    spans.reverse();
    for &span in &spans {
        let spec = plan(&square_viewport(0.0, span, 400), &t, (8000, 8000));
        assert!(spec.sx >= previous);
        previous = spec.sx;
    }
}

#[test]
fn test_full_view_keeps_screen_resolution_sampling() {
    // Viewing all 8000 columns in 400 pixels needs a stride of 20; the
    // displayed width then matches the screen, not the source.
    let t = transform(8000);
    let spec = plan(&square_viewport(-0.5, 7999.5, 400), &t, (8000, 8000));
    assert_eq!(spec.sx, 20);
    assert!(spec.cols() >= 400 && spec.cols() <= 401);
}
