//! Adapter contract integration tests.
//!
//! Tests verify:
//! - `full_array` keeps returning the complete source across render cycles
//! - Invalid arrays are rejected without touching installed state
//! - Non-finite values are masked identically on repeated renders
//! - A failed render leaves the previous frame's state intact

use ndarray::{Array1, Array3};

use modest_raster::{DataError, ImageOptions, RasterImage, RecordingRenderer, RenderError};

use super::test_utils::{square_viewport, wave, FailingRenderer};

#[test]
fn test_full_array_identity_after_pan_zoom_sequence() {
    let data = wave(800, 800);
    let mut image = RasterImage::with_data(data.clone(), ImageOptions::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    for (lo, hi, px) in [
        (0.0, 800.0, 400),
        (100.0, 300.0, 400),
        (600.0, 790.0, 120),
        (-50.0, 900.0, 64),
    ] {
        image
            .render(&square_viewport(lo, hi, px), &mut renderer)
            .unwrap();
    }

    assert_eq!(image.full_array().unwrap(), &data);
}

#[test]
fn test_rank1_array_rejected() {
    let mut image = RasterImage::new(ImageOptions::default());
    let err = image.set_data(Array1::<f64>::zeros(64).into_dyn()).unwrap_err();
    assert_eq!(err, DataError::InvalidRank { rank: 1 });
}

#[test]
fn test_two_channel_array_rejected() {
    let mut image = RasterImage::new(ImageOptions::default());
    let err = image
        .set_data(Array3::<f64>::zeros((8, 8, 2)).into_dyn())
        .unwrap_err();
    assert_eq!(err, DataError::InvalidChannels { channels: 2 });
}

#[test]
fn test_rgba_array_renders() {
    let data = Array3::<f64>::from_elem((64, 64, 4), 0.5).into_dyn();
    let mut image = RasterImage::with_data(data, ImageOptions::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    image
        .render(&square_viewport(0.0, 64.0, 32), &mut renderer)
        .unwrap();
    let frame = &renderer.draws[0].image;
    assert_eq!(frame.data().ndim(), 3);
    assert_eq!(frame.data().shape()[2], 4);
}

#[test]
fn test_nan_masking_is_stable_across_renders() {
    let mut data = wave(400, 400);
    data[[7, 7]] = f64::NAN;
    data[[100, 350]] = f64::INFINITY;

    let mut image = RasterImage::with_data(data, ImageOptions::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    let vp = square_viewport(0.0, 400.0, 400);

    image.render(&vp, &mut renderer).unwrap();
    // Second render of the same viewport is a cache hit; force a third
    // fresh extraction by clearing through set_extent.
    image.render(&vp, &mut renderer).unwrap();

    assert_eq!(renderer.draws[0].image, renderer.draws[1].image);
    assert!(renderer.draws[0].image.has_masked());
    assert!(renderer.draws[0]
        .image
        .data()
        .iter()
        .all(|v| v.is_finite()));
}

#[test]
fn test_render_without_data_is_no_data_error() {
    let mut image = RasterImage::new(ImageOptions::default());
    let err = image
        .render(&square_viewport(0.0, 1.0, 1), &mut RecordingRenderer::new())
        .unwrap_err();
    assert_eq!(err, RenderError::NoData);
}

#[test]
fn test_first_render_failure_commits_nothing() {
    let mut image = RasterImage::with_data(wave(100, 100), ImageOptions::default()).unwrap();

    let err = image
        .render(&square_viewport(0.0, 100.0, 50), &mut FailingRenderer)
        .unwrap_err();
    assert!(matches!(err, RenderError::Host { .. }));
    assert!(image.cache_state().is_none());
    assert!(image.displayed().is_none());

    // Recovery on the next frame with a working renderer.
    let mut renderer = RecordingRenderer::new();
    let stats = image
        .render(&square_viewport(0.0, 100.0, 50), &mut renderer)
        .unwrap();
    assert!(!stats.cache_hit);
    assert_eq!(renderer.draws.len(), 1);
}
