//! Host-boundary integration tests.
//!
//! Tests verify:
//! - `imshow` wires options, limits, and clipping the way a host's
//!   standard image call would
//! - Options pass through to the renderer unchanged
//! - Multiple images attached to one axes all render per draw

use modest_raster::{
    imshow, Aspect, Axes, Extent, HostError, ImageOptions, Interpolation, Origin,
    RecordingRenderer,
};

use super::test_utils::wave;

#[test]
fn test_imshow_returns_configurable_adapter() {
    let mut axes = Axes::new(300, 300);
    let image = imshow(&mut axes, wave(120, 120), ImageOptions::default()).unwrap();

    image.set_alpha(Some(0.25));
    image.set_url(Some("https://example.com/raster".to_string()));

    let image = &axes.images()[0];
    assert_eq!(image.options().alpha, Some(0.25));
    assert_eq!(
        image.options().url.as_deref(),
        Some("https://example.com/raster")
    );
}

#[test]
fn test_imshow_sets_equal_aspect() {
    let mut axes = Axes::new(100, 100);
    assert_eq!(axes.aspect(), Aspect::Auto);
    imshow(&mut axes, wave(10, 10), ImageOptions::default()).unwrap();
    assert_eq!(axes.aspect(), Aspect::Equal);
}

#[test]
fn test_explicit_extent_fits_limits() {
    let mut axes = Axes::new(100, 100);
    let options = ImageOptions::default()
        .with_origin(Origin::Lower)
        .with_extent(Extent::new(10.0, 20.0, -5.0, 5.0));
    imshow(&mut axes, wave(50, 50), options).unwrap();

    assert_eq!(axes.xlim(), (10.0, 20.0));
    assert_eq!(axes.ylim(), (-5.0, 5.0));
}

#[test]
fn test_alpha_passes_through_to_renderer() {
    let mut axes = Axes::new(100, 100);
    let options = ImageOptions::default()
        .with_alpha(0.5)
        .with_interpolation(Interpolation::Bilinear)
        .with_extra("zorder", "2");
    imshow(&mut axes, wave(60, 60), options).unwrap();

    let mut renderer = RecordingRenderer::new();
    axes.draw(&mut renderer).unwrap();
    assert_eq!(renderer.last().unwrap().alpha, Some(0.5));
}

#[test]
fn test_multiple_images_render_in_order() {
    let mut axes = Axes::new(200, 200);
    imshow(&mut axes, wave(80, 80), ImageOptions::default()).unwrap();
    imshow(&mut axes, wave(40, 40), ImageOptions::default().with_alpha(0.3)).unwrap();

    let mut renderer = RecordingRenderer::new();
    let stats = axes.draw(&mut renderer).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(renderer.draws.len(), 2);
    assert_eq!(renderer.draws[0].alpha, None);
    assert_eq!(renderer.draws[1].alpha, Some(0.3));
}

#[test]
fn test_invalid_options_rejected_before_attachment() {
    let mut axes = Axes::new(100, 100);
    let err = imshow(
        &mut axes,
        wave(10, 10),
        ImageOptions::default().with_alpha(-1.0),
    )
    .unwrap_err();
    assert!(matches!(err, HostError::InvalidOptions { .. }));
    assert!(axes.images().is_empty());
}

#[test]
fn test_invalid_data_rejected() {
    let mut axes = Axes::new(100, 100);
    let err = imshow(
        &mut axes,
        ndarray::Array1::<f64>::zeros(9).into_dyn(),
        ImageOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, HostError::Data(_)));
}
