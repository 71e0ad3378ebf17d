use approx::assert_relative_eq;

use framepoint_core::bounds::{clamp_position, validate_position, PanBounds};
use framepoint_core::error::FramepointError;
use framepoint_core::metrics::ImageMetrics;
use framepoint_core::options::FramingOptions;
use framepoint_core::position::FramePosition;

#[test]
fn test_square_image_no_zoom_has_zero_range() {
    let b = PanBounds::compute(1.0, 1.0);
    assert_eq!(b.max_x, 0.0);
    assert_eq!(b.max_y, 0.0);
    assert_eq!(b.x_range(), (50.0, 50.0));
    assert_eq!(b.y_range(), (50.0, 50.0));
}

#[test]
fn test_landscape_bounds_at_no_zoom() {
    // 1600x900, ratio 16/9: horizontal overhang only.
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let b = PanBounds::for_metrics(&metrics, 1.0);
    assert_relative_eq!(b.max_x, (16.0 / 9.0 - 1.0) / 2.0 * 100.0, epsilon = 1e-9);
    assert_relative_eq!(b.max_x, 38.888_888_9, epsilon = 1e-6);
    assert_eq!(b.max_y, 0.0);
}

#[test]
fn test_landscape_drag_to_edge_clamps() {
    // Dragging right by 50% of the viewport attempts x = 0; the bounds stop
    // it at the left edge of the pannable range.
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let b = PanBounds::for_metrics(&metrics, 1.0);
    let clamped = b.clamp(FramePosition::new(0.0, 50.0, 1.0));
    assert_relative_eq!(clamped.x, 50.0 - 38.888_888_9, epsilon = 1e-6);
    assert_eq!(clamped.y, 50.0);
}

#[test]
fn test_portrait_bounds_at_double_zoom() {
    // 900x1600, ratio 0.5625, scale 2: vertical base overhang plus zoom
    // overhang on both axes.
    let metrics = ImageMetrics::new(900, 1600).unwrap();
    let b = PanBounds::for_metrics(&metrics, 2.0);
    assert_relative_eq!(b.max_x, 50.0, epsilon = 1e-9);
    let base_y = (1600.0 / 900.0 - 1.0) / 2.0 * 100.0;
    assert_relative_eq!(b.max_y, base_y + 50.0, epsilon = 1e-9);
    assert_relative_eq!(b.max_y, 88.888_888_9, epsilon = 1e-6);
}

#[test]
fn test_bounds_never_negative() {
    for &(w, h) in &[(1600u32, 900u32), (900, 1600), (512, 512), (3000, 1000), (100, 2500)] {
        let metrics = ImageMetrics::new(w, h).unwrap();
        let mut scale = 1.0;
        while scale <= 3.0 {
            let b = PanBounds::for_metrics(&metrics, scale);
            assert!(b.max_x >= 0.0, "{w}x{h} at {scale}: max_x = {}", b.max_x);
            assert!(b.max_y >= 0.0, "{w}x{h} at {scale}: max_y = {}", b.max_y);
            scale += 0.2;
        }
    }
}

#[test]
fn test_clamp_is_idempotent_on_valid_positions() {
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    for scale in [1.0, 1.4, 2.0, 3.0] {
        let b = PanBounds::for_metrics(&metrics, scale);
        for x in [50.0 - b.max_x, 50.0, 50.0 + b.max_x] {
            let p = FramePosition::new(x, 50.0, scale);
            let once = b.clamp(p);
            assert_eq!(once, p);
            assert_eq!(b.clamp(once), once);
            assert!(b.contains(&once));
        }
    }
}

#[test]
fn test_zoom_out_reclamps_without_recentering() {
    // Pan to the extreme at scale 3, then drop to scale 1: the position must
    // snap to the nearest edge of the smaller range, not back to center.
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let wide = PanBounds::for_metrics(&metrics, 3.0);
    let extreme = wide.clamp(FramePosition::new(200.0, 50.0, 3.0));
    assert_relative_eq!(extreme.x, 50.0 + wide.max_x, epsilon = 1e-9);

    let narrow = PanBounds::for_metrics(&metrics, 1.0);
    let reclamped = narrow.clamp(FramePosition {
        scale: 1.0,
        ..extreme
    });
    assert_relative_eq!(reclamped.x, 50.0 + narrow.max_x, epsilon = 1e-9);
    assert!(reclamped.x > 50.0);
}

#[test]
fn test_clamp_position_heals_scale_and_focal_point() {
    let metrics = ImageMetrics::new(800, 800).unwrap();
    let options = FramingOptions::default();

    // Scale beyond the maximum is clamped first; the focal point is then
    // judged against the healed scale's bounds. Square image at scale 3 has
    // max offset (3-1)*50 = 100, so x=120 survives.
    let healed = clamp_position(FramePosition::new(120.0, 50.0, 9.0), &metrics, &options);
    assert_eq!(healed.scale, 3.0);
    assert_relative_eq!(healed.x, 120.0, epsilon = 1e-9);

    // Corrupted record for a square image at scale 1 snaps to dead center.
    let healed = clamp_position(FramePosition::new(120.0, 50.0, 1.0), &metrics, &options);
    assert_eq!(healed, FramePosition::new(50.0, 50.0, 1.0));
}

#[test]
fn test_validate_position_reports_violations() {
    let metrics = ImageMetrics::new(800, 800).unwrap();
    let options = FramingOptions::default();

    assert!(validate_position(&FramePosition::default(), &metrics, &options).is_ok());

    let err = validate_position(&FramePosition::new(120.0, 50.0, 1.0), &metrics, &options)
        .unwrap_err();
    assert!(matches!(err, FramepointError::PositionOutOfBounds { .. }));

    let err = validate_position(&FramePosition::new(50.0, 50.0, 5.0), &metrics, &options)
        .unwrap_err();
    assert!(matches!(err, FramepointError::ScaleOutOfRange { .. }));
}
