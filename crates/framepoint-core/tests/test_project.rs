use approx::assert_relative_eq;

use framepoint_core::bounds::PanBounds;
use framepoint_core::metrics::ImageMetrics;
use framepoint_core::options::FramingOptions;
use framepoint_core::position::FramePosition;
use framepoint_core::project::{cover_size, project, project_clamped};

#[test]
fn test_projection_is_deterministic() {
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let position = FramePosition::new(62.5, 50.0, 1.8);
    let a = project(&position, &metrics);
    let b = project(&position, &metrics);
    assert_eq!(a, b);
}

#[test]
fn test_square_default_fills_viewport_exactly() {
    let metrics = ImageMetrics::new(800, 800).unwrap();
    let p = project(&FramePosition::default(), &metrics);
    assert_eq!(p.origin_x, 0.0);
    assert_eq!(p.origin_y, 0.0);
    assert_eq!(p.width, 1.0);
    assert_eq!(p.height, 1.0);
    assert_eq!(p.scale_factor, 1.0);

    let window = p.source_window();
    assert_eq!(window.min_x, 0.0);
    assert_eq!(window.min_y, 0.0);
    assert_eq!(window.max_x, 1.0);
    assert_eq!(window.max_y, 1.0);
}

#[test]
fn test_cover_size_overhangs_long_side_only() {
    let (w, h) = cover_size(16.0 / 9.0);
    assert_relative_eq!(w, 16.0 / 9.0, epsilon = 1e-12);
    assert_eq!(h, 1.0);

    let (w, h) = cover_size(0.5625);
    assert_eq!(w, 1.0);
    assert_relative_eq!(h, 1.0 / 0.5625, epsilon = 1e-12);

    assert_eq!(cover_size(1.0), (1.0, 1.0));
}

#[test]
fn test_landscape_centered_window_is_middle_band() {
    // A centered 1600x900 at scale 1 shows the middle 900x900 of the image:
    // normalized width 900/1600 = 0.5625, starting at (1 - 0.5625) / 2.
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let p = project(&FramePosition::default(), &metrics);
    let window = p.source_window();

    assert_relative_eq!(window.max_x - window.min_x, 0.5625, epsilon = 1e-9);
    assert_relative_eq!(window.min_x, (1.0 - 0.5625) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(window.min_y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(window.max_y, 1.0, epsilon = 1e-9);

    let (px, py, pw, ph) = window.to_pixels(&metrics);
    assert_relative_eq!(px, 350.0, epsilon = 1e-6);
    assert_relative_eq!(py, 0.0, epsilon = 1e-6);
    assert_relative_eq!(pw, 900.0, epsilon = 1e-6);
    assert_relative_eq!(ph, 900.0, epsilon = 1e-6);
}

#[test]
fn test_pan_to_left_edge_shows_left_edge() {
    let metrics = ImageMetrics::new(1600, 900).unwrap();
    let bounds = PanBounds::for_metrics(&metrics, 1.0);
    let position = FramePosition::new(50.0 - bounds.max_x, 50.0, 1.0);
    let window = project(&position, &metrics).source_window();
    assert_relative_eq!(window.min_x, 0.0, epsilon = 1e-9);
}

#[test]
fn test_in_bounds_positions_keep_viewport_covered() {
    // For every position the Bounds Calculator admits, the visible window
    // must stay inside the source image — no empty space in the viewport.
    for &(w, h) in &[(1600u32, 900u32), (900, 1600), (800, 800), (2500, 1000)] {
        let metrics = ImageMetrics::new(w, h).unwrap();
        for scale in [1.0, 1.2, 2.0, 3.0] {
            let bounds = PanBounds::for_metrics(&metrics, scale);
            let (x_min, x_max) = bounds.x_range();
            let (y_min, y_max) = bounds.y_range();
            for x in [x_min, (x_min + x_max) / 2.0, x_max] {
                for y in [y_min, (y_min + y_max) / 2.0, y_max] {
                    let window =
                        project(&FramePosition::new(x, y, scale), &metrics).source_window();
                    assert!(
                        window.min_x >= -1e-9 && window.max_x <= 1.0 + 1e-9,
                        "{w}x{h} scale {scale} at ({x:.1},{y:.1}): x window {:?}",
                        (window.min_x, window.max_x),
                    );
                    assert!(
                        window.min_y >= -1e-9 && window.max_y <= 1.0 + 1e-9,
                        "{w}x{h} scale {scale} at ({x:.1},{y:.1}): y window {:?}",
                        (window.min_y, window.max_y),
                    );
                    assert!(window.min_x < window.max_x && window.min_y < window.max_y);
                }
            }
        }
    }
}

#[test]
fn test_zoom_shrinks_visible_window_around_focal_point() {
    let metrics = ImageMetrics::new(800, 800).unwrap();
    let wide = project(&FramePosition::new(50.0, 50.0, 1.0), &metrics).source_window();
    let tight = project(&FramePosition::new(50.0, 50.0, 2.0), &metrics).source_window();

    let wide_span = wide.max_x - wide.min_x;
    let tight_span = tight.max_x - tight.min_x;
    assert_relative_eq!(tight_span, wide_span / 2.0, epsilon = 1e-9);

    // Centered zoom keeps the window centered.
    assert_relative_eq!(tight.min_x + tight.max_x, 1.0, epsilon = 1e-9);
}

#[test]
fn test_project_clamped_heals_untrusted_input() {
    let metrics = ImageMetrics::new(800, 800).unwrap();
    let options = FramingOptions::default();
    let corrupt = FramePosition::new(120.0, 50.0, 1.0);

    let healed = project_clamped(&corrupt, &metrics, &options);
    let reference = project(&FramePosition::new(50.0, 50.0, 1.0), &metrics);
    assert_eq!(healed, reference);
}
