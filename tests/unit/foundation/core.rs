use super::*;

#[test]
fn viewport_rejects_zero_dimensions() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    assert!(Viewport::new(1, 1).is_ok());
}

#[test]
fn fit_extent_insets_by_padding() {
    let vp = Viewport::new(800, 600).unwrap();
    assert_eq!(vp.fit_extent(20.0), Rect::new(20.0, 20.0, 780.0, 580.0));
}

#[test]
fn fit_extent_clamps_oversized_padding() {
    let vp = Viewport::new(100, 40).unwrap();
    let r = vp.fit_extent(500.0);
    assert_eq!(r, Rect::new(20.0, 20.0, 80.0, 20.0));
    assert!(r.width() >= 0.0 && r.height() >= 0.0);

    let r = vp.fit_extent(-3.0);
    assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 40.0));
}

#[test]
fn with_opacity_scales_alpha() {
    assert_eq!(Rgba8::opaque(1, 2, 3).with_opacity(0.5).a, 128);
    assert_eq!(Rgba8::opaque(1, 2, 3).with_opacity(2.0).a, 255);
    assert_eq!(Rgba8::opaque(1, 2, 3).with_opacity(f32::NAN).a, 255);
}

#[test]
fn finite_point_check() {
    assert!(is_finite_point(Point::new(1.0, 2.0)));
    assert!(!is_finite_point(Point::new(f64::NAN, 2.0)));
    assert!(!is_finite_point(Point::new(1.0, f64::INFINITY)));
}
