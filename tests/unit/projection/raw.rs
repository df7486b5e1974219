use super::*;

#[test]
fn equal_earth_origin_maps_to_origin() {
    let (x, y) = equal_earth(0.0, 0.0);
    assert_eq!((x, y), (0.0, 0.0));
}

#[test]
fn equal_earth_is_symmetric() {
    let (x1, y1) = equal_earth(0.5, 0.3);
    let (x2, y2) = equal_earth(-0.5, -0.3);
    assert!((x1 + x2).abs() < 1e-12);
    assert!((y1 + y2).abs() < 1e-12);
    assert!(x1 > 0.0 && y1 > 0.0);
}

#[test]
fn equal_earth_poles_are_finite() {
    let (x, y) = equal_earth(std::f64::consts::PI, std::f64::consts::FRAC_PI_2);
    assert!(x.is_finite() && y.is_finite());
    assert!(y > 1.0);
}

#[test]
fn conic_north_is_up() {
    let p = ConicEqualArea::new(29.5, 45.5);
    let (_, y_south) = p.project(0.0, 30f64.to_radians());
    let (_, y_north) = p.project(0.0, 45f64.to_radians());
    assert!(y_north > y_south);
}

#[test]
fn conic_east_is_right() {
    let p = ConicEqualArea::new(29.5, 45.5);
    let (x_west, _) = p.project(-0.2, 0.7);
    let (x_east, _) = p.project(0.2, 0.7);
    assert!(x_east > x_west);
    assert!((x_east + x_west).abs() < 1e-12);
}
