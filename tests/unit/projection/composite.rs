use super::*;

#[test]
fn lower48_center_maps_near_origin() {
    let usa = CompositeUsa::default();
    // Rotation by 96 degrees puts the inset center at (-96.6, 38.7).
    let (x, y) = usa.project(LonLat::new(-96.6, 38.7)).unwrap();
    assert!(x.abs() < 1e-9 && y.abs() < 1e-9, "({x}, {y})");
}

#[test]
fn alaska_and_hawaii_are_relocated_southwest_of_lower48() {
    let usa = CompositeUsa::default();
    let (ax, ay) = usa.project(LonLat::new(-150.0, 61.2)).unwrap();
    let (hx, hy) = usa.project(LonLat::new(-157.8, 21.3)).unwrap();
    let (sx, _) = usa.project(LonLat::new(-122.4, 37.8)).unwrap();

    // Both insets sit left of the lower-48 centre and below it (y grows downward).
    assert!(ax < 0.0 && ay > 0.0);
    assert!(hx < 0.0 && hy > 0.0);
    // Relocated: Alaska is no further west than a modest offset from California.
    assert!(ax > sx - 0.4);
}

#[test]
fn aleutians_across_the_dateline_use_alaska_inset() {
    let usa = CompositeUsa::default();
    assert!(usa.project(LonLat::new(173.0, 52.8)).is_some());
}

#[test]
fn positions_outside_every_inset_have_no_image() {
    let usa = CompositeUsa::default();
    assert!(usa.project(LonLat::new(-66.1, 18.4)).is_none()); // Puerto Rico
    assert!(usa.project(LonLat::new(144.8, 13.4)).is_none()); // Guam
    assert!(usa.project(LonLat::new(2.35, 48.85)).is_none());
}
