use super::*;

fn ll(lon: f64, lat: f64) -> LonLat {
    LonLat::new(lon, lat)
}

#[test]
fn plain_bounds_are_componentwise() {
    let b = GeoBounds::from_points([ll(3.0, -1.0), ll(-2.0, 4.0), ll(1.0, f64::NAN)]).unwrap();
    assert_eq!(b.to_array(), [[-2.0, -1.0], [3.0, 4.0]]);
    assert!(GeoBounds::from_points(Vec::new()).is_none());
}

#[test]
fn aware_bounds_match_plain_for_ordinary_features() {
    let pts = [ll(-5.0, 42.0), ll(8.0, 51.0), ll(2.0, 47.0)];
    let a = GeoBounds::antimeridian_aware(pts).unwrap();
    assert_eq!(a, GeoBounds::from_points(pts).unwrap());
    assert!(!a.crosses_antimeridian());
    assert_eq!(a.center_lon(), 1.5);
}

#[test]
fn dateline_spanning_points_produce_wrapped_box() {
    let b =
        GeoBounds::antimeridian_aware([ll(170.0, -20.0), ll(175.0, -18.0), ll(-175.0, -16.0), ll(-170.0, -17.0)])
            .unwrap();
    assert!(b.crosses_antimeridian());
    assert_eq!(b.min.lon, 170.0);
    assert_eq!(b.max.lon, -170.0);
}

#[test]
fn wrapped_midpoint_lands_near_dateline_not_greenwich() {
    let b = GeoBounds::new(ll(170.0, 0.0), ll(-170.0, 10.0));
    let mid = b.center_lon();
    assert!((mid.abs() - 180.0).abs() < 1e-9, "midpoint was {mid}");
}

#[test]
fn russia_like_extent_centers_in_siberia() {
    let b = GeoBounds::antimeridian_aware([
        ll(19.6, 54.4),
        ll(60.0, 70.0),
        ll(179.9, 68.0),
        ll(-179.9, 66.0),
        ll(-169.0, 66.0),
    ])
    .unwrap();
    assert!(b.crosses_antimeridian());
    assert_eq!(b.min.lon, 19.6);
    assert_eq!(b.max.lon, -169.0);
    assert!((b.center_lon() - 105.3).abs() < 1e-9);
}

#[test]
fn intersection_rejects_only_strict_separation() {
    let selected = GeoBounds::new(ll(0.0, 0.0), ll(10.0, 10.0));
    let outside_lon = GeoBounds::new(ll(11.0, 2.0), ll(20.0, 5.0));
    let overlapping = GeoBounds::new(ll(5.0, 5.0), ll(15.0, 15.0));
    let touching = GeoBounds::new(ll(10.0, 10.0), ll(12.0, 12.0));
    let outside_lat = GeoBounds::new(ll(2.0, -9.0), ll(4.0, -0.5));

    assert!(!selected.intersects(&outside_lon));
    assert!(!outside_lon.intersects(&selected));
    assert!(selected.intersects(&overlapping));
    assert!(selected.intersects(&touching));
    assert!(!selected.intersects(&outside_lat));
}
