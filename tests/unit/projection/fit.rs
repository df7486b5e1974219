use super::*;

fn extent() -> Rect {
    Rect::new(20.0, 20.0, 780.0, 580.0)
}

#[test]
fn fitted_feature_fills_extent_on_one_axis() {
    let pts = [
        LonLat::new(-10.0, 35.0),
        LonLat::new(30.0, 35.0),
        LonLat::new(30.0, 60.0),
        LonLat::new(-10.0, 60.0),
    ];
    let fitted = FittedProjection::fit(ProjectionKind::EqualEarth, pts, extent());

    let mut b: Option<Rect> = None;
    for p in pts {
        let q = fitted.project(p).unwrap();
        b = Some(b.map_or(Rect::from_points(q, q), |b| b.union_pt(q)));
    }
    let b = b.unwrap();
    let e = extent();
    assert!(b.x0 >= e.x0 - 1e-6 && b.x1 <= e.x1 + 1e-6);
    assert!(b.y0 >= e.y0 - 1e-6 && b.y1 <= e.y1 + 1e-6);
    let fills_w = (b.width() - e.width()).abs() < 1e-6;
    let fills_h = (b.height() - e.height()).abs() < 1e-6;
    assert!(fills_w || fills_h);
    // Centered.
    assert!((b.center().x - e.center().x).abs() < 1e-6);
    assert!((b.center().y - e.center().y).abs() < 1e-6);
}

#[test]
fn north_is_up_on_screen() {
    let pts = [LonLat::new(0.0, 0.0), LonLat::new(10.0, 40.0)];
    let fitted = FittedProjection::fit(ProjectionKind::EqualEarth, pts, extent());
    let south = fitted.project(pts[0]).unwrap();
    let north = fitted.project(pts[1]).unwrap();
    assert!(north.y < south.y);
}

#[test]
fn projection_is_pure() {
    let pts = [LonLat::new(5.0, 5.0), LonLat::new(6.0, 7.0)];
    let fitted = FittedProjection::fit(ProjectionKind::EqualEarth, pts, extent());
    let a = fitted.project(LonLat::new(5.5, 6.0));
    let b = fitted.project(LonLat::new(5.5, 6.0));
    assert_eq!(a, b);
}

#[test]
fn single_point_stays_finite_and_centered() {
    let p = LonLat::new(12.0, 41.0);
    let fitted = FittedProjection::fit(ProjectionKind::EqualEarth, [p], extent());
    assert_eq!(fitted.scale(), 1.0);
    let q = fitted.project(p).unwrap();
    assert!((q.x - 400.0).abs() < 1e-9 && (q.y - 300.0).abs() < 1e-9);
}

#[test]
fn empty_input_does_not_panic() {
    let fitted = FittedProjection::fit(ProjectionKind::EqualEarth, Vec::new(), extent());
    assert_eq!(fitted.scale(), 1.0);
    assert_eq!(fitted.translate(), Vec2::new(400.0, 300.0));
    assert!(fitted.project(LonLat::new(0.0, 0.0)).is_some());
}

#[test]
fn zero_area_extent_does_not_produce_nan() {
    let pts = [LonLat::new(0.0, 0.0), LonLat::new(1.0, 1.0)];
    let fitted = FittedProjection::fit(
        ProjectionKind::EqualEarth,
        pts,
        Rect::new(5.0, 5.0, 5.0, 5.0),
    );
    assert!(fitted.scale().is_finite());
    assert!(fitted.project(pts[1]).is_some());
}

#[test]
fn composite_fit_ignores_unprojectable_positions() {
    let pts = [
        LonLat::new(-120.0, 30.0),
        LonLat::new(-70.0, 45.0),
        LonLat::new(144.8, 13.4),
    ];
    let fitted = FittedProjection::fit(ProjectionKind::CompositeUsa, pts, extent());
    assert!(fitted.project(pts[2]).is_none());
    let a = fitted.project(pts[0]).unwrap();
    let b = fitted.project(pts[1]).unwrap();
    assert!((a.x.min(b.x) - 20.0).abs() < 1e-6);
    assert!((a.x.max(b.x) - 780.0).abs() < 1e-6);
}
