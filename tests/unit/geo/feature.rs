use super::*;

fn ll(lon: f64, lat: f64) -> LonLat {
    LonLat::new(lon, lat)
}

#[test]
fn parses_polygon_feature_with_altitude() {
    let json = r#"{
        "type": "Feature",
        "properties": { "NAME": "Testland", "ISO_A3": "tst" },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[0, 0, 12.5], [1, 0], [1, 1], [0, 0]]]
        }
    }"#;
    let doc = GeoDocument::from_json_str(json).unwrap();
    let feature = doc.select(None).unwrap();
    let parts = feature.polygon_parts();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0][0][0], ll(0.0, 0.0));
    assert_eq!(parts[0][0].len(), 4);

    let ident = feature.identity();
    assert!(ident.has_code("TST"));
    assert!(ident.has_name("  testLAND "));
}

#[test]
fn rejects_short_positions() {
    let json = r#"{"type":"Feature","properties":null,
        "geometry":{"type":"LineString","coordinates":[[1]]}}"#;
    assert!(matches!(
        GeoDocument::from_json_str(json),
        Err(BorderlineError::Serde(_))
    ));
}

#[test]
fn multipolygon_yields_one_part_per_polygon() {
    let sq = |x: f64| vec![vec![ll(x, 0.0), ll(x + 1.0, 0.0), ll(x + 1.0, 1.0), ll(x, 0.0)]];
    let f = Feature::multi_polygon(vec![sq(0.0), sq(5.0), sq(10.0)]);
    assert_eq!(f.polygon_parts().len(), 3);
    assert_eq!(f.positions().count(), 12);
}

#[test]
fn line_geometry_has_no_polygon_parts() {
    let f = Feature::new(Geometry::MultiLineString(vec![
        vec![ll(0.0, 0.0), ll(1.0, 1.0)],
        vec![ll(2.0, 2.0), ll(3.0, 3.0)],
    ]));
    assert!(f.polygon_parts().is_empty());
    assert_eq!(f.geometry.as_ref().unwrap().line_strings().len(), 2);
}

#[test]
fn identity_skips_placeholder_codes_and_dedupes() {
    let f = Feature::polygon(vec![])
        .with_property("ISO_A3", "-99")
        .with_property("ISO_A2", "fr")
        .with_property("id", "FR")
        .with_property("NAME", "France")
        .with_property("ADMIN", "france");
    let ident = f.identity();
    assert_eq!(ident.codes, vec!["FR".to_owned()]);
    assert_eq!(ident.names, vec!["france".to_owned()]);
}

#[test]
fn collection_find_matches_code_or_name() {
    let a = Feature::polygon(vec![]).with_property("NAME", "United States of America");
    let b = Feature::polygon(vec![]).with_property("ISO_A3", "RUS");
    let doc = GeoDocument::FeatureCollection {
        features: vec![a.clone(), b.clone()],
    };
    assert_eq!(doc.find("united  states of america"), Some(&a));
    assert_eq!(doc.find("rus"), Some(&b));
    assert!(doc.find("atlantis").is_none());
    assert!(doc.clone().select(Some("atlantis")).is_err());
}

#[test]
fn empty_collection_select_fails() {
    let doc = GeoDocument::FeatureCollection { features: vec![] };
    assert!(matches!(doc.select(None), Err(BorderlineError::Validation(_))));
}
