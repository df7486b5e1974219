use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease.apply(f64::from(i) / 20.0);
            assert!(v >= prev, "{ease:?} went backwards at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_of_range_and_nan_are_clamped() {
    assert_eq!(Ease::InCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutQuad.apply(7.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn parses_names() {
    assert_eq!("in-out-cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert_eq!(" Linear ".parse::<Ease>().unwrap(), Ease::Linear);
    assert!("bounce".parse::<Ease>().is_err());
    let e: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(e, Ease::OutCubic);
}
