use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BorderlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BorderlineError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        BorderlineError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        BorderlineError::unsupported("x")
            .to_string()
            .contains("unsupported:")
    );
    assert!(
        BorderlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BorderlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: BorderlineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, BorderlineError::Serde(_)));
    assert!(!err.is_unsupported());
    assert!(BorderlineError::unsupported("gpu").is_unsupported());
}
