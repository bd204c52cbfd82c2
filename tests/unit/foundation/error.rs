use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TrackError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TrackError::config("x").to_string().contains("config error:"));
    assert!(
        TrackError::transport("x")
            .to_string()
            .contains("transport error:")
    );
    assert!(
        TrackError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TrackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
