use super::*;

#[test]
fn null_config_yields_defaults() {
    let state = TrackState::new("t1", "VsyncTrack");
    let cfg = VsyncConfig::from_track_state(&state).unwrap();
    assert_eq!(cfg, VsyncConfig::default());
    assert_eq!(cfg.fetch.debounce(), Duration::from_millis(50));
    assert_eq!(cfg.style.margin_top, 5.0);
    assert_eq!(cfg.style.rect_height, 30.0);
    assert_eq!(String::from(cfg.style.background), "#5E909B");
    assert_eq!(String::from(cfg.style.foreground), "#323D48");
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let mut state = TrackState::new("t1", "VsyncTrack");
    state.config = serde_json::json!({
        "style": { "rect_height": 12.0, "foreground": "#FF0000" },
        "fetch": { "debounce_ms": 5 }
    });
    let cfg = VsyncConfig::from_track_state(&state).unwrap();
    assert_eq!(cfg.style.rect_height, 12.0);
    assert_eq!(cfg.style.foreground, Rgba8::opaque(255, 0, 0));
    assert_eq!(cfg.style.margin_top, 5.0);
    assert_eq!(cfg.fetch.debounce(), Duration::from_millis(5));
}

#[test]
fn invalid_config_is_a_config_error() {
    let mut state = TrackState::new("t1", "VsyncTrack");
    state.config = serde_json::json!({ "style": { "background": "teal" } });
    let err = VsyncConfig::from_track_state(&state).unwrap_err();
    assert!(err.to_string().contains("config error:"));
    assert!(err.to_string().contains("t1"));

    state.config = serde_json::json!({ "style": { "rect_height": -1.0 } });
    let err = VsyncConfig::from_track_state(&state).unwrap_err();
    assert!(err.to_string().contains("rect_height"));
}

#[test]
fn track_state_parses_from_json() {
    let json = r#"{"id": "vsync-app", "kind": "VsyncTrack", "name": "VSYNC-app"}"#;
    let state = TrackState::from_reader(json.as_bytes()).unwrap();
    assert_eq!(state.id, TrackId::from("vsync-app"));
    assert_eq!(state.name, "VSYNC-app");
    assert!(state.config.is_null());

    assert!(TrackState::from_reader(r#"{"kind": "VsyncTrack"}"#.as_bytes()).is_err());
}
