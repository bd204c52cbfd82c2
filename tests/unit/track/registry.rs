use super::*;
use crate::track::vsync::KIND;

fn failing_factory(state: &TrackState) -> TrackResult<Box<dyn Track>> {
    Err(TrackError::config(format!("refusing '{}'", state.id)))
}

#[test]
fn builtin_registry_knows_vsync() {
    let registry = TrackRegistry::with_builtin().unwrap();
    assert!(registry.has(KIND));
    assert_eq!(registry.kinds().collect::<Vec<_>>(), vec![KIND]);

    let track = registry.create(&TrackState::new("v1", KIND)).unwrap();
    assert_eq!(track.kind(), KIND);
    assert_eq!(track.id(), &TrackId::from("v1"));
    assert!(!track.in_flight());
}

#[test]
fn duplicate_kind_is_rejected() {
    let mut registry = TrackRegistry::with_builtin().unwrap();
    let err = VsyncTrack::register(&mut registry).unwrap_err();
    assert!(err.to_string().contains("already registered"));
}

#[test]
fn unknown_kind_is_rejected() {
    let registry = TrackRegistry::with_builtin().unwrap();
    let err = match registry.create(&TrackState::new("c1", "CounterTrack")) {
        Ok(_) => panic!("unknown kind must not build"),
        Err(e) => e,
    };
    assert!(err.to_string().contains("CounterTrack"));
}

#[test]
fn factory_errors_propagate() {
    let mut registry = TrackRegistry::new();
    registry.register("Broken", failing_factory).unwrap();
    assert!(registry.create(&TrackState::new("b1", "Broken")).is_err());
}

#[test]
fn bad_vsync_config_fails_creation() {
    let registry = TrackRegistry::with_builtin().unwrap();
    let mut state = TrackState::new("v1", KIND);
    state.config = serde_json::json!({ "fetch": { "debounce_ms": "soon" } });
    assert!(registry.create(&state).is_err());
}
