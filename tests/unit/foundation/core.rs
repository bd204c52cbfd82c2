use super::*;

#[test]
fn time_span_rejects_inverted_and_non_finite() {
    assert!(TimeSpan::new(2.0, 1.0).is_err());
    assert!(TimeSpan::new(f64::NAN, 1.0).is_err());
    assert!(TimeSpan::new(0.0, f64::INFINITY).is_err());
    assert!(TimeSpan::new(1.0, 1.0).unwrap().is_empty());
}

#[test]
fn contains_span_is_inclusive() {
    let outer = TimeSpan::new(10.0, 20.0).unwrap();
    assert!(outer.contains_span(TimeSpan::new(10.0, 20.0).unwrap()));
    assert!(outer.contains_span(TimeSpan::new(12.0, 18.0).unwrap()));
    assert!(!outer.contains_span(TimeSpan::new(9.5, 18.0).unwrap()));
    assert!(!outer.contains_span(TimeSpan::new(12.0, 20.5).unwrap()));
}

#[test]
fn padded_grows_both_sides() {
    let s = TimeSpan::new(10.0, 20.0).unwrap().padded(10.0);
    assert_eq!(s.start, 0.0);
    assert_eq!(s.end, 30.0);
    assert_eq!(s.duration(), 30.0);
}

#[test]
fn hex_colors_parse_and_format() {
    let c = Rgba8::from_hex("#5E909B").unwrap();
    assert_eq!(c, Rgba8::opaque(0x5E, 0x90, 0x9B));
    assert_eq!(String::from(c), "#5E909B");

    let c = Rgba8::from_hex("323d4880").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(String::from(c), "#323D4880");

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#GG0000").is_err());
}

#[test]
fn color_serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_str("\"#FF0000\"").unwrap();
    assert_eq!(c, Rgba8::opaque(255, 0, 0));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FF0000\"");
    assert!(serde_json::from_str::<Rgba8>("\"red\"").is_err());
}

#[test]
fn premultiplied_scales_channels_by_alpha() {
    assert_eq!(Rgba8::opaque(10, 20, 30).premultiplied(), [10, 20, 30, 255]);
    assert_eq!(
        Rgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 0
        }
        .premultiplied(),
        [0, 0, 0, 0]
    );
}
