use super::*;
use crate::foundation::core::TimeSpan;
use crate::timeline::scale::LinearTimeScale;

#[test]
fn rounds_down_within_a_decade() {
    for d in [1000.0, 1000.5, 2500.0, 9999.0] {
        assert_eq!(quantize_resolution(d), 1000.0, "d={d}");
    }
    for d in [1.0, 1.5, 9.99] {
        assert_eq!(quantize_resolution(d), 1.0, "d={d}");
    }
}

#[test]
fn exact_powers_map_to_themselves() {
    for k in 0..12 {
        let p = 10f64.powi(k);
        assert_eq!(quantize_resolution(p), p, "k={k}");
    }
}

#[test]
fn sub_unit_durations_quantize_down() {
    assert_eq!(quantize_resolution(0.0025), 0.001);
    assert_eq!(quantize_resolution(0.5), 0.1);
    assert_eq!(quantize_resolution(0.099), 0.01);
}

#[test]
fn result_is_largest_power_not_above_input() {
    let mut d = 1.234e-9;
    while d < 1e9 {
        let q = quantize_resolution(d);
        assert!(q <= d, "q={q} d={d}");
        assert!(q * 10.0 > d, "q={q} d={d}");
        d *= 3.7;
    }
}

#[test]
fn current_resolution_uses_one_pixel_duration() {
    // 1 second over 400 px: 2.5ms per pixel.
    let scale = LinearTimeScale::new(TimeSpan::new(0.0, 1.0).unwrap(), 0.0, 400.0).unwrap();
    assert_eq!(current_resolution(&scale), 0.001);
}
