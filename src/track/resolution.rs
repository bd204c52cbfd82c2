use crate::timeline::scale::TimeScale;

/// Largest power of ten `<= duration_per_px`.
///
/// Snapshots are cached per quantized resolution, so small zoom changes reuse data while an
/// order-of-magnitude change invalidates it.
///
/// Precondition: `duration_per_px` is finite and `> 0`. Other inputs yield an unspecified value.
pub fn quantize_resolution(duration_per_px: f64) -> f64 {
    let mut p = 10f64.powi(duration_per_px.log10().floor() as i32);
    // log10 can land a hair across a power of ten.
    if p > duration_per_px {
        p /= 10.0;
    } else if p * 10.0 <= duration_per_px {
        p *= 10.0;
    }
    p
}

/// Quantized duration covered by one pixel under `scale`.
pub fn current_resolution(scale: &dyn TimeScale) -> f64 {
    quantize_resolution(scale.delta_px_to_duration(1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/track/resolution.rs"]
mod tests;
