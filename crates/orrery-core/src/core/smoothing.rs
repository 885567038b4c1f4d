// core/smoothing.rs
//
// Lerp-toward-target helpers shared by the camera, frame and orbit hints.
// Each call moves a value a fixed fraction of the remaining gap, so
// convergence is geometric in ticks, not timed.

use glam::Vec3;
use crate::api::types::Rgb;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One smoothing step: `value += (target - value) * k`.
#[inline]
pub fn approach(value: &mut f32, target: f32, k: f32) {
    *value = lerp(*value, target, k);
}

#[inline]
pub fn approach_f64(value: &mut f64, target: f64, k: f64) {
    *value += (target - *value) * k;
}

#[inline]
pub fn approach_vec3(value: &mut Vec3, target: Vec3, k: f32) {
    *value += (target - *value) * k;
}

#[inline]
pub fn approach_rgb(value: &mut Rgb, target: Rgb, k: f32) {
    approach(&mut value.r, target.r, k);
    approach(&mut value.g, target.g, k);
    approach(&mut value.b, target.b, k);
}

/// Wrap an angle into (-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
