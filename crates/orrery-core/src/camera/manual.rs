use std::f32::consts::PI;
use crate::api::config::OrreryConfig;
use crate::camera::controller::CameraPose;

/// Keeps the camera off the poles, where yaw becomes degenerate.
const POLE_MARGIN: f32 = 0.01;

/// Orbit/zoom navigation around the look-at target.
/// Only applied while no controller owns the camera.
#[derive(Debug, Clone)]
pub struct ManualNavigation {
    min_distance: f32,
    max_distance: f32,
}

impl ManualNavigation {
    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_distance: config.max_distance,
        }
    }

    /// Rotate the camera around its target by `yaw` (about +Y) and `pitch`
    /// (toward +Y). The distance is clamped to the configured limits.
    pub fn orbit(&self, pose: &mut CameraPose, yaw: f32, pitch: f32) {
        let offset = pose.position - pose.look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON || !yaw.is_finite() || !pitch.is_finite() {
            return;
        }
        let theta = offset.x.atan2(offset.z) + yaw;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() - pitch)
            .clamp(POLE_MARGIN, PI - POLE_MARGIN);
        let radius = radius.clamp(self.min_distance, self.max_distance);
        pose.position = pose.look_at + spherical(radius, phi, theta);
    }

    /// Scale the camera-to-target distance by `factor`, within limits.
    pub fn zoom(&self, pose: &mut CameraPose, factor: f32) {
        if !(factor > 0.0) || !factor.is_finite() {
            return;
        }
        let offset = pose.position - pose.look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let target = (radius * factor).clamp(self.min_distance, self.max_distance);
        pose.position = pose.look_at + offset * (target / radius);
    }
}

/// `phi` measured from +Y, `theta` around +Y starting at +Z.
fn spherical(radius: f32, phi: f32, theta: f32) -> glam::Vec3 {
    glam::Vec3::new(
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    )
}
