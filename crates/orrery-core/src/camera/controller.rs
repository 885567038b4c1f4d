use glam::Vec3;
use crate::api::config::OrreryConfig;
use crate::core::smoothing::approach_vec3;
use crate::interaction::state::Phase;

/// Live camera pose read by the renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            position: Vec3::from_array(config.default_camera.position),
            look_at: Vec3::from_array(config.default_camera.look_at),
        }
    }

    /// Move both position and look-at a fraction `k` toward `target`.
    pub fn approach(&mut self, target: &CameraPose, k: f32) {
        approach_vec3(&mut self.position, target.position, k);
        approach_vec3(&mut self.look_at, target.look_at, k);
    }
}

/// What the controller did to the pose this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStep {
    /// Idle: the pose belongs to manual navigation and was not touched.
    Inert,
    /// Moving toward the focused body.
    Following,
    /// Moving back toward the overview pose.
    Returning,
    /// Close enough to the overview pose; the reset may end.
    Converged,
}

/// Drives the camera toward a focused body or back to the overview.
///
/// Both directions use the same `pose += (target - pose) * k` step on the
/// same pose, so switching between them never jumps.
#[derive(Debug, Clone)]
pub struct CameraController {
    lerp_factor: f32,
    focus_offset: f32,
    converge_threshold: f32,
    default_pose: CameraPose,
}

impl CameraController {
    /// Expects a validated config; a zero factor would never converge.
    pub fn new(config: &OrreryConfig) -> Self {
        assert!(
            config.lerp_factor > 0.0 && config.lerp_factor <= 1.0,
            "lerp_factor must be in (0, 1], got {}",
            config.lerp_factor
        );
        Self {
            lerp_factor: config.lerp_factor,
            focus_offset: config.focus_offset,
            converge_threshold: config.converge_threshold,
            default_pose: CameraPose::from_config(config),
        }
    }

    pub fn default_pose(&self) -> CameraPose {
        self.default_pose
    }

    /// Close-up pose for a body at `body_world`: offset along +Z, looking at it.
    pub fn focus_pose(&self, body_world: Vec3) -> CameraPose {
        CameraPose::new(body_world + Vec3::Z * self.focus_offset, body_world)
    }

    /// One tick. `focus_world` is the selected body's current world position.
    pub fn update(&self, pose: &mut CameraPose, phase: Phase, focus_world: Option<Vec3>) -> CameraStep {
        match (phase, focus_world) {
            (Phase::Selected(_), Some(world)) => {
                pose.approach(&self.focus_pose(world), self.lerp_factor);
                CameraStep::Following
            }
            (Phase::Resetting, _) => {
                pose.approach(&self.default_pose, self.lerp_factor);
                if pose.position.distance(self.default_pose.position) < self.converge_threshold {
                    log::debug!("camera converged on overview pose");
                    CameraStep::Converged
                } else {
                    CameraStep::Returning
                }
            }
            _ => CameraStep::Inert,
        }
    }
}
