/// Counter-rotation of the group that holds every body.
///
/// While a body is selected the group is turned by `-angle` of that body,
/// which parks it at `(0, 0, distance)` in world space however far it has
/// travelled along its orbit.

use glam::Vec3;
use crate::api::config::{FrameResetMode, OrreryConfig};
use crate::core::smoothing::{approach_f64, wrap_angle};
use crate::interaction::state::Phase;

/// Remaining rotation, in radians, below which a smooth reset is done.
pub const SETTLE_EPSILON: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct FrameController {
    mode: FrameResetMode,
    lerp_factor: f64,
    /// Rotation about +Y applied to the parent group, radians.
    rotation: f64,
    was_selected: bool,
}

impl FrameController {
    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            mode: config.frame_reset,
            lerp_factor: config.lerp_factor as f64,
            rotation: 0.0,
            was_selected: false,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// One tick. `selected_angle` is the live orbital angle of the selected
    /// body, read after this tick's integration.
    pub fn update(&mut self, phase: Phase, selected_angle: Option<f64>) {
        match (phase, selected_angle) {
            (Phase::Selected(_), Some(angle)) => {
                self.rotation = -angle;
                self.was_selected = true;
            }
            (Phase::Resetting, _) => {
                if self.was_selected {
                    self.was_selected = false;
                    match self.mode {
                        FrameResetMode::Hold => {}
                        FrameResetMode::Snap => self.rotation = 0.0,
                        // Unwind the shortest way instead of spinning back
                        // through every accumulated revolution.
                        FrameResetMode::Smooth => self.rotation = wrap_angle(self.rotation),
                    }
                }
                self.ease_home();
            }
            _ => {
                self.was_selected = false;
                // The camera may converge first; the frame keeps easing on its own.
                self.ease_home();
            }
        }
    }

    /// One smoothing step toward zero in `Smooth` mode. Settles to exactly
    /// zero once the remainder is below `SETTLE_EPSILON`.
    fn ease_home(&mut self) {
        if self.mode != FrameResetMode::Smooth || self.rotation == 0.0 {
            return;
        }
        approach_f64(&mut self.rotation, 0.0, self.lerp_factor);
        if self.rotation.abs() < SETTLE_EPSILON {
            self.rotation = 0.0;
        }
    }

    /// Map a position in the group's frame into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        let (s, c) = self.rotation.sin_cos();
        let (x, z) = (local.x as f64, local.z as f64);
        Vec3::new((x * c + z * s) as f32, local.y, (-x * s + z * c) as f32)
    }
}
