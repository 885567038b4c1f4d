/// Scene lights: a dim ambient fill, the star's point light, and a light
/// riding on the camera that only exists while a body is focused.

use glam::Vec3;
use crate::api::types::Rgb;

/// A point light. `range == 0` means no falloff cutoff.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(position: Vec3, color: Rgb, intensity: f32, range: f32) -> Self {
        Self { position, color, intensity, range }
    }

    pub fn to_floats(&self) -> [f32; Self::FLOATS] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.color.r,
            self.color.g,
            self.color.b,
            self.intensity,
            self.range,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLighting {
    pub ambient: Rgb,
    pub ambient_intensity: f32,
    pub star: PointLight,
    pub camera: Option<PointLight>,
}

impl SceneLighting {
    /// Lights for this tick. The camera light follows `camera_position`
    /// only while `focused`.
    pub fn build(focused: bool, camera_position: Vec3) -> Self {
        Self {
            ambient: Rgb::from_hex(0xbdb7ee),
            ambient_intensity: 0.2,
            star: PointLight::new(Vec3::ZERO, Rgb::from_hex(0xfffaa7), 3000.0, 0.0),
            camera: focused.then(|| PointLight::new(camera_position, Rgb::WHITE, 100.0, 1000.0)),
        }
    }
}
