/// Flat frame buffer layout shared with the host renderer.
/// Must stay in sync with the host-side reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 28 floats]
/// [Bodies: max_bodies × 12 floats]
/// [Orbits: max_orbits × 8 floats]
/// [Lights: max_lights × 8 floats]
/// [Cues:   max_cues × 3 floats]
/// ```
///
/// Capacities are written into the header so the host can compute section
/// offsets without hardcoding them.

use crate::bridge::instance::{BodyInstance, OrbitInstance};
use crate::systems::lighting::PointLight;

pub const HEADER_FLOATS: usize = 28;

pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_BODIES: usize = 3;
pub const HEADER_BODY_COUNT: usize = 4;
pub const HEADER_MAX_ORBITS: usize = 5;
pub const HEADER_ORBIT_COUNT: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_LIGHT_COUNT: usize = 8;
pub const HEADER_MAX_CUES: usize = 9;
pub const HEADER_CUE_COUNT: usize = 10;
/// 0 idle, 1 selected, 2 resetting.
pub const HEADER_PHASE: usize = 11;
/// Body id, or -1.
pub const HEADER_SELECTED: usize = 12;
/// Body id, or -1.
pub const HEADER_HOVERED: usize = 13;
/// Background track volume; 0 while muted.
pub const HEADER_MUSIC_VOLUME: usize = 14;
/// Seconds fed to the background shader.
pub const HEADER_TIME: usize = 15;
/// Camera position x, y, z.
pub const HEADER_CAMERA_POSITION: usize = 16;
/// Camera look-at x, y, z.
pub const HEADER_CAMERA_LOOK_AT: usize = 19;
/// Y rotation of the group holding every body. Body positions are local to it.
pub const HEADER_FRAME_ROTATION: usize = 22;
pub const HEADER_FIELD_OF_VIEW: usize = 23;
pub const HEADER_STAR_SPIN: usize = 24;
pub const HEADER_STAR_SCALE: usize = 25;
/// Star visibility; bit 0 visible, bit 1 texture ready.
pub const HEADER_STAR_FLAGS: usize = 26;
pub const HEADER_AMBIENT_INTENSITY: usize = 27;

pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per cue slot: code, volume, playback rate.
pub const CUE_FLOATS: usize = 3;

pub const DEFAULT_MAX_BODIES: usize = 32;
pub const DEFAULT_MAX_ORBITS: usize = 16;
/// Star light plus the camera light.
pub const DEFAULT_MAX_LIGHTS: usize = 2;
pub const DEFAULT_MAX_CUES: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_bodies: usize,
    pub max_orbits: usize,
    pub max_lights: usize,
    pub max_cues: usize,

    pub body_data_offset: usize,
    pub orbit_data_offset: usize,
    pub light_data_offset: usize,
    pub cue_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_bodies: usize, max_orbits: usize, max_lights: usize, max_cues: usize) -> Self {
        let body_data_offset = HEADER_FLOATS;
        let orbit_data_offset = body_data_offset + max_bodies * BodyInstance::FLOATS;
        let light_data_offset = orbit_data_offset + max_orbits * OrbitInstance::FLOATS;
        let cue_data_offset = light_data_offset + max_lights * PointLight::FLOATS;
        let buffer_total_floats = cue_data_offset + max_cues * CUE_FLOATS;

        Self {
            max_bodies,
            max_orbits,
            max_lights,
            max_cues,
            body_data_offset,
            orbit_data_offset,
            light_data_offset,
            cue_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

impl Default for ProtocolLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODIES, DEFAULT_MAX_ORBITS, DEFAULT_MAX_LIGHTS, DEFAULT_MAX_CUES)
    }
}
