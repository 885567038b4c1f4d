use bytemuck::{Pod, Zeroable};
use crate::api::types::BodyId;
use crate::bridge::protocol::*;
use crate::scene::snapshot::{BodyView, OrbitView, SceneSnapshot};
use crate::systems::audio::BACKGROUND_VOLUME;
use crate::systems::lighting::PointLight;

/// Per-body placement record. 12 floats = 48 bytes stride.
///
/// Positions are local to the rotating body group; the host applies
/// `HEADER_FRAME_ROTATION` to the group.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub tilt: f32,
    pub angle: f32,
    pub spin: f32,
    pub radius: f32,
    /// Parent planet id, or -1 for planets.
    pub parent: f32,
    /// Bit 0 visible, bit 1 texture ready, bit 2 ring texture ready.
    pub flags: f32,
    /// Ring annulus in planet-radius units; both zero without a ring.
    pub ring_inner: f32,
    pub ring_outer: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_view(view: &BodyView) -> Self {
        let mut flags = 0u32;
        if view.visible {
            flags |= 1;
        }
        if view.material.is_ready() {
            flags |= 2;
        }
        if view.ring_material.as_ref().is_some_and(|m| m.is_ready()) {
            flags |= 4;
        }
        let (ring_inner, ring_outer) = view
            .ring
            .map(|r| (r.inner_radius, r.outer_radius))
            .unwrap_or((0.0, 0.0));

        Self {
            id: view.id.0 as f32,
            x: view.local_position.x,
            y: view.local_position.y,
            z: view.local_position.z,
            tilt: view.rotation.x,
            angle: view.rotation.y,
            spin: view.rotation.z,
            radius: view.radius,
            parent: BodyId::to_wire(view.parent),
            flags: flags as f32,
            ring_inner,
            ring_outer,
        }
    }
}

/// Orbit guide ring record. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OrbitInstance {
    pub planet: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub visible: f32,
}

impl OrbitInstance {
    pub const FLOATS: usize = 8;

    pub fn from_view(view: &OrbitView) -> Self {
        Self {
            planet: view.planet.0 as f32,
            inner_radius: view.inner_radius,
            outer_radius: view.outer_radius,
            r: view.color.r,
            g: view.color.g,
            b: view.color.b,
            opacity: view.opacity,
            visible: if view.visible { 1.0 } else { 0.0 },
        }
    }
}

/// Flat f32 buffer the host reads once per frame.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: u32,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_MAX_BODIES] = layout.max_bodies as f32;
        data[HEADER_MAX_ORBITS] = layout.max_orbits as f32;
        data[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        data[HEADER_MAX_CUES] = layout.max_cues as f32;
        Self { layout, data, frame_counter: 0 }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Pack one frame. Records past a section's capacity are dropped.
    pub fn write(&mut self, snapshot: &SceneSnapshot) {
        let layout = self.layout.clone();
        let data = &mut self.data;
        data[HEADER_LOCK] = 1.0;

        let bodies: Vec<BodyInstance> = snapshot
            .bodies
            .iter()
            .take(layout.max_bodies)
            .map(BodyInstance::from_view)
            .collect();
        let body_floats: &[f32] = bytemuck::cast_slice(&bodies);
        data[layout.body_data_offset..layout.body_data_offset + body_floats.len()]
            .copy_from_slice(body_floats);

        let orbits: Vec<OrbitInstance> = snapshot
            .orbits
            .iter()
            .take(layout.max_orbits)
            .map(OrbitInstance::from_view)
            .collect();
        let orbit_floats: &[f32] = bytemuck::cast_slice(&orbits);
        data[layout.orbit_data_offset..layout.orbit_data_offset + orbit_floats.len()]
            .copy_from_slice(orbit_floats);

        let lighting = &snapshot.lighting;
        let lights: Vec<_> = std::iter::once(&lighting.star)
            .chain(lighting.camera.as_ref())
            .take(layout.max_lights)
            .collect();
        for (i, light) in lights.iter().enumerate() {
            let start = layout.light_data_offset + i * PointLight::FLOATS;
            data[start..start + PointLight::FLOATS]
                .copy_from_slice(&light.to_floats());
        }

        let cues = snapshot.cues.iter().take(layout.max_cues);
        let mut cue_count = 0;
        for (i, cue) in cues.enumerate() {
            let start = layout.cue_data_offset + i * CUE_FLOATS;
            data[start..start + CUE_FLOATS]
                .copy_from_slice(&[*cue as u32 as f32, cue.volume(), cue.playback_rate()]);
            cue_count += 1;
        }

        let mut star_flags = 0u32;
        if snapshot.star.visible {
            star_flags |= 1;
        }
        if snapshot.star.material.is_ready() {
            star_flags |= 2;
        }

        self.frame_counter = self.frame_counter.wrapping_add(1);
        data[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        data[HEADER_BODY_COUNT] = bodies.len() as f32;
        data[HEADER_ORBIT_COUNT] = orbits.len() as f32;
        data[HEADER_LIGHT_COUNT] = lights.len() as f32;
        data[HEADER_CUE_COUNT] = cue_count as f32;
        data[HEADER_PHASE] = snapshot.phase.code() as f32;
        data[HEADER_SELECTED] = BodyId::to_wire(snapshot.selected);
        data[HEADER_HOVERED] = BodyId::to_wire(snapshot.hovered);
        data[HEADER_MUSIC_VOLUME] = if snapshot.background_playing { BACKGROUND_VOLUME } else { 0.0 };
        data[HEADER_TIME] = snapshot.time;
        data[HEADER_CAMERA_POSITION..HEADER_CAMERA_POSITION + 3]
            .copy_from_slice(&snapshot.camera.position.to_array());
        data[HEADER_CAMERA_LOOK_AT..HEADER_CAMERA_LOOK_AT + 3]
            .copy_from_slice(&snapshot.camera.look_at.to_array());
        data[HEADER_FRAME_ROTATION] = snapshot.frame_rotation;
        data[HEADER_FIELD_OF_VIEW] = snapshot.field_of_view_deg;
        data[HEADER_STAR_SPIN] = snapshot.star.rotation_y;
        data[HEADER_STAR_SCALE] = snapshot.star.scale;
        data[HEADER_STAR_FLAGS] = star_flags as f32;
        data[HEADER_AMBIENT_INTENSITY] = snapshot.lighting.ambient_intensity;
        data[HEADER_LOCK] = 0.0;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw pointer for zero-copy reads from wasm memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(ProtocolLayout::default())
    }
}
