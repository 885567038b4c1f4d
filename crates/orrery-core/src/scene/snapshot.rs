/// Read-only views handed from the simulation to the presentation layer.

use glam::Vec3;
use crate::api::types::{AudioCue, BodyId, Rgb};
use crate::assets::gate::Material;
use crate::camera::controller::CameraPose;
use crate::core::body::Ring;
use crate::core::registry::BodyInfo;
use crate::interaction::state::Phase;
use crate::systems::lighting::SceneLighting;

/// Orbital angles of every body as of the current tick, indexed by id.
/// Written once by integration, then only read by the frame and camera
/// steps of the same tick.
#[derive(Debug, Clone, Default)]
pub struct LiveAngles {
    angles: Vec<f64>,
}

impl LiveAngles {
    pub fn with_len(len: usize) -> Self {
        Self { angles: vec![0.0; len] }
    }

    pub(crate) fn set(&mut self, id: BodyId, angle: f64) {
        if let Some(slot) = self.angles.get_mut(id.0 as usize) {
            *slot = angle;
        }
    }

    pub fn get(&self, id: BodyId) -> Option<f64> {
        self.angles.get(id.0 as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

/// Placement of one planet or moon.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub name: String,
    /// Planet that carries this body; `None` for planets.
    pub parent: Option<BodyId>,
    /// Position inside the rotating parent group.
    pub local_position: Vec3,
    /// Position after the group rotation.
    pub world_position: Vec3,
    /// Euler rotation (X tilt, Y orbital angle, Z self spin).
    pub rotation: Vec3,
    pub radius: f32,
    pub ring: Option<Ring>,
    pub ring_material: Option<Material>,
    pub material: Material,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarView {
    pub scale: f32,
    /// Spin about +Y.
    pub rotation_y: f32,
    pub material: Material,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitView {
    pub planet: BodyId,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub visible: bool,
}

/// Overlay content for the focused body.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub body: BodyId,
    pub info: BodyInfo,
}

/// Everything the renderer, overlay and audio layers need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub tick: u64,
    /// Seconds fed to the background field.
    pub time: f32,
    pub phase: Phase,
    pub selected: Option<BodyId>,
    pub hovered: Option<BodyId>,
    pub camera: CameraPose,
    pub field_of_view_deg: f32,
    /// Rotation about +Y of the group holding every body.
    pub frame_rotation: f32,
    pub star: StarView,
    pub bodies: Vec<BodyView>,
    pub orbits: Vec<OrbitView>,
    pub lighting: SceneLighting,
    pub overlay: Option<OverlayView>,
    pub cues: Vec<AudioCue>,
    pub background_playing: bool,
}
