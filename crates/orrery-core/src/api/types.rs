use bytemuck::{Pod, Zeroable};

/// Stable identifier of a body within a session.
/// Index into the registry arena; planets first, moons after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Wire representation; `-1.0` encodes "none".
    pub fn to_wire(id: Option<BodyId>) -> f32 {
        id.map(|b| b.0 as f32).unwrap_or(-1.0)
    }
}

/// An audio cue emitted by the interaction state machine.
/// The numeric value maps to a cue slot in the browser's sound manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AudioCue {
    /// A body was brought into focus.
    Focus = 1,
    /// Focus was closed and the camera begins its return.
    Unfocus = 2,
}

impl AudioCue {
    pub fn volume(self) -> f32 {
        0.5
    }

    pub fn playback_rate(self) -> f32 {
        match self {
            AudioCue::Focus => 2.0,
            AudioCue::Unfocus => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Focus => "focus",
            AudioCue::Unfocus => "unfocus",
        }
    }
}

/// Linear RGB color used by orbit hints and lights.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
