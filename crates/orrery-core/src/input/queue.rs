use crate::api::types::BodyId;

/// Events the renderer and overlay deliver to the simulation.
/// Applied only at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer entered a body's mesh.
    PointerEnter { body: BodyId },
    /// The pointer left a body's mesh.
    PointerLeave { body: BodyId },
    /// A body's mesh was clicked.
    Click { body: BodyId },
    /// The overlay's close control was used.
    Close,
    /// Drag gesture for manual navigation, in radians.
    Orbit { yaw: f32, pitch: f32 },
    /// Scroll gesture; `factor > 1` moves away from the target.
    Zoom { factor: f32 },
    /// Mute button for the background track.
    ToggleMute,
}

/// A queue of input events.
/// The host pushes between frames; the assembler drains once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
