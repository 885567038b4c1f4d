pub mod api;
pub mod core;
pub mod input;
pub mod interaction;
pub mod camera;
pub mod systems;
pub mod background;
pub mod assets;
pub mod bridge;
pub mod scene;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, FrameResetMode, OrreryConfig, PoseConfig};
pub use api::types::{AudioCue, BodyId, Rgb};
pub use core::body::{orbit_position, OrbitalBody, Ring, Star};
pub use core::registry::{BodyInfo, BodyRegistry};
pub use core::time::TickClock;
pub use input::queue::{InputEvent, InputQueue};
pub use interaction::state::{InteractionState, Phase};
pub use camera::controller::{CameraController, CameraPose, CameraStep};
pub use camera::manual::ManualNavigation;
pub use systems::frame::FrameController;
pub use systems::orbit_hint::{OrbitHint, OrbitHints};
pub use systems::lighting::{PointLight, SceneLighting};
pub use systems::audio::AudioState;
pub use background::field::BackgroundField;
pub use assets::manifest::AssetManifest;
pub use assets::gate::{AssetGate, Material};
pub use bridge::protocol::ProtocolLayout;
pub use bridge::instance::{BodyInstance, FrameBuffer, OrbitInstance};
pub use scene::assembler::{SceneAssembler, SessionState};
pub use scene::snapshot::{BodyView, LiveAngles, OrbitView, OverlayView, SceneSnapshot, StarView};
