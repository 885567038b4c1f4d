/// Per-tick composition of the orrery.
///
/// Order within one tick is fixed: apply queued input, integrate bodies,
/// counter-rotate the frame, move the camera, ease the orbit hints. The
/// frame and camera steps read this tick's angles from [`LiveAngles`].

use glam::Vec3;
use crate::api::config::{ConfigError, OrreryConfig};
use crate::api::types::BodyId;
use crate::assets::gate::{AssetGate, Material};
use crate::assets::manifest::AssetManifest;
use crate::background::field::BackgroundField;
use crate::camera::controller::{CameraController, CameraPose, CameraStep};
use crate::camera::manual::ManualNavigation;
use crate::core::body::orbit_position;
use crate::core::registry::{BodyRegistry, STAR_NAME};
use crate::input::queue::InputEvent;
use crate::interaction::state::{InteractionState, Phase};
use crate::scene::snapshot::{
    BodyView, LiveAngles, OrbitView, OverlayView, SceneSnapshot, StarView,
};
use crate::systems::audio::AudioState;
use crate::systems::frame::FrameController;
use crate::systems::lighting::SceneLighting;
use crate::systems::orbit_hint::{OrbitHints, RING_OPACITY};

/// Mutable per-session state. Each subsystem receives only the part it owns.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub interaction: InteractionState,
    pub camera: CameraPose,
    pub frame: FrameController,
    pub audio: AudioState,
    pub angles: LiveAngles,
    pub tick: u64,
    /// Seconds fed to the background field; set by the host clock.
    pub time: f32,
}

pub struct SceneAssembler {
    config: OrreryConfig,
    registry: BodyRegistry,
    session: SessionState,
    camera: CameraController,
    navigation: ManualNavigation,
    hints: OrbitHints,
    assets: AssetGate,
    background: BackgroundField,
}

impl SceneAssembler {
    /// Stock solar system with the stock asset set.
    pub fn new(config: OrreryConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, BodyRegistry::solar_system(), AssetManifest::default())
    }

    pub fn with_registry(
        config: OrreryConfig,
        registry: BodyRegistry,
        manifest: AssetManifest,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        registry.validate_ids()?;

        let camera = CameraController::new(&config);
        let session = SessionState {
            interaction: InteractionState::new(),
            camera: camera.default_pose(),
            frame: FrameController::new(&config),
            audio: AudioState::new(),
            angles: LiveAngles::with_len(registry.len()),
            tick: 0,
            time: 0.0,
        };
        let hints = OrbitHints::new(&config, registry.planets());

        log::info!(
            "orrery session: {} planets, {} bodies, frame reset {:?}",
            registry.planets().len(),
            registry.len(),
            config.frame_reset
        );

        Ok(Self {
            navigation: ManualNavigation::new(&config),
            background: BackgroundField::new(config.resolution_y),
            assets: AssetGate::new(manifest),
            config,
            registry,
            session,
            camera,
            hints,
        })
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn background(&self) -> &BackgroundField {
        &self.background
    }

    pub fn assets(&self) -> &AssetGate {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetGate {
        &mut self.assets
    }

    /// Drop transient per-frame output (audio cues). Call once per host frame,
    /// before the frame's ticks.
    pub fn begin_frame(&mut self) {
        self.session.audio.clear_frame_data();
    }

    /// Seconds of continuous time shown by the background field.
    pub fn set_time(&mut self, seconds: f32) {
        self.session.time = seconds;
    }

    /// Run one simulation tick. `events` are applied before anything moves.
    pub fn tick(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply(*event);
        }

        self.integrate();

        let selected = self.session.interaction.selected();
        let selected_angle = selected.and_then(|id| self.session.angles.get(id));
        let phase = self.session.interaction.phase();
        self.session.frame.update(phase, selected_angle);

        let focus_world = selected.and_then(|id| self.body_world(id));
        let step = self.camera.update(&mut self.session.camera, phase, focus_world);
        if step == CameraStep::Converged {
            self.session.interaction.camera_converged();
        }

        self.hints.update(self.session.interaction.hovered());

        self.session.tick += 1;
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerEnter { body } => {
                if let Some(id) = self.resolve(body) {
                    self.session.interaction.pointer_enter(id);
                }
            }
            InputEvent::PointerLeave { body } => {
                if let Some(id) = self.resolve(body) {
                    self.session.interaction.pointer_leave(id);
                }
            }
            InputEvent::Click { body } => {
                if let Some(cue) = self.resolve(body).and_then(|id| self.session.interaction.click(id)) {
                    self.session.audio.emit(cue);
                }
            }
            InputEvent::Close => {
                if let Some(cue) = self.session.interaction.close() {
                    self.session.audio.emit(cue);
                }
            }
            InputEvent::Orbit { yaw, pitch } => {
                if self.session.interaction.is_idle() {
                    self.navigation.orbit(&mut self.session.camera, yaw, pitch);
                }
            }
            InputEvent::Zoom { factor } => {
                if self.session.interaction.is_idle() {
                    self.navigation.zoom(&mut self.session.camera, factor);
                }
            }
            InputEvent::ToggleMute => self.session.audio.toggle_mute(),
        }
    }

    /// Map a pointer target to the planet it focuses. Unknown ids are dropped.
    fn resolve(&self, body: BodyId) -> Option<BodyId> {
        let id = self.registry.focus_target(body);
        if id.is_none() {
            log::debug!("ignoring event for unknown body {:?}", body);
        }
        id
    }

    fn integrate(&mut self) {
        let selected = self.session.interaction.selected();
        self.registry.star.advance(self.config.star_spin_rate);

        let angles = &mut self.session.angles;
        for planet in self.registry.planets_mut() {
            let spin = if selected == Some(planet.id) { self.config.self_spin_rate } else { 0.0 };
            planet.advance(spin);
            planet.for_each(&mut |b| angles.set(b.id, b.angle()));
        }
    }

    /// World position of a planet from its live angle and the frame rotation.
    fn body_world(&self, id: BodyId) -> Option<Vec3> {
        let planet = self.registry.planet(id)?;
        let angle = self.session.angles.get(id)?;
        Some(self.session.frame.to_world(orbit_position(angle, planet.distance)))
    }

    /// Overlay text for the focused planet.
    pub fn overlay(&self) -> Option<OverlayView> {
        let body = self.session.interaction.selected()?;
        let info = self.registry.info(body)?;
        Some(OverlayView { body, info })
    }

    /// Visible while nothing is selected, or when the body or its parent is
    /// the selected one.
    fn is_visible(&self, planet: BodyId) -> bool {
        match self.session.interaction.selected() {
            None => true,
            Some(selected) => selected == planet,
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let session = &self.session;
        let selected = session.interaction.selected();
        let mut bodies = Vec::with_capacity(self.registry.len());

        for planet in self.registry.planets() {
            let visible = self.is_visible(planet.id);
            planet.for_each(&mut |b| {
                let is_moon = b.id != planet.id;
                let local = b.position();
                bodies.push(BodyView {
                    id: b.id,
                    name: b.name.clone(),
                    parent: is_moon.then_some(planet.id),
                    local_position: local,
                    world_position: session.frame.to_world(local),
                    rotation: b.rotation(),
                    radius: b.radius,
                    ring: b.ring,
                    ring_material: b.ring.map(|_| self.assets.ring_material(&b.name)),
                    material: self.assets.body_material(&b.name, is_moon),
                    visible,
                });
            });
        }

        let orbits = self
            .hints
            .iter()
            .map(|h| OrbitView {
                planet: h.planet,
                inner_radius: h.inner_radius,
                outer_radius: h.outer_radius,
                color: h.color,
                opacity: RING_OPACITY,
                visible: selected.is_none(),
            })
            .collect();

        let star = StarView {
            scale: self.registry.star.scale,
            rotation_y: self.registry.star.spin() as f32,
            material: self.star_material(),
            visible: selected.is_none(),
        };

        SceneSnapshot {
            tick: session.tick,
            time: session.time,
            phase: session.interaction.phase(),
            selected,
            hovered: session.interaction.hovered(),
            camera: session.camera,
            field_of_view_deg: self.config.field_of_view_deg,
            frame_rotation: session.frame.rotation() as f32,
            star,
            bodies,
            orbits,
            lighting: SceneLighting::build(selected.is_some(), session.camera.position),
            overlay: self.overlay(),
            cues: session.audio.cues().to_vec(),
            background_playing: session.audio.background_playing(),
        }
    }

    fn star_material(&self) -> Material {
        self.assets.body_material(STAR_NAME, false)
    }

    pub fn phase(&self) -> Phase {
        self.session.interaction.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AudioCue;

    const MARS: BodyId = BodyId(3);
    const PHOBOS: BodyId = BodyId(9);

    fn assembler() -> SceneAssembler {
        SceneAssembler::new(OrreryConfig::default()).unwrap()
    }

    fn run(a: &mut SceneAssembler, ticks: usize) {
        for _ in 0..ticks {
            a.tick(&[]);
        }
    }

    fn count(a: &SceneAssembler, cue: AudioCue) -> usize {
        a.session().audio.cues().iter().filter(|&&c| c == cue).count()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = OrreryConfig { lerp_factor: 0.0, ..OrreryConfig::default() };
        assert!(SceneAssembler::new(config).is_err());
    }

    #[test]
    fn rejects_sparse_body_ids() {
        let registry = BodyRegistry::from_planets(
            crate::core::body::Star::new("Sun", 7.0),
            vec![crate::core::body::OrbitalBody::new(BodyId(3), "Lonely", 1.0, 10.0, 0.01)],
        );
        let result = SceneAssembler::with_registry(OrreryConfig::default(), registry, AssetManifest::default());
        assert!(matches!(result, Err(ConfigError::BodyIds { .. })));
    }

    #[test]
    fn frame_eases_home_without_a_jump() {
        let mut a = assembler();
        run(&mut a, 517);
        a.tick(&[InputEvent::Click { body: BodyId(0) }]);
        a.tick(&[InputEvent::Close]);
        let k = a.config().lerp_factor as f64;
        let mut previous = a.session().frame.rotation();
        for _ in 0..300 {
            a.tick(&[]);
            let rotation = a.session().frame.rotation();
            let step = (rotation - previous).abs();
            assert!(
                step <= k * previous.abs() + 1e-4,
                "frame rotation jumped from {} to {}",
                previous,
                rotation
            );
            previous = rotation;
        }
        assert_eq!(a.phase(), Phase::Idle);
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn mars_click_then_close() {
        let mut a = assembler();
        a.tick(&[InputEvent::Click { body: MARS }]);
        assert_eq!(a.phase(), Phase::Selected(MARS));
        assert_eq!(count(&a, AudioCue::Focus), 1);

        let start = a.session().camera;
        run(&mut a, 30);
        assert_eq!(count(&a, AudioCue::Focus), 1);
        let distance = a.registry().planet(MARS).unwrap().distance;
        let target = Vec3::new(0.0, 0.0, distance + 10.0);
        assert!(a.session().camera.position.distance(target) < start.position.distance(target));

        a.tick(&[InputEvent::Close]);
        assert_eq!(a.phase(), Phase::Resetting);
        assert_eq!(a.session().interaction.selected(), None);
        assert_eq!(count(&a, AudioCue::Unfocus), 1);

        run(&mut a, 400);
        assert_eq!(a.phase(), Phase::Idle);
        let default = Vec3::new(0.0, 5.0, 100.0);
        assert!(a.session().camera.position.distance(default) < 0.2);
        assert_eq!(a.session().frame.rotation(), 0.0);
        assert_eq!(count(&a, AudioCue::Unfocus), 1);
    }

    #[test]
    fn selected_planet_is_parked_on_the_z_axis() {
        let mut a = assembler();
        run(&mut a, 100);
        a.tick(&[InputEvent::Click { body: MARS }]);
        let snap = a.snapshot();
        let mars = snap.bodies.iter().find(|b| b.id == MARS).unwrap();
        assert!(mars.world_position.distance(Vec3::new(0.0, 0.0, 28.0)) < 1e-3);
        assert!(snap.camera.look_at.z > 0.0);
    }

    #[test]
    fn idle_ticks_leave_the_camera_alone() {
        let mut a = assembler();
        let before = a.session().camera;
        run(&mut a, 50);
        assert_eq!(a.session().camera, before);
    }

    #[test]
    fn manual_navigation_only_when_idle() {
        let mut a = assembler();
        a.tick(&[InputEvent::Zoom { factor: 0.5 }]);
        let zoomed = a.session().camera;
        assert!(zoomed.position.length() < 100.0);

        a.tick(&[InputEvent::Click { body: MARS }]);
        let mut expected = a.session().camera;
        a.tick(&[InputEvent::Orbit { yaw: 1.0, pitch: 0.3 }]);
        // Same motion as a tick with no input.
        CameraController::new(a.config()).update(&mut expected, a.phase(), a.body_world(MARS));
        assert!(a.session().camera.position.distance(expected.position) < 1e-4);
    }

    #[test]
    fn moon_clicks_focus_the_parent() {
        let mut a = assembler();
        a.tick(&[InputEvent::Click { body: PHOBOS }]);
        assert_eq!(a.phase(), Phase::Selected(MARS));
        let snap = a.snapshot();
        let phobos = snap.bodies.iter().find(|b| b.id == PHOBOS).unwrap();
        assert!(phobos.visible);
        assert_eq!(phobos.parent, Some(MARS));
        assert!(snap.bodies.iter().filter(|b| b.visible).all(|b| b.id == MARS || b.parent == Some(MARS)));
        assert!(!snap.star.visible);
        assert!(snap.orbits.iter().all(|o| !o.visible));
        assert_eq!(snap.overlay.unwrap().info.title, "Mars");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut a = assembler();
        a.tick(&[InputEvent::Click { body: BodyId(99) }, InputEvent::PointerEnter { body: BodyId(99) }]);
        assert_eq!(a.phase(), Phase::Idle);
        assert_eq!(a.session().interaction.hovered(), None);
        assert!(a.session().audio.cues().is_empty());
    }

    #[test]
    fn only_the_selected_planet_spins() {
        let mut a = assembler();
        a.tick(&[InputEvent::Click { body: MARS }]);
        run(&mut a, 9);
        let spin = |a: &SceneAssembler, id| a.registry().get(id).unwrap().self_rotation();
        assert!((spin(&a, MARS) - 10.0 * 0.0005).abs() < 1e-12);
        assert_eq!(spin(&a, BodyId(2)), 0.0);
        assert!((a.registry().star.spin() - 10.0 * 0.001).abs() < 1e-12);
    }

    #[test]
    fn hover_tints_the_orbit_ring() {
        let mut a = assembler();
        a.tick(&[InputEvent::PointerEnter { body: BodyId(8) }]);
        assert_eq!(a.session().interaction.hovered(), Some(BodyId(2)));
        run(&mut a, 10);
        let earth = a.snapshot().orbits.into_iter().find(|o| o.planet == BodyId(2)).unwrap();
        let idle = a.snapshot().orbits.into_iter().find(|o| o.planet == BodyId(0)).unwrap();
        assert!(earth.color.g > idle.color.g);
    }

    #[test]
    fn switching_focus_skips_the_reset() {
        let mut a = assembler();
        a.tick(&[InputEvent::Click { body: MARS }, InputEvent::Click { body: BodyId(2) }]);
        assert_eq!(a.phase(), Phase::Selected(BodyId(2)));
        assert_eq!(count(&a, AudioCue::Focus), 2);
        a.begin_frame();
        assert!(a.session().audio.cues().is_empty());
    }

    #[test]
    fn mute_keeps_cues() {
        let mut a = assembler();
        a.tick(&[InputEvent::ToggleMute, InputEvent::Click { body: MARS }]);
        let snap = a.snapshot();
        assert!(!snap.background_playing);
        assert_eq!(snap.cues, vec![AudioCue::Focus]);
        assert!(snap.lighting.camera.is_some());
    }
}
