use orrery_core::{
    AssetGate, AssetManifest, BodyId, ConfigError, FrameBuffer, InputEvent, InputQueue,
    OrreryConfig, ProtocolLayout, SceneAssembler, TickClock,
};

/// Owns one orrery session and the buffer the host reads each frame.
///
/// The host pushes input between frames and calls `tick` from its animation
/// callback. Cues in the buffer belong to the frame whose counter they were
/// written with; the host should only play them when the counter advances.
pub struct OrreryRunner {
    assembler: SceneAssembler,
    input: InputQueue,
    clock: TickClock,
    frame: FrameBuffer,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig) -> Result<Self, ConfigError> {
        let clock = TickClock::new(config.fixed_dt);
        let assembler = SceneAssembler::new(config)?;
        let mut frame = FrameBuffer::new(ProtocolLayout::default());
        frame.write(&assembler.snapshot());
        Ok(Self {
            assembler,
            input: InputQueue::new(),
            clock,
            frame,
        })
    }

    /// Parse an optional JSON config; `None` means the stock settings.
    pub fn from_json(json: Option<&str>) -> Result<Self, ConfigError> {
        let config = match json {
            Some(json) => OrreryConfig::from_json(json)?,
            None => OrreryConfig::default(),
        };
        Self::new(config)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance by `dt` seconds of frame time and repack the frame buffer.
    /// Queued input is applied at the start of the first tick; with no tick
    /// due it stays queued.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.clock.accumulate(dt);
        if steps == 0 {
            return;
        }

        self.assembler.begin_frame();
        let events = self.input.drain();
        for step in 0..steps {
            let batch: &[InputEvent] = if step == 0 { &events } else { &[] };
            self.assembler.tick(batch);
        }

        self.assembler.set_time(self.clock.elapsed());
        self.frame.write(&self.assembler.snapshot());
    }

    /// Replace the asset manifest. Readiness starts over.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = AssetManifest::from_json(json)?;
        log::info!(
            "manifest loaded: {} textures, {} rings",
            manifest.textures.len(),
            manifest.rings.len()
        );
        *self.assembler.assets_mut() = AssetGate::new(manifest);
        Ok(())
    }

    /// Record that the host finished loading `path`.
    pub fn mark_asset_ready(&mut self, path: &str) -> bool {
        self.assembler.assets_mut().mark_ready(path)
    }

    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.assembler.registry().id_of(name)
    }

    pub fn title(&self, body: BodyId) -> Option<&'static str> {
        self.assembler.registry().info(body).map(|info| info.title)
    }

    pub fn description(&self, body: BodyId) -> Option<&'static str> {
        self.assembler.registry().info(body).map(|info| info.description)
    }

    /// Equirectangular bake of the background at the current session time,
    /// flattened to rgb triples.
    pub fn bake_background(&self, width: u32, height: u32) -> Vec<f32> {
        let time = self.assembler.session().time;
        self.assembler
            .background()
            .bake_equirect(width as usize, height as usize, time)
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn assembler(&self) -> &SceneAssembler {
        &self.assembler
    }

    /// Wall-clock seconds fed in so far.
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    // ---- Buffer accessors for zero-copy reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.frame.as_slice()
    }

    pub fn layout(&self) -> &ProtocolLayout {
        self.frame.layout()
    }
}
