/// Cue collection and the mute gate for the background track.
///
/// Cues are per-tick transient data; the mute flag only affects the
/// looping track, never the focus/unfocus cues.

use crate::api::types::AudioCue;

pub const BACKGROUND_VOLUME: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct AudioState {
    cues: Vec<AudioCue>,
    muted: bool,
}

impl AudioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, cue: AudioCue) {
        log::debug!("audio cue: {}", cue.name());
        self.cues.push(cue);
    }

    /// Cues emitted since the last `clear_frame_data`.
    pub fn cues(&self) -> &[AudioCue] {
        &self.cues
    }

    pub fn clear_frame_data(&mut self) {
        self.cues.clear();
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("background track {}", if self.muted { "muted" } else { "unmuted" });
    }

    pub fn background_playing(&self) -> bool {
        !self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_gates_only_the_track() {
        let mut a = AudioState::new();
        assert!(a.background_playing());
        a.toggle_mute();
        assert!(!a.background_playing());
        a.emit(AudioCue::Focus);
        assert_eq!(a.cues(), &[AudioCue::Focus]);
    }

    #[test]
    fn frame_clear_drops_cues() {
        let mut a = AudioState::new();
        a.emit(AudioCue::Unfocus);
        a.clear_frame_data();
        assert!(a.cues().is_empty());
    }
}
