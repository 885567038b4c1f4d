/// Hover/selection state machine.
///
/// `Idle --click--> Selected --close--> Resetting --converged--> Idle`.
/// Selection and reset share one enum, so "selected while resetting" cannot
/// be represented. Hover is tracked on the side and never changes the phase.

use crate::api::types::{AudioCue, BodyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No selection and no reset in flight; the user owns the camera.
    #[default]
    Idle,
    /// A body is focused.
    Selected(BodyId),
    /// Selection closed; the camera is returning to the overview pose.
    Resetting,
}

impl Phase {
    /// Wire code: 0 idle, 1 selected, 2 resetting.
    pub fn code(self) -> u32 {
        match self {
            Phase::Idle => 0,
            Phase::Selected(_) => 1,
            Phase::Resetting => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    hovered: Option<BodyId>,
    phase: Phase,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn selected(&self) -> Option<BodyId> {
        match self.phase {
            Phase::Selected(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_resetting(&self) -> bool {
        self.phase == Phase::Resetting
    }

    /// True when neither controller owns the camera.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn pointer_enter(&mut self, id: BodyId) {
        self.hovered = Some(id);
    }

    /// Clears hover only if it still points at `id`, so a late leave from
    /// one mesh cannot erase the enter of its neighbour.
    pub fn pointer_leave(&mut self, id: BodyId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Focus a body. Returns the cue to play, if the phase changed.
    pub fn click(&mut self, id: BodyId) -> Option<AudioCue> {
        match self.phase {
            Phase::Selected(current) if current == id => {
                log::debug!("click on already selected body {:?} ignored", id);
                None
            }
            previous => {
                self.phase = Phase::Selected(id);
                log::info!("interaction: {:?} -> Selected({:?})", previous, id);
                Some(AudioCue::Focus)
            }
        }
    }

    /// Close the focused body. Clearing the selection and raising the reset
    /// happen in one assignment.
    pub fn close(&mut self) -> Option<AudioCue> {
        match self.phase {
            Phase::Selected(id) => {
                self.phase = Phase::Resetting;
                log::info!("interaction: Selected({:?}) -> Resetting", id);
                Some(AudioCue::Unfocus)
            }
            _ => {
                log::debug!("close ignored in {:?}", self.phase);
                None
            }
        }
    }

    /// Signal from the camera controller that the overview pose was reached.
    pub fn camera_converged(&mut self) {
        if self.phase == Phase::Resetting {
            self.phase = Phase::Idle;
            log::info!("interaction: Resetting -> Idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARS: BodyId = BodyId(3);
    const EARTH: BodyId = BodyId(2);

    #[test]
    fn click_from_idle_selects_and_cues_focus() {
        let mut s = InteractionState::new();
        assert_eq!(s.click(MARS), Some(AudioCue::Focus));
        assert_eq!(s.selected(), Some(MARS));
        assert!(!s.is_resetting());
    }

    #[test]
    fn close_is_atomic() {
        let mut s = InteractionState::new();
        s.click(MARS);
        assert_eq!(s.close(), Some(AudioCue::Unfocus));
        assert_eq!(s.selected(), None);
        assert!(s.is_resetting());
    }

    #[test]
    fn switching_focus_skips_reset() {
        let mut s = InteractionState::new();
        s.click(MARS);
        assert_eq!(s.click(EARTH), Some(AudioCue::Focus));
        assert_eq!(s.phase(), Phase::Selected(EARTH));
    }

    #[test]
    fn reclicking_selected_body_is_silent() {
        let mut s = InteractionState::new();
        s.click(MARS);
        assert_eq!(s.click(MARS), None);
        assert_eq!(s.selected(), Some(MARS));
    }

    #[test]
    fn click_during_reset_preempts_it() {
        let mut s = InteractionState::new();
        s.click(MARS);
        s.close();
        assert_eq!(s.click(EARTH), Some(AudioCue::Focus));
        assert!(!s.is_resetting());
        assert_eq!(s.selected(), Some(EARTH));
    }

    #[test]
    fn close_outside_selection_is_noop() {
        let mut s = InteractionState::new();
        assert_eq!(s.close(), None);
        assert!(s.is_idle());
        s.click(MARS);
        s.close();
        assert_eq!(s.close(), None);
        assert!(s.is_resetting());
    }

    #[test]
    fn convergence_only_ends_a_reset() {
        let mut s = InteractionState::new();
        s.click(MARS);
        s.camera_converged();
        assert_eq!(s.selected(), Some(MARS));
        s.close();
        s.camera_converged();
        assert!(s.is_idle());
    }

    #[test]
    fn hover_is_independent_of_selection() {
        let mut s = InteractionState::new();
        s.click(MARS);
        s.pointer_enter(EARTH);
        assert_eq!(s.hovered(), Some(EARTH));
        assert_eq!(s.selected(), Some(MARS));
        s.pointer_leave(MARS);
        assert_eq!(s.hovered(), Some(EARTH));
        s.pointer_leave(EARTH);
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn selection_stays_exclusive_over_arbitrary_sequences() {
        let mut s = InteractionState::new();
        let mut seed = 0x2545_f491_u32;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 4 {
                0 | 1 => {
                    s.click(BodyId(seed % 8));
                }
                2 => {
                    s.close();
                }
                _ => s.camera_converged(),
            }
            assert!(!(s.selected().is_some() && s.is_resetting()));
        }
    }
}
