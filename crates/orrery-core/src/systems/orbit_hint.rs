/// Orbit ring tint that drifts toward a highlight while its planet is hovered.

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, Rgb};
use crate::core::body::OrbitalBody;
use crate::core::smoothing::approach_rgb;

pub const RING_OPACITY: f32 = 0.5;
const RING_INNER_INSET: f32 = 0.01;
const RING_OUTER_OUTSET: f32 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitHint {
    pub planet: BodyId,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone)]
pub struct OrbitHints {
    hints: Vec<OrbitHint>,
    idle: Rgb,
    hover: Rgb,
    rate: f32,
}

impl OrbitHints {
    pub fn new(config: &OrreryConfig, planets: &[OrbitalBody]) -> Self {
        let idle = Rgb::from_hex(config.hint_idle_color);
        let hints = planets
            .iter()
            .map(|p| OrbitHint {
                planet: p.id,
                inner_radius: p.distance - RING_INNER_INSET,
                outer_radius: p.distance + RING_OUTER_OUTSET,
                color: idle,
            })
            .collect();
        Self {
            hints,
            idle,
            hover: Rgb::from_hex(config.hint_hover_color),
            rate: config.hint_rate,
        }
    }

    /// One tick: every ring eases toward its target color.
    pub fn update(&mut self, hovered: Option<BodyId>) {
        for hint in &mut self.hints {
            let target = if hovered == Some(hint.planet) { self.hover } else { self.idle };
            approach_rgb(&mut hint.color, target, self.rate);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitHint> {
        self.hints.iter()
    }

    pub fn get(&self, planet: BodyId) -> Option<&OrbitHint> {
        self.hints.iter().find(|h| h.planet == planet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::BodyRegistry;

    fn hints() -> OrbitHints {
        OrbitHints::new(&OrreryConfig::default(), BodyRegistry::solar_system().planets())
    }

    #[test]
    fn ring_bounds_wrap_the_orbit() {
        let h = hints();
        let earth = h.get(BodyId(2)).unwrap();
        assert!((earth.inner_radius - 21.99).abs() < 1e-5);
        assert!((earth.outer_radius - 22.05).abs() < 1e-5);
    }

    #[test]
    fn hovered_ring_drifts_toward_highlight() {
        let mut h = hints();
        let start = h.get(BodyId(2)).unwrap().color;
        h.update(Some(BodyId(2)));
        let c = h.get(BodyId(2)).unwrap().color;
        assert!(c.g > start.g);
        assert!(c.r < start.r);
        assert_eq!(h.get(BodyId(3)).unwrap().color, start);
    }

    #[test]
    fn tint_fades_back_after_hover() {
        let mut h = hints();
        for _ in 0..1000 {
            h.update(Some(BodyId(0)));
        }
        assert!(h.get(BodyId(0)).unwrap().color.g > 0.99);
        for _ in 0..1000 {
            h.update(None);
        }
        let idle = Rgb::from_hex(0x48434f);
        let c = h.get(BodyId(0)).unwrap().color;
        assert!((c.g - idle.g).abs() < 1e-3);
    }
}
