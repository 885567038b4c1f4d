/// Circular-orbit bodies: planets, their moons and the central star.
///
/// Angles are f64 because they accumulate without wrapping for the whole
/// session; positions are converted to f32 only when projected.

use glam::Vec3;
use crate::api::types::BodyId;

/// Flat ring around a body, in body-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Project an orbital angle onto the XZ plane of the parent frame.
/// Position is always derived from the angle, never integrated.
#[inline]
pub fn orbit_position(angle: f64, distance: f32) -> Vec3 {
    let d = distance as f64;
    Vec3::new((angle.sin() * d) as f32, 0.0, (angle.cos() * d) as f32)
}

/// A planet or moon on a fixed-radius, fixed-rate circular orbit.
///
/// Moons use the same type; they orbit their parent's current position
/// rather than inheriting the parent's rotation.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    pub id: BodyId,
    pub name: String,
    pub radius: f32,
    pub distance: f32,
    /// Radians advanced per tick; the sign picks the direction.
    pub angular_speed: f64,
    pub tilt: Option<f32>,
    pub ring: Option<Ring>,
    pub moons: Vec<OrbitalBody>,
    angle: f64,
    self_rotation: f64,
    /// Position in the shared parent frame.
    position: Vec3,
}

impl OrbitalBody {
    pub fn new(id: BodyId, name: impl Into<String>, radius: f32, distance: f32, angular_speed: f64) -> Self {
        Self {
            id,
            name: name.into(),
            radius,
            distance,
            angular_speed,
            tilt: None,
            ring: None,
            moons: Vec::new(),
            angle: 0.0,
            self_rotation: 0.0,
            position: orbit_position(0.0, distance),
        }
    }

    // -- Builder pattern --

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = Some(tilt);
        self
    }

    pub fn with_ring(mut self, inner_radius: f32, outer_radius: f32) -> Self {
        self.ring = Some(Ring { inner_radius, outer_radius });
        self
    }

    pub fn with_moon(mut self, moon: OrbitalBody) -> Self {
        self.moons.push(moon);
        self
    }

    /// Current orbital phase in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn self_rotation(&self) -> f64 {
        self.self_rotation
    }

    /// Position in the shared parent frame, as of the last tick.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler rotation (X = tilt, Y = orbital angle, Z = self spin).
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.tilt.unwrap_or(0.0), self.angle as f32, self.self_rotation as f32)
    }

    /// Advance one tick. `spin` is the self-rotation step for this tick,
    /// zero unless the body is the selected one.
    pub fn advance(&mut self, spin: f64) {
        self.advance_around(Vec3::ZERO, spin);
    }

    fn advance_around(&mut self, origin: Vec3, spin: f64) {
        self.angle += self.angular_speed;
        self.position = origin + orbit_position(self.angle, self.distance);
        self.self_rotation += spin;

        let center = self.position;
        for moon in &mut self.moons {
            moon.advance_around(center, 0.0);
        }
    }

    /// Visit this body and its moons, parent first.
    pub fn for_each<'a>(&'a self, f: &mut impl FnMut(&'a OrbitalBody)) {
        f(self);
        for moon in &self.moons {
            moon.for_each(f);
        }
    }
}

/// The central star. It does not orbit; it only spins in place.
#[derive(Debug, Clone)]
pub struct Star {
    pub name: String,
    pub scale: f32,
    spin: f64,
}

impl Star {
    pub fn new(name: impl Into<String>, scale: f32) -> Self {
        Self { name: name.into(), scale, spin: 0.0 }
    }

    pub fn advance(&mut self, rate: f64) {
        self.spin += rate;
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn earth() -> OrbitalBody {
        OrbitalBody::new(BodyId(2), "Earth", 0.9, 22.0, 0.002)
            .with_moon(OrbitalBody::new(BodyId(8), "Moon", 0.25, 3.0, 0.009))
    }

    #[test]
    fn earth_first_ticks() {
        let mut e = earth();
        e.advance(0.0);
        let p = e.position();
        assert!(p.x.abs() < 0.05, "x was {}", p.x);
        assert!((p.z - 22.0).abs() < 1e-3);

        e.advance(0.0);
        assert!((e.angle() - 0.004).abs() < 1e-12);
        let p = e.position();
        assert!((p.x - 0.088).abs() < 1e-3, "x was {}", p.x);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 21.9998).abs() < 1e-3, "z was {}", p.z);
    }

    #[test]
    fn every_stock_orbit_closes_after_one_period() {
        let registry = crate::core::registry::BodyRegistry::solar_system();
        let mut bodies = Vec::new();
        for planet in registry.planets() {
            planet.for_each(&mut |b| bodies.push(b));
        }
        assert_eq!(bodies.len(), registry.len());

        for source in bodies {
            // Moons close relative to their parent, so test the bare orbit.
            let mut b = OrbitalBody::new(source.id, source.name.clone(), source.radius, source.distance, source.angular_speed);
            let start = b.position();
            let n = (TAU / b.angular_speed.abs()).round() as usize;
            for _ in 0..n {
                b.advance(0.0);
            }
            // Rounding the period leaves at most one tick of arc.
            let tolerance = b.distance * b.angular_speed.abs() as f32;
            let gap = b.position().distance(start);
            assert!(gap <= tolerance, "{} missed by {} after {} ticks", b.name, gap, n);
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let a = orbit_position(1.2345, 28.0);
        let b = orbit_position(1.2345, 28.0);
        assert_eq!(a, b);

        let mut m = OrbitalBody::new(BodyId(0), "Mars", 0.6, 28.0, 0.0009);
        for _ in 0..500 {
            m.advance(0.0);
        }
        assert_eq!(m.position(), orbit_position(m.angle(), m.distance));
    }

    #[test]
    fn negative_speed_orbits_backwards() {
        let mut b = OrbitalBody::new(BodyId(0), "Retro", 1.0, 10.0, -0.1);
        b.advance(0.0);
        assert!(b.position().x < 0.0);
    }

    #[test]
    fn moon_follows_parent_position() {
        let mut e = earth();
        for _ in 0..37 {
            e.advance(0.0);
        }
        let moon = &e.moons[0];
        let offset = moon.position() - e.position();
        let expected = orbit_position(moon.angle(), moon.distance);
        assert!(offset.distance(expected) < 1e-4);
        assert!((moon.angle() - 37.0 * 0.009).abs() < 1e-9);
    }

    #[test]
    fn self_rotation_freezes_without_spin() {
        let mut e = earth();
        e.advance(0.0005);
        e.advance(0.0005);
        let spun = e.self_rotation();
        assert!((spun - 0.001).abs() < 1e-12);
        e.advance(0.0);
        assert_eq!(e.self_rotation(), spun);
        e.advance(0.0005);
        assert!((e.self_rotation() - 0.0015).abs() < 1e-12);
    }

    #[test]
    fn rotation_carries_tilt() {
        let b = OrbitalBody::new(BodyId(4), "Jupiter", 1.9, 38.0, 0.0007)
            .with_tilt(std::f32::consts::PI / 8.0);
        assert!((b.rotation().x - std::f32::consts::PI / 8.0).abs() < 1e-6);
    }

    #[test]
    fn for_each_visits_moons_after_parent() {
        let e = earth();
        let mut names = Vec::new();
        e.for_each(&mut |b| names.push(b.name.clone()));
        assert_eq!(names, vec!["Earth".to_string(), "Moon".to_string()]);
    }

    #[test]
    fn star_spins() {
        let mut s = Star::new("Sun", 7.0);
        s.advance(0.001);
        s.advance(0.001);
        assert!((s.spin() - 0.002).abs() < 1e-12);
    }
}
