/// Static body table: the star, eight planets, their moons and overlay text.
///
/// Distances and radii are render-space units; speeds are radians per tick.

use std::f32::consts::PI;
use crate::api::config::ConfigError;
use crate::api::types::BodyId;
use crate::core::body::{OrbitalBody, Star};

/// Overlay text for a focusable body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STAR_NAME: &str = "Sun";
pub const STAR_SCALE: f32 = 7.0;

const PLANET_INFOS: [(&str, &str); 8] = [
    ("Mercury", "Mercury is the closest planet to the Sun and also the smallest in our solar system. It has no atmosphere to retain heat, causing extreme temperature differences between day and night, from over 400°C during the day to -180°C at night. A year on Mercury is just 88 Earth days long."),
    ("Venus", "Venus is similar in size to Earth but wrapped in a thick, toxic atmosphere of carbon dioxide. Surface temperatures reach around 470°C, hotter than Mercury due to the greenhouse effect. Its clouds are made of sulfuric acid, and it spins in the opposite direction compared to most planets."),
    ("Earth", "Earth is the only planet known to support life. It has a balanced climate, liquid water, and a protective atmosphere composed mainly of nitrogen and oxygen. Earth's magnetic field shields us from harmful solar radiation, and its moon plays a key role in tides and planetary stability."),
    ("Mars", "Mars is a cold desert world known as the \"Red Planet\" due to its iron-rich soil. It has the tallest volcano in the solar system, Olympus Mons, and deep canyons like Valles Marineris. Scientists believe Mars once had water, and exploration continues for signs of ancient life."),
    ("Jupiter", "Jupiter is the largest planet in our solar system, a massive gas giant with over 90 known moons. Its atmosphere is made mostly of hydrogen and helium. The Great Red Spot is a giant storm that has been raging for hundreds of years. Some of its moons, like Europa, may have subsurface oceans."),
    ("Saturn", "Saturn is famous for its spectacular ring system made of ice and rock. It's a gas giant like Jupiter, with over 140 moons, including Titan, which has a thick atmosphere. Saturn is less dense than water; if there were a big enough ocean, it could float!"),
    ("Uranus", "Uranus is an ice giant with a pale blue color caused by methane in its upper atmosphere. It rotates on its side, making its seasons extreme and unusual. Temperatures on Uranus can drop to -224°C, making it one of the coldest places in the solar system."),
    ("Neptune", "Neptune is the farthest planet from the Sun. It has a deep blue color and is known for its fierce winds, the fastest recorded in the solar system, reaching up to 2,100 km/h. Neptune has 14 known moons and faint rings, and its largest moon, Triton, orbits in the opposite direction."),
];

/// Arena of all bodies. Planet ids are `0..planet_count`, moon ids follow.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    pub star: Star,
    planets: Vec<OrbitalBody>,
    body_count: usize,
}

impl BodyRegistry {
    /// Build the stock eight-planet table.
    pub fn solar_system() -> Self {
        let mut next_moon = 8u32;
        let mut moon = |name: &str, radius: f32, distance: f32, speed: f64| {
            let id = BodyId(next_moon);
            next_moon += 1;
            OrbitalBody::new(id, name, radius, distance, speed)
        };

        let planets = vec![
            OrbitalBody::new(BodyId(0), "Mercury", 0.4, 12.0, 0.006),
            OrbitalBody::new(BodyId(1), "Venus", 0.8, 17.0, 0.004),
            OrbitalBody::new(BodyId(2), "Earth", 0.9, 22.0, 0.002)
                .with_moon(moon("Moon", 0.25, 3.0, 0.009)),
            OrbitalBody::new(BodyId(3), "Mars", 0.6, 28.0, 0.0009)
                .with_moon(moon("Phobos", 0.1, 2.0, 0.008))
                .with_moon(moon("Deimos", 0.2, 3.0, 0.007)),
            OrbitalBody::new(BodyId(4), "Jupiter", 1.9, 38.0, 0.0007).with_tilt(PI / 8.0),
            OrbitalBody::new(BodyId(5), "Saturn", 1.7, 45.0, 0.0005)
                .with_tilt(PI / 6.0)
                .with_ring(0.5, 2.5),
            OrbitalBody::new(BodyId(6), "Uranus", 1.4, 55.0, 0.0002)
                .with_tilt(PI / 6.0)
                .with_ring(0.0, 2.0),
            OrbitalBody::new(BodyId(7), "Neptune", 1.3, 63.0, 0.00008).with_tilt(PI / 8.0),
        ];

        Self::from_planets(Star::new(STAR_NAME, STAR_SCALE), planets)
    }

    /// Build from an arbitrary planet list. Ids must be dense and unique;
    /// see [`BodyRegistry::validate_ids`].
    pub fn from_planets(star: Star, planets: Vec<OrbitalBody>) -> Self {
        let mut body_count = 0;
        for planet in &planets {
            planet.for_each(&mut |_| body_count += 1);
        }
        Self { star, planets, body_count }
    }

    /// Check that planet and moon ids together are exactly `0..len`.
    pub fn validate_ids(&self) -> Result<(), ConfigError> {
        let mut ids = Vec::with_capacity(self.body_count);
        for planet in &self.planets {
            planet.for_each(&mut |b| ids.push(b.id.0));
        }
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        let dense = sorted.iter().enumerate().all(|(i, &id)| id as usize == i);
        if dense {
            Ok(())
        } else {
            Err(ConfigError::BodyIds { len: self.body_count, ids })
        }
    }

    pub fn planets(&self) -> &[OrbitalBody] {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut [OrbitalBody] {
        &mut self.planets
    }

    /// Total number of planets and moons.
    pub fn len(&self) -> usize {
        self.body_count
    }

    pub fn is_empty(&self) -> bool {
        self.body_count == 0
    }

    /// Look up any body, planet or moon.
    pub fn get(&self, id: BodyId) -> Option<&OrbitalBody> {
        let mut found = None;
        for planet in &self.planets {
            planet.for_each(&mut |b| {
                if b.id == id {
                    found = Some(b);
                }
            });
            if found.is_some() {
                break;
            }
        }
        found
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        let mut found = None;
        for planet in &self.planets {
            planet.for_each(&mut |b| {
                if found.is_none() && b.name == name {
                    found = Some(b.id);
                }
            });
        }
        found
    }

    /// The planet that owns `id`: itself for a planet, the parent for a moon.
    /// Pointer events on a moon land on its planet.
    pub fn focus_target(&self, id: BodyId) -> Option<BodyId> {
        self.planets
            .iter()
            .find(|p| p.id == id || p.moons.iter().any(|m| m.id == id))
            .map(|p| p.id)
    }

    pub fn planet(&self, id: BodyId) -> Option<&OrbitalBody> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Overlay text for a planet.
    pub fn info(&self, id: BodyId) -> Option<BodyInfo> {
        let planet = self.planet(id)?;
        PLANET_INFOS
            .iter()
            .find(|(title, _)| *title == planet.name)
            .map(|&(title, description)| BodyInfo { title, description })
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::solar_system()
    }
}
