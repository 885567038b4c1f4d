use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest: texture and audio files the renderer loads for a session.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Surface texture per body name (planets, "Sun", "Moon").
    #[serde(default)]
    pub textures: HashMap<String, String>,
    /// Ring texture per planet name.
    #[serde(default)]
    pub rings: HashMap<String, String>,
    /// Cue name ("focus" / "unfocus") to audio file.
    #[serde(default)]
    pub cues: HashMap<String, String>,
    /// Looping background track.
    #[serde(default)]
    pub music: Option<String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Texture key for a body. Moons share one surface texture.
    pub fn texture_for(&self, body_name: &str, is_moon: bool) -> Option<&str> {
        let key = if is_moon { "Moon" } else { body_name };
        self.textures.get(key).map(String::as_str)
    }

    pub fn ring_for(&self, planet_name: &str) -> Option<&str> {
        self.rings.get(planet_name).map(String::as_str)
    }
}

impl Default for AssetManifest {
    /// The stock texture and sound set.
    fn default() -> Self {
        let textures = [
            ("Sun", "/textures/2k_sun.jpg"),
            ("Moon", "/textures/2k_moon.jpg"),
            ("Mercury", "/textures/2k_mercury.jpg"),
            ("Venus", "/textures/2k_venus.jpg"),
            ("Earth", "/textures/2k_earth_daymap.jpg"),
            ("Mars", "/textures/2k_mars.jpg"),
            ("Jupiter", "/textures/2k_jupiter.jpg"),
            ("Saturn", "/textures/saturn.jpg"),
            ("Uranus", "/textures/uranus.jpg"),
            ("Neptune", "/textures/neptune.jpg"),
        ];
        let rings = [
            ("Saturn", "/textures/saturn_ring.png"),
            ("Uranus", "/textures/uranus_ring.png"),
        ];
        let cues = [
            ("focus", "/sounds/card-open.mp3"),
            ("unfocus", "/sounds/card-close.mp3"),
        ];
        Self {
            textures: owned(&textures),
            rings: owned(&rings),
            cues: owned(&cues),
            music: Some("/music/bgmusic.mp3".to_string()),
        }
    }
}

fn owned(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
