use std::collections::HashSet;
use crate::assets::manifest::AssetManifest;

/// How the renderer should shade a mesh this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Material {
    /// Asset still loading: draw with a flat stand-in.
    Placeholder,
    /// Asset loaded: draw with this texture.
    Textured(String),
}

impl Material {
    pub fn is_ready(&self) -> bool {
        matches!(self, Material::Textured(_))
    }
}

/// Tracks which manifest assets the host has finished loading.
///
/// Loading happens outside the simulation; the host reports each path once
/// it is usable. Nothing here ever blocks a tick.
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    manifest: AssetManifest,
    ready: HashSet<String>,
}

impl AssetGate {
    pub fn new(manifest: AssetManifest) -> Self {
        Self { manifest, ready: HashSet::new() }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Record an asset path as loaded. Unknown paths are ignored.
    pub fn mark_ready(&mut self, path: &str) -> bool {
        let known = self.manifest.textures.values().any(|p| p == path)
            || self.manifest.rings.values().any(|p| p == path)
            || self.manifest.cues.values().any(|p| p == path)
            || self.manifest.music.as_deref() == Some(path);
        if !known {
            log::warn!("asset {:?} is not in the manifest", path);
            return false;
        }
        self.ready.insert(path.to_string())
    }

    pub fn is_ready(&self, path: &str) -> bool {
        self.ready.contains(path)
    }

    fn material(&self, path: Option<&str>) -> Material {
        match path {
            Some(p) if self.is_ready(p) => Material::Textured(p.to_string()),
            _ => Material::Placeholder,
        }
    }

    pub fn body_material(&self, body_name: &str, is_moon: bool) -> Material {
        self.material(self.manifest.texture_for(body_name, is_moon))
    }

    pub fn ring_material(&self, planet_name: &str) -> Material {
        self.material(self.manifest.ring_for(planet_name))
    }
}
