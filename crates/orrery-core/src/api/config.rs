use serde::Deserialize;
use thiserror::Error;

/// How the parent frame rotation behaves once a selection is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameResetMode {
    /// Keep the last counter-rotation until something is selected again.
    Hold,
    /// Jump back to zero on the tick the selection closes.
    Snap,
    /// Ease back to zero alongside the camera.
    #[default]
    Smooth,
}

/// Camera pose in plain arrays so it can be read from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PoseConfig {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 100.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

/// Session configuration. Every field has a default matching the stock scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Per-tick exponential smoothing factor for camera and frame, in (0, 1].
    pub lerp_factor: f32,
    /// Camera-to-default distance under which a reset counts as finished.
    pub converge_threshold: f32,
    /// Distance along +Z between a focused body and the camera.
    pub focus_offset: f32,
    /// Self-rotation advanced per tick while a body is selected.
    pub self_spin_rate: f64,
    /// Self-rotation advanced per tick by the central star.
    pub star_spin_rate: f64,
    /// Overview pose the camera returns to after a reset.
    pub default_camera: PoseConfig,
    pub field_of_view_deg: f32,
    /// Manual navigation distance limits around the look-at target.
    pub min_distance: f32,
    pub max_distance: f32,
    /// Per-tick smoothing factor for orbit ring tint, in (0, 1].
    pub hint_rate: f32,
    pub hint_idle_color: u32,
    pub hint_hover_color: u32,
    pub frame_reset: FrameResetMode,
    /// Seconds per simulation tick.
    pub fixed_dt: f32,
    /// Vertical resolution feeding the falling-star streak width.
    pub resolution_y: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            converge_threshold: 0.2,
            focus_offset: 10.0,
            self_spin_rate: 0.0005,
            star_spin_rate: 0.001,
            default_camera: PoseConfig::default(),
            field_of_view_deg: 35.0,
            min_distance: 20.0,
            max_distance: 200.0,
            hint_rate: 0.01,
            hint_idle_color: 0x48434f,
            hint_hover_color: 0x00ffaa,
            frame_reset: FrameResetMode::Smooth,
            fixed_dt: 1.0 / 60.0,
            resolution_y: 1080.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be in (0, 1], got {value}")]
    FactorOutOfRange { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("min_distance ({min}) exceeds max_distance ({max})")]
    DistanceBounds { min: f32, max: f32 },
    #[error("body ids must be unique and cover 0..{len}, got {ids:?}")]
    BodyIds { len: usize, ids: Vec<u32> },
}

impl OrreryConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings under which the controllers could never converge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("lerp_factor", self.lerp_factor), ("hint_rate", self.hint_rate)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("converge_threshold", self.converge_threshold),
            ("focus_offset", self.focus_offset),
            ("fixed_dt", self.fixed_dt),
            ("resolution_y", self.resolution_y),
            ("min_distance", self.min_distance),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::DistanceBounds {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(OrreryConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = OrreryConfig::from_json(r#"{ "lerp_factor": 0.25, "frame_reset": "hold" }"#).unwrap();
        assert_eq!(cfg.lerp_factor, 0.25);
        assert_eq!(cfg.frame_reset, FrameResetMode::Hold);
        assert_eq!(cfg.default_camera.position, [0.0, 5.0, 100.0]);
    }

    #[test]
    fn zero_lerp_factor_is_rejected() {
        let err = OrreryConfig::from_json(r#"{ "lerp_factor": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::FactorOutOfRange { field: "lerp_factor", .. }));
    }

    #[test]
    fn lerp_factor_above_one_is_rejected() {
        let cfg = OrreryConfig { lerp_factor: 1.5, ..OrreryConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = OrreryConfig { lerp_factor: 1.0, ..OrreryConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn inverted_distance_bounds_are_rejected() {
        let cfg = OrreryConfig { min_distance: 300.0, ..OrreryConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::DistanceBounds { .. })));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(OrreryConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
