//! JSON configuration for a localization session.

use std::{fs, path::Path};

use nalgebra::Vector2;
use robot_localization_aruco::{
    ArucoLocalization, DetectorConfig, DetectorParams, MarkerDetector, PredefinedDictionary,
    ANY_MARKER,
};
use robot_localization_core::TransferData;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("pixel resolution must be finite and positive, got [{x}, {y}]")]
    InvalidResolution { x: f32, y: f32 },
    #[error("marker id {id} is outside {dictionary}")]
    MarkerOutsideDictionary {
        id: i32,
        dictionary: PredefinedDictionary,
    },
}

fn default_frame_width() -> usize {
    640
}

fn default_frame_height() -> usize {
    480
}

fn default_marker_id() -> i32 {
    ANY_MARKER
}

/// Everything needed to set up one tracked robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationConfig {
    #[serde(default)]
    pub dictionary: PredefinedDictionary,
    #[serde(default = "default_frame_width")]
    pub frame_width: usize,
    #[serde(default = "default_frame_height")]
    pub frame_height: usize,
    /// Metric units per pixel along x and y.
    pub pixel_resolution: [f32; 2],
    /// Marker to follow; `-1` follows whichever marker is detected first.
    #[serde(default = "default_marker_id")]
    pub marker_id: i32,
    #[serde(default)]
    pub detector: Option<DetectorParams>,
}

impl LocalizationConfig {
    pub fn new(pixel_resolution: [f32; 2]) -> Self {
        Self {
            dictionary: PredefinedDictionary::default(),
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
            pixel_resolution,
            marker_id: default_marker_id(),
            detector: None,
        }
    }

    /// Load a JSON config from disk and validate it.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [x, y] = self.pixel_resolution;
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(ConfigError::InvalidResolution { x, y });
        }
        if self.marker_id != ANY_MARKER && !self.dictionary.contains_id(self.marker_id) {
            return Err(ConfigError::MarkerOutsideDictionary {
                id: self.marker_id,
                dictionary: self.dictionary,
            });
        }
        Ok(())
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::new(self.dictionary).with_params(self.detector.clone().unwrap_or_default())
    }

    /// Build a controller around `detector` with this dictionary and frame size.
    pub fn build_controller<D: MarkerDetector>(&self, detector: D) -> ArucoLocalization<D> {
        let mut loc = ArucoLocalization::with_config(detector, self.detector_config());
        loc.set_frame_size(self.frame_width, self.frame_height);
        loc
    }

    /// Fresh tracker with this pixel resolution.
    pub fn build_tracker(&self) -> TransferData {
        let [x, y] = self.pixel_resolution;
        TransferData::new(Vector2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let cfg: LocalizationConfig =
            serde_json::from_str(r#"{ "pixel_resolution": [0.002, 0.002] }"#).expect("parse");
        assert_eq!(cfg, LocalizationConfig::new([0.002, 0.002]));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_resolution() {
        let cfg = LocalizationConfig::new([0.0, 0.01]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidResolution { .. })
        ));
    }

    #[test]
    fn rejects_marker_outside_dictionary() {
        let mut cfg = LocalizationConfig::new([0.01, 0.01]);
        cfg.dictionary = PredefinedDictionary::AprilTag16h5;
        cfg.marker_id = 30;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MarkerOutsideDictionary { id: 30, .. })
        ));
        cfg.marker_id = 29;
        assert!(cfg.validate().is_ok());
    }
}
