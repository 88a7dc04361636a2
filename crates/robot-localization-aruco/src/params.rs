use serde::{Deserialize, Serialize};

use crate::PredefinedDictionary;

/// Sub-pixel corner refinement requested from the detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRefinement {
    #[default]
    None,
    Subpix,
    Contour,
    AprilTag,
}

/// Tuning knobs forwarded to the marker detector.
///
/// The localization layer never reads these; they travel with the dictionary
/// in [`DetectorConfig`] so a detector implementation can honour them.
/// Defaults follow the usual ArUco detector defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Smallest adaptive-threshold window, in pixels.
    pub adaptive_thresh_win_size_min: u32,
    /// Largest adaptive-threshold window, in pixels.
    pub adaptive_thresh_win_size_max: u32,
    pub adaptive_thresh_win_size_step: u32,
    pub adaptive_thresh_constant: f32,
    /// Minimum marker perimeter relative to the largest frame dimension.
    pub min_marker_perimeter_rate: f32,
    /// Maximum marker perimeter relative to the largest frame dimension.
    pub max_marker_perimeter_rate: f32,
    pub polygonal_approx_accuracy_rate: f32,
    pub min_corner_distance_rate: f32,
    pub min_distance_to_border: u32,
    pub corner_refinement: CornerRefinement,
    pub corner_refinement_win_size: u32,
    pub corner_refinement_max_iterations: u32,
    pub corner_refinement_min_accuracy: f32,
    /// Fraction of the dictionary's correction capacity that may be used.
    pub error_correction_rate: f32,
    /// Also look for white-on-black markers.
    pub detect_inverted_marker: bool,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            adaptive_thresh_win_size_min: 3,
            adaptive_thresh_win_size_max: 23,
            adaptive_thresh_win_size_step: 10,
            adaptive_thresh_constant: 7.0,
            min_marker_perimeter_rate: 0.03,
            max_marker_perimeter_rate: 4.0,
            polygonal_approx_accuracy_rate: 0.03,
            min_corner_distance_rate: 0.05,
            min_distance_to_border: 3,
            corner_refinement: CornerRefinement::None,
            corner_refinement_win_size: 5,
            corner_refinement_max_iterations: 30,
            corner_refinement_min_accuracy: 0.1,
            error_correction_rate: 0.6,
            detect_inverted_marker: false,
        }
    }
}

/// Dictionary plus detector parameters: everything a detector call needs
/// besides the frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    pub dictionary: PredefinedDictionary,
    #[serde(default)]
    pub params: DetectorParams,
}

impl DetectorConfig {
    pub fn new(dictionary: PredefinedDictionary) -> Self {
        Self {
            dictionary,
            params: DetectorParams::default(),
        }
    }

    pub fn with_params(mut self, params: DetectorParams) -> Self {
        self.params = params;
        self
    }
}
