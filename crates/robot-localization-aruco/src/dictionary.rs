//! Predefined marker dictionary names.
//!
//! The bit tables themselves live in whatever detector implementation is
//! plugged in; here a dictionary is only an identifier plus the metadata the
//! localization layer needs for logging and validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The predefined ArUco / AprilTag dictionaries, numbered as in OpenCV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PredefinedDictionary {
    #[default]
    #[serde(rename = "DICT_4X4_50")]
    Dict4x4_50 = 0,
    #[serde(rename = "DICT_4X4_100")]
    Dict4x4_100 = 1,
    #[serde(rename = "DICT_4X4_250")]
    Dict4x4_250 = 2,
    #[serde(rename = "DICT_4X4_1000")]
    Dict4x4_1000 = 3,
    #[serde(rename = "DICT_5X5_50")]
    Dict5x5_50 = 4,
    #[serde(rename = "DICT_5X5_100")]
    Dict5x5_100 = 5,
    #[serde(rename = "DICT_5X5_250")]
    Dict5x5_250 = 6,
    #[serde(rename = "DICT_5X5_1000")]
    Dict5x5_1000 = 7,
    #[serde(rename = "DICT_6X6_50")]
    Dict6x6_50 = 8,
    #[serde(rename = "DICT_6X6_100")]
    Dict6x6_100 = 9,
    #[serde(rename = "DICT_6X6_250")]
    Dict6x6_250 = 10,
    #[serde(rename = "DICT_6X6_1000")]
    Dict6x6_1000 = 11,
    #[serde(rename = "DICT_7X7_50")]
    Dict7x7_50 = 12,
    #[serde(rename = "DICT_7X7_100")]
    Dict7x7_100 = 13,
    #[serde(rename = "DICT_7X7_250")]
    Dict7x7_250 = 14,
    #[serde(rename = "DICT_7X7_1000")]
    Dict7x7_1000 = 15,
    #[serde(rename = "DICT_ARUCO_ORIGINAL")]
    ArucoOriginal = 16,
    #[serde(rename = "DICT_APRILTAG_16h5")]
    AprilTag16h5 = 17,
    #[serde(rename = "DICT_APRILTAG_25h9")]
    AprilTag25h9 = 18,
    #[serde(rename = "DICT_APRILTAG_36h10")]
    AprilTag36h10 = 19,
    #[serde(rename = "DICT_APRILTAG_36h11")]
    AprilTag36h11 = 20,
    #[serde(rename = "DICT_ARUCO_MIP_36h12")]
    ArucoMip36h12 = 21,
}

impl PredefinedDictionary {
    /// Every predefined dictionary, in OpenCV numbering order.
    pub const ALL: [PredefinedDictionary; 22] = [
        Self::Dict4x4_50,
        Self::Dict4x4_100,
        Self::Dict4x4_250,
        Self::Dict4x4_1000,
        Self::Dict5x5_50,
        Self::Dict5x5_100,
        Self::Dict5x5_250,
        Self::Dict5x5_1000,
        Self::Dict6x6_50,
        Self::Dict6x6_100,
        Self::Dict6x6_250,
        Self::Dict6x6_1000,
        Self::Dict7x7_50,
        Self::Dict7x7_100,
        Self::Dict7x7_250,
        Self::Dict7x7_1000,
        Self::ArucoOriginal,
        Self::AprilTag16h5,
        Self::AprilTag25h9,
        Self::AprilTag36h10,
        Self::AprilTag36h11,
        Self::ArucoMip36h12,
    ];

    /// Canonical OpenCV name, e.g. `DICT_4X4_50`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dict4x4_50 => "DICT_4X4_50",
            Self::Dict4x4_100 => "DICT_4X4_100",
            Self::Dict4x4_250 => "DICT_4X4_250",
            Self::Dict4x4_1000 => "DICT_4X4_1000",
            Self::Dict5x5_50 => "DICT_5X5_50",
            Self::Dict5x5_100 => "DICT_5X5_100",
            Self::Dict5x5_250 => "DICT_5X5_250",
            Self::Dict5x5_1000 => "DICT_5X5_1000",
            Self::Dict6x6_50 => "DICT_6X6_50",
            Self::Dict6x6_100 => "DICT_6X6_100",
            Self::Dict6x6_250 => "DICT_6X6_250",
            Self::Dict6x6_1000 => "DICT_6X6_1000",
            Self::Dict7x7_50 => "DICT_7X7_50",
            Self::Dict7x7_100 => "DICT_7X7_100",
            Self::Dict7x7_250 => "DICT_7X7_250",
            Self::Dict7x7_1000 => "DICT_7X7_1000",
            Self::ArucoOriginal => "DICT_ARUCO_ORIGINAL",
            Self::AprilTag16h5 => "DICT_APRILTAG_16h5",
            Self::AprilTag25h9 => "DICT_APRILTAG_25h9",
            Self::AprilTag36h10 => "DICT_APRILTAG_36h10",
            Self::AprilTag36h11 => "DICT_APRILTAG_36h11",
            Self::ArucoMip36h12 => "DICT_ARUCO_MIP_36h12",
        }
    }

    /// Marker side length in inner bits.
    pub fn marker_size(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict4x4_100 | Self::Dict4x4_250 | Self::Dict4x4_1000 => 4,
            Self::Dict5x5_50 | Self::Dict5x5_100 | Self::Dict5x5_250 | Self::Dict5x5_1000 => 5,
            Self::Dict6x6_50 | Self::Dict6x6_100 | Self::Dict6x6_250 | Self::Dict6x6_1000 => 6,
            Self::Dict7x7_50 | Self::Dict7x7_100 | Self::Dict7x7_250 | Self::Dict7x7_1000 => 7,
            Self::ArucoOriginal => 5,
            Self::AprilTag16h5 => 4,
            Self::AprilTag25h9 => 5,
            Self::AprilTag36h10 | Self::AprilTag36h11 | Self::ArucoMip36h12 => 6,
        }
    }

    /// Number of marker ids in the dictionary (valid ids are `0..marker_count`).
    pub fn marker_count(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict5x5_50 | Self::Dict6x6_50 | Self::Dict7x7_50 => 50,
            Self::Dict4x4_100 | Self::Dict5x5_100 | Self::Dict6x6_100 | Self::Dict7x7_100 => 100,
            Self::Dict4x4_250 | Self::Dict5x5_250 | Self::Dict6x6_250 | Self::Dict7x7_250 => 250,
            Self::Dict4x4_1000 | Self::Dict5x5_1000 | Self::Dict6x6_1000 | Self::Dict7x7_1000 => {
                1000
            }
            Self::ArucoOriginal => 1024,
            Self::AprilTag16h5 => 30,
            Self::AprilTag25h9 => 35,
            Self::AprilTag36h10 => 2320,
            Self::AprilTag36h11 => 587,
            Self::ArucoMip36h12 => 250,
        }
    }

    /// Total number of inner bits per marker.
    #[inline]
    pub fn bit_count(self) -> usize {
        self.marker_size() * self.marker_size()
    }

    /// Whether `id` can be produced by a detector using this dictionary.
    #[inline]
    pub fn contains_id(self, id: i32) -> bool {
        usize::try_from(id).is_ok_and(|id| id < self.marker_count())
    }

    /// OpenCV enum value.
    #[inline]
    pub fn opencv_id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for PredefinedDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unrecognised dictionary name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown marker dictionary: {0}")]
pub struct UnknownDictionary(pub String);

impl FromStr for PredefinedDictionary {
    type Err = UnknownDictionary;

    /// Case-insensitive; the `DICT_` prefix is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        let wanted = wanted.strip_prefix("DICT_").unwrap_or(wanted.as_str());
        Self::ALL
            .into_iter()
            .find(|d| d.name()["DICT_".len()..].eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDictionary(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_opencv_order() {
        for (i, d) in PredefinedDictionary::ALL.iter().enumerate() {
            assert_eq!(d.opencv_id(), i as i32);
        }
    }

    #[test]
    fn parses_names_loosely() {
        assert_eq!(
            "DICT_6X6_250".parse::<PredefinedDictionary>(),
            Ok(PredefinedDictionary::Dict6x6_250)
        );
        assert_eq!(
            "apriltag_36h11".parse::<PredefinedDictionary>(),
            Ok(PredefinedDictionary::AprilTag36h11)
        );
        assert!("DICT_9X9_50".parse::<PredefinedDictionary>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for d in PredefinedDictionary::ALL {
            assert_eq!(d.to_string().parse::<PredefinedDictionary>(), Ok(d));
        }
    }

    #[test]
    fn serde_uses_opencv_names() {
        let json = serde_json::to_string(&PredefinedDictionary::AprilTag16h5).expect("serialize");
        assert_eq!(json, "\"DICT_APRILTAG_16h5\"");
        let back: PredefinedDictionary = serde_json::from_str("\"DICT_5X5_100\"").expect("parse");
        assert_eq!(back, PredefinedDictionary::Dict5x5_100);
    }

    #[test]
    fn id_range_follows_marker_count() {
        let d = PredefinedDictionary::Dict4x4_50;
        assert_eq!(d.bit_count(), 16);
        assert!(d.contains_id(0));
        assert!(d.contains_id(49));
        assert!(!d.contains_id(50));
        assert!(!d.contains_id(-1));
    }
}
