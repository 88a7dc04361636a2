//! Per-operation outcome types and the legacy integer status codes.

use serde::{Deserialize, Serialize};

/// Raw index value meaning "no marker with the requested id".
pub const NOT_MARKER_INDEX: i32 = -1;

/// Marker id meaning "whichever marker was detected first".
pub const ANY_MARKER: i32 = -1;

/// Flat status codes shared by every stage of the localization loop.
///
/// Prefer the per-operation types ([`DetectStatus`], [`MarkerIndex`]); this
/// enum exists for callers that exchange the integer codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    NotMarkerIndex = -1,
    Ok = 0,
    EndOfVideoFile = 1,
    MarkerNotDetected = 2,
}

impl Status {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::NotMarkerIndex),
            0 => Some(Self::Ok),
            1 => Some(Self::EndOfVideoFile),
            2 => Some(Self::MarkerNotDetected),
            _ => None,
        }
    }
}

/// Outcome of one detector call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectStatus {
    /// At least one marker was found.
    Detected { count: usize },
    MarkerNotDetected,
}

impl DetectStatus {
    pub(crate) fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::MarkerNotDetected
        } else {
            Self::Detected { count }
        }
    }

    #[inline]
    pub fn is_detected(self) -> bool {
        matches!(self, Self::Detected { .. })
    }
}

impl From<DetectStatus> for Status {
    fn from(value: DetectStatus) -> Self {
        match value {
            DetectStatus::Detected { .. } => Status::Ok,
            DetectStatus::MarkerNotDetected => Status::MarkerNotDetected,
        }
    }
}

/// Position of the requested marker inside the current detection session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerIndex {
    Found(usize),
    NotFound,
}

impl MarkerIndex {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found(i) => Some(i),
            Self::NotFound => None,
        }
    }

    /// Index as a signed integer, [`NOT_MARKER_INDEX`] when absent.
    pub fn as_raw(self) -> i32 {
        self.index()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(NOT_MARKER_INDEX)
    }
}

impl From<Option<usize>> for MarkerIndex {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

impl From<MarkerIndex> for Status {
    fn from(value: MarkerIndex) -> Self {
        match value {
            MarkerIndex::Found(_) => Status::Ok,
            MarkerIndex::NotFound => Status::NotMarkerIndex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_are_stable() {
        assert_eq!(Status::NotMarkerIndex.code(), NOT_MARKER_INDEX);
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::EndOfVideoFile.code(), 1);
        assert_eq!(Status::MarkerNotDetected.code(), 2);
        for s in [
            Status::NotMarkerIndex,
            Status::Ok,
            Status::EndOfVideoFile,
            Status::MarkerNotDetected,
        ] {
            assert_eq!(Status::from_code(s.code()), Some(s));
        }
        assert_eq!(Status::from_code(3), None);
    }

    #[test]
    fn per_operation_results_map_to_legacy_codes() {
        assert_eq!(Status::from(DetectStatus::from_count(2)), Status::Ok);
        assert_eq!(
            Status::from(DetectStatus::from_count(0)),
            Status::MarkerNotDetected
        );
        assert_eq!(Status::from(MarkerIndex::Found(0)), Status::Ok);
        assert_eq!(Status::from(MarkerIndex::NotFound), Status::NotMarkerIndex);
        assert_eq!(MarkerIndex::NotFound.as_raw(), -1);
        assert_eq!(MarkerIndex::Found(3).as_raw(), 3);
    }
}
