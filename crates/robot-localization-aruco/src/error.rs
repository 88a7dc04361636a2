use robot_localization_core::GeometryError;

/// Why a frame did not produce a pose update.
///
/// `NoMarkerDetected` and `TargetMarkerAbsent` are routine (occlusion, marker
/// out of view) and leave the tracker as it was. `Geometry` means the
/// detector broke its four-corner contract.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizeError {
    #[error("no markers detected in the current frame")]
    NoMarkerDetected,
    #[error("marker {id} not among the detected markers")]
    TargetMarkerAbsent { id: i32 },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl LocalizeError {
    /// Whether the failure is an expected per-frame condition.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Geometry(_))
    }
}
