use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One detected marker: id plus its corners, clockwise from top-left.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerObservation {
    pub id: i32,
    pub corners: Vec<Point2<f32>>,
}

impl MarkerObservation {
    pub fn new(id: i32, corners: impl Into<Vec<Point2<f32>>>) -> Self {
        Self {
            id,
            corners: corners.into(),
        }
    }
}

/// Output of one detector call.
///
/// `ids[i]` belongs to `corners[i]`. Corner sets are plain vectors because
/// the detector is an external collaborator: a quad with the wrong number of
/// points is representable here and rejected later by the tracker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub ids: Vec<i32>,
    pub corners: Vec<Vec<Point2<f32>>>,
    /// Candidate quads that did not decode to a dictionary marker.
    #[serde(default)]
    pub rejected: Vec<Vec<Point2<f32>>>,
}

impl DetectionResult {
    /// Build a result from observations, keeping their order.
    pub fn from_observations(observations: impl IntoIterator<Item = MarkerObservation>) -> Self {
        let (ids, corners) = observations
            .into_iter()
            .map(|o| (o.id, o.corners))
            .unzip();
        Self {
            ids,
            corners,
            rejected: Vec::new(),
        }
    }

    pub fn with_rejected(mut self, rejected: Vec<Vec<Point2<f32>>>) -> Self {
        self.rejected = rejected;
        self
    }

    /// Number of accepted markers.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len().min(self.corners.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accepted markers in detection order.
    pub fn observations(&self) -> impl Iterator<Item = MarkerObservation> + '_ {
        self.ids
            .iter()
            .zip(&self.corners)
            .map(|(&id, corners)| MarkerObservation::new(id, corners.clone()))
    }
}
