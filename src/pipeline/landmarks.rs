use image::RgbImage;

use crate::error::{Error, Result};
use crate::shapes::point::Point;

/// The standard 68-point facial landmark numbering: 0-16 jaw contour, 17-26
/// eyebrows, 27-35 nose, 36-47 eyes, 48-67 mouth.
pub const LANDMARK_COUNT: usize = 68;

/// Ordered set of exactly 68 landmark points for one detected face.
/// Immutable after creation; the length invariant is enforced at
/// construction so downstream indexing never has to re-check it.
#[derive(Debug, Clone)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Result<LandmarkSet> {
        if points.len() != LANDMARK_COUNT {
            return Err(Error::InvalidLandmarkSet {
                count: points.len(),
            });
        }

        Ok(LandmarkSet { points })
    }

    /// Panics if `idx >= 68`. Callers index with the static region table,
    /// which only holds in-range values.
    pub fn point(&self, idx: usize) -> Point {
        self.points[idx]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Boundary to the face/landmark detector. Implementations return one
/// landmark set per detected face, in their own detection order; the
/// pipeline picks the first when several are present.
pub trait LandmarkProvider {
    fn detect(&mut self, img: &RgbImage) -> Result<Vec<LandmarkSet>>;
}
