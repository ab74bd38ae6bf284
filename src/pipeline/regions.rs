use super::landmarks::LandmarkSet;
use crate::shapes::point::Point;

/// The five facial areas sampled for color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LeftEye,
    RightEye,
    Nose,
    Jaw,
    Lips,
}

/// Sample-point definition table: region -> pair of landmark indices whose
/// midpoint is the region's sample coordinate. Fixed, not configurable;
/// kept as data so a different numbering scheme only touches this table.
pub const REGION_ENDPOINTS: [(Region, [usize; 2]); 5] = [
    (Region::LeftEye, [36, 42]),
    (Region::RightEye, [45, 39]),
    (Region::Nose, [31, 35]),
    (Region::Jaw, [0, 16]),
    (Region::Lips, [48, 54]),
];

impl Region {
    pub const ALL: [Region; 5] = [
        Region::LeftEye,
        Region::RightEye,
        Region::Nose,
        Region::Jaw,
        Region::Lips,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::LeftEye => "left eye",
            Region::RightEye => "right eye",
            Region::Nose => "nose",
            Region::Jaw => "jaw",
            Region::Lips => "lips",
        }
    }

    pub fn endpoints(&self) -> [usize; 2] {
        match self {
            Region::LeftEye => [36, 42],
            Region::RightEye => [45, 39],
            Region::Nose => [31, 35],
            Region::Jaw => [0, 16],
            Region::Lips => [48, 54],
        }
    }

    /// Feature Locator: the region's representative pixel coordinate.
    /// Pure; the 68-point invariant is guaranteed by `LandmarkSet`.
    pub fn sample_point(&self, landmarks: &LandmarkSet) -> Point {
        let [a, b] = self.endpoints();
        landmarks.point(a).midpoint(landmarks.point(b))
    }
}

/// One sample coordinate per region, in `Region::ALL` order.
pub fn locate(landmarks: &LandmarkSet) -> [(Region, Point); 5] {
    Region::ALL.map(|r| (r, r.sample_point(landmarks)))
}
