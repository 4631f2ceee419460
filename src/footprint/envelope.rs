use kurbo::Point;

use crate::{
    foundation::error::{PathvizError, PathvizResult},
    frames::RigidTransform,
};

/// Rectangular robot footprint centered on the robot's reference point.
///
/// `lateral_width` is measured perpendicular to the direction of travel and
/// `longitudinal_length` along it. Both are in the same units as the path (feet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    lateral_width: f64,
    longitudinal_length: f64,
}

impl Envelope {
    pub fn new(lateral_width: f64, longitudinal_length: f64) -> PathvizResult<Self> {
        for (name, v) in [
            ("lateral width", lateral_width),
            ("longitudinal length", longitudinal_length),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(PathvizError::validation(format!(
                    "robot {name} must be positive and finite, got {v}"
                )));
            }
        }
        Ok(Self {
            lateral_width,
            longitudinal_length,
        })
    }

    pub fn lateral_width(self) -> f64 {
        self.lateral_width
    }

    pub fn longitudinal_length(self) -> f64 {
        self.longitudinal_length
    }

    pub(crate) fn half_width(self) -> f64 {
        self.lateral_width / 2.0
    }

    pub(crate) fn half_length(self) -> f64 {
        self.longitudinal_length / 2.0
    }

    /// Corners of the rectangle placed at `pose`, heading along the pose's +x axis.
    ///
    /// Order is front-outer, front-inner, back-inner, back-outer so consecutive entries
    /// trace the outline.
    pub fn outline(self, pose: RigidTransform) -> [Point; 4] {
        let (hl, hw) = (self.half_length(), self.half_width());
        [
            pose.apply(Point::new(hl, hw)),
            pose.apply(Point::new(hl, -hw)),
            pose.apply(Point::new(-hl, -hw)),
            pose.apply(Point::new(-hl, hw)),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/footprint/envelope.rs"]
mod tests;
