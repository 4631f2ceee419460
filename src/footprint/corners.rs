//! Swept-footprint corner trajectories.
//!
//! Every path segment `path[i] -> path[i + 1]` yields one entry in each of four corner
//! sequences. The tangent comes from the outgoing segment only, so corners jump at sharp
//! turns; nothing is smoothed across points.
//!
//! Handedness: the normal is the tangent rotated 90° counter-clockwise, `n = (-t.y, t.x)`.
//! "Outer" corners sit at `+n` (left of travel) and "inner" corners at `-n`.

use kurbo::{Point, Vec2};

use crate::{
    footprint::envelope::Envelope,
    foundation::error::{PathvizError, PathvizResult},
    frames::RigidTransform,
};

/// What to do with a zero-length or non-finite segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DegeneratePolicy {
    /// Abort with [`PathvizError::DegenerateSegment`].
    #[default]
    Fail,
    /// Drop the segment from every corner sequence and keep going.
    Skip,
}

/// Unit tangent and normal of one path segment, anchored at its first point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentFrame {
    pub origin: Point,
    pub tangent: Vec2,
    pub normal: Vec2,
}

impl SegmentFrame {
    pub fn heading(&self) -> f64 {
        self.tangent.atan2()
    }

    pub fn pose(&self) -> RigidTransform {
        RigidTransform::from_pose(self.origin, self.heading())
    }
}

/// Direction frame of the segment `a -> b`.
///
/// `index` is only used to label the error.
pub fn segment_frame(index: usize, a: Point, b: Point) -> PathvizResult<SegmentFrame> {
    let v = b - a;
    let len = v.hypot();
    let tangent = if len.is_finite() {
        if len == 0.0 {
            return Err(PathvizError::DegenerateSegment { index, at: a });
        }
        v / len
    } else {
        rescaled_direction(a, b).ok_or(PathvizError::DegenerateSegment { index, at: a })?
    };
    Ok(SegmentFrame {
        origin: a,
        tangent,
        normal: Vec2::new(-tangent.y, tangent.x),
    })
}

// Direction of `a -> b` when the difference or its norm overflows f64.
fn rescaled_direction(a: Point, b: Point) -> Option<Vec2> {
    let half = b.to_vec2() * 0.5 - a.to_vec2() * 0.5;
    if !(half.x.is_finite() && half.y.is_finite()) {
        return None;
    }
    let scale = half.x.abs().max(half.y.abs());
    if scale == 0.0 {
        return None;
    }
    let unit = half / scale;
    Some(unit / unit.hypot())
}

/// The four corner trajectories of an envelope swept along a path.
///
/// All four sequences always have the same length.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Corners {
    /// Index of the path segment each entry came from. Skipped segments leave gaps.
    pub segments: Vec<usize>,
    pub front_outer: Vec<Point>,
    pub front_inner: Vec<Point>,
    pub back_outer: Vec<Point>,
    pub back_inner: Vec<Point>,
}

/// Names of the corner sequences, in [`Corners::iter`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    FrontOuter,
    FrontInner,
    BackOuter,
    BackInner,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::FrontOuter,
        Corner::FrontInner,
        Corner::BackOuter,
        Corner::BackInner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Corner::FrontOuter => "front_outer",
            Corner::FrontInner => "front_inner",
            Corner::BackOuter => "back_outer",
            Corner::BackInner => "back_inner",
        }
    }

    /// Whether the corner lies on the `+n` (left) side of travel.
    pub fn is_outer(self) -> bool {
        matches!(self, Corner::FrontOuter | Corner::BackOuter)
    }
}

impl Corners {
    fn with_capacity(n: usize) -> Self {
        Self {
            segments: Vec::with_capacity(n),
            front_outer: Vec::with_capacity(n),
            front_inner: Vec::with_capacity(n),
            back_outer: Vec::with_capacity(n),
            back_inner: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.front_outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.front_outer.is_empty()
    }

    pub fn get(&self, corner: Corner) -> &[Point] {
        match corner {
            Corner::FrontOuter => &self.front_outer,
            Corner::FrontInner => &self.front_inner,
            Corner::BackOuter => &self.back_outer,
            Corner::BackInner => &self.back_inner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Corner, &[Point])> + '_ {
        Corner::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn push(&mut self, index: usize, frame: &SegmentFrame, envelope: &Envelope) {
        self.segments.push(index);
        let along = frame.tangent * envelope.half_length();
        let across = frame.normal * envelope.half_width();
        let p = frame.origin;
        self.front_outer.push(p + along + across);
        self.front_inner.push(p + along - across);
        self.back_outer.push(p - along + across);
        self.back_inner.push(p - along - across);
    }
}

/// Corner trajectories of `envelope` along `path`, failing on any zero-length segment.
///
/// Paths with fewer than two points produce four empty sequences.
pub fn compute_footprint(path: &[Point], envelope: &Envelope) -> PathvizResult<Corners> {
    compute_footprint_with(path, envelope, DegeneratePolicy::Fail)
}

/// [`compute_footprint`] with an explicit degenerate-segment policy.
pub fn compute_footprint_with(
    path: &[Point],
    envelope: &Envelope,
    policy: DegeneratePolicy,
) -> PathvizResult<Corners> {
    let mut corners = Corners::with_capacity(path.len().saturating_sub(1));
    for (index, pair) in path.windows(2).enumerate() {
        match segment_frame(index, pair[0], pair[1]) {
            Ok(frame) => corners.push(index, &frame, envelope),
            Err(err @ PathvizError::DegenerateSegment { .. }) => match policy {
                DegeneratePolicy::Fail => return Err(err),
                DegeneratePolicy::Skip => {
                    tracing::warn!(
                        index,
                        x = pair[0].x,
                        y = pair[0].y,
                        "skipping zero-length segment"
                    );
                }
            },
            Err(err) => return Err(err),
        }
    }
    Ok(corners)
}

/// One pose per segment, located at the segment start and facing along it.
pub fn segment_poses(
    path: &[Point],
    policy: DegeneratePolicy,
) -> PathvizResult<Vec<RigidTransform>> {
    let mut poses = Vec::with_capacity(path.len().saturating_sub(1));
    for (index, pair) in path.windows(2).enumerate() {
        match segment_frame(index, pair[0], pair[1]) {
            Ok(frame) => poses.push(frame.pose()),
            Err(PathvizError::DegenerateSegment { .. }) if policy == DegeneratePolicy::Skip => {}
            Err(err) => return Err(err),
        }
    }
    Ok(poses)
}

#[cfg(test)]
#[path = "../../tests/unit/footprint/corners.rs"]
mod tests;
