//! Rigid 2D transforms and a small frame hierarchy.
//!
//! A frame hierarchy is a user-defined `enum` implementing [`FrameTree`]; each frame's pose
//! relative to its parent lives in a [`FrameRegistry`]. [`FramedPoint::in_frame`] walks the
//! hierarchy through the lowest common ancestor of the two frames.

use std::marker::PhantomData;

use kurbo::{Affine, Point, Vec2};

use crate::foundation::error::{PathvizError, PathvizResult};

/// A pose in the plane: rotation about the local origin followed by translation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RigidTransform {
    pub translation: Vec2,
    pub rotation: f64, // radians, counter-clockwise
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
    };

    pub fn new(translation: Vec2, rotation: f64) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose located at `origin` facing `heading` radians.
    pub fn from_pose(origin: Point, heading: f64) -> Self {
        Self::new(origin.to_vec2(), heading)
    }

    /// Re-express a pose given relative to `parent` in the frame `parent` itself lives in.
    pub fn then_in(self, parent: Self) -> Self {
        let (sin, cos) = parent.rotation.sin_cos();
        let p = self.translation;
        Self {
            translation: Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
                + parent.translation,
            rotation: self.rotation + parent.rotation,
        }
    }

    /// Swap the parent/child relation: the pose of the parent as seen from the child.
    pub fn inverse(self) -> Self {
        let (sin, cos) = (-self.rotation).sin_cos();
        let p = self.translation;
        Self {
            translation: Vec2::new(-p.x * cos + p.y * sin, -p.x * sin - p.y * cos),
            rotation: -self.rotation,
        }
    }

    /// Map a point from this pose's local frame into the parent frame.
    pub fn apply(self, local: Point) -> Point {
        let (sin, cos) = self.rotation.sin_cos();
        Point::new(
            local.x * cos - local.y * sin + self.translation.x,
            local.x * sin + local.y * cos + self.translation.y,
        )
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translation) * Affine::rotate(self.rotation)
    }
}

/// A closed set of named frames arranged as a tree.
pub trait FrameTree: Copy + Eq + std::fmt::Debug {
    /// Number of frames; `index()` must be below this.
    const COUNT: usize;

    /// The enclosing frame, or `None` for the root.
    fn parent(self) -> Option<Self>;

    /// Dense index used to address the registry.
    fn index(self) -> usize;

    /// `self`, its parent, and so on up to and including the root.
    fn chain_to_root(self) -> PathvizResult<Vec<Self>> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            if chain.len() > Self::COUNT {
                return Err(PathvizError::validation(format!(
                    "frame {self:?} has a cyclic parent chain"
                )));
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }

    /// Frames to leave on the way up from `self`, and frames to enter on the way down to
    /// `other`, stopping at their lowest common ancestor (which appears in neither list).
    fn path_to(self, other: Self) -> PathvizResult<(Vec<Self>, Vec<Self>)> {
        let mut up = self.chain_to_root()?;
        let mut down = other.chain_to_root()?;
        if up.last() != down.last() {
            return Err(PathvizError::validation(format!(
                "frames {self:?} and {other:?} do not share a root"
            )));
        }
        while !up.is_empty() && !down.is_empty() && up.last() == down.last() {
            up.pop();
            down.pop();
        }
        down.reverse();
        Ok((up, down))
    }
}

/// Pose of every frame relative to its parent. Unset frames sit at the identity.
#[derive(Clone, Debug)]
pub struct FrameRegistry<F: FrameTree> {
    poses: Vec<RigidTransform>,
    _frames: PhantomData<F>,
}

impl<F: FrameTree> Default for FrameRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FrameTree> FrameRegistry<F> {
    pub fn new() -> Self {
        Self {
            poses: vec![RigidTransform::IDENTITY; F::COUNT],
            _frames: PhantomData,
        }
    }

    pub fn set(&mut self, frame: F, pose: RigidTransform) -> PathvizResult<()> {
        let slot = self.poses.get_mut(frame.index()).ok_or_else(|| {
            PathvizError::validation(format!("frame {frame:?} index exceeds COUNT"))
        })?;
        *slot = pose;
        Ok(())
    }

    pub fn get(&self, frame: F) -> PathvizResult<RigidTransform> {
        self.poses.get(frame.index()).copied().ok_or_else(|| {
            PathvizError::validation(format!("frame {frame:?} index exceeds COUNT"))
        })
    }
}

/// A pose tagged with the frame it is expressed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramedPoint<F: FrameTree> {
    pub frame: F,
    pub pose: RigidTransform,
}

impl<F: FrameTree> FramedPoint<F> {
    pub fn new(frame: F, position: Point, rotation: f64) -> Self {
        Self {
            frame,
            pose: RigidTransform::from_pose(position, rotation),
        }
    }

    pub fn position(&self) -> Point {
        self.pose.translation.to_point()
    }

    /// The same physical pose expressed in `target`.
    pub fn in_frame(&self, registry: &FrameRegistry<F>, target: F) -> PathvizResult<Self> {
        let (up, down) = self.frame.path_to(target)?;
        let mut pose = self.pose;
        for frame in up {
            pose = pose.then_in(registry.get(frame)?);
        }
        for frame in down {
            pose = pose.then_in(registry.get(frame)?.inverse());
        }
        Ok(Self {
            frame: target,
            pose,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/frames/frames.rs"]
mod tests;
