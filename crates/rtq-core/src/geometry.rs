//! Geometric projection kernels: axial, hoop, and radial components of a
//! tensor relative to a user-defined rotation axis.

use crate::error::{QuantityError, Result};
use crate::tensor::{Point3, RankTwoTensor};

/// A rotation axis defined by two distinct points.
///
/// Validation happens here, at construction: a zero-length axis is a
/// configuration mistake and is rejected before any kernel can divide by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    origin: Point3,
    direction: Point3,
}

impl Axis {
    /// Build an axis through `point1` and `point2`.
    ///
    /// # Errors
    /// Returns [`QuantityError::DegenerateAxis`] when the points coincide.
    pub fn new(point1: &Point3, point2: &Point3) -> Result<Self> {
        let span = point2 - point1;
        if point1 == point2 {
            return Err(QuantityError::DegenerateAxis {
                x: point1.x,
                y: point1.y,
                z: point1.z,
            });
        }

        Ok(Self {
            origin: *point1,
            direction: span / span.norm(),
        })
    }

    /// A point the axis passes through.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Unit direction of the axis.
    pub fn direction(&self) -> Point3 {
        self.direction
    }
}

/// Unit vector from the axis to `curr_point`, normal to the axis.
///
/// Finds the nearest point on the axis by orthogonally projecting the
/// position onto the axis direction, then normalizes the offset from that
/// nearest point to `curr_point`.
///
/// When `curr_point` lies exactly on the axis the offset has zero length and
/// the returned vector is NaN in every component. That is a numerical domain
/// condition the caller can detect, matching the zero-von-Mises triaxiality
/// policy, not an error.
pub fn normal_position_vector(axis: &Axis, curr_point: &Point3) -> Point3 {
    let to_origin = axis.origin() - curr_point;
    let projection = axis.direction().dot(&to_origin);
    let nearest = axis.origin() - projection * axis.direction();

    let normal = curr_point - nearest;
    normal / normal.norm()
}

/// Tensor component along the axis direction: `a · T · a` with the unit axis
/// as the associated direction.
pub fn axial_stress(tensor: &RankTwoTensor, axis: &Axis) -> (f64, Point3) {
    let direction = axis.direction();

    (tensor.directional_value(&direction), direction)
}

/// Circumferential tensor component at `curr_point`.
///
/// With `xp` the unit normal from the axis and `yp` the unit axis direction,
/// the hoop direction is `zp = xp × yp`.
pub fn hoop_stress(tensor: &RankTwoTensor, axis: &Axis, curr_point: &Point3) -> (f64, Point3) {
    let xp = normal_position_vector(axis, curr_point);
    let yp = axis.direction();
    let zp = xp.cross(&yp);

    (tensor.directional_value(&zp), zp)
}

/// Tensor component along the outward normal from the axis at `curr_point`.
pub fn radial_stress(tensor: &RankTwoTensor, axis: &Axis, curr_point: &Point3) -> (f64, Point3) {
    let normal = normal_position_vector(axis, curr_point);

    (tensor.directional_value(&normal), normal)
}
