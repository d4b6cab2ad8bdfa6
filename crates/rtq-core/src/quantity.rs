//! Quantity selector and dispatch.
//!
//! The selector set is closed and the names are public contract: they are
//! how configurations pick a quantity, so adding a variant is backward
//! compatible while renaming or removing one is a breaking change. Dispatch
//! is an exhaustive match, so a new variant is a compile-time-checked,
//! single-site addition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuantityError, Result};
use crate::geometry::{self, Axis};
use crate::invariants;
use crate::principal;
use crate::tensor::{Point3, RankTwoTensor};

/// Scalar quantity derived from a rank-two tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarQuantity {
    VonMisesStress,
    EffectiveStrain,
    Hydrostatic,
    L2norm,
    MaxPrincipal,
    MidPrincipal,
    MinPrincipal,
    VolumetricStrain,
    FirstInvariant,
    SecondInvariant,
    ThirdInvariant,
    AxialStress,
    HoopStress,
    RadialStress,
    TriaxialityStress,
    Direction,
}

impl ScalarQuantity {
    /// Every selector, in contract order.
    pub const ALL: [ScalarQuantity; 16] = [
        ScalarQuantity::VonMisesStress,
        ScalarQuantity::EffectiveStrain,
        ScalarQuantity::Hydrostatic,
        ScalarQuantity::L2norm,
        ScalarQuantity::MaxPrincipal,
        ScalarQuantity::MidPrincipal,
        ScalarQuantity::MinPrincipal,
        ScalarQuantity::VolumetricStrain,
        ScalarQuantity::FirstInvariant,
        ScalarQuantity::SecondInvariant,
        ScalarQuantity::ThirdInvariant,
        ScalarQuantity::AxialStress,
        ScalarQuantity::HoopStress,
        ScalarQuantity::RadialStress,
        ScalarQuantity::TriaxialityStress,
        ScalarQuantity::Direction,
    ];

    /// Stable configuration name of the selector.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarQuantity::VonMisesStress => "VonMisesStress",
            ScalarQuantity::EffectiveStrain => "EffectiveStrain",
            ScalarQuantity::Hydrostatic => "Hydrostatic",
            ScalarQuantity::L2norm => "L2norm",
            ScalarQuantity::MaxPrincipal => "MaxPrincipal",
            ScalarQuantity::MidPrincipal => "MidPrincipal",
            ScalarQuantity::MinPrincipal => "MinPrincipal",
            ScalarQuantity::VolumetricStrain => "VolumetricStrain",
            ScalarQuantity::FirstInvariant => "FirstInvariant",
            ScalarQuantity::SecondInvariant => "SecondInvariant",
            ScalarQuantity::ThirdInvariant => "ThirdInvariant",
            ScalarQuantity::AxialStress => "AxialStress",
            ScalarQuantity::HoopStress => "HoopStress",
            ScalarQuantity::RadialStress => "RadialStress",
            ScalarQuantity::TriaxialityStress => "TriaxialityStress",
            ScalarQuantity::Direction => "Direction",
        }
    }

    /// Space-separated list of every legal name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|q| q.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ScalarQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarQuantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.name() == s)
            .ok_or_else(|| QuantityError::UnknownQuantity {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// A computed scalar together with its associated direction, when the
/// quantity defines one.
///
/// Quantities without a natural direction carry `None`; a caller can never
/// observe an unset or stale direction slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityValue {
    pub value: f64,
    pub direction: Option<Point3>,
}

impl QuantityValue {
    fn scalar(value: f64) -> Self {
        Self {
            value,
            direction: None,
        }
    }

    fn directed(value: f64, direction: Point3) -> Self {
        Self {
            value,
            direction: Some(direction),
        }
    }
}

/// Tensor value along an arbitrary caller-supplied direction, `d · T · d`.
/// The direction is assumed to already be unit length.
pub fn direction_value(tensor: &RankTwoTensor, direction: &Point3) -> f64 {
    tensor.directional_value(direction)
}

/// Compute the selected scalar quantity of `tensor`.
///
/// `point1` and `point2` define the rotation axis and are only read by the
/// axial, hoop, and radial quantities; `curr_point` is the evaluation point
/// and is only read by hoop and radial; `direction` is only read by
/// [`ScalarQuantity::Direction`] and is echoed back in the result.
///
/// # Errors
/// Returns [`QuantityError::DegenerateAxis`] when an axial, hoop, or radial
/// quantity is requested with `point1 == point2`.
///
/// # Example
/// ```
/// use rtq_core::{get_quantity, Point3, RankTwoTensor, ScalarQuantity};
///
/// let stress = RankTwoTensor::diagonal(5.0, 2.0, 3.0);
/// let origin = Point3::zeros();
/// let result = get_quantity(
///     &stress,
///     ScalarQuantity::AxialStress,
///     &origin,
///     &Point3::x(),
///     &origin,
///     &Point3::zeros(),
/// )
/// .unwrap();
/// assert_eq!(result.value, 5.0);
/// assert_eq!(result.direction, Some(Point3::x()));
/// ```
pub fn get_quantity(
    tensor: &RankTwoTensor,
    quantity: ScalarQuantity,
    point1: &Point3,
    point2: &Point3,
    curr_point: &Point3,
    direction: &Point3,
) -> Result<QuantityValue> {
    let result = match quantity {
        ScalarQuantity::VonMisesStress => {
            QuantityValue::scalar(invariants::von_mises_stress(tensor))
        }
        ScalarQuantity::EffectiveStrain => {
            QuantityValue::scalar(invariants::effective_strain(tensor))
        }
        ScalarQuantity::Hydrostatic => QuantityValue::scalar(invariants::hydrostatic(tensor)),
        ScalarQuantity::L2norm => QuantityValue::scalar(invariants::l2_norm(tensor)),
        ScalarQuantity::MaxPrincipal => {
            let (value, dir) = principal::max_principal(tensor);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::MidPrincipal => {
            let (value, dir) = principal::mid_principal(tensor);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::MinPrincipal => {
            let (value, dir) = principal::min_principal(tensor);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::VolumetricStrain => {
            QuantityValue::scalar(invariants::volumetric_strain(tensor))
        }
        ScalarQuantity::FirstInvariant => QuantityValue::scalar(invariants::first_invariant(tensor)),
        ScalarQuantity::SecondInvariant => {
            QuantityValue::scalar(invariants::second_invariant(tensor))
        }
        ScalarQuantity::ThirdInvariant => QuantityValue::scalar(invariants::third_invariant(tensor)),
        ScalarQuantity::AxialStress => {
            let axis = Axis::new(point1, point2)?;
            let (value, dir) = geometry::axial_stress(tensor, &axis);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::HoopStress => {
            let axis = Axis::new(point1, point2)?;
            let (value, dir) = geometry::hoop_stress(tensor, &axis, curr_point);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::RadialStress => {
            let axis = Axis::new(point1, point2)?;
            let (value, dir) = geometry::radial_stress(tensor, &axis, curr_point);
            QuantityValue::directed(value, dir)
        }
        ScalarQuantity::TriaxialityStress => {
            QuantityValue::scalar(invariants::triaxiality_stress(tensor))
        }
        ScalarQuantity::Direction => {
            QuantityValue::directed(direction_value(tensor, direction), *direction)
        }
    };

    Ok(result)
}
