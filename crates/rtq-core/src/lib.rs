//! Scalar and directional quantities of rank-two stress/strain tensors.
//!
//! A stateless library of pure functions over a symmetric 3×3 tensor
//! evaluated at a spatial point: von Mises stress, principal values,
//! tensor invariants, and axial/hoop/radial projections relative to a
//! user-defined rotation axis. Every kernel operates solely on its
//! arguments, so batch evaluation over a mesh's quadrature points is
//! safe from arbitrarily many threads (see [`batch`]).
//!
//! # Example
//! ```
//! use rtq_core::{get_quantity, Point3, RankTwoTensor, ScalarQuantity};
//!
//! let stress = RankTwoTensor::from_voigt([100.0, 50.0, 25.0, 10.0, 5.0, 2.0]);
//! let quantity: ScalarQuantity = "VonMisesStress".parse()?;
//!
//! let origin = Point3::zeros();
//! let result = get_quantity(&stress, quantity, &origin, &origin, &origin, &origin)?;
//! assert!(result.value > 0.0);
//! assert!(result.direction.is_none());
//! # Ok::<(), rtq_core::QuantityError>(())
//! ```

pub mod batch;
pub mod error;
pub mod geometry;
pub mod invariants;
pub mod principal;
pub mod quantity;
pub mod tensor;

pub use batch::{QuantitySample, evaluate_batch};
pub use error::{QuantityError, Result};
pub use geometry::{Axis, axial_stress, hoop_stress, normal_position_vector, radial_stress};
pub use invariants::{
    effective_strain, first_invariant, hydrostatic, l2_norm, second_invariant, third_invariant,
    triaxiality_stress, volumetric_strain, von_mises_stress,
};
pub use principal::{max_principal, mid_principal, min_principal, principal};
pub use quantity::{QuantityValue, ScalarQuantity, direction_value, get_quantity};
pub use tensor::{Point3, RankTwoTensor};
