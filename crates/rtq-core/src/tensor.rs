//! Rank-two tensor and point types.
//!
//! A stress or strain state at a point is a symmetric 3×3 tensor. Storage is
//! the full matrix rather than Voigt notation: the legacy second-invariant
//! formula reads both off-diagonal entries, so the library must be able to
//! hold (and faithfully evaluate) inputs a caller failed to symmetrize.
//! Symmetry is the caller's contract; nothing here enforces it.

use nalgebra::{Matrix3, Vector3};

/// A point in 3D space, also used for axis and direction vectors.
pub type Point3 = Vector3<f64>;

/// A rank-two tensor (3×3 real matrix) representing stress or strain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankTwoTensor(Matrix3<f64>);

impl RankTwoTensor {
    /// Wrap a full 3×3 matrix. No symmetrization is performed.
    pub fn new(matrix: Matrix3<f64>) -> Self {
        Self(matrix)
    }

    /// Build from the nine components in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        xx: f64,
        xy: f64,
        xz: f64,
        yx: f64,
        yy: f64,
        yz: f64,
        zx: f64,
        zy: f64,
        zz: f64,
    ) -> Self {
        Self(Matrix3::new(xx, xy, xz, yx, yy, yz, zx, zy, zz))
    }

    /// Build a symmetric tensor from Voigt components `[xx, yy, zz, xy, yz, xz]`.
    pub fn from_voigt(v: [f64; 6]) -> Self {
        Self(Matrix3::new(
            v[0], v[3], v[5], //
            v[3], v[1], v[4], //
            v[5], v[4], v[2],
        ))
    }

    /// Diagonal tensor diag(xx, yy, zz).
    pub fn diagonal(xx: f64, yy: f64, zz: f64) -> Self {
        Self(Matrix3::from_diagonal(&Vector3::new(xx, yy, zz)))
    }

    /// Zero tensor.
    pub fn zero() -> Self {
        Self(Matrix3::zeros())
    }

    /// Raw `(i, j)` component lookup.
    pub fn component(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }

    /// `(i, j)` component together with the canonical unit direction tied to
    /// that entry: the pure axis for a diagonal component, or a
    /// `(1/√2, 1/√2)` split across axes `i` and `j` for a shear component.
    pub fn component_with_direction(&self, i: usize, j: usize) -> (f64, Point3) {
        let mut direction = Point3::zeros();
        if i == j {
            direction[i] = 1.0;
        } else {
            direction[i] = 0.5f64.sqrt();
            direction[j] = 0.5f64.sqrt();
        }

        (self.0[(i, j)], direction)
    }

    /// Sum of the diagonal components.
    pub fn trace(&self) -> f64 {
        self.0.trace()
    }

    /// Deviatoric part: the tensor minus its hydrostatic component.
    pub fn deviatoric(&self) -> Self {
        Self(self.0 - Matrix3::identity() * (self.trace() / 3.0))
    }

    /// Double contraction `A : B = Σ_ij A_ij B_ij`.
    pub fn double_contraction(&self, other: &Self) -> f64 {
        self.0.component_mul(&other.0).sum()
    }

    /// Frobenius norm, `sqrt(T : T)`.
    pub fn l2_norm(&self) -> f64 {
        self.0.norm()
    }

    /// Bilinear form `d · T · d` for a direction assumed to be unit length.
    /// No normalization is performed; that is the caller's contract.
    pub fn directional_value(&self, direction: &Point3) -> f64 {
        direction.dot(&(self.0 * direction))
    }

    /// The underlying 3×3 matrix.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}
