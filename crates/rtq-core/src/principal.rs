//! Principal value kernel: symmetric eigendecomposition of a rank-two tensor.
//!
//! Eigenpairs are sorted ascending by eigenvalue, so rank 0/1/2 selects the
//! minimum/middle/maximum principal value. For repeated eigenvalues the
//! eigenvectors are not unique; whatever orthonormal basis the eigensolver
//! produces is returned. It is deterministic for identical input but
//! otherwise implementation-defined.

use nalgebra::SymmetricEigen;

use crate::tensor::{Point3, RankTwoTensor};

/// Eigenvalue and unit eigenvector at the given rank of the ascending-sorted
/// spectrum (`rank` 0 = minimum, 1 = middle, 2 = maximum).
pub fn principal(tensor: &RankTwoTensor, rank: usize) -> (f64, Point3) {
    let eigen = SymmetricEigen::new(*tensor.matrix());

    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[a]
            .partial_cmp(&eigen.eigenvalues[b])
            .unwrap()
    });

    let index = order[rank];
    (
        eigen.eigenvalues[index],
        eigen.eigenvectors.column(index).into_owned(),
    )
}

/// Maximum principal value and its direction.
pub fn max_principal(tensor: &RankTwoTensor) -> (f64, Point3) {
    principal(tensor, 2)
}

/// Middle principal value and its direction.
pub fn mid_principal(tensor: &RankTwoTensor) -> (f64, Point3) {
    principal(tensor, 1)
}

/// Minimum principal value and its direction.
pub fn min_principal(tensor: &RankTwoTensor) -> (f64, Point3) {
    principal(tensor, 0)
}
