//! Invariant and norm kernels over a rank-two tensor.
//!
//! Pure total functions of the tensor alone, no geometry. The second and
//! third invariants keep the legacy expansions that read both off-diagonal
//! entries, so output stays bit-for-bit reproducible on inputs a caller
//! failed to symmetrize.

use crate::tensor::RankTwoTensor;

/// Hydrostatic (mean) component, `trace / 3`.
pub fn hydrostatic(tensor: &RankTwoTensor) -> f64 {
    tensor.trace() / 3.0
}

/// Frobenius norm of the tensor.
pub fn l2_norm(tensor: &RankTwoTensor) -> f64 {
    tensor.l2_norm()
}

/// First invariant, the trace.
pub fn first_invariant(tensor: &RankTwoTensor) -> f64 {
    tensor.trace()
}

/// Second invariant.
///
/// Sum over unordered index pairs {(0,1), (0,2), (1,2)} of
/// `a_ii·a_jj − (a_ij² + a_ji²)/2`. Both off-diagonal entries are read on
/// purpose; for a truly symmetric tensor this reduces to the textbook
/// `a_ii·a_jj − a_ij²` form.
pub fn second_invariant(tensor: &RankTwoTensor) -> f64 {
    let mut val = 0.0;
    for i in 0..2 {
        for j in (i + 1)..3 {
            val += tensor.component(i, i) * tensor.component(j, j);
            val -= (tensor.component(i, j) * tensor.component(i, j)
                + tensor.component(j, i) * tensor.component(j, i))
                * 0.5;
        }
    }

    val
}

/// Third invariant: the full 3×3 determinant expanded by cofactors.
pub fn third_invariant(tensor: &RankTwoTensor) -> f64 {
    tensor.component(0, 0) * tensor.component(1, 1) * tensor.component(2, 2)
        - tensor.component(0, 0) * tensor.component(1, 2) * tensor.component(2, 1)
        + tensor.component(0, 1) * tensor.component(1, 2) * tensor.component(2, 0)
        - tensor.component(0, 1) * tensor.component(1, 0) * tensor.component(2, 2)
        + tensor.component(0, 2) * tensor.component(1, 0) * tensor.component(2, 1)
        - tensor.component(0, 2) * tensor.component(1, 1) * tensor.component(2, 0)
}

/// Von Mises equivalent stress.
///
/// Formula: `σ_v = sqrt(3/2 · dev : dev)` where `dev` is the deviatoric part.
///
/// # Example
/// ```
/// use rtq_core::{invariants, RankTwoTensor};
///
/// // Uniaxial tension: von Mises equals the axial stress
/// let stress = RankTwoTensor::diagonal(100.0, 0.0, 0.0);
/// assert!((invariants::von_mises_stress(&stress) - 100.0).abs() < 1e-10);
/// ```
pub fn von_mises_stress(stress: &RankTwoTensor) -> f64 {
    let dev = stress.deviatoric();

    (3.0 / 2.0 * dev.double_contraction(&dev)).sqrt()
}

/// Effective strain, `sqrt(2/3 · ε : ε)`.
///
/// Contracts the full tensor, not its deviatoric part; this is intentional
/// and differs from the von Mises form.
pub fn effective_strain(strain: &RankTwoTensor) -> f64 {
    (2.0 / 3.0 * strain.double_contraction(strain)).sqrt()
}

/// Volumetric strain for logarithmic strains.
///
/// The strains are log(L/L0), so exp(strain) recovers the stretch ratio and
/// the volume change of a strained cube relative to the original volume is
/// `exp(ε_00) · exp(ε_11) · exp(ε_22) − 1`. There is no small-strain
/// linearized variant; at small strains the finite form is approximately
/// equal to `ε_00 + ε_11 + ε_22` anyway.
pub fn volumetric_strain(strain: &RankTwoTensor) -> f64 {
    strain.component(0, 0).exp() * strain.component(1, 1).exp() * strain.component(2, 2).exp() - 1.0
}

/// Stress triaxiality, hydrostatic over von Mises.
///
/// Undefined when the von Mises stress is exactly zero (a pure-hydrostatic
/// or zero tensor): the division yields IEEE infinity or NaN, which the
/// caller can detect as a domain condition.
pub fn triaxiality_stress(stress: &RankTwoTensor) -> f64 {
    hydrostatic(stress) / von_mises_stress(stress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn trace_identities() {
        let t = RankTwoTensor::from_voigt([100.0, 50.0, 25.0, 10.0, 5.0, 2.0]);
        assert_relative_eq!(first_invariant(&t), 175.0, epsilon = 1e-12);
        assert_relative_eq!(hydrostatic(&t), 175.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn von_mises_pure_shear() {
        // Pure shear: σ_v = √3 · τ
        let t = RankTwoTensor::from_voigt([0.0, 0.0, 0.0, 100.0, 0.0, 0.0]);
        assert_relative_eq!(
            von_mises_stress(&t),
            100.0 * 3.0f64.sqrt(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn von_mises_hydrostatic_state_is_zero() {
        let t = RankTwoTensor::diagonal(-40.0, -40.0, -40.0);
        assert_relative_eq!(von_mises_stress(&t), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn effective_strain_skips_deviatoric_subtraction() {
        // A hydrostatic strain state has zero deviator but non-zero
        // effective strain
        let t = RankTwoTensor::diagonal(0.01, 0.01, 0.01);
        let expected = (2.0 / 3.0 * 3.0 * 0.01f64 * 0.01).sqrt();
        assert_relative_eq!(effective_strain(&t), expected, epsilon = 1e-15);
    }

    #[test]
    fn volumetric_strain_finite_form() {
        let t = RankTwoTensor::diagonal(0.1, 0.2, 0.3);
        assert_relative_eq!(volumetric_strain(&t), 0.6f64.exp() - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn volumetric_strain_zero_tensor() {
        assert_eq!(volumetric_strain(&RankTwoTensor::zero()), 0.0);
    }

    #[test]
    fn second_invariant_reads_both_off_diagonals() {
        // Deliberately asymmetric input pins the legacy expansion:
        // (0,1): 1·5 − (2² + 4²)/2 = −5
        // (0,2): 1·10 − (3² + 7²)/2 = −19
        // (1,2): 5·10 − (6² + 8²)/2 = 0
        let t = RankTwoTensor::from_components(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        assert_relative_eq!(second_invariant(&t), -24.0, epsilon = 1e-12);
    }

    #[test]
    fn second_invariant_symmetric_matches_textbook_form() {
        let t = RankTwoTensor::from_voigt([3.0, -2.0, 4.0, 1.5, -0.5, 2.5]);
        let textbook = 3.0 * -2.0 + -2.0 * 4.0 + 3.0 * 4.0
            - 1.5f64.powi(2)
            - (-0.5f64).powi(2)
            - 2.5f64.powi(2);
        assert_relative_eq!(second_invariant(&t), textbook, epsilon = 1e-12);
    }

    #[test]
    fn third_invariant_is_full_determinant() {
        let t = RankTwoTensor::from_components(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        // 50 − 48 + 84 − 80 + 96 − 105 = −3
        assert_relative_eq!(third_invariant(&t), -3.0, epsilon = 1e-12);
        assert_relative_eq!(third_invariant(&t), t.matrix().determinant(), epsilon = 1e-12);
    }

    #[test]
    fn triaxiality_uniaxial_tension() {
        // σ_h / σ_v = (100/3) / 100 = 1/3
        let t = RankTwoTensor::diagonal(100.0, 0.0, 0.0);
        assert_relative_eq!(triaxiality_stress(&t), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn triaxiality_hydrostatic_state_is_non_finite() {
        let t = RankTwoTensor::diagonal(50.0, 50.0, 50.0);
        assert!(!triaxiality_stress(&t).is_finite());
        // 0/0 on the zero tensor is equally a domain condition, not a panic
        assert!(!triaxiality_stress(&RankTwoTensor::zero()).is_finite());
    }

    #[test]
    fn l2_norm_diagonal() {
        let t = RankTwoTensor::diagonal(3.0, 4.0, 0.0);
        assert_relative_eq!(l2_norm(&t), 5.0, epsilon = 1e-12);
    }
}
