//! Parallel batch evaluation of one quantity over many sampled tensors.
//!
//! The kernels are pure and reentrant, so a batch over quadrature points
//! needs no coordination; this is a convenience wrapper that validates the
//! axis definition once and fans the dispatcher out with rayon.

use rayon::prelude::*;

use crate::error::Result;
use crate::geometry::Axis;
use crate::quantity::{QuantityValue, ScalarQuantity, get_quantity};
use crate::tensor::{Point3, RankTwoTensor};

/// A tensor paired with the spatial point it was evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitySample {
    pub tensor: RankTwoTensor,
    pub point: Point3,
}

/// Evaluate `quantity` for every sample in parallel.
///
/// Geometric quantities use each sample's own point as the evaluation point;
/// the axis and direction are shared across the batch. A degenerate axis
/// fails up front, before any sample is touched.
pub fn evaluate_batch(
    samples: &[QuantitySample],
    quantity: ScalarQuantity,
    point1: &Point3,
    point2: &Point3,
    direction: &Point3,
) -> Result<Vec<QuantityValue>> {
    if matches!(
        quantity,
        ScalarQuantity::AxialStress | ScalarQuantity::HoopStress | ScalarQuantity::RadialStress
    ) {
        Axis::new(point1, point2)?;
    }

    samples
        .par_iter()
        .map(|sample| {
            get_quantity(
                &sample.tensor,
                quantity,
                point1,
                point2,
                &sample.point,
                direction,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantityError;
    use approx::assert_relative_eq;

    #[test]
    fn batch_matches_per_sample_dispatch() {
        let samples: Vec<QuantitySample> = (0..64)
            .map(|i| {
                let s = i as f64;
                QuantitySample {
                    tensor: RankTwoTensor::from_voigt([s, 2.0 * s, -s, 0.5 * s, 0.0, 0.1 * s]),
                    point: Point3::new(1.0 + s, 0.0, 0.0),
                }
            })
            .collect();

        let p1 = Point3::zeros();
        let p2 = Point3::z();
        let d = Point3::zeros();

        let batch =
            evaluate_batch(&samples, ScalarQuantity::VonMisesStress, &p1, &p2, &d).unwrap();
        assert_eq!(batch.len(), samples.len());
        for (sample, result) in samples.iter().zip(&batch) {
            let expected = get_quantity(
                &sample.tensor,
                ScalarQuantity::VonMisesStress,
                &p1,
                &p2,
                &sample.point,
                &d,
            )
            .unwrap();
            assert_relative_eq!(result.value, expected.value, epsilon = 1e-15);
        }
    }

    #[test]
    fn radial_batch_uses_each_samples_point() {
        let t = RankTwoTensor::diagonal(5.0, 2.0, 3.0);
        let samples = [
            QuantitySample {
                tensor: t,
                point: Point3::new(1.0, 0.0, 0.0),
            },
            QuantitySample {
                tensor: t,
                point: Point3::new(0.0, 1.0, 0.0),
            },
        ];

        let results = evaluate_batch(
            &samples,
            ScalarQuantity::RadialStress,
            &Point3::zeros(),
            &Point3::z(),
            &Point3::zeros(),
        )
        .unwrap();

        assert_relative_eq!(results[0].value, 5.0, epsilon = 1e-12);
        assert_relative_eq!(results[1].value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_axis_fails_before_any_sample() {
        let samples = [QuantitySample {
            tensor: RankTwoTensor::zero(),
            point: Point3::x(),
        }];
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = evaluate_batch(&samples, ScalarQuantity::HoopStress, &p, &p, &Point3::zeros())
            .unwrap_err();
        assert!(matches!(err, QuantityError::DegenerateAxis { .. }));
    }
}
