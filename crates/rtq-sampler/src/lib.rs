//! Line sampling of scalar field values.
//!
//! Generates evenly spaced sample points between two endpoints with
//! monotonic positional ids (distance along the line), and looks values up
//! by projecting a query point onto the segment: an exact id hit returns the
//! stored value, anything between two ids returns their midpoint average,
//! and a point off the segment reads as infinity. A typical producer of the
//! sampled values is the quantity dispatcher in `rtq-core`.

use rtq_core::Point3;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplerError>;

/// Absolute tolerance for deciding that a projected position lands exactly
/// on a stored sample id.
const ID_MATCH_TOLERANCE: f64 = 1e-12;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("line sampler start and end points must be different")]
    DegenerateLine,

    #[error("line sampler needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("expected {expected} values (one per sample point), got {got}")]
    ValueCountMismatch { expected: usize, got: usize },
}

/// Sample points along a line segment with distance-along-line ids.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSampler {
    start: Point3,
    end: Point3,
    length: f64,
    points: Vec<Point3>,
    ids: Vec<f64>,
}

impl LineSampler {
    /// Build `num_points` evenly spaced samples from `start` to `end`.
    ///
    /// # Errors
    /// Fails when the endpoints coincide or fewer than two points are
    /// requested.
    pub fn new(start: Point3, end: Point3, num_points: usize) -> Result<Self> {
        if start == end {
            return Err(SamplerError::DegenerateLine);
        }
        if num_points < 2 {
            return Err(SamplerError::TooFewPoints(num_points));
        }

        let difference = end - start;
        let delta = difference / (num_points - 1) as f64;

        let mut points = Vec::with_capacity(num_points);
        let mut ids = Vec::with_capacity(num_points);

        for i in 0..num_points - 1 {
            let p = start + delta * i as f64;
            ids.push((p - start).norm());
            points.push(p);
        }

        // Write the end point explicitly so it is exact, free of the
        // accumulated rounding of start + (n-1)·delta
        points.push(end);
        ids.push(difference.norm());

        Ok(Self {
            start,
            end,
            length: difference.norm(),
            points,
            ids,
        })
    }

    /// The sample points, in order from start to end.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Monotonic positional ids: distance of each sample from the start.
    pub fn ids(&self) -> &[f64] {
        &self.ids
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Length of the sampled segment.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Look up the field value at an arbitrary point.
    ///
    /// The point is projected onto the segment and normalized by its length.
    /// A projection outside `[0, 1]` returns `f64::INFINITY`. On the
    /// segment, a projection landing on a sample id returns that sample's
    /// value; otherwise the two bracketing samples are averaged.
    ///
    /// `values` holds one field value per sample point, ordered by id.
    pub fn value_at(&self, point: &Point3, values: &[f64]) -> Result<f64> {
        if values.len() != self.points.len() {
            return Err(SamplerError::ValueCountMismatch {
                expected: self.points.len(),
                got: values.len(),
            });
        }

        let position =
            (point - self.start).dot(&(self.end - self.start)) / (self.length * self.length);
        if !(0.0..=1.0).contains(&position) {
            return Ok(f64::INFINITY);
        }

        let target = position * self.length;
        let index = self.ids.partition_point(|&id| id < target);

        if (self.ids[index] - target).abs() <= ID_MATCH_TOLERANCE {
            Ok(values[index])
        } else {
            Ok((values[index - 1] + values[index]) * 0.5)
        }
    }
}
