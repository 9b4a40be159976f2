//! The 2D cross-section that gets swept.

use super::validate::{
    SweepError, SweepResult, pairs_from_rows, pairs_from_shape, require_all_finite,
    require_min_points,
};

/// An open polyline in the cross-section plane.
///
/// Each point is `(x, z)`: `x` is the radial distance from the sweep axis and
/// `z` the height along it. Construction guarantees at least two finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    points: Vec<[f64; 2]>,
}

impl ProfileCurve {
    /// Minimum number of points needed to form one segment.
    pub const MIN_POINTS: usize = 2;

    /// Build a curve from `(x, z)` points.
    pub fn new(points: &[[f64; 2]]) -> SweepResult<Self> {
        Self::from_points("curve", points.to_vec())
    }

    /// Build a curve from separate coordinate sequences.
    pub fn from_xz(x: &[f64], z: &[f64]) -> SweepResult<Self> {
        require_min_points("x", x.len(), Self::MIN_POINTS)?;
        require_min_points("z", z.len(), Self::MIN_POINTS)?;
        if x.len() != z.len() {
            return Err(SweepError::LengthMismatch {
                left: "x",
                right: "z",
                left_len: x.len(),
                right_len: z.len(),
            });
        }
        require_all_finite("x", x)?;
        require_all_finite("z", z)?;
        Ok(Self {
            points: x.iter().zip(z).map(|(&x, &z)| [x, z]).collect(),
        })
    }

    /// Build a curve from rows that must each hold exactly two values.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> SweepResult<Self> {
        Self::from_points("curve", pairs_from_rows("curve", rows)?)
    }

    /// Build a curve from a row-major buffer with an explicit `(n, 2)` shape.
    pub fn from_shape(data: &[f64], shape: &[usize]) -> SweepResult<Self> {
        Self::from_points("curve", pairs_from_shape("curve", data, shape)?)
    }

    fn from_points(name: &'static str, points: Vec<[f64; 2]>) -> SweepResult<Self> {
        require_min_points(name, points.len(), Self::MIN_POINTS)?;
        require_all_finite(name, points.iter().flatten())?;
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }
}
