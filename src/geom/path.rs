//! Revolve paths in polar coordinates and the circular path builder.

use super::FULL_TURN;
use super::validate::{
    MAX_FACES, SweepResult, pairs_from_rows, pairs_from_shape, require_all_finite, require_at_most,
    require_finite, require_min_points, require_positive,
};

/// A sweep trajectory sampled as `(angle_radians, radius)` pairs.
///
/// Each sample maps to the station `(radius * cos(angle), radius * sin(angle))`
/// in the XY plane. Angles are not required to be monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct RevolvePath {
    samples: Vec<[f64; 2]>,
}

impl RevolvePath {
    /// Build a path from `(angle, radius)` samples.
    pub fn new(samples: &[[f64; 2]]) -> SweepResult<Self> {
        Self::from_samples(samples.to_vec())
    }

    /// Build a path from rows that must each hold exactly two values.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> SweepResult<Self> {
        Self::from_samples(pairs_from_rows("path", rows)?)
    }

    /// Build a path from a row-major buffer with an explicit `(m, 2)` shape.
    pub fn from_shape(data: &[f64], shape: &[usize]) -> SweepResult<Self> {
        Self::from_samples(pairs_from_shape("path", data, shape)?)
    }

    fn from_samples(samples: Vec<[f64; 2]>) -> SweepResult<Self> {
        require_min_points("path", samples.len(), 1)?;
        require_all_finite("path", samples.iter().flatten())?;
        Ok(Self { samples })
    }

    /// The `(m, 2)` array of `(angle, radius)` rows.
    #[must_use]
    pub fn rows(&self) -> &[[f64; 2]] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s[0])
    }

    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s[1])
    }

    /// Cartesian stations `(px, py)` of every sample.
    #[must_use]
    pub fn stations(&self) -> Vec<[f64; 2]> {
        self.angles()
            .zip(self.radii())
            .map(|(angle, radius)| {
                let (sin, cos) = angle.sin_cos();
                [radius * cos, radius * sin]
            })
            .collect()
    }

    /// Whether the angle sequence never changes direction.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        let steps = || self.angles().zip(self.angles().skip(1));
        let increasing = steps().all(|(a, b)| b >= a);
        let decreasing = steps().all(|(a, b)| b <= a);
        increasing || decreasing
    }
}

/// A unit-radius circular path over a full turn.
///
/// See [`circular_path_to`].
pub fn circular_path(divisions: usize) -> SweepResult<RevolvePath> {
    circular_path_to(divisions, FULL_TURN)
}

/// A unit-radius circular path with `divisions` samples spaced evenly over
/// `[0, end_angle]`, both ends included.
///
/// These are path vertices, so `divisions` samples give `divisions - 1` segments.
pub fn circular_path_to(divisions: usize, end_angle: f64) -> SweepResult<RevolvePath> {
    let divisions = require_positive("divisions", divisions)?;
    let divisions = require_at_most("divisions", divisions, MAX_FACES + 1)?;
    let end_angle = require_finite("end_angle", end_angle)?;

    let samples = linspace(0.0, end_angle, divisions)
        .map(|angle| [angle, 1.0])
        .collect();
    log::debug!("circular path: {divisions} samples up to {end_angle} rad");
    Ok(RevolvePath { samples })
}

/// Evenly spaced values over `[start, end]`; the last value is exactly `end`.
#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
