use super::diagnostics::SweepDiagnostics;
use super::kernel::{SweepOptions, SweepSegment, run_sweep};
use super::metrics::{SweepMetrics, TimingBucket};
use super::validate::{SweepResult, require_face_budget, require_finite, require_positive};
use super::{FULL_TURN, ProfileCurve, QuadMesh};

/// Revolve a profile curve a full turn around the Z axis.
///
/// # Arguments
/// * `x` - Radial coordinates of the curve
/// * `z` - Heights of the curve, same length as `x`
/// * `angle_count` - Number of equal angular steps
///
/// # Returns
/// `(x.len() - 1) * angle_count` quad faces, ordered by angular step and then
/// by curve segment.
///
/// # Example
/// ```
/// use curve2mesh::geom::revolve_curve;
///
/// let mesh = revolve_curve(&[1.0, 2.0], &[3.0, 4.0], 4).unwrap();
/// assert_eq!(mesh.len(), 4);
/// ```
pub fn revolve_curve(x: &[f64], z: &[f64], angle_count: usize) -> SweepResult<QuadMesh> {
    revolve_curve_by_angle(x, z, angle_count, FULL_TURN)
}

/// Revolve a profile curve through `revolve_angle` radians.
///
/// The angle may be negative (clockwise) or exceed a full turn.
pub fn revolve_curve_by_angle(
    x: &[f64],
    z: &[f64],
    angle_count: usize,
    revolve_angle: f64,
) -> SweepResult<QuadMesh> {
    let (mesh, _) =
        revolve_curve_with_options(x, z, angle_count, revolve_angle, SweepOptions::default())?;
    Ok(mesh)
}

/// Revolve a profile curve with explicit options, returning diagnostics.
pub fn revolve_curve_with_options(
    x: &[f64],
    z: &[f64],
    angle_count: usize,
    revolve_angle: f64,
    options: SweepOptions,
) -> SweepResult<(QuadMesh, SweepDiagnostics)> {
    let mut metrics = SweepMetrics::default();
    metrics.begin();

    let (curve, angle_count, revolve_angle) = metrics.time(TimingBucket::Validation, || {
        let angle_count = require_positive("angle_count", angle_count)?;
        let revolve_angle = require_finite("revolve_angle", revolve_angle)?;
        let curve = ProfileCurve::from_xz(x, z)?;
        require_face_budget(curve.segment_count(), angle_count)?;
        SweepResult::Ok((curve, angle_count, revolve_angle))
    })?;

    log::debug!(
        "revolve: {} curve points, {angle_count} steps over {revolve_angle} rad",
        curve.len()
    );

    let mut diagnostics = SweepDiagnostics::default();
    if revolve_angle.abs() > FULL_TURN {
        diagnostics.add_warning(format!(
            "revolve angle {revolve_angle} exceeds a full turn, the surface overlaps itself"
        ));
    }

    let segments = metrics.time(TimingBucket::PathConversion, || {
        angular_segments(angle_count, revolve_angle)
    });

    Ok(run_sweep(&curve, &segments, &options, &mut metrics, diagnostics))
}

/// Unit stations for `count` equal steps over `[0, total)`.
///
/// Step `i` spans `a1 = i * step` to `a1 + step`.
#[allow(clippy::cast_precision_loss)]
fn angular_segments(count: usize, total: f64) -> Vec<SweepSegment> {
    let step = total / count as f64;
    (0..count)
        .map(|i| {
            let a1 = step * i as f64;
            let a2 = a1 + step;
            let (sin1, cos1) = a1.sin_cos();
            let (sin2, cos2) = a2.sin_cos();
            SweepSegment {
                start: [cos1, sin1],
                end: [cos2, sin2],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn angular_segments_tile_the_range() {
        let segments = angular_segments(4, FULL_TURN);
        assert_eq!(segments.len(), 4);
        for pair in segments.windows(2) {
            assert!((pair[0].end[0] - pair[1].start[0]).abs() < 1e-12);
            assert!((pair[0].end[1] - pair[1].start[1]).abs() < 1e-12);
        }
        let last = segments[3].end;
        assert!((last[0] - 1.0).abs() < 1e-12 && last[1].abs() < 1e-12);
    }

    #[test]
    fn oversized_step_count_is_an_error() {
        assert!(matches!(
            revolve_curve(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], usize::MAX),
            Err(crate::geom::SweepError::TooManyFaces { curve_segments: 2, .. })
        ));
    }

    #[test]
    fn negative_angle_sweeps_clockwise() {
        let segments = angular_segments(2, -PI);
        assert!(segments[0].end[1] < 0.0);
    }
}
