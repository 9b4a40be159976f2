use super::diagnostics::SweepDiagnostics;
use super::kernel::{SweepOptions, SweepSegment, run_sweep};
use super::metrics::{SweepMetrics, TimingBucket};
use super::validate::{SweepResult, require_face_budget, require_min_points};
use super::{ProfileCurve, QuadMesh, RevolvePath};

/// Minimum number of path samples needed to form one sweep segment.
const MIN_PATH_SAMPLES: usize = 2;

/// Revolve a profile curve along a path given in polar coordinates.
///
/// Each path sample `(angle, radius)` becomes the station
/// `(px, py) = (radius cos angle, radius sin angle)`. The curve point `(x, z)`
/// placed at a station lands on `(x px, x py, z)`, so every output coordinate is
/// a curve coordinate times a station coordinate (or the curve height).
///
/// With unit radii this is the same surface as [`revolve_curve`](super::revolve_curve)
/// over the path angles.
///
/// # Returns
/// `(curve.len() - 1) * (path.len() - 1)` faces, ordered by path segment and
/// then by curve segment.
///
/// # Winding
/// Each face lists (curve start, path start), (curve start, path end),
/// (curve end, path end), (curve end, path start), the same order as
/// [`revolve_curve`](super::revolve_curve). Callers that expect faces to begin
/// at the path end can map [`QuadFace::flipped`](super::QuadFace::flipped) over
/// the mesh.
///
/// # Example
/// ```
/// use curve2mesh::geom::{ProfileCurve, RevolvePath, revolve_curve_along_path};
/// use std::f64::consts::FRAC_PI_2;
///
/// let curve = ProfileCurve::new(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let path = RevolvePath::new(&[[0.0, 1.0], [FRAC_PI_2, 2.0]]).unwrap();
/// let mesh = revolve_curve_along_path(&curve, &path).unwrap();
/// assert_eq!(mesh.len(), 1);
/// ```
pub fn revolve_curve_along_path(curve: &ProfileCurve, path: &RevolvePath) -> SweepResult<QuadMesh> {
    let (mesh, _) = revolve_curve_along_path_with_options(curve, path, SweepOptions::default())?;
    Ok(mesh)
}

/// Path revolution with explicit options, returning diagnostics.
pub fn revolve_curve_along_path_with_options(
    curve: &ProfileCurve,
    path: &RevolvePath,
    options: SweepOptions,
) -> SweepResult<(QuadMesh, SweepDiagnostics)> {
    let mut metrics = SweepMetrics::default();
    metrics.begin();

    metrics.time(TimingBucket::Validation, || {
        require_min_points("curve", curve.len(), ProfileCurve::MIN_POINTS)?;
        require_min_points("path", path.len(), MIN_PATH_SAMPLES)?;
        require_face_budget(curve.segment_count(), path.len() - 1)
    })?;

    log::debug!(
        "revolve along path: {} curve points, {} path samples",
        curve.len(),
        path.len()
    );

    let mut diagnostics = SweepDiagnostics::default();
    if !path.is_monotonic() {
        diagnostics.add_warning("path angles are not monotonic, the surface may fold over itself");
    }

    let segments = metrics.time(TimingBucket::PathConversion, || path_segments(path));

    Ok(run_sweep(curve, &segments, &options, &mut metrics, diagnostics))
}

/// Consecutive station pairs along the path.
fn path_segments(path: &RevolvePath) -> Vec<SweepSegment> {
    path.stations()
        .windows(2)
        .map(|pair| SweepSegment {
            start: pair[0],
            end: pair[1],
        })
        .collect()
}
