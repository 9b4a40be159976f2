//! The quad-face formula shared by both revolvers.
//!
//! A sweep segment is a pair of stations `(px, py)` in the XY plane. A curve
//! point `(x, z)` placed at a station lands on `(x * px, x * py, z)`. The angular
//! revolver uses unit stations `(cos a, sin a)`; the path revolver uses
//! `(r cos a, r sin a)`. Everything else is the same grid walk.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::diagnostics::SweepDiagnostics;
use super::metrics::{SweepMetrics, TimingBucket};
use super::{Point3, ProfileCurve, QuadFace, QuadMesh, Tolerance};

/// Tuning knobs for the sweep operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepOptions {
    /// Grids with at least this many faces are computed in parallel when the
    /// `parallel` feature is enabled. Ignored otherwise.
    pub parallel_min_faces: usize,
    /// Tolerance used to flag zero-area faces in the diagnostics.
    pub degenerate_tolerance: Tolerance,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            parallel_min_faces: 4096,
            degenerate_tolerance: Tolerance::DEFAULT,
        }
    }
}

/// Start and end stations of one sweep step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SweepSegment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// Place one curve segment on one sweep segment.
#[must_use]
pub(crate) fn quad_face(p1: [f64; 2], p2: [f64; 2], segment: SweepSegment) -> QuadFace {
    let [x1, z1] = p1;
    let [x2, z2] = p2;
    let SweepSegment { start, end } = segment;
    QuadFace::new([
        Point3::new(x1 * start[0], x1 * start[1], z1),
        Point3::new(x1 * end[0], x1 * end[1], z1),
        Point3::new(x2 * end[0], x2 * end[1], z2),
        Point3::new(x2 * start[0], x2 * start[1], z2),
    ])
}

/// Build every face of the (sweep segment x curve segment) grid.
///
/// Returns the mesh and whether rayon was used. Face `i` always belongs to
/// sweep segment `i / curve_segments` and curve segment `i % curve_segments`.
pub(crate) fn collect_faces(
    curve: &[[f64; 2]],
    segments: &[SweepSegment],
    options: &SweepOptions,
) -> (QuadMesh, bool) {
    let curve_segments = curve.len().saturating_sub(1);
    let face_count = curve_segments * segments.len();
    if face_count == 0 {
        return (QuadMesh::default(), false);
    }

    let face_at = |index: usize| {
        let sweep = index / curve_segments;
        let seg = index % curve_segments;
        quad_face(curve[seg], curve[seg + 1], segments[sweep])
    };

    let parallel = face_count >= options.parallel_min_faces;
    build_faces(face_count, parallel, face_at)
}

#[cfg(feature = "parallel")]
fn build_faces(
    face_count: usize,
    parallel: bool,
    face_at: impl Fn(usize) -> QuadFace + Sync + Send,
) -> (QuadMesh, bool) {
    if parallel {
        let faces = (0..face_count).into_par_iter().map(face_at).collect();
        return (QuadMesh::new(faces), true);
    }
    (QuadMesh::new((0..face_count).map(face_at).collect()), false)
}

#[cfg(not(feature = "parallel"))]
fn build_faces(
    face_count: usize,
    _parallel: bool,
    face_at: impl Fn(usize) -> QuadFace,
) -> (QuadMesh, bool) {
    (QuadMesh::new((0..face_count).map(face_at).collect()), false)
}

/// Run the face grid and fill in the diagnostics common to both revolvers.
pub(crate) fn run_sweep(
    curve: &ProfileCurve,
    segments: &[SweepSegment],
    options: &SweepOptions,
    metrics: &mut SweepMetrics,
    mut diagnostics: SweepDiagnostics,
) -> (QuadMesh, SweepDiagnostics) {
    let (mesh, parallel) = metrics.time(TimingBucket::FaceGeneration, || {
        collect_faces(curve.points(), segments, options)
    });

    metrics.time(TimingBucket::Diagnostics, || {
        diagnostics.face_count = mesh.len();
        diagnostics.curve_segment_count = curve.segment_count();
        diagnostics.sweep_segment_count = segments.len();
        diagnostics.parallel = parallel;
        diagnostics.degenerate_face_count = mesh.degenerate_face_count(options.degenerate_tolerance);
        if diagnostics.degenerate_face_count > 0 {
            diagnostics.add_warning(format!(
                "{} of {} faces have no area",
                diagnostics.degenerate_face_count,
                mesh.len()
            ));
        }
    });
    diagnostics.timing = metrics.end();

    log::debug!("sweep produced {diagnostics}");
    (mesh, diagnostics)
}
