mod core;
mod curve;
mod diagnostics;
mod kernel;
mod mesh;
mod metrics;
mod path;
mod path_revolve;
mod revolve;
mod validate;

pub use self::core::{BBox, FULL_TURN, Point3, Tolerance, Vec3};
pub use curve::ProfileCurve;
pub use diagnostics::SweepDiagnostics;
pub use kernel::SweepOptions;
pub use mesh::{QuadFace, QuadMesh};
pub use metrics::{SweepMetrics, SweepTimingReport, TimingBucket};
pub use path::{RevolvePath, circular_path, circular_path_to};
pub use path_revolve::{revolve_curve_along_path, revolve_curve_along_path_with_options};
pub use revolve::{revolve_curve, revolve_curve_by_angle, revolve_curve_with_options};
pub use validate::{MAX_FACES, SweepError, SweepResult, positive_count};

#[cfg(test)]
mod tests;
