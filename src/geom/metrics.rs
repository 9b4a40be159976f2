//! Opt-in timing hooks for the sweep operations.
//!
//! Timing is only collected when the `sweep_metrics` feature is enabled and the
//! target is not WASM (`std::time::Instant` is unavailable there). Otherwise every
//! call compiles down to running the closure.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = SweepMetrics::default();
//! metrics.begin();
//! let faces = metrics.time(TimingBucket::FaceGeneration, || build_faces());
//! if let Some(report) = metrics.end() {
//!     println!("faces: {} ns", report.face_generation_ns);
//! }
//! ```

use serde::Serialize;

/// Phases of a sweep call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Argument and shape checks.
    Validation,
    /// Polar to Cartesian conversion of path samples and sweep angles.
    PathConversion,
    /// The face kernel over the full grid.
    FaceGeneration,
    /// Degenerate face counting and warnings.
    Diagnostics,
}

/// Cumulative nanoseconds per phase.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SweepTimingReport {
    pub validation_ns: u64,
    pub path_conversion_ns: u64,
    pub face_generation_ns: u64,
    pub diagnostics_ns: u64,
}

impl SweepTimingReport {
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.validation_ns
            .saturating_add(self.path_conversion_ns)
            .saturating_add(self.face_generation_ns)
            .saturating_add(self.diagnostics_ns)
    }

    /// Total in milliseconds, for display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_ms(&self) -> f64 {
        self.total_ns() as f64 / 1_000_000.0
    }
}

/// Accumulator for timing a sweep call.
///
/// When the `sweep_metrics` feature is disabled (or on WASM), all methods
/// are no-ops and [`end`](Self::end) returns `None`.
#[derive(Debug, Default)]
pub struct SweepMetrics {
    #[cfg(all(feature = "sweep_metrics", not(target_arch = "wasm32")))]
    report: SweepTimingReport,
}

impl SweepMetrics {
    /// Resets all counters.
    pub fn begin(&mut self) {
        #[cfg(all(feature = "sweep_metrics", not(target_arch = "wasm32")))]
        {
            self.report = SweepTimingReport::default();
        }
    }

    /// The accumulated report, or `None` if metrics are disabled.
    #[must_use]
    pub fn end(&self) -> Option<SweepTimingReport> {
        #[cfg(all(feature = "sweep_metrics", not(target_arch = "wasm32")))]
        {
            Some(self.report.clone())
        }
        #[cfg(not(all(feature = "sweep_metrics", not(target_arch = "wasm32"))))]
        {
            None
        }
    }

    /// Runs `f` and adds its elapsed time to `bucket`.
    pub fn time<R>(&mut self, bucket: TimingBucket, f: impl FnOnce() -> R) -> R {
        #[cfg(all(feature = "sweep_metrics", not(target_arch = "wasm32")))]
        {
            let start = std::time::Instant::now();
            let result = f();
            let nanos = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
            self.add_to_bucket(bucket, nanos);
            result
        }

        #[cfg(not(all(feature = "sweep_metrics", not(target_arch = "wasm32"))))]
        {
            let _ = bucket;
            f()
        }
    }

    #[cfg(all(feature = "sweep_metrics", not(target_arch = "wasm32")))]
    fn add_to_bucket(&mut self, bucket: TimingBucket, nanos: u64) {
        let slot = match bucket {
            TimingBucket::Validation => &mut self.report.validation_ns,
            TimingBucket::PathConversion => &mut self.report.path_conversion_ns,
            TimingBucket::FaceGeneration => &mut self.report.face_generation_ns,
            TimingBucket::Diagnostics => &mut self.report.diagnostics_ns,
        };
        *slot = slot.saturating_add(nanos);
    }
}
