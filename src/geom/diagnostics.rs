//! Per-call diagnostics for the sweep operations.

use std::fmt;

use serde::Serialize;

use super::metrics::SweepTimingReport;

/// What a sweep call produced and anything suspicious it accepted.
///
/// Returned alongside the mesh by the `_with_options` entry points.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SweepDiagnostics {
    /// Total number of faces in the mesh.
    pub face_count: usize,

    /// Number of curve segments (`curve points - 1`).
    pub curve_segment_count: usize,

    /// Number of sweep segments (angular steps or `path samples - 1`).
    pub sweep_segment_count: usize,

    /// Faces with no area, typically from curve points on the sweep axis.
    pub degenerate_face_count: usize,

    /// Whether the face grid was computed with rayon.
    pub parallel: bool,

    /// Optional timing breakdown; only with the `sweep_metrics` feature on
    /// non-WASM targets.
    pub timing: Option<SweepTimingReport>,

    /// Human-readable warnings about accepted but unusual inputs.
    pub warnings: Vec<String>,
}

impl SweepDiagnostics {
    /// Record a warning and forward it to the log.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.warnings.push(message);
    }

    /// No warnings and no degenerate faces.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.degenerate_face_count == 0
    }
}

impl fmt::Display for SweepDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} faces ({} curve x {} sweep segments), {} degenerate",
            self.face_count,
            self.curve_segment_count,
            self.sweep_segment_count,
            self.degenerate_face_count
        )?;
        if self.parallel {
            write!(f, ", parallel")?;
        }
        if let Some(timing) = &self.timing {
            write!(f, ", {:.3} ms", timing.total_ms())?;
        }
        for warning in &self.warnings {
            write!(f, "\n  warning: {warning}")?;
        }
        Ok(())
    }
}
