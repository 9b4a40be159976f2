//! Sweep 2D profile curves into quad meshes.
//!
//! The [`geom`] module holds the Rust API: an angular revolver, a path
//! revolver driven by polar `(angle, radius)` samples, and a circular path
//! builder. This root module exposes the same operations to JavaScript through
//! `wasm-bindgen`, returning faces as `number[face][4][3]`.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;

use std::fmt;

use geom::{
    FULL_TURN, ProfileCurve, QuadMesh, RevolvePath, SweepResult, positive_count,
};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("could not start rayon thread pool: {err}")))
}

/// Revolve the curve `(x, z)` through `revolve_angle` (default: a full turn)
/// in `angle_count` steps.
#[wasm_bindgen]
pub fn revolve(
    x: &[f64],
    z: &[f64],
    angle_count: f64,
    revolve_angle: Option<f64>,
) -> Result<JsValue, JsValue> {
    let mesh = revolve_faces(x, z, angle_count, revolve_angle).map_err(to_js_error)?;
    to_js_value(&mesh)
}

/// Revolve an `(n, 2)` curve along an `(m, 2)` polar path.
#[wasm_bindgen]
pub fn revolve_along_path(curve: JsValue, path: JsValue) -> Result<JsValue, JsValue> {
    let curve_rows: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(curve)
        .map_err(|err| js_error(&format!("`curve` must be a 2D array of numbers: {err}")))?;
    let path_rows: Vec<Vec<f64>> = serde_wasm_bindgen::from_value(path)
        .map_err(|err| js_error(&format!("`path` must be a 2D array of numbers: {err}")))?;

    let mesh = path_faces(&curve_rows, &path_rows).map_err(to_js_error)?;
    to_js_value(&mesh)
}

/// Unit-radius circular path with `divisions` samples over `[0, end_angle]`
/// (default: a full turn).
#[wasm_bindgen]
pub fn circular_path(divisions: f64, end_angle: Option<f64>) -> Result<JsValue, JsValue> {
    let path = circular_path_rows(divisions, end_angle).map_err(to_js_error)?;
    to_js_value(&path)
}

fn revolve_faces(
    x: &[f64],
    z: &[f64],
    angle_count: f64,
    revolve_angle: Option<f64>,
) -> SweepResult<QuadMesh> {
    let angle_count = positive_count("angle_count", angle_count)?;
    geom::revolve_curve_by_angle(x, z, angle_count, revolve_angle.unwrap_or(FULL_TURN))
}

fn path_faces<C: AsRef<[f64]>, P: AsRef<[f64]>>(
    curve_rows: &[C],
    path_rows: &[P],
) -> SweepResult<QuadMesh> {
    let curve = ProfileCurve::from_rows(curve_rows)?;
    let path = RevolvePath::from_rows(path_rows)?;
    geom::revolve_curve_along_path(&curve, &path)
}

fn circular_path_rows(divisions: f64, end_angle: Option<f64>) -> SweepResult<Vec<[f64; 2]>> {
    let divisions = positive_count("divisions", divisions)?;
    let path = geom::circular_path_to(divisions, end_angle.unwrap_or(FULL_TURN))?;
    Ok(path.rows().to_vec())
}

fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| js_error(&err.to_string()))
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{circular_path_rows, path_faces, revolve_faces};
    use crate::geom::SweepError;
    use std::f64::consts::PI;

    #[test]
    fn revolve_faces_defaults_to_full_turn() {
        let mesh = revolve_faces(&[1.0, 2.0], &[3.0, 4.0], 4.0, None).expect("valid");
        assert_eq!(mesh.len(), 4);
        let last = mesh.faces()[3].vertices[1];
        assert!((last.x - 1.0).abs() < 1e-9 && last.y.abs() < 1e-9);
    }

    #[test]
    fn revolve_faces_rejects_fractional_count() {
        assert!(matches!(
            revolve_faces(&[1.0, 2.0], &[3.0, 4.0], 2.5, None),
            Err(SweepError::NotAnInteger { name: "angle_count", .. })
        ));
        assert_eq!(
            revolve_faces(&[1.0, 2.0], &[3.0, 4.0], -1.0, None),
            Err(SweepError::NotPositive { name: "angle_count" })
        );
    }

    #[test]
    fn huge_counts_are_errors_not_allocations() {
        assert!(matches!(
            revolve_faces(&[1.0, 2.0], &[3.0, 4.0], 1e19, None),
            Err(SweepError::TooManyFaces { curve_segments: 1, .. })
        ));
        assert!(matches!(
            circular_path_rows(1e19, None),
            Err(SweepError::CountTooLarge { name: "divisions", .. })
        ));
    }

    #[test]
    fn path_faces_reads_ragged_rows() {
        let curve = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let path = vec![vec![0.0, 1.0], vec![PI / 2.0, 2.0]];
        let mesh = path_faces(&curve[..], &path[..]).expect("valid");
        assert_eq!(mesh.len(), 1);

        let flat_curve = vec![vec![1.0, 2.0, 3.0]];
        assert!(matches!(
            path_faces(&flat_curve[..], &path[..]),
            Err(SweepError::InvalidShape { name: "curve", .. })
        ));
        let flat_path = vec![vec![1.0, 2.0, 3.0]];
        assert!(matches!(
            path_faces(&curve[..], &flat_path[..]),
            Err(SweepError::InvalidShape { name: "path", .. })
        ));
    }

    #[test]
    fn circular_path_rows_validates_divisions() {
        let rows = circular_path_rows(4.0, None).expect("valid");
        assert_eq!(rows.len(), 4);
        assert!(matches!(
            circular_path_rows(3.5, None),
            Err(SweepError::NotAnInteger { name: "divisions", .. })
        ));
        assert_eq!(
            circular_path_rows(-1.0, None),
            Err(SweepError::NotPositive { name: "divisions" })
        );
    }
}
