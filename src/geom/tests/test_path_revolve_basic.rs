use super::super::*;
use super::assert_face_close;
use std::f64::consts::{FRAC_PI_2, PI};

fn simple_inputs() -> (ProfileCurve, RevolvePath) {
    let curve = ProfileCurve::new(&[[1.0, 2.0], [3.0, 4.0]]).expect("valid curve");
    let path = RevolvePath::new(&[[0.0, 1.0], [FRAC_PI_2, 2.0]]).expect("valid path");
    (curve, path)
}

#[test]
fn path_revolve_single_face_geometry() {
    let (curve, path) = simple_inputs();
    let mesh = revolve_curve_along_path(&curve, &path).expect("path revolve should succeed");
    assert_eq!(mesh.len(), 1);
    assert_face_close(
        &mesh.faces()[0],
        [
            [1.0, 0.0, 2.0],
            [0.0, 2.0, 2.0],
            [0.0, 6.0, 4.0],
            [3.0, 0.0, 4.0],
        ],
        1e-5,
    );
}

#[test]
fn path_revolve_flipped_face_matches_end_first_winding() {
    let (curve, path) = simple_inputs();
    let mesh = revolve_curve_along_path(&curve, &path).expect("path revolve should succeed");
    assert_face_close(
        &mesh.faces()[0].flipped(),
        [
            [0.0, 2.0, 2.0],
            [1.0, 0.0, 2.0],
            [3.0, 0.0, 4.0],
            [0.0, 6.0, 4.0],
        ],
        1e-5,
    );
}

#[test]
fn path_revolve_face_count_matches_grid() {
    let curve_points: Vec<[f64; 2]> = (1..=12).map(|i| {
        let x = f64::from(i);
        [x, x.ln()]
    }).collect();
    let curve = ProfileCurve::new(&curve_points).expect("valid curve");
    let samples: Vec<[f64; 2]> = (0..40)
        .map(|i| {
            let angle = f64::from(i) * 4.0 * PI / 39.0;
            [angle, angle / 10.0]
        })
        .collect();
    let path = RevolvePath::new(&samples).expect("valid path");

    let mesh = revolve_curve_along_path(&curve, &path).expect("path revolve should succeed");
    assert_eq!(mesh.len(), 11 * 39);
    assert_eq!(mesh.to_dense().len(), 11 * 39);
}

#[test]
fn path_revolve_outputs_are_bilinear_products() {
    let curve = ProfileCurve::new(&[[0.5, -1.0], [2.0, 3.0], [4.0, 5.0]]).expect("valid curve");
    let path = RevolvePath::new(&[[0.3, 1.5], [1.1, 0.7], [2.9, 2.5]]).expect("valid path");
    let stations = path.stations();
    let points = curve.points();

    let mesh = revolve_curve_along_path(&curve, &path).expect("path revolve should succeed");
    for (index, face) in mesh.iter().enumerate() {
        let k = index / 2;
        let j = index % 2;
        let expected = [
            (points[j], stations[k]),
            (points[j], stations[k + 1]),
            (points[j + 1], stations[k + 1]),
            (points[j + 1], stations[k]),
        ];
        for (vertex, ([x, z], [px, py])) in face.vertices.iter().zip(expected) {
            assert_eq!(vertex.x, x * px);
            assert_eq!(vertex.y, x * py);
            assert_eq!(vertex.z, z);
        }
    }
}

#[test]
fn path_revolve_unit_circle_matches_angular_revolve() {
    let x = [0.5, 1.0, 1.5, 1.0];
    let z = [0.0, 0.5, 1.0, 2.0];
    let curve = ProfileCurve::from_xz(&x, &z).expect("valid curve");

    for divisions in [2, 5, 17] {
        let path = circular_path(divisions).expect("valid path");
        let along_path = revolve_curve_along_path(&curve, &path).expect("path revolve");
        let angular = revolve_curve(&x, &z, divisions - 1).expect("angular revolve");
        assert!(
            along_path.approx_eq(&angular, Tolerance::DEFAULT),
            "sweeps disagree for {divisions} divisions"
        );
    }
}

#[test]
fn path_revolve_rejects_short_path() {
    let (curve, _) = simple_inputs();
    let path = circular_path(1).expect("one sample is a valid path");
    assert_eq!(
        revolve_curve_along_path(&curve, &path),
        Err(SweepError::NotEnoughPoints { name: "path", min: 2, actual: 1 })
    );
}

#[test]
fn path_revolve_shape_errors_come_from_constructors() {
    assert!(matches!(
        ProfileCurve::from_shape(&[1.0, 2.0, 3.0], &[3]),
        Err(SweepError::InvalidShape { name: "curve", .. })
    ));
    assert!(matches!(
        RevolvePath::from_shape(&[1.0, 2.0, 3.0], &[3]),
        Err(SweepError::InvalidShape { name: "path", .. })
    ));
}

#[test]
fn path_revolve_diagnostics_report_grid() {
    let (curve, path) = simple_inputs();
    let (mesh, diagnostics) =
        revolve_curve_along_path_with_options(&curve, &path, SweepOptions::default())
            .expect("path revolve should succeed");
    assert_eq!(diagnostics.face_count, 1);
    assert_eq!(diagnostics.curve_segment_count, 1);
    assert_eq!(diagnostics.sweep_segment_count, 1);
    assert!(diagnostics.is_clean());
    assert_eq!(mesh.bounds().map(|b| b.max.y), Some(6.0));
}
