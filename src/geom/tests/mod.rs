mod test_path_revolve_basic;

use super::{Point3, QuadFace};

pub(super) fn assert_point_close(actual: Point3, expected: [f64; 3], tol: f64) {
    for (idx, (a, e)) in actual.to_array().iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(diff < tol, "coordinate {idx} differs: {a} vs {e}");
    }
}

pub(super) fn assert_face_close(actual: &QuadFace, expected: [[f64; 3]; 4], tol: f64) {
    for (vertex, want) in actual.vertices.iter().zip(expected) {
        assert_point_close(*vertex, want, tol);
    }
}
