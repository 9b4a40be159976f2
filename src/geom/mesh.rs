//! Quad faces and the unindexed meshes built from them.

use serde::{Deserialize, Serialize};

use super::{BBox, Point3, Tolerance};

/// A quadrilateral with its own copy of four vertices.
///
/// Vertex order is fixed:
/// 0. curve segment start, sweep step start
/// 1. curve segment start, sweep step end
/// 2. curve segment end, sweep step end
/// 3. curve segment end, sweep step start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 3]; 4]", into = "[[f64; 3]; 4]")]
pub struct QuadFace {
    pub vertices: [Point3; 4],
}

impl QuadFace {
    #[must_use]
    pub const fn new(vertices: [Point3; 4]) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn to_array(self) -> [[f64; 3]; 4] {
        self.vertices.map(Point3::to_array)
    }

    #[must_use]
    pub fn from_array(arr: [[f64; 3]; 4]) -> Self {
        Self::new(arr.map(Point3::from_array))
    }

    /// The same quad with the opposite orientation.
    ///
    /// Exchanges the sweep-start and sweep-end columns, so the face lists
    /// (sweep end, sweep start) for each curve point.
    #[must_use]
    pub fn flipped(self) -> Self {
        let [a, b, c, d] = self.vertices;
        Self::new([b, a, d, c])
    }

    /// Twice the vector area of the quad (cross product of its diagonals).
    #[must_use]
    pub fn area_vector_x2(self) -> super::Vec3 {
        let [a, b, c, d] = self.vertices;
        (c - a).cross(d - b)
    }

    /// True when the quad has no area, e.g. both curve points sit on the axis
    /// or the sweep step has zero length.
    #[must_use]
    pub fn is_degenerate(self, tol: Tolerance) -> bool {
        tol.is_zero_length_squared(self.area_vector_x2().length_squared())
    }

    /// Compare vertex by vertex within `tol`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tol: Tolerance) -> bool {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .all(|(&a, &b)| tol.approx_eq_point3(a, b))
    }
}

impl From<[[f64; 3]; 4]> for QuadFace {
    fn from(arr: [[f64; 3]; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<QuadFace> for [[f64; 3]; 4] {
    fn from(face: QuadFace) -> Self {
        face.to_array()
    }
}

/// An ordered quad soup: no vertices are shared between faces.
///
/// Faces are ordered by sweep segment first, then by curve segment.
/// Serializes as a dense `[face][vertex][axis]` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuadMesh {
    faces: Vec<QuadFace>,
}

impl QuadMesh {
    #[must_use]
    pub fn new(faces: Vec<QuadFace>) -> Self {
        Self { faces }
    }

    #[must_use]
    pub fn faces(&self) -> &[QuadFace] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuadFace> {
        self.faces.iter()
    }

    /// Dense `[face][vertex][axis]` representation.
    #[must_use]
    pub fn to_dense(&self) -> Vec<[[f64; 3]; 4]> {
        self.faces.iter().map(|face| face.to_array()).collect()
    }

    /// Inverse of [`to_dense`](Self::to_dense).
    #[must_use]
    pub fn from_dense(dense: &[[[f64; 3]; 4]]) -> Self {
        Self::new(dense.iter().copied().map(QuadFace::from_array).collect())
    }

    /// Axis-aligned bounds of every vertex, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<BBox> {
        BBox::from_points(self.faces.iter().flat_map(|face| face.vertices))
    }

    /// Number of faces with no area.
    #[must_use]
    pub fn degenerate_face_count(&self, tol: Tolerance) -> usize {
        self.faces.iter().filter(|face| face.is_degenerate(tol)).count()
    }

    /// Compare face by face within `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.len() == other.len()
            && self
                .faces
                .iter()
                .zip(other.faces.iter())
                .all(|(&a, &b)| a.approx_eq(b, tol))
    }
}

impl<'a> IntoIterator for &'a QuadMesh {
    type Item = &'a QuadFace;
    type IntoIter = std::slice::Iter<'a, QuadFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

impl IntoIterator for QuadMesh {
    type Item = QuadFace;
    type IntoIter = std::vec::IntoIter<QuadFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.into_iter()
    }
}

impl From<Vec<QuadFace>> for QuadMesh {
    fn from(faces: Vec<QuadFace>) -> Self {
        Self::new(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> QuadFace {
        QuadFace::from_array([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
    }

    #[test]
    fn dense_round_trip_is_lossless() {
        let face = unit_square();
        let mesh = QuadMesh::new(vec![face, face.flipped()]);
        let dense = mesh.to_dense();
        assert_eq!(dense.len(), 2);
        assert_eq!(dense[0][2], [1.0, 1.0, 0.0]);
        assert_eq!(QuadMesh::from_dense(&dense), mesh);
    }

    #[test]
    fn flipped_reverses_orientation() {
        let face = unit_square();
        let flipped = face.flipped();
        assert_eq!(flipped.vertices[0], face.vertices[1]);
        assert_eq!(flipped.vertices[1], face.vertices[0]);
        assert_eq!(flipped.vertices[2], face.vertices[3]);
        assert_eq!(flipped.vertices[3], face.vertices[2]);
        assert!(face.area_vector_x2().z > 0.0);
        assert!(flipped.area_vector_x2().z < 0.0);
        assert_eq!(flipped.flipped(), face);
    }

    #[test]
    fn collapsed_quad_is_degenerate() {
        let on_axis = QuadFace::from_array([
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
        ]);
        assert!(on_axis.is_degenerate(Tolerance::default()));
        assert!(!unit_square().is_degenerate(Tolerance::default()));

        let mesh = QuadMesh::new(vec![on_axis, unit_square()]);
        assert_eq!(mesh.degenerate_face_count(Tolerance::default()), 1);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mesh = QuadMesh::new(vec![unit_square()]);
        let bbox = mesh.bounds().expect("non-empty");
        assert_eq!(bbox.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bbox.max, Point3::new(1.0, 1.0, 0.0));
        assert!(QuadMesh::default().bounds().is_none());
    }

    #[test]
    fn approx_eq_tolerates_rounding() {
        let a = QuadMesh::new(vec![unit_square()]);
        let mut nudged = unit_square();
        nudged.vertices[0].x += 1e-12;
        let b = QuadMesh::new(vec![nudged]);
        assert!(a.approx_eq(&b, Tolerance::default()));
        assert!(!a.approx_eq(&QuadMesh::default(), Tolerance::default()));
    }
}
