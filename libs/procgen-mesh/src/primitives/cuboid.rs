//! # Cuboid Primitive
//!
//! Box volume centered at the origin, used as a bounding container for
//! generated structures.

use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use glam::DVec3;

/// Corners of the unit box `[-1, 1]³`.
const CORNERS: [[f64; 3]; 8] = [
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

const FACES: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 7, 6, 5],
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [2, 6, 7, 3],
    [4, 0, 3, 7],
];

/// Creates a box spanning `±width` on x, `±depth` on y and `±height` on z.
///
/// # Returns
///
/// A mesh with 8 vertices, 12 edges and 6 quads.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::primitives::cuboid;
///
/// let mesh = cuboid(2.0, 3.0, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn cuboid(width: f64, height: f64, depth: f64) -> GeometryResult<Mesh> {
    let valid = |size: f64| size > 0.0 && size.is_finite();
    if !(valid(width) && valid(height) && valid(depth)) {
        return Err(GeometryError::configuration(format!(
            "Cuboid size must be positive: width={width}, height={height}, depth={depth}"
        )));
    }

    let scale = DVec3::new(width, depth, height);
    let mut mesh = Mesh::with_capacity(CORNERS.len(), EDGES.len(), FACES.len());

    for corner in CORNERS {
        mesh.add_vertex(DVec3::from_array(corner) * scale);
    }
    for [a, b] in EDGES {
        mesh.add_edge(a, b);
    }
    for [a, b, c, d] in FACES {
        mesh.add_quad(a, b, c, d);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_counts() {
        let mesh = cuboid(1.0, 1.0, 1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 6);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cuboid_extent() {
        let mesh = cuboid(2.0, 5.0, 3.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-2.0, -3.0, -5.0));
        assert_eq!(max, DVec3::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn test_cuboid_faces_use_each_vertex_three_times() {
        let mesh = cuboid(1.0, 1.0, 1.0).unwrap();
        let mut uses = [0usize; 8];
        for face in mesh.faces() {
            for &index in face {
                uses[index as usize] += 1;
            }
        }
        assert_eq!(uses, [3; 8]);
    }

    #[test]
    fn test_cuboid_rejects_non_positive_size() {
        assert!(cuboid(0.0, 1.0, 1.0).is_err());
        assert!(cuboid(1.0, -1.0, 1.0).is_err());
        assert!(cuboid(1.0, 1.0, 0.0).is_err());
        assert!(cuboid(f64::NAN, 1.0, 1.0).is_err());
        assert!(cuboid(1.0, f64::INFINITY, 1.0).is_err());
    }
}
