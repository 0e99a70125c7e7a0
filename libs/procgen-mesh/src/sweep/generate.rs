//! Sweep generation: rings along a coiling axis stitched into quads.

use super::axis::CoilingAxis;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;

/// Sweeps the axis' generating shape and returns the resulting mesh.
///
/// The axis advances before each ring, so rings are emitted for
/// iterations `1..max_iterations`. Within a ring every profile vertex is
/// joined to the next one, wrapping from the last back to the first.
/// From the second ring on, each adjacent vertex pair also gets the
/// previous ring's edge, two vertical edges and one quad spanning both
/// rings.
///
/// # Errors
/// - Configuration error when a ring's profile is empty
/// - [`GeometryError::IndexMismatch`] when a ring's profile length differs
///   from the previous ring's
///
/// # Example
///
/// ```rust
/// use procgen_mesh::sweep::{generate_sweep, make_circle, CoilingAxis};
/// use procgen_mesh::Vec3;
///
/// let profile = make_circle(1.0, 8)?;
/// let mut axis = CoilingAxis::new(Vec3::ZERO, Vec3::Z, Vec3::X, profile, 5)?
///     .with_displacement(procgen_mesh::sweep::AxisParam::from_fn(|n| n as f64));
/// let mesh = generate_sweep(&mut axis)?;
/// assert_eq!(mesh.vertex_count(), 4 * 9);
/// assert_eq!(mesh.face_count(), 3 * 9);
/// # Ok::<(), procgen_mesh::GeometryError>(())
/// ```
pub fn generate_sweep(axis: &mut CoilingAxis) -> GeometryResult<Mesh> {
    let mut mesh = Mesh::new();
    let mut last_ring: Vec<u32> = Vec::new();
    let tangent = axis.tangent_vector();
    let mut rings = 0usize;

    while axis.iterate() {
        let normal = axis.normal_vector();
        let center = axis.axis_position() + axis.radius() * normal;
        let scale = axis.scaling_factor();
        let shape = axis.generating_shape();

        if shape.is_empty() {
            return Err(GeometryError::configuration(format!(
                "generating shape is empty at iteration {}",
                axis.current_iteration()
            )));
        }
        if !last_ring.is_empty() && shape.len() != last_ring.len() {
            return Err(GeometryError::index_mismatch(
                format!("sweep ring {}", axis.current_iteration()),
                last_ring.len(),
                shape.len(),
            ));
        }

        let ring: Vec<u32> = shape
            .iter()
            .map(|point| {
                let p = scale * *point;
                mesh.add_vertex(center + p.x * normal + p.y * tangent)
            })
            .collect();

        stitch_ring(&mut mesh, &last_ring, &ring);
        last_ring = ring;
        rings += 1;
    }

    tracing::debug!(
        rings,
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        faces = mesh.face_count(),
        "sweep generated"
    );

    Ok(mesh)
}

/// Emits the edges of `ring` and, when a previous ring exists, the band of
/// edges and quads joining the two.
fn stitch_ring(mesh: &mut Mesh, last: &[u32], ring: &[u32]) {
    let l = ring.len();
    for i in 0..l {
        let next = (i + 1) % l;
        mesh.add_edge(ring[i], ring[next]);

        if !last.is_empty() {
            mesh.add_edge(last[i], last[next]);
            mesh.add_edge(last[i], ring[i]);
            mesh.add_edge(last[next], ring[next]);
            mesh.add_quad(last[i], last[next], ring[next], ring[i]);
        }
    }
}
