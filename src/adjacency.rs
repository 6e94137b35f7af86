// Dense adjacency matrix construction from an edge list or a ring neighbor list.
// The dense form costs O(N^2) memory and is meant for small meshes and for
// interoperability with matrix-based downstream analyses. For full-resolution
// cortical meshes, stay with the per-vertex sets from `mesh_edges` instead.

use std::collections::HashSet;

use ndarray::Array2;

use crate::error::{NeurographError, Result};

/// Build a symmetric binary adjacency matrix from an edge list.
///
/// Each edge must consist of exactly 2 vertex indices; any other arity fails
/// with [`NeurographError::InvalidEdgeArity`] before any allocation happens.
/// The matrix dimension is the largest vertex index referenced by any edge
/// plus one. Symmetry is enforced by setting both `(i, j)` and `(j, i)`.
pub fn adjacency_from_edges<E>(edges: &[E]) -> Result<Array2<u8>>
where
    E: AsRef<[usize]>,
{
    let mut num_vertices = 0;
    for edge in edges {
        let edge = edge.as_ref();
        if edge.len() != 2 {
            return Err(NeurographError::InvalidEdgeArity(edge.len()));
        }
        num_vertices = num_vertices.max(edge[0] + 1).max(edge[1] + 1);
    }

    let mut adjacency = Array2::zeros((num_vertices, num_vertices));
    for edge in edges {
        let edge = edge.as_ref();
        adjacency[[edge[0], edge[1]]] = 1;
        adjacency[[edge[1], edge[0]]] = 1;
    }
    Ok(adjacency)
}

/// Build a binary adjacency matrix from a ring neighbor list, one row per vertex.
///
/// The matrix dimension equals the length of the list. Symmetry is not
/// enforced here: the ring list is taken as-is, so an asymmetric input
/// produces an asymmetric matrix (ring lists computed by
/// [`crate::n_ring_neighbors`] are always symmetric). A neighbor index outside
/// the list range fails with [`NeurographError::VertexIndexOutOfBounds`].
pub fn adjacency_from_ring(ring: &[HashSet<usize>]) -> Result<Array2<u8>> {
    let num_vertices = ring.len();
    let mut adjacency = Array2::zeros((num_vertices, num_vertices));
    for (i, neighbors) in ring.iter().enumerate() {
        for &j in neighbors {
            if j >= num_vertices {
                return Err(NeurographError::VertexIndexOutOfBounds(j, num_vertices));
            }
            adjacency[[i, j]] = 1;
        }
    }
    Ok(adjacency)
}
