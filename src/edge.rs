// Functions for deriving the edge structure of a triangular brain surface mesh.
// A mesh stores faces as index triples into the vertex list; all graph computations
// in this crate start from the unordered, undirected edges those faces imply.

use std::collections::HashSet;

use itertools::Itertools;

use crate::error::{NeurographError, Result};

/// Extract the unique undirected edges from a face list.
///
/// Every 2-combination of vertices within a face contributes one candidate edge;
/// candidates are deduplicated across faces and normalized so that the smaller
/// vertex index comes first. Faces may have arbitrary arity >= 3, so this also
/// works for quad or general polygonal meshes. Degenerate face sides connecting
/// a vertex to itself are dropped.
///
/// For large triangle meshes prefer [`mesh_edges`], which produces the per-vertex
/// adjacency sets directly and avoids building the explicit edge list.
///
/// # Examples
///
/// ```
/// let faces = [[0_usize, 1, 2], [0, 1, 3]];
/// let edges = neurograph::extract_edges(&faces).unwrap();
/// assert_eq!(5, edges.len());
/// ```
pub fn extract_edges<F>(faces: &[F]) -> Result<Vec<(usize, usize)>>
where
    F: AsRef<[usize]>,
{
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for face in faces {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(NeurographError::InvalidFaceArity(face.len()));
        }
        for pair in face.iter().copied().combinations(2) {
            if pair[0] == pair[1] {
                continue;
            }
            let edge = if pair[0] < pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    Ok(edges)
}

/// Compute the 1-ring adjacency of a triangle mesh as per-vertex neighbor sets.
///
/// This is the sparse counterpart of [`extract_edges`] for triangle meshes: the
/// three sides of every face are scattered into the neighbor sets of both of
/// their endpoints, which symmetrizes the relation in the same pass. The vertex
/// count is inferred as the largest index referenced by any face plus one.
///
/// The result is the `one_ring` structure consumed by the geodesic and region
/// distance functions, and the base case of the ring neighborhood expansion.
/// Neighbor sets never contain their own vertex, even for degenerate faces
/// that repeat an index.
pub fn mesh_edges(faces: &[[usize; 3]]) -> Vec<HashSet<usize>> {
    let num_vertices = match faces.iter().flatten().max() {
        Some(max_index) => max_index + 1,
        None => return Vec::new(),
    };

    let mut neighbors: Vec<HashSet<usize>> = vec![HashSet::new(); num_vertices];
    for face in faces {
        let [a, b, c] = *face;
        for &(i, j) in &[(a, b), (b, c), (c, a)] {
            if i != j {
                neighbors[i].insert(j);
                neighbors[j].insert(i);
            }
        }
    }
    neighbors
}
