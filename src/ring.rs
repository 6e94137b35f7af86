//! Ring neighborhoods on triangle meshes.
//!
//! The n-ring neighborhood of a vertex is the set of vertices reachable within
//! n mesh-edge hops. The cumulative form collects rings 1 through n; the
//! ordinal form keeps only the vertices at exactly hop n. Both are computed by
//! iterative closure over the 1-ring adjacency from [`crate::mesh_edges`].

use std::collections::HashSet;

use crate::edge::mesh_edges;
use crate::error::{NeurographError, Result};

/// Compute the n-ring neighbor sets for every vertex of a triangle mesh.
///
/// With `ordinal` set to `false` (the usual case), the result holds for each
/// vertex the cumulative set of vertices within 1 to `n` hops. With `ordinal`
/// set to `true`, only the n-th ring itself is returned, excluding all inner
/// rings. In both forms a vertex is never a member of its own neighbor set.
///
/// The expansion keeps a frontier set per vertex and, at each of the `n - 1`
/// steps, replaces it with the union of its members' 1-ring neighbors, minus
/// the vertex itself and minus everything already collected. Each step builds
/// fresh sets, so earlier rings are never mutated once published.
///
/// A radius below 1 fails with [`NeurographError::InvalidRingRadius`].
///
/// # Examples
///
/// ```
/// let faces = [[0_usize, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
/// let one_ring = neurograph::n_ring_neighbors(&faces, 1, false).unwrap();
/// assert_eq!(3, one_ring[0].len());
/// assert!(!one_ring[0].contains(&0));
/// ```
pub fn n_ring_neighbors(
    faces: &[[usize; 3]],
    n: usize,
    ordinal: bool,
) -> Result<Vec<HashSet<usize>>> {
    if n < 1 {
        return Err(NeurographError::InvalidRingRadius(n));
    }

    let one_ring = mesh_edges(faces);
    let num_vertices = one_ring.len();

    // Rings 1..=k collected so far, and the k-th ring alone.
    let mut cumulative = one_ring.clone();
    let mut frontier = one_ring.clone();

    for _ in 1..n {
        let mut next_frontier: Vec<HashSet<usize>> = Vec::with_capacity(num_vertices);
        for vertex in 0..num_vertices {
            let mut expanded: HashSet<usize> = HashSet::new();
            for &member in &frontier[vertex] {
                expanded.extend(one_ring[member].iter().copied());
            }
            expanded.remove(&vertex);
            let fresh: HashSet<usize> =
                expanded.difference(&cumulative[vertex]).copied().collect();
            next_frontier.push(fresh);
        }
        for vertex in 0..num_vertices {
            cumulative[vertex].extend(next_frontier[vertex].iter().copied());
        }
        frontier = next_frontier;
    }

    if ordinal {
        Ok(frontier)
    } else {
        Ok(cumulative)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    const TETRAHEDRON: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

    // 3x3 vertex lattice, cells triangulated along the anti-diagonal:
    //
    //   0 - 1 - 2
    //   | / | / |
    //   3 - 4 - 5
    //   | / | / |
    //   6 - 7 - 8
    const LATTICE: [[usize; 3]; 8] = [
        [0, 1, 3],
        [1, 4, 3],
        [1, 2, 4],
        [2, 5, 4],
        [3, 4, 6],
        [4, 7, 6],
        [4, 5, 7],
        [5, 8, 7],
    ];

    #[test]
    fn tetrahedron_one_ring_is_all_other_vertices() {
        let ring = n_ring_neighbors(&TETRAHEDRON, 1, false).unwrap();

        assert_eq!(4, ring.len());
        for (vertex, neighbors) in ring.iter().enumerate() {
            assert_eq!(3, neighbors.len());
            assert!(!neighbors.contains(&vertex));
        }
    }

    #[test]
    fn tetrahedron_second_ordinal_ring_is_empty() {
        let second = n_ring_neighbors(&TETRAHEDRON, 2, true).unwrap();
        for neighbors in second.iter() {
            assert!(neighbors.is_empty());
        }
    }

    #[test]
    fn lattice_corner_rings_match_hand_computed_sets() {
        let one: HashSet<usize> = vec![1, 3].into_iter().collect();
        let two: HashSet<usize> = vec![2, 4, 6].into_iter().collect();

        let ring1 = n_ring_neighbors(&LATTICE, 1, false).unwrap();
        assert_eq!(one, ring1[0]);

        let ring2_ordinal = n_ring_neighbors(&LATTICE, 2, true).unwrap();
        assert_eq!(two, ring2_ordinal[0]);

        let ring2 = n_ring_neighbors(&LATTICE, 2, false).unwrap();
        let both: HashSet<usize> = one.union(&two).copied().collect();
        assert_eq!(both, ring2[0]);
    }

    #[test]
    fn cumulative_rings_grow_monotonically_and_contain_ordinal_rings() {
        let mut previous_sizes = vec![0_usize; 9];
        for n in 1..=4 {
            let cumulative = n_ring_neighbors(&LATTICE, n, false).unwrap();
            let ordinal = n_ring_neighbors(&LATTICE, n, true).unwrap();
            for vertex in 0..cumulative.len() {
                assert!(cumulative[vertex].len() >= previous_sizes[vertex]);
                assert!(ordinal[vertex].is_subset(&cumulative[vertex]));
                assert!(!cumulative[vertex].contains(&vertex));
                previous_sizes[vertex] = cumulative[vertex].len();
            }
        }
    }

    #[test]
    fn ring_radius_zero_is_rejected() {
        assert_eq!(
            Err(NeurographError::InvalidRingRadius(0)),
            n_ring_neighbors(&TETRAHEDRON, 0, false)
        );
    }
}
