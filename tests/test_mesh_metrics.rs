use std::collections::HashSet;

use approx::assert_abs_diff_eq;
use neurograph::{
    geodesic_distance, hausdorff_distance, median_minimal_distance, n_ring_neighbors, HopDist,
};

/// Closed tetrahedron: 4 vertices, every pair connected.
const TETRAHEDRON: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// 3x3 vertex lattice, cells triangulated along the anti-diagonal.
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
fn tetrahedron_rings_and_distances() {
    let one_ring = n_ring_neighbors(&TETRAHEDRON, 1, false).unwrap();

    for (vertex, neighbors) in one_ring.iter().enumerate() {
        assert_eq!(3, neighbors.len());
        assert!(!neighbors.contains(&vertex));
    }
    for src in 0..4 {
        for dst in 0..4 {
            if src != dst {
                assert_eq!(
                    HopDist::Finite(1),
                    geodesic_distance(src, dst, &one_ring).unwrap()
                );
            }
        }
    }
}

#[test]
fn lattice_corner_to_corner_is_four_hops() {
    let one_ring = n_ring_neighbors(&LATTICE, 1, false).unwrap();
    assert_eq!(
        HopDist::Finite(4),
        geodesic_distance(0, 8, &one_ring).unwrap()
    );
    assert_eq!(
        geodesic_distance(0, 8, &one_ring).unwrap(),
        geodesic_distance(8, 0, &one_ring).unwrap()
    );
}

#[test]
fn singleton_regions_on_the_same_vertex_have_zero_distance() {
    let one_ring = n_ring_neighbors(&TETRAHEDRON, 1, false).unwrap();
    let labels = [1, 0, 0, 0];

    let hd = hausdorff_distance(&labels, &labels, 1, 1, &one_ring).unwrap();
    let mmd = median_minimal_distance(&labels, &labels, 1, 1, &one_ring).unwrap();
    assert_abs_diff_eq!(0.0, hd);
    assert_abs_diff_eq!(0.0, mmd);
}

#[test]
fn region_metrics_on_lattice_parcels() {
    let one_ring = n_ring_neighbors(&LATTICE, 1, false).unwrap();
    // Left column against right column of the lattice.
    let labels = [1, 0, 2, 1, 0, 2, 1, 0, 2];

    let hd = hausdorff_distance(&labels, &labels, 1, 2, &one_ring).unwrap();
    let mmd = median_minimal_distance(&labels, &labels, 1, 2, &one_ring).unwrap();
    assert_abs_diff_eq!(2.0, hd);
    assert_abs_diff_eq!(2.0, mmd);
    assert!(mmd <= hd);

    // Swapping regions changes nothing.
    let hd_swapped = hausdorff_distance(&labels, &labels, 2, 1, &one_ring).unwrap();
    assert_abs_diff_eq!(hd, hd_swapped);
}

#[test]
fn isolated_vertex_is_unreachable_from_the_mesh() {
    let mut one_ring = n_ring_neighbors(&[[0, 1, 2]], 1, false).unwrap();
    one_ring.push(HashSet::new());

    assert_eq!(
        HopDist::Unreachable,
        geodesic_distance(1, 3, &one_ring).unwrap()
    );

    let labels = [1, 0, 0, 2];
    let hd = hausdorff_distance(&labels, &labels, 1, 2, &one_ring).unwrap();
    assert!(hd.is_infinite());
}
