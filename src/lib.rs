//! Neighbor-graph and geodesic distance computations on triangulated brain surface meshes.
//!
//! The focus of this package is on surface-based neuroimaging analyses: it derives
//! the edge and ring-neighborhood structure of a cortical mesh from its face list,
//! computes discrete geodesic distances (edge-hop counts) on the resulting graph,
//! and aggregates them into region-level metrics like the Hausdorff distance and
//! the median minimal distance between two labeled regions.
//!
//! Mesh and label data arrive as in-memory arrays; reading them from neuroimaging
//! file formats is the job of a separate loader crate.

pub mod adjacency;
pub mod distance;
pub mod edge;
pub mod error;
pub mod geodesic;
pub mod ring;

pub use adjacency::{adjacency_from_edges, adjacency_from_ring};
pub use distance::{hausdorff_distance, median_minimal_distance, region_vertices};
pub use edge::{extract_edges, mesh_edges};
pub use error::{NeurographError, Result};
pub use geodesic::{distance_field, geodesic_distance, HopDist};
pub use ring::n_ring_neighbors;
