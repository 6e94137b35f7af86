use quick_error::quick_error;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug, PartialEq)]
    pub enum NeurographError {
        /// A polygonal face with fewer than 3 vertices.
        InvalidFaceArity(arity: usize) {
            display("Invalid face with {} vertices, a face requires at least 3", arity)
        }

        /// An edge that does not consist of exactly 2 vertices.
        InvalidEdgeArity(arity: usize) {
            display("Invalid edge with {} vertices, an edge requires exactly 2", arity)
        }

        /// Ring radius below 1 passed to a ring neighborhood computation.
        InvalidRingRadius(n: usize) {
            display("The number of rings must be equal or greater than 1, got {}", n)
        }

        /// A vertex index outside the valid range of the mesh.
        VertexIndexOutOfBounds(index: usize, num_vertices: usize) {
            display("Vertex index {} out of bounds for mesh with {} vertices", index, num_vertices)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, NeurographError>;
