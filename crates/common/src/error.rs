use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge endpoint lies outside the vertex range `[0, vertex_count)`.
    NodeIndexOutOfBounds { index: usize, vertex_count: usize },

    /// The `vertex_count * vertex_count` weight matrix cannot be allocated.
    GraphTooLarge { vertex_count: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NodeIndexOutOfBounds {
                index,
                vertex_count,
            } => write!(
                f,
                "Node index {} is out of bounds for a graph with {} vertices.",
                index, vertex_count
            ),

            Error::GraphTooLarge { vertex_count } => write!(
                f,
                "A graph with {} vertices is too large for a dense weight matrix.",
                vertex_count
            ),
        }
    }
}

impl std::error::Error for Error {}
