use common::distance::Distance;
use common::error::Error;
use common::types::{Edge, Weight};

/// Directed, weighted graph stored as a dense adjacency matrix.
///
/// The weight matrix is one flat row-major arena of `n * n` cells:
/// - `weights[i * n + j]` → weight of edge `i -> j`, or `None` when no such
///   edge exists.
///
/// A `Graph` is never mutated after construction; solvers only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    weights: Vec<Option<Weight>>,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices from `(source, sink, weight)` triples.
    ///
    /// Unspecified pairs default to "no edge". A repeated `(source, sink)` pair
    /// overwrites the earlier weight, so the last triple wins.
    ///
    /// # Errors
    /// Returns `Error::GraphTooLarge` if the `num_vertices * num_vertices`
    /// matrix overflows or cannot be reserved, and
    /// `Error::NodeIndexOutOfBounds` if any endpoint is `>= num_vertices`.
    pub fn new(num_vertices: usize, edges: &[Edge]) -> Result<Self, Error> {
        let too_large = Error::GraphTooLarge {
            vertex_count: num_vertices,
        };
        let cells = num_vertices
            .checked_mul(num_vertices)
            .ok_or_else(|| too_large.clone())?;

        let mut weights = Vec::new();
        weights.try_reserve_exact(cells).map_err(|_| too_large)?;
        weights.resize(cells, None);

        for &(source, sink, weight) in edges {
            for index in [source, sink] {
                if index >= num_vertices {
                    return Err(Error::NodeIndexOutOfBounds {
                        index,
                        vertex_count: num_vertices,
                    });
                }
            }
            weights[source * num_vertices + sink] = Some(weight);
        }

        Ok(Self {
            num_vertices,
            weights,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.num_vertices
    }

    /// Weight of edge `source -> sink`, `Distance::Infinite` if absent.
    ///
    /// Panics if either index is out of range.
    pub fn weight(&self, source: usize, sink: usize) -> Distance {
        assert!(
            source < self.num_vertices && sink < self.num_vertices,
            "vertex pair ({source}, {sink}) outside graph of {} vertices",
            self.num_vertices
        );
        self.weights[source * self.num_vertices + sink].map_or(Distance::Infinite, Distance::from)
    }

    /// Iterates over every present edge in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.num_vertices;
        self.weights
            .iter()
            .enumerate()
            .filter_map(move |(cell, weight)| weight.map(|w| (cell / n, cell % n, w)))
    }

    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_edges_in_weight_matrix() {
        let graph = Graph::new(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight(0, 1), Distance::Finite(1));
        assert_eq!(graph.weight(1, 2), Distance::Finite(2));
        assert_eq!(graph.weight(0, 2), Distance::Finite(5));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn unspecified_pairs_have_no_edge() {
        let graph = Graph::new(2, &[(0, 1, -4)]).unwrap();

        assert_eq!(graph.weight(1, 0), Distance::Infinite);
        assert_eq!(graph.weight(0, 0), Distance::Infinite);
        assert_eq!(graph.weight(1, 1), Distance::Infinite);
    }

    #[test]
    fn duplicate_edges_keep_last_weight() {
        let graph = Graph::new(2, &[(0, 1, 7), (0, 1, -3)]).unwrap();

        assert_eq!(graph.weight(0, 1), Distance::Finite(-3));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn out_of_range_sink_is_rejected() {
        let result = Graph::new(2, &[(0, 2, 1)]);

        assert_eq!(
            result,
            Err(Error::NodeIndexOutOfBounds {
                index: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        assert!(Graph::new(1, &[(5, 0, 1)]).is_err());
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new(0, &[]).unwrap();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn any_edge_in_empty_graph_is_rejected() {
        assert!(Graph::new(0, &[(0, 0, 1)]).is_err());
    }

    #[test]
    fn edges_iterates_row_major() {
        let graph = Graph::new(3, &[(2, 0, 4), (0, 2, 1), (0, 1, 0)]).unwrap();
        let edges: Vec<Edge> = graph.edges().collect();

        assert_eq!(edges, vec![(0, 1, 0), (0, 2, 1), (2, 0, 4)]);
    }

    #[test]
    fn vertex_count_whose_square_overflows_is_rejected() {
        let vertex_count = 1usize << (usize::BITS / 2);

        assert_eq!(
            Graph::new(vertex_count, &[]),
            Err(Error::GraphTooLarge { vertex_count })
        );
    }

    #[test]
    fn unallocatable_matrix_is_rejected() {
        // Square fits in usize, but the reservation exceeds isize::MAX bytes.
        let vertex_count = (1usize << (usize::BITS / 2)) - 1;

        assert_eq!(
            Graph::new(vertex_count, &[]),
            Err(Error::GraphTooLarge { vertex_count })
        );
    }

    #[test]
    fn extreme_weights_are_stored_exactly() {
        let graph = Graph::new(2, &[(0, 1, i64::MIN), (1, 0, i64::MAX)]).unwrap();

        assert_eq!(graph.weight(0, 1), Distance::from(i64::MIN));
        assert_eq!(graph.weight(1, 0), Distance::from(i64::MAX));
    }

    #[test]
    fn explicit_self_loop_is_stored() {
        let graph = Graph::new(1, &[(0, 0, -1)]).unwrap();

        assert_eq!(graph.weight(0, 0), Distance::Finite(-1));
    }

    #[test]
    #[should_panic]
    fn weight_lookup_out_of_range_panics() {
        let graph = Graph::new(2, &[]).unwrap();
        graph.weight(0, 2);
    }
}
