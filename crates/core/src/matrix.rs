use std::fmt;

use common::distance::Distance;

/// Square matrix of shortest-path costs; row `i` holds the distances from vertex `i`.
///
/// Stored as one flat row-major buffer of `dim * dim` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    dim: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Builds a matrix from one row per source vertex.
    ///
    /// Panics if the rows are not all `rows.len()` long.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Self {
        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for row in rows {
            assert_eq!(row.len(), dim, "distance matrix rows must be square");
            cells.extend(row);
        }
        Self { dim, cells }
    }

    pub(crate) fn from_cells(dim: usize, cells: Vec<Distance>) -> Self {
        debug_assert_eq!(cells.len(), dim * dim);
        Self { dim, cells }
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> Distance {
        self.cells[row * self.dim + col]
    }

    pub fn row(&self, row: usize) -> &[Distance] {
        &self.cells[row * self.dim..(row + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        // chunks() rejects a zero chunk size, so an empty matrix yields no rows.
        self.cells.chunks(self.dim.max(1))
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|d| d.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Result of one all-pairs computation.
///
/// A solver returns either a complete matrix or the negative-cycle signal, never a mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPaths {
    Distances(DistanceMatrix),
    NegativeCycle,
}

impl ShortestPaths {
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, ShortestPaths::NegativeCycle)
    }

    pub fn distances(&self) -> Option<&DistanceMatrix> {
        match self {
            ShortestPaths::Distances(matrix) => Some(matrix),
            ShortestPaths::NegativeCycle => None,
        }
    }
}
