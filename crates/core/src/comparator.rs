use std::fmt;

use common::distance::Distance;

use super::matrix::{DistanceMatrix, ShortestPaths};

/// Outcome of cross-checking two solver results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agreement {
    /// Both matrices are identical, or both solvers reported a negative cycle.
    Agree,
    /// One solver produced a matrix while the other reported a negative cycle.
    OutcomeMismatch,
    DimensionMismatch { left: usize, right: usize },
    /// First differing cell in row-major order.
    CellMismatch {
        row: usize,
        col: usize,
        left: Distance,
        right: Distance,
    },
}

impl Agreement {
    pub fn is_agree(&self) -> bool {
        matches!(self, Agreement::Agree)
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Agreement::Agree => write!(f, "results agree"),
            Agreement::OutcomeMismatch => {
                write!(f, "only one solver reported a negative cycle")
            }
            Agreement::DimensionMismatch { left, right } => {
                write!(f, "matrix dimensions differ: {} vs {}", left, right)
            }
            Agreement::CellMismatch {
                row,
                col,
                left,
                right,
            } => write!(f, "cell ({}, {}) differs: {} vs {}", row, col, left, right),
        }
    }
}

/// Compares two distance matrices cell by cell.
///
/// A dimension mismatch is reported as such, never as an error. +∞ equals +∞
/// and finite values compare exactly.
pub fn compare_matrices(left: &DistanceMatrix, right: &DistanceMatrix) -> Agreement {
    if left.dim() != right.dim() {
        return Agreement::DimensionMismatch {
            left: left.dim(),
            right: right.dim(),
        };
    }

    let n = left.dim();
    for row in 0..n {
        for col in 0..n {
            let (l, r) = (left.get(row, col), right.get(row, col));
            if l != r {
                return Agreement::CellMismatch {
                    row,
                    col,
                    left: l,
                    right: r,
                };
            }
        }
    }

    Agreement::Agree
}

/// Compares two solver outcomes. A matrix never agrees with a negative-cycle signal.
pub fn compare(left: &ShortestPaths, right: &ShortestPaths) -> Agreement {
    match (left, right) {
        (ShortestPaths::NegativeCycle, ShortestPaths::NegativeCycle) => Agreement::Agree,
        (ShortestPaths::Distances(l), ShortestPaths::Distances(r)) => compare_matrices(l, r),
        _ => Agreement::OutcomeMismatch,
    }
}

pub fn matrices_equal(left: &DistanceMatrix, right: &DistanceMatrix) -> bool {
    compare_matrices(left, right).is_agree()
}

pub fn outcomes_agree(left: &ShortestPaths, right: &ShortestPaths) -> bool {
    compare(left, right).is_agree()
}
