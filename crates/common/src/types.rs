/// Signed integer weight carried by a directed edge.
pub type Weight = i64;

/// Accumulated cost of a path.
///
/// Wider than `Weight`: a simple path over `n` vertices sums at most `n - 1`
/// edge weights, which stays exact here for any graph that fits in memory.
pub type Cost = i128;

/// Type alias for a single directed edge: (source, sink, weight), zero-based.
pub type Edge = (usize, usize, Weight);
