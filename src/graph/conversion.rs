//! Convert level sequences to adjacency matrices and graphs

use crate::sequence::LevelSequence;
use ndarray::Array2;
use petgraph::graph::UnGraph;

/// Convert a raw level sequence to the adjacency matrix of the tree it
/// encodes
///
/// The sequence is validated first: the root must sit at level 0 and every
/// later entry needs an earlier entry one level up, otherwise an
/// `InvalidSequence` error is returned with no partial output.
pub fn level_order_to_adjacency_matrix(levels: &[usize]) -> crate::Result<Array2<u8>> {
    let seq = LevelSequence::new(levels.to_vec())?;
    Ok(adjacency_matrix(&seq))
}

/// Adjacency matrix of a validated sequence
///
/// One pass over the parent table; the result is symmetric with a zero
/// diagonal and exactly n - 1 ones per triangle. A fresh matrix is returned
/// on every call.
pub fn adjacency_matrix(seq: &LevelSequence) -> Array2<u8> {
    let n = seq.len();
    let mut matrix = Array2::zeros((n, n));
    for (child, parent) in seq.edges() {
        matrix[[child, parent]] = 1;
        matrix[[parent, child]] = 1;
    }
    matrix
}

/// Undirected [`petgraph`] graph of a validated sequence
///
/// Vertex indices match sequence positions.
pub fn to_graph(seq: &LevelSequence) -> UnGraph<(), ()> {
    let n = seq.len();
    let mut graph = UnGraph::with_capacity(n, n.saturating_sub(1));
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    for (child, parent) in seq.edges() {
        graph.add_edge(nodes[child], nodes[parent], ());
    }
    graph
}
