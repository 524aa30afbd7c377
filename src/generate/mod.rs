//! Enumeration of non-isomorphic free trees
//!
//! [`free_trees`] drives the successor engine and yields one canonical
//! [`LevelSequence`] per isomorphism class, from the path graph down to the
//! star. [`free_tree_matrices`] is the same enumeration through the
//! structural converter, in the same order.

mod successor;

use crate::graph::adjacency_matrix;
use crate::sequence::LevelSequence;
use ndarray::Array2;
use successor::SuccessorState;

/// Lazy stream of canonical level sequences for all free trees of one size
///
/// Finite, single pass, safe to stop early. Each item is an owned copy of the
/// engine's buffer; holding one across iterations never aliases the next.
pub struct FreeTrees {
    n_vertices: usize,
    state: Option<SuccessorState>,
    trivial_pending: bool,
}

impl FreeTrees {
    /// Number of vertices per emitted tree
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }
}

impl Iterator for FreeTrees {
    type Item = LevelSequence;

    fn next(&mut self) -> Option<LevelSequence> {
        if self.trivial_pending {
            self.trivial_pending = false;
            return Some(LevelSequence::trivial());
        }
        let state = self.state.as_mut()?;
        state.canonicalize();
        let item = LevelSequence::from_unchecked(state.levels().to_vec());
        if !state.advance() {
            self.state = None;
        }
        Some(item)
    }
}

/// Lazy stream of adjacency matrices, elementwise converter image of
/// [`FreeTrees`] in identical order
pub struct AdjacencyMatrices {
    inner: FreeTrees,
}

impl AdjacencyMatrices {
    /// Number of vertices per emitted tree
    pub fn n_vertices(&self) -> usize {
        self.inner.n_vertices()
    }
}

impl Iterator for AdjacencyMatrices {
    type Item = Array2<u8>;

    fn next(&mut self) -> Option<Array2<u8>> {
        self.inner.next().map(|seq| adjacency_matrix(&seq))
    }
}

/// Enumerate every non-isomorphic free tree on `n_vertices` vertices as
/// canonical level sequences
///
/// A single vertex yields exactly the trivial tree `[0]`. Zero vertices are
/// rejected before any state is built.
pub fn free_trees(n_vertices: usize) -> crate::Result<FreeTrees> {
    if n_vertices == 0 {
        return Err(crate::FreeTreeError::InvalidVertexCount(n_vertices));
    }
    Ok(FreeTrees {
        n_vertices,
        state: (n_vertices >= 2).then(|| SuccessorState::new(n_vertices)),
        trivial_pending: n_vertices == 1,
    })
}

/// Enumerate every non-isomorphic free tree on `n_vertices` vertices as
/// adjacency matrices, in the same order as [`free_trees`]
pub fn free_tree_matrices(n_vertices: usize) -> crate::Result<AdjacencyMatrices> {
    Ok(AdjacencyMatrices {
        inner: free_trees(n_vertices)?,
    })
}
