//! # freetree: exhaustive free-tree enumeration
//!
//! This library enumerates, without duplicates, every structurally distinct
//! (non-isomorphic) unlabeled free tree on a given number of vertices, and
//! counts them without enumerating.
//!
//! ## Features
//!
//! - **Generation**: a successor-based walk over canonical level sequences,
//!   one representative per isomorphism class, constant amortized work per tree
//! - **Counting**: the rooted-tree convolution recurrence with the centroid
//!   correction, independent of generation
//! - **Conversion**: level sequences to dense adjacency matrices or
//!   [`petgraph`] graphs
//!
//! Trees are produced lazily, so taking the first k trees of a large size
//! costs only the work for those k:
//!
//! ```
//! use freetree::prelude::*;
//!
//! let trees: Vec<LevelSequence> = free_trees(5).unwrap().collect();
//! assert_eq!(trees.len() as u128, count_free_trees(5).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Level-sequence encoding of rooted trees
pub mod sequence;

/// Enumeration engine for non-isomorphic free trees
pub mod generate;

/// Tree counting without enumeration
pub mod count;

/// Conversion to adjacency matrices and graphs
pub mod graph;

// Re-export commonly used types
pub use count::{count_free_trees, count_rooted_trees};
pub use generate::{free_tree_matrices, free_trees, AdjacencyMatrices, FreeTrees};
pub use graph::{adjacency_matrix, level_order_to_adjacency_matrix, to_graph};
pub use sequence::LevelSequence;

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum FreeTreeError {
    /// Requested vertex count cannot index any tree
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    /// Sequence does not encode a tree
    #[error("Invalid level sequence: {0}")]
    InvalidSequence(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, FreeTreeError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        count::{count_free_trees, count_rooted_trees},
        generate::{free_tree_matrices, free_trees, AdjacencyMatrices, FreeTrees},
        graph::{adjacency_matrix, level_order_to_adjacency_matrix, to_graph},
        sequence::LevelSequence,
        FreeTreeError, Result,
    };
}
