//! Validated level-sequence type and parent resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rooted tree encoded as the sequence of vertex depths in traversal order
///
/// - Entry 0 is always the root, at level 0
/// - Every later entry is at least 1, and is preceded by an entry exactly one
///   level shallower: the nearest such entry is the vertex's parent
/// - The encoding is lossless; the generator additionally emits only one
///   canonical sequence per free-tree isomorphism class
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelSequence {
    levels: Vec<usize>,
}

impl LevelSequence {
    /// Create a sequence after checking the encoding invariant
    pub fn new(levels: Vec<usize>) -> crate::Result<Self> {
        let n = levels.len();
        if n == 0 {
            return Err(crate::FreeTreeError::InvalidSequence(
                "sequence is empty".to_string(),
            ));
        }
        if levels[0] != 0 {
            return Err(crate::FreeTreeError::InvalidSequence(format!(
                "root must be at level 0, found {}",
                levels[0]
            )));
        }

        // A level is an eligible parent level once it has appeared.
        let mut seen = vec![false; n];
        seen[0] = true;
        for (i, &level) in levels.iter().enumerate().skip(1) {
            if level == 0 {
                return Err(crate::FreeTreeError::InvalidSequence(format!(
                    "level 0 reappears at position {i}"
                )));
            }
            if level >= n || !seen[level - 1] {
                return Err(crate::FreeTreeError::InvalidSequence(format!(
                    "no parent at level {} for position {i}",
                    level - 1
                )));
            }
            seen[level] = true;
        }

        Ok(LevelSequence { levels })
    }

    /// Wrap levels the generator has already proven valid
    pub(crate) fn from_unchecked(levels: Vec<usize>) -> Self {
        debug_assert!(LevelSequence::new(levels.clone()).is_ok());
        LevelSequence { levels }
    }

    /// The single-vertex tree
    pub fn trivial() -> Self {
        LevelSequence { levels: vec![0] }
    }

    /// Number of vertices
    pub fn n_vertices(&self) -> usize {
        self.levels.len()
    }

    /// Number of entries (same as the vertex count)
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a sequence holds at least the root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The levels in traversal order
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Consume the sequence, returning the raw levels
    pub fn into_levels(self) -> Vec<usize> {
        self.levels
    }

    /// Parent position of each vertex; entry 0 is the root and maps to itself
    ///
    /// Resolved in one pass with a last-seen-position table per level: the
    /// parent of vertex i is the nearest preceding vertex one level up.
    pub fn parents(&self) -> Vec<usize> {
        let n = self.levels.len();
        let mut last_at = vec![0usize; n];
        let mut parents = vec![0usize; n];
        for (i, &level) in self.levels.iter().enumerate() {
            if i > 0 {
                parents[i] = last_at[level - 1];
            }
            last_at[level] = i;
        }
        parents
    }

    /// Edges of the tree as (child, parent) position pairs
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.parents()
            .into_iter()
            .enumerate()
            .skip(1)
            .collect()
    }

    /// Depth of the deepest vertex
    pub fn height(&self) -> usize {
        self.levels.iter().copied().max().unwrap_or(0)
    }
}

impl AsRef<[usize]> for LevelSequence {
    fn as_ref(&self) -> &[usize] {
        &self.levels
    }
}

impl fmt::Debug for LevelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelSequence({:?})", self.levels)
    }
}

impl fmt::Display for LevelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{level}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sequences() {
        assert!(LevelSequence::new(vec![0]).is_ok());
        assert!(LevelSequence::new(vec![0, 1]).is_ok());
        assert!(LevelSequence::new(vec![0, 1, 2, 1, 2]).is_ok());
        assert!(LevelSequence::new(vec![0, 1, 1, 1, 1]).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(LevelSequence::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_bad_root() {
        assert!(LevelSequence::new(vec![1, 2]).is_err());
        assert!(LevelSequence::new(vec![0, 1, 0]).is_err());
    }

    #[test]
    fn test_rejects_orphan_level() {
        // level 2 with no preceding level 1
        assert!(LevelSequence::new(vec![0, 2]).is_err());
        // gap after a valid prefix
        assert!(LevelSequence::new(vec![0, 1, 3]).is_err());
    }

    #[test]
    fn test_parents_nearest_preceding() {
        let seq = LevelSequence::new(vec![0, 1, 2, 1, 2]).unwrap();
        assert_eq!(seq.parents(), vec![0, 0, 1, 0, 3]);
    }

    #[test]
    fn test_parents_reuse_earlier_level() {
        // vertex 4 at level 3 attaches under the nearest preceding level 2,
        // which is position 2 even though a level-1 vertex sits in between
        let seq = LevelSequence::new(vec![0, 1, 2, 1, 3]).unwrap();
        assert_eq!(seq.parents(), vec![0, 0, 1, 0, 2]);
    }

    #[test]
    fn test_edges() {
        let seq = LevelSequence::new(vec![0, 1, 2, 1, 2]).unwrap();
        assert_eq!(seq.edges(), vec![(1, 0), (2, 1), (3, 0), (4, 3)]);
    }

    #[test]
    fn test_serde_round_trip() {
        let seq = LevelSequence::new(vec![0, 1, 2, 1, 1]).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        let back: LevelSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, back);
    }
}
