//! Successor computation over canonical level sequences
//!
//! The walk starts at the centered encoding of the path graph and steps
//! strictly downward through the canonical order until the star. One step is
//! a decrement at the rightmost deepenable position followed by tiling the
//! suffix with the block that starts at the parent of that position; the
//! parent table makes the block lookup a single read instead of a rescan.

/// Mutable state of one enumeration run.
///
/// `levels` is the current sequence. `parents[i]` is the position of the
/// nearest preceding vertex one level up (the per-position form of a
/// most-recent-occurrence-per-level table). `last_branch` caches the
/// rightmost position whose level exceeds 1, the only position a plain
/// successor step may decrement; 0 means the sequence is the star.
pub(crate) struct SuccessorState {
    levels: Vec<usize>,
    parents: Vec<usize>,
    last_branch: usize,
}

impl SuccessorState {
    /// Start at the centered encoding of the path graph on `n` vertices.
    ///
    /// Two branches of near-equal length hang from the root: levels
    /// `0,1,..,n/2` followed by `1,2,..,(n-1)/2`.
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!(n >= 2);
        let first_arm = n / 2;
        let mut levels = Vec::with_capacity(n);
        let mut parents = vec![0usize; n];
        levels.extend(0..=first_arm);
        for i in 1..=first_arm {
            parents[i] = i - 1;
        }
        for (offset, level) in (1..=(n - 1) / 2).enumerate() {
            let i = first_arm + 1 + offset;
            levels.push(level);
            parents[i] = if level == 1 { 0 } else { i - 1 };
        }
        let mut state = SuccessorState {
            levels,
            parents,
            last_branch: 0,
        };
        state.last_branch = state.rightmost_branch_before(n);
        state
    }

    /// Current sequence.
    pub(crate) fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Rightmost position before `end` with level at least 2, or 0.
    fn rightmost_branch_before(&self, end: usize) -> usize {
        (1..end).rev().find(|&i| self.levels[i] >= 2).unwrap_or(0)
    }

    /// Position of the root's second child, or the length when the root has
    /// a single subtree. Everything before it (excluding the root) is the
    /// first subtree, the comparison block of the canonicality test.
    fn split_point(&self) -> usize {
        (2..self.levels.len())
            .find(|&i| self.levels[i] == 1)
            .unwrap_or(self.levels.len())
    }

    /// Decrement the level at `p` and tile every later position with the
    /// block starting at the parent of `p`. The parent table is patched for
    /// the rewritten region only; `last_branch` is refreshed from the writes.
    fn step_at(&mut self, p: usize) {
        let n = self.levels.len();
        let v = self.levels[p];
        debug_assert!(v >= 2);
        let q = self.parents[p];
        let d = p - q;

        self.levels[p] = v - 1;
        self.parents[p] = self.parents[q];

        let mut branch = if v - 1 >= 2 { p } else { 0 };
        for i in (p + 1)..n {
            let src = i - d;
            self.levels[i] = self.levels[src];
            // A copied block root sits at the decremented level and keeps the
            // same parent as position p; interior vertices shift with the tile.
            self.parents[i] = if self.levels[i] == v - 1 {
                self.parents[p]
            } else {
                self.parents[src] + d
            };
            if self.levels[i] >= 2 {
                branch = i;
            }
        }
        if branch == 0 {
            branch = self.rightmost_branch_before(p);
        }
        self.last_branch = branch;
    }

    /// Make the current sequence the canonical representative of its free
    /// tree, or jump past the non-canonical block entirely.
    ///
    /// The test splits at the root's second child and compares the first
    /// subtree against the rest of the tree: the first subtree must not be
    /// taller, nor larger at equal height, nor lexicographically greater at
    /// equal size. A failing sequence is replaced by the next canonical one:
    /// a step at the subtree boundary, and a tail reset to a path of matching
    /// height when the boundary level was above 2.
    pub(crate) fn canonicalize(&mut self) {
        let n = self.levels.len();
        let split = self.split_point();

        let left_height = self.levels[1..split].iter().copied().max().unwrap_or(1) - 1;
        let right_height = self.levels[split..].iter().copied().max().unwrap_or(0);

        let mut invalid = left_height > right_height;
        if !invalid && left_height == right_height {
            let left_order = split - 1;
            let right_order = n - split + 1;
            if left_order > right_order {
                invalid = true;
            } else if left_order == right_order {
                // Both blocks start with an implicit 0; compare the rest.
                for k in 1..left_order {
                    let l = self.levels[1 + k] - 1;
                    let r = self.levels[split + k - 1];
                    if l != r {
                        invalid = l > r;
                        break;
                    }
                }
            }
        }

        if invalid {
            self.jump(split);
        }
    }

    /// Replace a non-canonical sequence with its canonical successor.
    fn jump(&mut self, split: usize) {
        let n = self.levels.len();
        let p = split - 1;
        let boundary_level = self.levels[p];
        self.step_at(p);

        if boundary_level > 2 {
            // The decremented first subtree got shorter; the rest of the tree
            // must become the tallest admissible remainder, a path one level
            // higher than the new first subtree.
            let new_split = self.split_point();
            let height = self.levels[1..new_split]
                .iter()
                .copied()
                .max()
                .unwrap_or(1)
                - 1;
            let start = n - (height + 1);
            for (offset, i) in (start..n).enumerate() {
                self.levels[i] = offset + 1;
                self.parents[i] = if offset == 0 { 0 } else { i - 1 };
            }
            debug_assert!(self.levels[n - 1] >= 2);
            self.last_branch = n - 1;
        }
    }

    /// Step to the next rooted sequence. Returns false once the star has no
    /// successor, ending the run.
    pub(crate) fn advance(&mut self) -> bool {
        if self.last_branch == 0 {
            return false;
        }
        self.step_at(self.last_branch);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: usize) -> Vec<Vec<usize>> {
        let mut state = SuccessorState::new(n);
        let mut out = Vec::new();
        loop {
            state.canonicalize();
            out.push(state.levels().to_vec());
            if !state.advance() {
                break;
            }
        }
        out
    }

    #[test]
    fn test_initial_layout_is_centered_path() {
        assert_eq!(SuccessorState::new(2).levels(), &[0, 1]);
        assert_eq!(SuccessorState::new(3).levels(), &[0, 1, 1]);
        assert_eq!(SuccessorState::new(4).levels(), &[0, 1, 2, 1]);
        assert_eq!(SuccessorState::new(5).levels(), &[0, 1, 2, 1, 2]);
        assert_eq!(SuccessorState::new(6).levels(), &[0, 1, 2, 3, 1, 2]);
        assert_eq!(SuccessorState::new(7).levels(), &[0, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_two_vertices() {
        assert_eq!(run(2), vec![vec![0, 1]]);
    }

    #[test]
    fn test_three_vertices() {
        assert_eq!(run(3), vec![vec![0, 1, 1]]);
    }

    #[test]
    fn test_four_vertices() {
        assert_eq!(run(4), vec![vec![0, 1, 2, 1], vec![0, 1, 1, 1]]);
    }

    #[test]
    fn test_five_vertices_literal() {
        assert_eq!(
            run(5),
            vec![
                vec![0, 1, 2, 1, 2],
                vec![0, 1, 2, 1, 1],
                vec![0, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_six_vertices() {
        assert_eq!(
            run(6),
            vec![
                vec![0, 1, 2, 3, 1, 2],
                vec![0, 1, 2, 2, 1, 2],
                vec![0, 1, 2, 2, 1, 1],
                vec![0, 1, 2, 1, 2, 1],
                vec![0, 1, 2, 1, 1, 1],
                vec![0, 1, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_first_is_path_last_is_star() {
        for n in 2..=10 {
            let all = run(n);
            assert_eq!(all[0], SuccessorState::new(n).levels());
            let mut star = vec![1; n];
            star[0] = 0;
            assert_eq!(*all.last().unwrap(), star);
        }
    }

    #[test]
    fn test_every_emitted_sequence_is_valid() {
        for n in 2..=9 {
            for levels in run(n) {
                assert!(crate::LevelSequence::new(levels).is_ok());
            }
        }
    }

    #[test]
    fn test_parent_table_matches_recomputation() {
        // The incrementally patched table must agree with a from-scratch pass
        // at every step of a full run.
        for n in 2..=9 {
            let mut state = SuccessorState::new(n);
            loop {
                state.canonicalize();
                let seq = crate::LevelSequence::new(state.levels().to_vec()).unwrap();
                assert_eq!(state.parents, seq.parents(), "n={n} at {:?}", state.levels);
                if !state.advance() {
                    break;
                }
            }
        }
    }
}
