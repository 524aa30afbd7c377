//! Counting non-isomorphic trees without enumerating them
//!
//! The rooted-tree table follows the classic convolution over divisor sums:
//! a rooted tree on m vertices is a root with an unordered multiset of
//! smaller rooted subtrees, giving
//! `r(m) = (sum of S(k) * r(m-k) for k < m) / (m - 1)` with
//! `S(k) = sum of d * r(d) over divisors d of k`. Free trees follow by
//! removing the rooting multiplicity: subtract the pairs of distinct rooted
//! halves, and for even sizes the unordered pairs of equal halves joined by
//! the central edge.
//!
//! Counts are exact in `u128` far beyond any enumerable size (overflow would
//! need roughly eighty vertices; enumeration is hopeless past thirty).

/// Number of non-isomorphic rooted trees on `n_vertices` vertices
pub fn count_rooted_trees(n_vertices: usize) -> crate::Result<u128> {
    if n_vertices == 0 {
        return Err(crate::FreeTreeError::InvalidVertexCount(n_vertices));
    }
    Ok(rooted_counts(n_vertices)[n_vertices])
}

/// Number of non-isomorphic free trees on `n_vertices` vertices
///
/// Matches the number of sequences [`crate::free_trees`] emits for the same
/// size, so callers can pre-size buffers before enumerating.
pub fn count_free_trees(n_vertices: usize) -> crate::Result<u128> {
    if n_vertices == 0 {
        return Err(crate::FreeTreeError::InvalidVertexCount(n_vertices));
    }
    let n = n_vertices;
    let rooted = rooted_counts(n);

    let mut free = rooted[n];
    // one centroid: unordered pairs of distinct-size rooted halves
    for i in 1..=(n - 1) / 2 {
        free -= rooted[i] * rooted[n - i];
    }
    // two centroids joined by the central edge: unordered pairs of
    // equal-size halves, minus the diagonal counted by the rooted table
    if n % 2 == 0 {
        let half = rooted[n / 2];
        free -= half * (half - 1) / 2;
    }
    Ok(free)
}

/// Rooted-tree counts for every size up to `n`, built bottom-up.
/// Index m holds r(m); index 0 is unused.
fn rooted_counts(n: usize) -> Vec<u128> {
    let mut rooted = vec![0u128; n + 1];
    let mut weighted = vec![0u128; n + 1];
    rooted[1] = 1;
    for m in 2..=n {
        weighted[m - 1] = divisor_weighted_sum(m - 1, &rooted);
        let convolution: u128 = (1..m).map(|k| weighted[k] * rooted[m - k]).sum();
        // the recurrence guarantees exact division
        rooted[m] = convolution / (m as u128 - 1);
    }
    rooted
}

/// `S(k)`: sum of `d * r(d)` over the divisors d of k.
fn divisor_weighted_sum(k: usize, rooted: &[u128]) -> u128 {
    (1..=k)
        .filter(|d| k % d == 0)
        .map(|d| d as u128 * rooted[d])
        .sum()
}
