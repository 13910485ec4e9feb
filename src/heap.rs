//! Heapsort over parallel weight/index arrays.
//!
//! Weighted sampling processes elements in ascending weight order, and the
//! exact placement of equal weights decides which original index lands in
//! which sorted slot — which in turn decides what a given draw selects. The
//! sort is therefore pinned to one specific binary-heap heapsort instead of
//! being delegated to [`slice::sort_by`]: every comparison is a strict
//! `>`, so ties never move an element, and the traversal order below is
//! part of the contract.

/// Sorts `weights` ascending, applying the same permutation to `indices`.
///
/// Classic in-place heapsort: build a max-heap (children of node `i` at
/// `2i + 1` and `2i + 2`), then repeatedly swap the root with the last
/// unsorted element and sift the new root down. Sift-down picks the larger
/// child under strict `>` (the first-compared child wins a tie) and swaps
/// only while the child is strictly greater than the node.
///
/// O(n log n) time, O(1) space beyond the two slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn sort_ascending(weights: &mut [f64], indices: &mut [u64]) {
    assert_eq!(
        weights.len(),
        indices.len(),
        "weights and indices must have the same length"
    );
    let n = weights.len();
    for node in (0..n / 2).rev() {
        sift_down(weights, indices, node, n);
    }
    for end in (1..n).rev() {
        weights.swap(0, end);
        indices.swap(0, end);
        sift_down(weights, indices, 0, end);
    }
}

fn sift_down(weights: &mut [f64], indices: &mut [u64], mut node: usize, heap: usize) {
    loop {
        let left = 2 * node + 1;
        if left >= heap {
            return;
        }
        let right = left + 1;
        let mut child = left;
        if right < heap && weights[right] > weights[left] {
            child = right;
        }
        if weights[child] > weights[node] {
            weights.swap(node, child);
            indices.swap(node, child);
            node = child;
        } else {
            return;
        }
    }
}
