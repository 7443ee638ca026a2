//! Lazy enumeration of every ordering of a sequence.
//!
//! The arrangement search must be able to stop at the first accepted
//! ordering without paying for the rest, so this iterator keeps O(n)
//! state: an index array advanced in place, one step per `next` call,
//! with a fresh owned `Vec` cloned out at each step. Nothing about the
//! full n! population is ever materialized.
//!
//! Elements are treated as distinguishable by position, not by value:
//! two platoons with identical class and count still occupy different
//! slots, so the iterator always yields exactly n! orderings.

// ============================================================================
// Factorial
// ============================================================================

/// Number of orderings of a sequence of length `n`, if it fits in a `u64`.
///
/// Returns `None` from 21! upward. Callers reporting search-space size
/// treat `None` as "too large to display exactly".
#[must_use]
pub fn factorial(n: usize) -> Option<u64> {
    let mut total: u64 = 1;
    for k in 2..=n as u64 {
        total = total.checked_mul(k)?;
    }
    Some(total)
}

// ============================================================================
// Permutation Iterator
// ============================================================================

/// Iterator over all `n!` orderings of an input slice.
///
/// Orderings are emitted in lexicographic order of original positions,
/// starting with the input order itself. The emission order is fixed, so
/// any search that stops at the first acceptable ordering is reproducible
/// run to run, and constructing a second iterator over the same input
/// replays the identical sequence from the start.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T: Clone> Permutations<T> {
    /// Create an iterator over all orderings of `items`.
    ///
    /// An empty input yields exactly one ordering, the empty one.
    #[must_use]
    pub fn new(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
            indices: (0..items.len()).collect(),
            started: false,
            done: false,
        }
    }

    /// Copy the items out in the current index order.
    fn current(&self) -> Vec<T> {
        self.indices
            .iter()
            .map(|&slot| self.items[slot].clone())
            .collect()
    }

    /// Advance `indices` to the next lexicographic permutation in place.
    ///
    /// Returns `false` once the indices are fully descending, i.e. the
    /// last permutation has already been emitted.
    fn advance(&mut self) -> bool {
        let indices = &mut self.indices;
        let n = indices.len();
        if n < 2 {
            return false;
        }

        // Rightmost ascent. A fully descending array is the final
        // permutation.
        let mut ascent = n - 1;
        while ascent > 0 && indices[ascent - 1] >= indices[ascent] {
            ascent -= 1;
        }
        if ascent == 0 {
            return false;
        }
        let pivot = ascent - 1;

        // Rightmost entry beyond the pivot that exceeds it. One exists
        // because indices[pivot] < indices[pivot + 1].
        let mut successor = n - 1;
        while indices[successor] <= indices[pivot] {
            successor -= 1;
        }

        indices.swap(pivot, successor);
        indices[pivot + 1..].reverse();
        true
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if self.advance() {
            Some(self.current())
        } else {
            self.done = true;
            None
        }
    }
}
