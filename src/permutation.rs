//! Enumeration of permutations by insertion.
//!
//! The permutations of `[a0, a1, ..., an-1]` are obtained by taking every permutation of
//! the tail `[a1, ..., an-1]` and inserting `a0` into each of its `n` gaps, left to right.
//! The order is therefore not lexicographic:
//!
//! ```
//! use combalg::permutation::permutations;
//!
//! let all: Vec<_> = permutations(&[1, 2, 3]).collect();
//! assert_eq!(all, vec![
//!     vec![1, 2, 3],
//!     vec![2, 1, 3],
//!     vec![2, 3, 1],
//!     vec![1, 3, 2],
//!     vec![3, 1, 2],
//!     vec![3, 2, 1],
//! ]);
//! ```
//!
//! Instead of recursing, [`Permutations`] keeps the insertion gap of every element as one
//! digit of a mixed-radix counter: element `i` is inserted into a sequence of length
//! `n - 1 - i`, so its digit runs over `0..n-i`, and the digit of `a0` moves fastest.

use log::debug;

pub fn permutations<T: Clone>(elements: &[T]) -> Permutations<'_, T> {
    debug!("permutations(n = {})", elements.len());
    Permutations::new(elements)
}

#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    elements: &'a [T],
    /// `gaps[i]` is where `elements[i]` is inserted, for all but the last element.
    gaps: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Permutations<'a, T> {
    pub fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            gaps: vec![0; elements.len().saturating_sub(1)],
            done: false,
        }
    }

    fn build(&self) -> Vec<T> {
        let n = self.elements.len();
        let mut perm = Vec::with_capacity(n);
        if let Some(last) = self.elements.last() {
            perm.push(last.clone());
        }
        for (i, &gap) in self.gaps.iter().enumerate().rev() {
            perm.insert(gap, self.elements[i].clone());
        }
        perm
    }

    fn advance(&mut self) -> bool {
        let n = self.elements.len();
        for (i, gap) in self.gaps.iter_mut().enumerate() {
            *gap += 1;
            if *gap < n - i {
                return true;
            }
            *gap = 0;
        }
        false
    }
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let perm = self.build();
        self.done = !self.advance();
        Some(perm)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_bigint::BigUint;
    use test_log::test;

    use super::*;
    use crate::count::factorial;

    #[test]
    fn test_permutations_small() {
        let empty: [i32; 0] = [];
        assert_eq!(permutations(&empty).collect::<Vec<_>>(), vec![Vec::<i32>::new()]);
        assert_eq!(permutations(&[7]).collect::<Vec<_>>(), vec![vec![7]]);
        assert_eq!(permutations(&[1, 2]).collect::<Vec<_>>(), vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn test_permutations_4() {
        let all: Vec<_> = permutations(&[1, 2, 3, 4]).collect();
        for p in all.iter() {
            println!("{:?}", p);
        }
        assert_eq!(all.len(), 24);
        let distinct: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(distinct.len(), 24);
        // Head is inserted into each gap of [2, 3, 4] first.
        assert_eq!(all[0], vec![1, 2, 3, 4]);
        assert_eq!(all[1], vec![2, 1, 3, 4]);
        assert_eq!(all[2], vec![2, 3, 1, 4]);
        assert_eq!(all[3], vec![2, 3, 4, 1]);
        assert_eq!(all[4], vec![1, 3, 2, 4]);
        assert_eq!(all[23], vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_permutations_counts() {
        for n in 0..=7 {
            let elements: Vec<usize> = (0..n).collect();
            let mut count = 0usize;
            for mut p in permutations(&elements) {
                p.sort();
                assert_eq!(p, elements);
                count += 1;
            }
            assert_eq!(BigUint::from(count), factorial(n));
        }
    }

    #[test]
    fn test_permutations_duplicates() {
        // Equal values are still distinct positions.
        let all: Vec<_> = permutations(&['a', 'a', 'b']).collect();
        assert_eq!(all.len(), 6);
        let distinct: HashSet<_> = all.into_iter().collect();
        assert_eq!(distinct.len(), 3);
    }
}
